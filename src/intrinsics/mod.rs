//! Intel-named intrinsics.
//!
//! Safe free functions with the published names and the published register
//! types ([`M128i`], [`M256`], ...), grouped by the ISA extension that
//! introduced them. Each one reinterprets its operands to the lane layout the
//! instruction works on and calls the matching method of
//! [`simd::Active`](crate::simd::Active), so the compiled-in backend decides
//! how it runs while the result stays the same on all of them.
//!
//! Immediates are const generics. An out-of-range immediate is a compile
//! error, exactly as with `std::arch`.
//!
//! ```rust
//! use simdport::intrinsics::prelude::*;
//!
//! let a = _mm_set1_epi8(120);
//! let b = _mm_set1_epi8(10);
//! let sum = _mm_adds_epi8(a, b);
//! assert_eq!(_mm_extract_epi16::<0>(sum) as u16, 0x7f7f);
//! ```
//!
//! Bitwise logic and lane moves that have no lane semantics beyond their bits
//! (`and`, `or`, casts, constructors) are written directly over
//! [`Vector`](crate::vector::Vector).

use crate::lane::Lane;
use crate::vector::{I64x1, I64x2, Vector, M128i, M64};

pub mod avx;
pub mod avx2;
pub mod csr;
pub mod mmx;
pub mod sse;
pub mod sse2;
pub mod sse41;
pub mod sse42;
pub mod ssse3;

/// Everything, for glob import.
pub mod prelude {
    pub use super::avx::*;
    pub use super::avx2::*;
    pub use super::csr::*;
    pub use super::mmx::*;
    pub use super::sse::*;
    pub use super::sse2::*;
    pub use super::sse41::*;
    pub use super::sse42::*;
    pub use super::ssse3::*;
    pub use crate::engine::compare::{
        _CMP_EQ_OQ, _CMP_LT_OS, _CMP_LE_OS, _CMP_UNORD_Q, _CMP_NEQ_UQ, _CMP_NLT_US, _CMP_NLE_US,
        _CMP_ORD_Q, _CMP_EQ_UQ, _CMP_NGE_US, _CMP_NGT_US, _CMP_FALSE_OQ, _CMP_NEQ_OQ,
        _CMP_GE_OS, _CMP_GT_OS, _CMP_TRUE_UQ, _CMP_EQ_OS, _CMP_LT_OQ, _CMP_LE_OQ, _CMP_UNORD_S,
        _CMP_NEQ_US, _CMP_NLT_UQ, _CMP_NLE_UQ, _CMP_ORD_S, _CMP_EQ_US, _CMP_NGE_UQ, _CMP_NGT_UQ,
        _CMP_FALSE_OS, _CMP_NEQ_OS, _CMP_GE_OQ, _CMP_GT_OQ, _CMP_TRUE_US,
    };
    pub use crate::engine::convert::{
        _MM_FROUND_CEIL, _MM_FROUND_CUR_DIRECTION, _MM_FROUND_FLOOR, _MM_FROUND_NEARBYINT,
        _MM_FROUND_NINT, _MM_FROUND_NO_EXC, _MM_FROUND_RAISE_EXC, _MM_FROUND_RINT,
        _MM_FROUND_TO_NEAREST_INT, _MM_FROUND_TO_NEG_INF, _MM_FROUND_TO_POS_INF,
        _MM_FROUND_TO_ZERO, _MM_FROUND_TRUNC,
    };
    pub use crate::vector::{M128, M128d, M128i, M256, M256d, M256i, M64};
}

/// `(a, b) -> out` through one backend method, reinterpreting on both sides.
macro_rules! forward_binary {
    ($reg:ty: $($(#[$doc:meta])* $name:ident => $method:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(a: $reg, b: $reg) -> $reg {
                Active::$method(a.reinterpret(), b.reinterpret()).reinterpret()
            }
        )*
    };
}

macro_rules! forward_unary {
    ($reg:ty: $($(#[$doc:meta])* $name:ident => $method:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(a: $reg) -> $reg {
                Active::$method(a.reinterpret()).reinterpret()
            }
        )*
    };
}

/// Predicate compares bound to a fixed `_CMP_*` immediate.
macro_rules! forward_cmp {
    ($reg:ty, $method:ident: $($name:ident => $predicate:ident;)*) => {
        $(
            #[inline]
            pub fn $name(a: $reg, b: $reg) -> $reg {
                Active::$method::<$predicate>(a, b)
            }
        )*
    };
}

/// 64-bit forms run on the low half of the 128-bit operation.
macro_rules! forward_mmx {
    ($($(#[$doc:meta])* $name:ident => $method:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(a: M64, b: M64) -> M64 {
                narrow(Active::$method(widen(a).reinterpret(), widen(b).reinterpret()))
            }
        )*
    };
}

pub(crate) use forward_binary;
pub(crate) use forward_cmp;
pub(crate) use forward_mmx;
pub(crate) use forward_unary;

/// Zero-extends an MMX register into an SSE one.
#[inline(always)]
pub(crate) fn widen(a: M64) -> M128i {
    I64x2::from_array([a.lane(0), 0])
}

/// Low 64 bits of a 128-bit result.
#[inline(always)]
pub(crate) fn narrow<T: Lane, const N: usize>(v: Vector<T, N>) -> M64 {
    I64x1::from_array([v.reinterpret::<i64, 2>().lane(0)])
}

/// Both MMX operands side by side, `a` in the low half.
#[inline(always)]
pub(crate) fn pair(a: M64, b: M64) -> M128i {
    I64x2::from_array([a.lane(0), b.lane(0)])
}

/// Applies `f` to the register as `W` 64-bit words.
#[inline(always)]
pub(crate) fn bitwise<T: Lane, const N: usize, const W: usize, F>(
    a: Vector<T, N>,
    b: Vector<T, N>,
    f: F,
) -> Vector<T, N>
where
    F: Fn(u64, u64) -> u64,
{
    let (x, y) = (a.reinterpret::<u64, W>(), b.reinterpret::<u64, W>());
    x.zip_map(y, f).reinterpret()
}

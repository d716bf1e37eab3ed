//! Fixed-width vector container and bit reinterpretation.
//!
//! [`Vector<T, N>`] is `N` lanes of `T` laid out exactly like the hardware
//! register it stands for: `#[repr(transparent)]` over `[T; N]`, lane 0 at the
//! lowest address, no padding. The total width must be 64, 128 or 256 bits; any
//! other `T`/`N` combination fails to compile as soon as a vector of that shape
//! is built.
//!
//! # Reinterpretation is not conversion
//!
//! [`Vector::reinterpret`] copies bits. Going from `F32x4` to `I32x4` yields the
//! IEEE 754 encodings of the floats, not their integer values. Value conversions
//! live in [`crate::engine::convert`] and consult the rounding register.
//!
//! ```rust
//! use simdport::vector::{F32x4, U32x4};
//!
//! let v = F32x4::from_array([1.0, -0.0, 2.5, f32::INFINITY]);
//! let bits: U32x4 = v.reinterpret();
//! assert_eq!(bits.to_array(), [0x3f80_0000, 0x8000_0000, 0x4020_0000, 0x7f80_0000]);
//! ```

use std::marker::PhantomData;
use std::ops::Index;

use crate::lane::Lane;

/// Bytes in one 128-bit sub-lane of a wider register.
pub const SUB_LANE_BYTES: usize = 16;

/// `N` lanes of `T`, exactly 64, 128 or 256 bits wide.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(transparent)]
pub struct Vector<T: Lane, const N: usize>([T; N]);

// Compile-time shape checks. Referencing these constants from a generic
// function makes the assertion part of monomorphisation, so a bad shape is a
// build error, never a runtime one.
struct Shape<T, const N: usize>(PhantomData<T>);

impl<T, const N: usize> Shape<T, N> {
    const VALID: () = {
        let bytes = N * std::mem::size_of::<T>();
        assert!(
            bytes == 8 || bytes == 16 || bytes == 32,
            "vector width must be 64, 128 or 256 bits"
        );
    };
}

struct SameSize<A, B>(PhantomData<(A, B)>);

impl<A, B> SameSize<A, B> {
    const VALID: () = assert!(
        std::mem::size_of::<A>() == std::mem::size_of::<B>(),
        "reinterpretation requires equal total width"
    );
}

struct Halves<const N: usize, const H: usize>;

impl<const N: usize, const H: usize> Halves<N, H> {
    const VALID: () = assert!(H * 2 == N, "half vector must have exactly N / 2 lanes");
}

impl<T: Lane, const N: usize> Vector<T, N> {
    /// Number of lanes.
    pub const LANES: usize = N;

    /// Lanes in one 128-bit sub-lane.
    pub const LANES_PER_128: usize = SUB_LANE_BYTES / std::mem::size_of::<T>();

    /// Builds a vector from its lanes, lane 0 first.
    #[inline(always)]
    pub const fn from_array(lanes: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Shape::<T, N>::VALID;
        Self(lanes)
    }

    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self::from_array([T::default(); N])
    }

    #[inline(always)]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::from_array(std::array::from_fn(f))
    }

    /// Builds a mask vector from per-lane booleans.
    #[inline(always)]
    pub fn from_mask<F: FnMut(usize) -> bool>(mut f: F) -> Self {
        Self::from_fn(|i| T::mask(f(i)))
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline(always)]
    pub fn lane(&self, index: usize) -> T {
        self.0[index]
    }

    #[inline(always)]
    pub fn with_lane(mut self, index: usize, value: T) -> Self {
        self.0[index] = value;
        self
    }

    #[inline(always)]
    pub fn map<U: Lane, F: FnMut(T) -> U>(self, mut f: F) -> Vector<U, N> {
        Vector::from_fn(|i| f(self.0[i]))
    }

    #[inline(always)]
    pub fn zip_map<U: Lane, F: FnMut(T, T) -> U>(self, other: Self, mut f: F) -> Vector<U, N> {
        Vector::from_fn(|i| f(self.0[i], other.0[i]))
    }

    /// Reinterprets the bits of this vector as another lane layout of the same
    /// total width.
    ///
    /// This is a bit-for-bit copy: no lane value is converted. A size mismatch
    /// is rejected at compile time.
    #[inline(always)]
    pub fn reinterpret<U: Lane, const M: usize>(self) -> Vector<U, M> {
        #[allow(clippy::let_unit_value)]
        let () = SameSize::<[T; N], [U; M]>::VALID;
        #[allow(clippy::let_unit_value)]
        let () = Shape::<U, M>::VALID;

        // SAFETY: both types are `repr(transparent)` arrays of plain integer or
        // float lanes with equal size (asserted above at compile time), and
        // every bit pattern is a valid value of every lane type.
        unsafe { std::mem::transmute_copy::<Self, Vector<U, M>>(&self) }
    }

    /// Splits the vector into its low and high halves.
    #[inline(always)]
    pub fn split<const H: usize>(self) -> [Vector<T, H>; 2] {
        #[allow(clippy::let_unit_value)]
        let () = Halves::<N, H>::VALID;
        [
            Vector::from_fn(|i| self.0[i]),
            Vector::from_fn(|i| self.0[H + i]),
        ]
    }

    /// Concatenates `low` and `high` into a vector twice as wide.
    #[inline(always)]
    pub fn join<const H: usize>(low: Vector<T, H>, high: Vector<T, H>) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Halves::<N, H>::VALID;
        Self::from_fn(|i| if i < H { low.0[i] } else { high.0[i - H] })
    }

    #[inline(always)]
    pub fn from_halves<const H: usize>(low: Vector<T, H>, high: Vector<T, H>) -> Self {
        Self::join(low, high)
    }

    #[inline(always)]
    pub fn low_half<const H: usize>(self) -> Vector<T, H> {
        self.split::<H>()[0]
    }

    #[inline(always)]
    pub fn high_half<const H: usize>(self) -> Vector<T, H> {
        self.split::<H>()[1]
    }

    /// Reads lane `index` as a mask: `true` only when every bit is set.
    #[inline(always)]
    pub fn mask_lane(&self, index: usize) -> bool {
        self.0[index].is_all_ones()
    }

    /// Bit mask of the lanes' most significant bits, lane 0 in bit 0.
    #[inline(always)]
    pub fn msb_mask(self) -> u32 {
        self.0
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, lane)| acc | (u32::from(lane.msb()) << i))
    }
}

impl<T: Lane, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Lane, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(lanes: [T; N]) -> Self {
        Self::from_array(lanes)
    }
}

impl<T: Lane, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(vector: Vector<T, N>) -> Self {
        vector.to_array()
    }
}

impl<T: Lane, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

macro_rules! vector_aliases {
    ($($(#[$doc:meta])* $name:ident = $ty:ty, $n:literal;)*) => {
        $(
            $(#[$doc])*
            pub type $name = Vector<$ty, $n>;
        )*
    };
}

vector_aliases! {
    /// 64-bit vector of 8 × `i8`.
    I8x8 = i8, 8;
    U8x8 = u8, 8;
    I16x4 = i16, 4;
    U16x4 = u16, 4;
    I32x2 = i32, 2;
    U32x2 = u32, 2;
    I64x1 = i64, 1;
    F32x2 = f32, 2;

    /// 128-bit vector of 16 × `i8`.
    I8x16 = i8, 16;
    U8x16 = u8, 16;
    I16x8 = i16, 8;
    U16x8 = u16, 8;
    I32x4 = i32, 4;
    U32x4 = u32, 4;
    I64x2 = i64, 2;
    U64x2 = u64, 2;
    F32x4 = f32, 4;
    F64x2 = f64, 2;

    /// 256-bit vector of 32 × `i8`.
    I8x32 = i8, 32;
    U8x32 = u8, 32;
    I16x16 = i16, 16;
    U16x16 = u16, 16;
    I32x8 = i32, 8;
    U32x8 = u32, 8;
    I64x4 = i64, 4;
    U64x4 = u64, 4;
    F32x8 = f32, 8;
    F64x4 = f64, 4;
}

/// MMX register (`__m64`).
pub type M64 = I64x1;
/// SSE integer register (`__m128i`).
pub type M128i = I64x2;
/// SSE single-precision register (`__m128`).
pub type M128 = F32x4;
/// SSE2 double-precision register (`__m128d`).
pub type M128d = F64x2;
/// AVX integer register (`__m256i`).
pub type M256i = I64x4;
/// AVX single-precision register (`__m256`).
pub type M256 = F32x8;
/// AVX double-precision register (`__m256d`).
pub type M256d = F64x4;

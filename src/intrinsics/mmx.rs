//! MMX (64-bit) intrinsics.
//!
//! Every operation runs on the low half of the corresponding 128-bit backend
//! method; the upper half of the widened operands is zero and is discarded.

use crate::engine::shift::count_of;
use crate::engine::static_assert_uimm_bits;
use crate::simd::{Active, CompareOps, SaturatingOps, ShiftOps, ShuffleOps};
use crate::vector::{I16x4, I16x8, I32x2, I32x4, I64x1, I8x8, M64};

use super::{forward_mmx, narrow, pair, widen};

/// Clears the x87 tag word on hardware; nothing to do here.
#[inline]
pub fn _mm_empty() {}

#[inline]
pub fn _mm_setzero_si64() -> M64 {
    I64x1::zero()
}

#[inline]
pub fn _mm_set_pi32(e1: i32, e0: i32) -> M64 {
    I32x2::from_array([e0, e1]).reinterpret()
}

#[inline]
pub fn _mm_setr_pi32(e0: i32, e1: i32) -> M64 {
    I32x2::from_array([e0, e1]).reinterpret()
}

#[inline]
pub fn _mm_set_pi16(e3: i16, e2: i16, e1: i16, e0: i16) -> M64 {
    I16x4::from_array([e0, e1, e2, e3]).reinterpret()
}

#[inline]
#[allow(clippy::too_many_arguments)]
pub fn _mm_set_pi8(e7: i8, e6: i8, e5: i8, e4: i8, e3: i8, e2: i8, e1: i8, e0: i8) -> M64 {
    I8x8::from_array([e0, e1, e2, e3, e4, e5, e6, e7]).reinterpret()
}

#[inline]
pub fn _mm_set1_pi32(a: i32) -> M64 {
    I32x2::splat(a).reinterpret()
}

#[inline]
pub fn _mm_set1_pi16(a: i16) -> M64 {
    I16x4::splat(a).reinterpret()
}

#[inline]
pub fn _mm_set1_pi8(a: i8) -> M64 {
    I8x8::splat(a).reinterpret()
}

/// Zero-extends `a` into the low 32 bits.
#[inline]
pub fn _mm_cvtsi32_si64(a: i32) -> M64 {
    I32x2::from_array([a, 0]).reinterpret()
}

#[inline]
pub fn _mm_cvtsi64_si32(a: M64) -> i32 {
    a.reinterpret::<i32, 2>().lane(0)
}

#[inline]
pub fn _mm_cvtm64_si64(a: M64) -> i64 {
    a.lane(0)
}

#[inline]
pub fn _mm_cvtsi64_m64(a: i64) -> M64 {
    I64x1::from_array([a])
}

forward_mmx! {
    _mm_adds_pi8 => adds_i8x16;
    _mm_adds_pu8 => adds_u8x16;
    _mm_adds_pi16 => adds_i16x8;
    _mm_adds_pu16 => adds_u16x8;
    _mm_subs_pi8 => subs_i8x16;
    _mm_subs_pu8 => subs_u8x16;
    _mm_subs_pi16 => subs_i16x8;
    _mm_subs_pu16 => subs_u16x8;

    _mm_cmpeq_pi8 => cmpeq_i8x16;
    _mm_cmpeq_pi16 => cmpeq_i16x8;
    _mm_cmpeq_pi32 => cmpeq_i32x4;
    _mm_cmpgt_pi8 => cmpgt_i8x16;
    _mm_cmpgt_pi16 => cmpgt_i16x8;
    _mm_cmpgt_pi32 => cmpgt_i32x4;

    /// Interleaves the low halves of `a` and `b`.
    _mm_unpacklo_pi8 => unpacklo_i8x16;
    _mm_unpacklo_pi16 => unpacklo_i16x8;
    _mm_unpacklo_pi32 => unpacklo_i32x4;
}

// The 128-bit low unpack of the widened operands holds the MMX high unpack in
// its upper half.
macro_rules! unpack_high {
    ($($name:ident => $method:ident;)*) => {
        $(
            #[inline]
            pub fn $name(a: M64, b: M64) -> M64 {
                let r = Active::$method(widen(a).reinterpret(), widen(b).reinterpret());
                I64x1::from_array([r.reinterpret::<i64, 2>().lane(1)])
            }
        )*
    };
}

unpack_high! {
    _mm_unpackhi_pi8 => unpacklo_i8x16;
    _mm_unpackhi_pi16 => unpacklo_i16x8;
    _mm_unpackhi_pi32 => unpacklo_i32x4;
}

/// Saturates the four 16-bit lanes of `a` then of `b` into eight `i8`.
#[inline]
pub fn _mm_packs_pi16(a: M64, b: M64) -> M64 {
    narrow(Active::packs_i16x8(pair(a, b).reinterpret(), I16x8::zero()))
}

#[inline]
pub fn _mm_packs_pu16(a: M64, b: M64) -> M64 {
    narrow(Active::packus_i16x8(pair(a, b).reinterpret(), I16x8::zero()))
}

#[inline]
pub fn _mm_packs_pi32(a: M64, b: M64) -> M64 {
    narrow(Active::packs_i32x4(pair(a, b).reinterpret(), I32x4::zero()))
}

macro_rules! mmx_shift {
    ($($name:ident, $imm_name:ident => $method:ident;)*) => {
        $(
            /// Count from the whole 64-bit `count` register.
            #[inline]
            pub fn $name(a: M64, count: M64) -> M64 {
                narrow(Active::$method(widen(a).reinterpret(), count_of(count)))
            }

            #[inline]
            pub fn $imm_name<const IMM8: i32>(a: M64) -> M64 {
                static_assert_uimm_bits!(IMM8, 8);
                narrow(Active::$method(widen(a).reinterpret(), IMM8 as u64))
            }
        )*
    };
}

mmx_shift! {
    _mm_sll_pi16, _mm_slli_pi16 => shl_i16x8;
    _mm_sll_pi32, _mm_slli_pi32 => shl_i32x4;
    _mm_sll_si64, _mm_slli_si64 => shl_i64x2;
    _mm_srl_pi16, _mm_srli_pi16 => shr_logical_i16x8;
    _mm_srl_pi32, _mm_srli_pi32 => shr_logical_i32x4;
    _mm_srl_si64, _mm_srli_si64 => shr_logical_i64x2;
    _mm_sra_pi16, _mm_srai_pi16 => shr_arith_i16x8;
    _mm_sra_pi32, _mm_srai_pi32 => shr_arith_i32x4;
}

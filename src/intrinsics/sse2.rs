//! SSE2 intrinsics: the 128-bit integer set and double precision.

use crate::engine::compare::{
    _CMP_EQ_OQ, _CMP_GE_OS, _CMP_GT_OS, _CMP_LE_OS, _CMP_LT_OS, _CMP_NEQ_UQ, _CMP_NGE_US,
    _CMP_NGT_US, _CMP_NLE_US, _CMP_NLT_US, _CMP_ORD_Q, _CMP_UNORD_Q,
};
use crate::engine::shift::count_of;
use crate::engine::static_assert_uimm_bits;
use crate::simd::{Active, CompareOps, ConvertOps, SaturatingOps, ShiftOps, ShuffleOps};
use crate::vector::{F64x2, I16x8, I32x4, I64x2, I8x16, M128, M128d, M128i};

use super::{bitwise, forward_binary, forward_cmp};

#[inline]
pub fn _mm_setzero_si128() -> M128i {
    I64x2::zero()
}

#[inline]
pub fn _mm_set_epi64x(e1: i64, e0: i64) -> M128i {
    I64x2::from_array([e0, e1])
}

#[inline]
pub fn _mm_set_epi32(e3: i32, e2: i32, e1: i32, e0: i32) -> M128i {
    I32x4::from_array([e0, e1, e2, e3]).reinterpret()
}

#[inline]
#[allow(clippy::too_many_arguments)]
pub fn _mm_set_epi16(e7: i16, e6: i16, e5: i16, e4: i16, e3: i16, e2: i16, e1: i16, e0: i16) -> M128i {
    I16x8::from_array([e0, e1, e2, e3, e4, e5, e6, e7]).reinterpret()
}

#[inline]
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub fn _mm_set_epi8(
    e15: i8, e14: i8, e13: i8, e12: i8, e11: i8, e10: i8, e9: i8, e8: i8,
    e7: i8, e6: i8, e5: i8, e4: i8, e3: i8, e2: i8, e1: i8, e0: i8,
) -> M128i {
    I8x16::from_array([
        e0, e1, e2, e3, e4, e5, e6, e7, e8, e9, e10, e11, e12, e13, e14, e15,
    ])
    .reinterpret()
}

#[inline]
pub fn _mm_setr_epi32(e0: i32, e1: i32, e2: i32, e3: i32) -> M128i {
    I32x4::from_array([e0, e1, e2, e3]).reinterpret()
}

#[inline]
#[allow(clippy::too_many_arguments)]
pub fn _mm_setr_epi16(e0: i16, e1: i16, e2: i16, e3: i16, e4: i16, e5: i16, e6: i16, e7: i16) -> M128i {
    I16x8::from_array([e0, e1, e2, e3, e4, e5, e6, e7]).reinterpret()
}

#[inline]
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub fn _mm_setr_epi8(
    e0: i8, e1: i8, e2: i8, e3: i8, e4: i8, e5: i8, e6: i8, e7: i8,
    e8: i8, e9: i8, e10: i8, e11: i8, e12: i8, e13: i8, e14: i8, e15: i8,
) -> M128i {
    I8x16::from_array([
        e0, e1, e2, e3, e4, e5, e6, e7, e8, e9, e10, e11, e12, e13, e14, e15,
    ])
    .reinterpret()
}

#[inline]
pub fn _mm_set1_epi64x(a: i64) -> M128i {
    I64x2::splat(a)
}

#[inline]
pub fn _mm_set1_epi32(a: i32) -> M128i {
    I32x4::splat(a).reinterpret()
}

#[inline]
pub fn _mm_set1_epi16(a: i16) -> M128i {
    I16x8::splat(a).reinterpret()
}

#[inline]
pub fn _mm_set1_epi8(a: i8) -> M128i {
    I8x16::splat(a).reinterpret()
}

#[inline]
pub fn _mm_setzero_pd() -> M128d {
    F64x2::zero()
}

#[inline]
pub fn _mm_set_pd(e1: f64, e0: f64) -> M128d {
    F64x2::from_array([e0, e1])
}

#[inline]
pub fn _mm_setr_pd(e0: f64, e1: f64) -> M128d {
    F64x2::from_array([e0, e1])
}

#[inline]
pub fn _mm_set1_pd(a: f64) -> M128d {
    F64x2::splat(a)
}

#[inline]
pub fn _mm_set_sd(a: f64) -> M128d {
    F64x2::from_array([a, 0.0])
}

#[inline]
pub fn _mm_cvtsi128_si32(a: M128i) -> i32 {
    a.reinterpret::<i32, 4>().lane(0)
}

#[inline]
pub fn _mm_cvtsi128_si64(a: M128i) -> i64 {
    a.lane(0)
}

#[inline]
pub fn _mm_cvtsi32_si128(a: i32) -> M128i {
    I32x4::from_array([a, 0, 0, 0]).reinterpret()
}

#[inline]
pub fn _mm_cvtsi64_si128(a: i64) -> M128i {
    I64x2::from_array([a, 0])
}

#[inline]
pub fn _mm_cvtsd_f64(a: M128d) -> f64 {
    a.lane(0)
}

/// Zero-extended 16-bit lane `IMM8`.
#[inline]
pub fn _mm_extract_epi16<const IMM8: i32>(a: M128i) -> i32 {
    static_assert_uimm_bits!(IMM8, 3);
    i32::from(a.reinterpret::<u16, 8>().lane(IMM8 as usize))
}

#[inline]
pub fn _mm_insert_epi16<const IMM8: i32>(a: M128i, i: i32) -> M128i {
    static_assert_uimm_bits!(IMM8, 3);
    a.reinterpret::<i16, 8>()
        .with_lane(IMM8 as usize, i as i16)
        .reinterpret()
}

#[inline]
pub fn _mm_castps_si128(a: M128) -> M128i {
    a.reinterpret()
}

#[inline]
pub fn _mm_castsi128_ps(a: M128i) -> M128 {
    a.reinterpret()
}

#[inline]
pub fn _mm_castpd_si128(a: M128d) -> M128i {
    a.reinterpret()
}

#[inline]
pub fn _mm_castsi128_pd(a: M128i) -> M128d {
    a.reinterpret()
}

#[inline]
pub fn _mm_castps_pd(a: M128) -> M128d {
    a.reinterpret()
}

#[inline]
pub fn _mm_castpd_ps(a: M128d) -> M128 {
    a.reinterpret()
}

#[inline]
pub fn _mm_and_si128(a: M128i, b: M128i) -> M128i {
    bitwise::<_, 2, 2, _>(a, b, |x, y| x & y)
}

#[inline]
pub fn _mm_andnot_si128(a: M128i, b: M128i) -> M128i {
    bitwise::<_, 2, 2, _>(a, b, |x, y| !x & y)
}

#[inline]
pub fn _mm_or_si128(a: M128i, b: M128i) -> M128i {
    bitwise::<_, 2, 2, _>(a, b, |x, y| x | y)
}

#[inline]
pub fn _mm_xor_si128(a: M128i, b: M128i) -> M128i {
    bitwise::<_, 2, 2, _>(a, b, |x, y| x ^ y)
}

#[inline]
pub fn _mm_and_pd(a: M128d, b: M128d) -> M128d {
    bitwise::<_, 2, 2, _>(a, b, |x, y| x & y)
}

#[inline]
pub fn _mm_andnot_pd(a: M128d, b: M128d) -> M128d {
    bitwise::<_, 2, 2, _>(a, b, |x, y| !x & y)
}

#[inline]
pub fn _mm_or_pd(a: M128d, b: M128d) -> M128d {
    bitwise::<_, 2, 2, _>(a, b, |x, y| x | y)
}

#[inline]
pub fn _mm_xor_pd(a: M128d, b: M128d) -> M128d {
    bitwise::<_, 2, 2, _>(a, b, |x, y| x ^ y)
}

forward_binary! { M128i:
    _mm_adds_epi8 => adds_i8x16;
    _mm_adds_epu8 => adds_u8x16;
    _mm_adds_epi16 => adds_i16x8;
    _mm_adds_epu16 => adds_u16x8;
    _mm_subs_epi8 => subs_i8x16;
    _mm_subs_epu8 => subs_u8x16;
    _mm_subs_epi16 => subs_i16x8;
    _mm_subs_epu16 => subs_u16x8;
    /// `(a + b + 1) >> 1` without overflow.
    _mm_avg_epu8 => avg_u8x16;
    _mm_avg_epu16 => avg_u16x8;
    /// Narrows `a` then `b` with signed saturation.
    _mm_packs_epi16 => packs_i16x8;
    _mm_packus_epi16 => packus_i16x8;
    _mm_packs_epi32 => packs_i32x4;

    _mm_cmpeq_epi8 => cmpeq_i8x16;
    _mm_cmpeq_epi16 => cmpeq_i16x8;
    _mm_cmpeq_epi32 => cmpeq_i32x4;
    _mm_cmpgt_epi8 => cmpgt_i8x16;
    _mm_cmpgt_epi16 => cmpgt_i16x8;
    _mm_cmpgt_epi32 => cmpgt_i32x4;
    _mm_min_epu8 => min_u8x16;
    _mm_max_epu8 => max_u8x16;
    _mm_min_epi16 => min_i16x8;
    _mm_max_epi16 => max_i16x8;

    _mm_unpacklo_epi8 => unpacklo_i8x16;
    _mm_unpackhi_epi8 => unpackhi_i8x16;
    _mm_unpacklo_epi16 => unpacklo_i16x8;
    _mm_unpackhi_epi16 => unpackhi_i16x8;
    _mm_unpacklo_epi32 => unpacklo_i32x4;
    _mm_unpackhi_epi32 => unpackhi_i32x4;
    _mm_unpacklo_epi64 => unpacklo_i64x2;
    _mm_unpackhi_epi64 => unpackhi_i64x2;
}

#[inline]
pub fn _mm_cmplt_epi8(a: M128i, b: M128i) -> M128i {
    _mm_cmpgt_epi8(b, a)
}

#[inline]
pub fn _mm_cmplt_epi16(a: M128i, b: M128i) -> M128i {
    _mm_cmpgt_epi16(b, a)
}

#[inline]
pub fn _mm_cmplt_epi32(a: M128i, b: M128i) -> M128i {
    _mm_cmpgt_epi32(b, a)
}

#[inline]
pub fn _mm_movemask_epi8(a: M128i) -> i32 {
    Active::movemask_i8x16(a.reinterpret())
}

forward_cmp! { M128d, cmp_f64x2:
    _mm_cmpeq_pd => _CMP_EQ_OQ;
    _mm_cmplt_pd => _CMP_LT_OS;
    _mm_cmple_pd => _CMP_LE_OS;
    _mm_cmpgt_pd => _CMP_GT_OS;
    _mm_cmpge_pd => _CMP_GE_OS;
    _mm_cmpneq_pd => _CMP_NEQ_UQ;
    _mm_cmpnlt_pd => _CMP_NLT_US;
    _mm_cmpnle_pd => _CMP_NLE_US;
    _mm_cmpngt_pd => _CMP_NGT_US;
    _mm_cmpnge_pd => _CMP_NGE_US;
    _mm_cmpord_pd => _CMP_ORD_Q;
    _mm_cmpunord_pd => _CMP_UNORD_Q;
}

forward_cmp! { M128d, cmp_sd:
    _mm_cmpeq_sd => _CMP_EQ_OQ;
    _mm_cmplt_sd => _CMP_LT_OS;
    _mm_cmple_sd => _CMP_LE_OS;
    _mm_cmpgt_sd => _CMP_GT_OS;
    _mm_cmpge_sd => _CMP_GE_OS;
    _mm_cmpneq_sd => _CMP_NEQ_UQ;
    _mm_cmpnlt_sd => _CMP_NLT_US;
    _mm_cmpnle_sd => _CMP_NLE_US;
    _mm_cmpngt_sd => _CMP_NGT_US;
    _mm_cmpnge_sd => _CMP_NGE_US;
    _mm_cmpord_sd => _CMP_ORD_Q;
    _mm_cmpunord_sd => _CMP_UNORD_Q;
}

forward_binary! { M128d:
    _mm_min_pd => min_f64x2;
    _mm_max_pd => max_f64x2;
    _mm_min_sd => min_sd;
    _mm_max_sd => max_sd;
    _mm_unpacklo_pd => unpacklo_f64x2;
    _mm_unpackhi_pd => unpackhi_f64x2;
}

#[inline]
pub fn _mm_movemask_pd(a: M128d) -> i32 {
    Active::movemask_f64x2(a)
}

#[inline]
pub fn _mm_shuffle_epi32<const IMM8: i32>(a: M128i) -> M128i {
    Active::shuffle_i32x4::<IMM8>(a.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm_shufflelo_epi16<const IMM8: i32>(a: M128i) -> M128i {
    Active::shufflelo_i16x8::<IMM8>(a.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm_shufflehi_epi16<const IMM8: i32>(a: M128i) -> M128i {
    Active::shufflehi_i16x8::<IMM8>(a.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm_shuffle_pd<const MASK: i32>(a: M128d, b: M128d) -> M128d {
    Active::shuffle_f64x2::<MASK>(a, b)
}

/// Byte shift left; counts above 15 give zero.
#[inline]
pub fn _mm_bslli_si128<const IMM8: i32>(a: M128i) -> M128i {
    Active::bslli_u8x16::<IMM8>(a.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm_bsrli_si128<const IMM8: i32>(a: M128i) -> M128i {
    Active::bsrli_u8x16::<IMM8>(a.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm_slli_si128<const IMM8: i32>(a: M128i) -> M128i {
    _mm_bslli_si128::<IMM8>(a)
}

#[inline]
pub fn _mm_srli_si128<const IMM8: i32>(a: M128i) -> M128i {
    _mm_bsrli_si128::<IMM8>(a)
}

macro_rules! shifts {
    ($($name:ident, $imm_name:ident => $method:ident;)*) => {
        $(
            #[inline]
            pub fn $name(a: M128i, count: M128i) -> M128i {
                Active::$method(a.reinterpret(), count_of(count)).reinterpret()
            }

            #[inline]
            pub fn $imm_name<const IMM8: i32>(a: M128i) -> M128i {
                static_assert_uimm_bits!(IMM8, 8);
                Active::$method(a.reinterpret(), IMM8 as u64).reinterpret()
            }
        )*
    };
}

shifts! {
    _mm_sll_epi16, _mm_slli_epi16 => shl_i16x8;
    _mm_sll_epi32, _mm_slli_epi32 => shl_i32x4;
    _mm_sll_epi64, _mm_slli_epi64 => shl_i64x2;
    _mm_srl_epi16, _mm_srli_epi16 => shr_logical_i16x8;
    _mm_srl_epi32, _mm_srli_epi32 => shr_logical_i32x4;
    _mm_srl_epi64, _mm_srli_epi64 => shr_logical_i64x2;
    _mm_sra_epi16, _mm_srai_epi16 => shr_arith_i16x8;
    _mm_sra_epi32, _mm_srai_epi32 => shr_arith_i32x4;
}

/// Rounds by the current mode; NaN and overflow give `i32::MIN`.
#[inline]
pub fn _mm_cvtps_epi32(a: M128) -> M128i {
    Active::cvt_f32x4_i32x4(a).reinterpret()
}

#[inline]
pub fn _mm_cvttps_epi32(a: M128) -> M128i {
    Active::cvtt_f32x4_i32x4(a).reinterpret()
}

#[inline]
pub fn _mm_cvtepi32_ps(a: M128i) -> M128 {
    Active::cvt_i32x4_f32x4(a.reinterpret())
}

/// Two results in the low lanes; the upper two are zero.
#[inline]
pub fn _mm_cvtpd_epi32(a: M128d) -> M128i {
    Active::cvt_f64x2_i32x4(a).reinterpret()
}

#[inline]
pub fn _mm_cvttpd_epi32(a: M128d) -> M128i {
    Active::cvtt_f64x2_i32x4(a).reinterpret()
}

#[inline]
pub fn _mm_cvtpd_ps(a: M128d) -> M128 {
    Active::cvt_f64x2_f32x4(a)
}

#[inline]
pub fn _mm_cvtps_pd(a: M128) -> M128d {
    Active::cvt_f32x4_f64x2(a)
}

#[inline]
pub fn _mm_cvtepi32_pd(a: M128i) -> M128d {
    Active::cvt_i32x4_f64x2(a.reinterpret())
}

#[inline]
pub fn _mm_cvtsd_si32(a: M128d) -> i32 {
    Active::cvt_sd_i32(a)
}

#[inline]
pub fn _mm_cvttsd_si32(a: M128d) -> i32 {
    Active::cvtt_sd_i32(a)
}

#[inline]
pub fn _mm_cvtsd_si64(a: M128d) -> i64 {
    Active::cvt_sd_i64(a)
}

#[inline]
pub fn _mm_cvttsd_si64(a: M128d) -> i64 {
    Active::cvtt_sd_i64(a)
}

#[inline]
pub fn _mm_cvtsi32_sd(a: M128d, b: i32) -> M128d {
    Active::cvt_i64_sd(a, i64::from(b))
}

#[inline]
pub fn _mm_cvtsi64_sd(a: M128d, b: i64) -> M128d {
    Active::cvt_i64_sd(a, b)
}

#[inline]
pub fn _mm_cvtsd_ss(a: M128, b: M128d) -> M128 {
    Active::cvt_sd_ss(a, b)
}

#[inline]
pub fn _mm_cvtss_sd(a: M128d, b: M128) -> M128d {
    Active::cvt_ss_sd(a, b)
}

//! AVX intrinsics: 256-bit floating point, the `_CMP_*` predicate compares
//! and 128-bit lane moves.

use crate::engine::convert::{_MM_FROUND_CEIL, _MM_FROUND_FLOOR};
use crate::engine::static_assert_uimm_bits;
use crate::simd::{Active, CompareOps, ConvertOps, ShuffleOps};
use crate::vector::{
    F32x4, F32x8, F64x2, F64x4, I16x16, I32x8, I64x2, I64x4, I8x32, M128, M128d, M128i, M256,
    M256d, M256i,
};

use super::{bitwise, forward_binary};

#[inline]
pub fn _mm256_setzero_ps() -> M256 {
    F32x8::zero()
}

#[inline]
pub fn _mm256_setzero_pd() -> M256d {
    F64x4::zero()
}

#[inline]
pub fn _mm256_setzero_si256() -> M256i {
    I64x4::zero()
}

#[inline]
pub fn _mm256_set1_ps(a: f32) -> M256 {
    F32x8::splat(a)
}

#[inline]
pub fn _mm256_set1_pd(a: f64) -> M256d {
    F64x4::splat(a)
}

#[inline]
pub fn _mm256_set1_epi8(a: i8) -> M256i {
    I8x32::splat(a).reinterpret()
}

#[inline]
pub fn _mm256_set1_epi16(a: i16) -> M256i {
    I16x16::splat(a).reinterpret()
}

#[inline]
pub fn _mm256_set1_epi32(a: i32) -> M256i {
    I32x8::splat(a).reinterpret()
}

#[inline]
pub fn _mm256_set1_epi64x(a: i64) -> M256i {
    I64x4::splat(a)
}

#[inline]
#[allow(clippy::too_many_arguments)]
pub fn _mm256_set_ps(e7: f32, e6: f32, e5: f32, e4: f32, e3: f32, e2: f32, e1: f32, e0: f32) -> M256 {
    F32x8::from_array([e0, e1, e2, e3, e4, e5, e6, e7])
}

#[inline]
#[allow(clippy::too_many_arguments)]
pub fn _mm256_setr_ps(e0: f32, e1: f32, e2: f32, e3: f32, e4: f32, e5: f32, e6: f32, e7: f32) -> M256 {
    F32x8::from_array([e0, e1, e2, e3, e4, e5, e6, e7])
}

#[inline]
pub fn _mm256_set_pd(e3: f64, e2: f64, e1: f64, e0: f64) -> M256d {
    F64x4::from_array([e0, e1, e2, e3])
}

#[inline]
pub fn _mm256_setr_pd(e0: f64, e1: f64, e2: f64, e3: f64) -> M256d {
    F64x4::from_array([e0, e1, e2, e3])
}

#[inline]
#[allow(clippy::too_many_arguments)]
pub fn _mm256_set_epi32(e7: i32, e6: i32, e5: i32, e4: i32, e3: i32, e2: i32, e1: i32, e0: i32) -> M256i {
    I32x8::from_array([e0, e1, e2, e3, e4, e5, e6, e7]).reinterpret()
}

#[inline]
#[allow(clippy::too_many_arguments)]
pub fn _mm256_setr_epi32(e0: i32, e1: i32, e2: i32, e3: i32, e4: i32, e5: i32, e6: i32, e7: i32) -> M256i {
    I32x8::from_array([e0, e1, e2, e3, e4, e5, e6, e7]).reinterpret()
}

#[inline]
pub fn _mm256_set_epi64x(e3: i64, e2: i64, e1: i64, e0: i64) -> M256i {
    I64x4::from_array([e0, e1, e2, e3])
}

#[inline]
pub fn _mm256_setr_epi64x(e0: i64, e1: i64, e2: i64, e3: i64) -> M256i {
    I64x4::from_array([e0, e1, e2, e3])
}

/// `hi` becomes the upper 128 bits.
#[inline]
pub fn _mm256_set_m128(hi: M128, lo: M128) -> M256 {
    F32x8::join(lo, hi)
}

#[inline]
pub fn _mm256_set_m128d(hi: M128d, lo: M128d) -> M256d {
    F64x4::join(lo, hi)
}

#[inline]
pub fn _mm256_set_m128i(hi: M128i, lo: M128i) -> M256i {
    I64x4::join(lo, hi)
}

#[inline]
pub fn _mm256_setr_m128i(lo: M128i, hi: M128i) -> M256i {
    I64x4::join(lo, hi)
}

#[inline]
pub fn _mm256_castps_pd(a: M256) -> M256d {
    a.reinterpret()
}

#[inline]
pub fn _mm256_castpd_ps(a: M256d) -> M256 {
    a.reinterpret()
}

#[inline]
pub fn _mm256_castps_si256(a: M256) -> M256i {
    a.reinterpret()
}

#[inline]
pub fn _mm256_castsi256_ps(a: M256i) -> M256 {
    a.reinterpret()
}

#[inline]
pub fn _mm256_castpd_si256(a: M256d) -> M256i {
    a.reinterpret()
}

#[inline]
pub fn _mm256_castsi256_pd(a: M256i) -> M256d {
    a.reinterpret()
}

#[inline]
pub fn _mm256_castps256_ps128(a: M256) -> M128 {
    a.low_half()
}

#[inline]
pub fn _mm256_castpd256_pd128(a: M256d) -> M128d {
    a.low_half()
}

#[inline]
pub fn _mm256_castsi256_si128(a: M256i) -> M128i {
    a.low_half()
}

/// The upper half is unspecified on hardware; here it is always zero.
#[inline]
pub fn _mm256_castps128_ps256(a: M128) -> M256 {
    F32x8::join(a, F32x4::zero())
}

#[inline]
pub fn _mm256_castpd128_pd256(a: M128d) -> M256d {
    F64x4::join(a, F64x2::zero())
}

#[inline]
pub fn _mm256_castsi128_si256(a: M128i) -> M256i {
    I64x4::join(a, I64x2::zero())
}

#[inline]
pub fn _mm256_zextps128_ps256(a: M128) -> M256 {
    _mm256_castps128_ps256(a)
}

#[inline]
pub fn _mm256_zextpd128_pd256(a: M128d) -> M256d {
    _mm256_castpd128_pd256(a)
}

#[inline]
pub fn _mm256_zextsi128_si256(a: M128i) -> M256i {
    _mm256_castsi128_si256(a)
}

#[inline]
pub fn _mm256_extractf128_ps<const IMM1: i32>(a: M256) -> M128 {
    static_assert_uimm_bits!(IMM1, 1);
    a.split()[IMM1 as usize]
}

#[inline]
pub fn _mm256_extractf128_pd<const IMM1: i32>(a: M256d) -> M128d {
    static_assert_uimm_bits!(IMM1, 1);
    a.split()[IMM1 as usize]
}

#[inline]
pub fn _mm256_extractf128_si256<const IMM1: i32>(a: M256i) -> M128i {
    static_assert_uimm_bits!(IMM1, 1);
    a.split()[IMM1 as usize]
}

#[inline]
pub fn _mm256_insertf128_ps<const IMM1: i32>(a: M256, b: M128) -> M256 {
    static_assert_uimm_bits!(IMM1, 1);
    let mut halves = a.split();
    halves[IMM1 as usize] = b;
    F32x8::join(halves[0], halves[1])
}

#[inline]
pub fn _mm256_insertf128_pd<const IMM1: i32>(a: M256d, b: M128d) -> M256d {
    static_assert_uimm_bits!(IMM1, 1);
    let mut halves = a.split();
    halves[IMM1 as usize] = b;
    F64x4::join(halves[0], halves[1])
}

#[inline]
pub fn _mm256_insertf128_si256<const IMM1: i32>(a: M256i, b: M128i) -> M256i {
    static_assert_uimm_bits!(IMM1, 1);
    let mut halves = a.split();
    halves[IMM1 as usize] = b;
    I64x4::join(halves[0], halves[1])
}

#[inline]
pub fn _mm256_and_ps(a: M256, b: M256) -> M256 {
    bitwise::<_, 8, 4, _>(a, b, |x, y| x & y)
}

#[inline]
pub fn _mm256_andnot_ps(a: M256, b: M256) -> M256 {
    bitwise::<_, 8, 4, _>(a, b, |x, y| !x & y)
}

#[inline]
pub fn _mm256_or_ps(a: M256, b: M256) -> M256 {
    bitwise::<_, 8, 4, _>(a, b, |x, y| x | y)
}

#[inline]
pub fn _mm256_xor_ps(a: M256, b: M256) -> M256 {
    bitwise::<_, 8, 4, _>(a, b, |x, y| x ^ y)
}

#[inline]
pub fn _mm256_and_pd(a: M256d, b: M256d) -> M256d {
    bitwise::<_, 4, 4, _>(a, b, |x, y| x & y)
}

#[inline]
pub fn _mm256_andnot_pd(a: M256d, b: M256d) -> M256d {
    bitwise::<_, 4, 4, _>(a, b, |x, y| !x & y)
}

#[inline]
pub fn _mm256_or_pd(a: M256d, b: M256d) -> M256d {
    bitwise::<_, 4, 4, _>(a, b, |x, y| x | y)
}

#[inline]
pub fn _mm256_xor_pd(a: M256d, b: M256d) -> M256d {
    bitwise::<_, 4, 4, _>(a, b, |x, y| x ^ y)
}

/// Compares with any of the 32 `_CMP_*` predicates. An immediate above 31 is
/// rejected at compile time.
#[inline]
pub fn _mm_cmp_ps<const IMM5: i32>(a: M128, b: M128) -> M128 {
    Active::cmp_f32x4::<IMM5>(a, b)
}

#[inline]
pub fn _mm_cmp_pd<const IMM5: i32>(a: M128d, b: M128d) -> M128d {
    Active::cmp_f64x2::<IMM5>(a, b)
}

#[inline]
pub fn _mm_cmp_ss<const IMM5: i32>(a: M128, b: M128) -> M128 {
    Active::cmp_ss::<IMM5>(a, b)
}

#[inline]
pub fn _mm_cmp_sd<const IMM5: i32>(a: M128d, b: M128d) -> M128d {
    Active::cmp_sd::<IMM5>(a, b)
}

#[inline]
pub fn _mm256_cmp_ps<const IMM5: i32>(a: M256, b: M256) -> M256 {
    Active::cmp_f32x8::<IMM5>(a, b)
}

#[inline]
pub fn _mm256_cmp_pd<const IMM5: i32>(a: M256d, b: M256d) -> M256d {
    Active::cmp_f64x4::<IMM5>(a, b)
}

forward_binary! { M256:
    _mm256_min_ps => min_f32x8;
    _mm256_max_ps => max_f32x8;
    _mm256_unpacklo_ps => unpacklo_f32x8;
    _mm256_unpackhi_ps => unpackhi_f32x8;
}

forward_binary! { M256d:
    _mm256_min_pd => min_f64x4;
    _mm256_max_pd => max_f64x4;
    _mm256_unpacklo_pd => unpacklo_f64x4;
    _mm256_unpackhi_pd => unpackhi_f64x4;
}

#[inline]
pub fn _mm256_movemask_ps(a: M256) -> i32 {
    Active::movemask_f32x8(a)
}

#[inline]
pub fn _mm256_movemask_pd(a: M256d) -> i32 {
    Active::movemask_f64x4(a)
}

#[inline]
pub fn _mm256_blendv_ps(a: M256, b: M256, mask: M256) -> M256 {
    Active::blendv_f32x8(a, b, mask)
}

#[inline]
pub fn _mm256_blendv_pd(a: M256d, b: M256d, mask: M256d) -> M256d {
    Active::blendv_f64x4(a, b, mask)
}

#[inline]
pub fn _mm256_blend_ps<const IMM8: i32>(a: M256, b: M256) -> M256 {
    Active::blend_f32x8::<IMM8>(a, b)
}

#[inline]
pub fn _mm256_blend_pd<const IMM4: i32>(a: M256d, b: M256d) -> M256d {
    Active::blend_f64x4::<IMM4>(a, b)
}

/// `SHUFPS` within each 128-bit half.
#[inline]
pub fn _mm256_shuffle_ps<const MASK: i32>(a: M256, b: M256) -> M256 {
    Active::shuffle_f32x8::<MASK>(a, b)
}

/// One selector bit per lane: bit `i` picks the high element of its pair.
#[inline]
pub fn _mm256_shuffle_pd<const MASK: i32>(a: M256d, b: M256d) -> M256d {
    Active::shuffle_f64x4::<MASK>(a, b)
}

/// `VPERM2F128`: each half is either half of `a` or `b`, or zero when bit 3 of
/// its nibble is set.
#[inline]
pub fn _mm256_permute2f128_ps<const IMM8: i32>(a: M256, b: M256) -> M256 {
    Active::permute2x128_i64x4::<IMM8>(a.reinterpret(), b.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm256_permute2f128_pd<const IMM8: i32>(a: M256d, b: M256d) -> M256d {
    Active::permute2x128_i64x4::<IMM8>(a.reinterpret(), b.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm256_permute2f128_si256<const IMM8: i32>(a: M256i, b: M256i) -> M256i {
    Active::permute2x128_i64x4::<IMM8>(a, b)
}

#[inline]
pub fn _mm256_round_ps<const ROUNDING: i32>(a: M256) -> M256 {
    Active::round_f32x8::<ROUNDING>(a)
}

#[inline]
pub fn _mm256_round_pd<const ROUNDING: i32>(a: M256d) -> M256d {
    Active::round_f64x4::<ROUNDING>(a)
}

#[inline]
pub fn _mm256_floor_ps(a: M256) -> M256 {
    Active::round_f32x8::<_MM_FROUND_FLOOR>(a)
}

#[inline]
pub fn _mm256_ceil_ps(a: M256) -> M256 {
    Active::round_f32x8::<_MM_FROUND_CEIL>(a)
}

#[inline]
pub fn _mm256_floor_pd(a: M256d) -> M256d {
    Active::round_f64x4::<_MM_FROUND_FLOOR>(a)
}

#[inline]
pub fn _mm256_ceil_pd(a: M256d) -> M256d {
    Active::round_f64x4::<_MM_FROUND_CEIL>(a)
}

#[inline]
pub fn _mm256_cvtps_epi32(a: M256) -> M256i {
    Active::cvt_f32x8_i32x8(a).reinterpret()
}

#[inline]
pub fn _mm256_cvttps_epi32(a: M256) -> M256i {
    Active::cvtt_f32x8_i32x8(a).reinterpret()
}

#[inline]
pub fn _mm256_cvtepi32_ps(a: M256i) -> M256 {
    Active::cvt_i32x8_f32x8(a.reinterpret())
}

#[inline]
pub fn _mm256_cvtpd_epi32(a: M256d) -> M128i {
    Active::cvt_f64x4_i32x4(a).reinterpret()
}

#[inline]
pub fn _mm256_cvttpd_epi32(a: M256d) -> M128i {
    Active::cvtt_f64x4_i32x4(a).reinterpret()
}

#[inline]
pub fn _mm256_cvtpd_ps(a: M256d) -> M128 {
    Active::cvt_f64x4_f32x4(a)
}

#[inline]
pub fn _mm256_cvtps_pd(a: M128) -> M256d {
    Active::cvt_f32x4_f64x4(a)
}

#[inline]
pub fn _mm256_cvtepi32_pd(a: M128i) -> M256d {
    Active::cvt_i32x4_f64x4(a.reinterpret())
}

#[inline]
pub fn _mm256_cvtss_f32(a: M256) -> f32 {
    a.lane(0)
}

#[inline]
pub fn _mm256_cvtsd_f64(a: M256d) -> f64 {
    a.lane(0)
}

#[inline]
pub fn _mm256_cvtsi256_si32(a: M256i) -> i32 {
    a.reinterpret::<i32, 8>().lane(0)
}

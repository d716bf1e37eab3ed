//! SSE4.1 intrinsics: the remaining integer `min`/`max`, blends and `round`.

use crate::engine::convert::{_MM_FROUND_CEIL, _MM_FROUND_FLOOR};
use crate::simd::{Active, CompareOps, ConvertOps, SaturatingOps, ShuffleOps};
use crate::vector::{M128, M128d, M128i};

use super::forward_binary;

forward_binary! { M128i:
    /// Signed 32-bit lanes of `a` then `b`, saturated to `u16`.
    _mm_packus_epi32 => packus_i32x4;
    _mm_min_epi8 => min_i8x16;
    _mm_max_epi8 => max_i8x16;
    _mm_min_epu16 => min_u16x8;
    _mm_max_epu16 => max_u16x8;
    _mm_min_epi32 => min_i32x4;
    _mm_max_epi32 => max_i32x4;
    _mm_min_epu32 => min_u32x4;
    _mm_max_epu32 => max_u32x4;
    _mm_cmpeq_epi64 => cmpeq_i64x2;
}

/// Takes each byte from `b` where the matching byte of `mask` has its top bit
/// set.
#[inline]
pub fn _mm_blendv_epi8(a: M128i, b: M128i, mask: M128i) -> M128i {
    Active::blendv_i8x16(a.reinterpret(), b.reinterpret(), mask.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm_blendv_ps(a: M128, b: M128, mask: M128) -> M128 {
    Active::blendv_f32x4(a, b, mask)
}

#[inline]
pub fn _mm_blendv_pd(a: M128d, b: M128d, mask: M128d) -> M128d {
    Active::blendv_f64x2(a, b, mask)
}

#[inline]
pub fn _mm_blend_ps<const IMM4: i32>(a: M128, b: M128) -> M128 {
    Active::blend_f32x4::<IMM4>(a, b)
}

#[inline]
pub fn _mm_blend_pd<const IMM2: i32>(a: M128d, b: M128d) -> M128d {
    Active::blend_f64x2::<IMM2>(a, b)
}

#[inline]
pub fn _mm_blend_epi16<const IMM8: i32>(a: M128i, b: M128i) -> M128i {
    Active::blend_i16x8::<IMM8>(a.reinterpret(), b.reinterpret()).reinterpret()
}

/// Rounds every lane as `ROUNDING` directs: bits 0-1 pick a mode, bit 2
/// defers to the register instead.
#[inline]
pub fn _mm_round_ps<const ROUNDING: i32>(a: M128) -> M128 {
    Active::round_f32x4::<ROUNDING>(a)
}

#[inline]
pub fn _mm_round_pd<const ROUNDING: i32>(a: M128d) -> M128d {
    Active::round_f64x2::<ROUNDING>(a)
}

/// Lane 0 is `b[0]` rounded; the rest come from `a`.
#[inline]
pub fn _mm_round_ss<const ROUNDING: i32>(a: M128, b: M128) -> M128 {
    Active::round_ss::<ROUNDING>(a, b)
}

#[inline]
pub fn _mm_round_sd<const ROUNDING: i32>(a: M128d, b: M128d) -> M128d {
    Active::round_sd::<ROUNDING>(a, b)
}

#[inline]
pub fn _mm_floor_ps(a: M128) -> M128 {
    Active::round_f32x4::<_MM_FROUND_FLOOR>(a)
}

#[inline]
pub fn _mm_ceil_ps(a: M128) -> M128 {
    Active::round_f32x4::<_MM_FROUND_CEIL>(a)
}

#[inline]
pub fn _mm_floor_pd(a: M128d) -> M128d {
    Active::round_f64x2::<_MM_FROUND_FLOOR>(a)
}

#[inline]
pub fn _mm_ceil_pd(a: M128d) -> M128d {
    Active::round_f64x2::<_MM_FROUND_CEIL>(a)
}

#[inline]
pub fn _mm_floor_ss(a: M128, b: M128) -> M128 {
    Active::round_ss::<_MM_FROUND_FLOOR>(a, b)
}

#[inline]
pub fn _mm_ceil_ss(a: M128, b: M128) -> M128 {
    Active::round_ss::<_MM_FROUND_CEIL>(a, b)
}

#[inline]
pub fn _mm_floor_sd(a: M128d, b: M128d) -> M128d {
    Active::round_sd::<_MM_FROUND_FLOOR>(a, b)
}

#[inline]
pub fn _mm_ceil_sd(a: M128d, b: M128d) -> M128d {
    Active::round_sd::<_MM_FROUND_CEIL>(a, b)
}

/// Byte `IMM8` of `a`, zero-extended.
#[inline]
pub fn _mm_extract_epi8<const IMM8: i32>(a: M128i) -> i32 {
    crate::engine::static_assert_uimm_bits!(IMM8, 4);
    i32::from(a.reinterpret::<u8, 16>().lane(IMM8 as usize))
}

#[inline]
pub fn _mm_extract_epi32<const IMM8: i32>(a: M128i) -> i32 {
    crate::engine::static_assert_uimm_bits!(IMM8, 2);
    a.reinterpret::<i32, 4>().lane(IMM8 as usize)
}

#[inline]
pub fn _mm_extract_epi64<const IMM1: i32>(a: M128i) -> i64 {
    crate::engine::static_assert_uimm_bits!(IMM1, 1);
    a.lane(IMM1 as usize)
}

#[inline]
pub fn _mm_insert_epi8<const IMM8: i32>(a: M128i, i: i32) -> M128i {
    crate::engine::static_assert_uimm_bits!(IMM8, 4);
    a.reinterpret::<i8, 16>().with_lane(IMM8 as usize, i as i8).reinterpret()
}

#[inline]
pub fn _mm_insert_epi32<const IMM8: i32>(a: M128i, i: i32) -> M128i {
    crate::engine::static_assert_uimm_bits!(IMM8, 2);
    a.reinterpret::<i32, 4>().with_lane(IMM8 as usize, i).reinterpret()
}

#[inline]
pub fn _mm_insert_epi64<const IMM1: i32>(a: M128i, i: i64) -> M128i {
    crate::engine::static_assert_uimm_bits!(IMM1, 1);
    a.with_lane(IMM1 as usize, i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::convert::{
        _MM_FROUND_CUR_DIRECTION, _MM_FROUND_NO_EXC, _MM_FROUND_TO_NEAREST_INT,
    };
    use crate::engine::csr::{RoundingMode, with_rounding_mode};
    use crate::intrinsics::sse::_mm_setr_ps;
    use crate::intrinsics::sse2::{_mm_set1_epi32, _mm_setr_epi32, _mm_setr_pd};
    use crate::vector::{F32x4, U16x8};

    #[test]
    fn test_round_fixed_and_current() {
        let a = _mm_setr_ps(2.5, -2.5, 0.5, -1.5);
        let nearest = _mm_round_ps::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(a);
        assert_eq!(nearest, F32x4::from_array([2.0, -2.0, 0.0, -2.0]));
        let current = with_rounding_mode(RoundingMode::Up, || {
            _mm_round_ps::<_MM_FROUND_CUR_DIRECTION>(a)
        });
        assert_eq!(current, F32x4::from_array([3.0, -2.0, 1.0, -1.0]));
        assert_eq!(_mm_floor_ps(a), F32x4::from_array([2.0, -3.0, 0.0, -2.0]));
        assert_eq!(_mm_ceil_ps(a), F32x4::from_array([3.0, -2.0, 1.0, -1.0]));
    }

    #[test]
    fn test_round_keeps_sign_of_zero() {
        let r = _mm_ceil_pd(_mm_setr_pd(-0.5, f64::INFINITY));
        assert_eq!(r.lane(0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(r.lane(1), f64::INFINITY);
    }

    #[test]
    fn test_packus_epi32_clamps() {
        let a = _mm_setr_epi32(-1, 65_536, 1234, 65_535);
        let r = _mm_packus_epi32(a, _mm_set1_epi32(i32::MIN)).reinterpret::<u16, 8>();
        assert_eq!(r, U16x8::from_array([0, 65_535, 1234, 65_535, 0, 0, 0, 0]));
    }

    #[test]
    fn test_blend_and_extract() {
        let a = _mm_setr_epi32(0, 1, 2, 3);
        let b = _mm_setr_epi32(10, 11, 12, 13);
        let r = _mm_blend_epi16::<0b1100_0011>(a, b);
        assert_eq!(_mm_extract_epi32::<0>(r), 10);
        assert_eq!(_mm_extract_epi32::<1>(r), 1);
        assert_eq!(_mm_extract_epi32::<3>(r), 13);
        assert_eq!(_mm_extract_epi8::<0>(_mm_set1_epi32(-1)), 0xff);
        let m = _mm_setr_epi32(-1, 0, i32::MIN, 0x7fff_ffff);
        let v = _mm_blendv_epi8(a, b, m).reinterpret::<i32, 4>().to_array();
        // Only the top byte of lane 2 selects `b`; lane 3 takes its low bytes.
        assert_eq!(v, [10, 1, 2, 13]);
    }
}

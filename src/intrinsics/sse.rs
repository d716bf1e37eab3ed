//! SSE intrinsics: single-precision compares, `min`/`max`, conversions and
//! shuffles, plus the MMX integer extensions SSE introduced.

use crate::engine::compare::{
    _CMP_EQ_OQ, _CMP_GE_OS, _CMP_GT_OS, _CMP_LE_OS, _CMP_LT_OS, _CMP_NEQ_UQ, _CMP_NGE_US,
    _CMP_NGT_US, _CMP_NLE_US, _CMP_NLT_US, _CMP_ORD_Q, _CMP_UNORD_Q,
};
use crate::simd::{Active, CompareOps, ConvertOps, SaturatingOps, ShuffleOps};
use crate::vector::{F32x4, M128, M64};

use super::{bitwise, forward_binary, forward_cmp, forward_mmx, narrow, widen};

#[inline]
pub fn _mm_setzero_ps() -> M128 {
    F32x4::zero()
}

#[inline]
pub fn _mm_set1_ps(a: f32) -> M128 {
    F32x4::splat(a)
}

#[inline]
pub fn _mm_set_ps1(a: f32) -> M128 {
    F32x4::splat(a)
}

/// Lanes from highest to lowest.
#[inline]
pub fn _mm_set_ps(e3: f32, e2: f32, e1: f32, e0: f32) -> M128 {
    F32x4::from_array([e0, e1, e2, e3])
}

#[inline]
pub fn _mm_setr_ps(e0: f32, e1: f32, e2: f32, e3: f32) -> M128 {
    F32x4::from_array([e0, e1, e2, e3])
}

#[inline]
pub fn _mm_set_ss(a: f32) -> M128 {
    F32x4::from_array([a, 0.0, 0.0, 0.0])
}

#[inline]
pub fn _mm_cvtss_f32(a: M128) -> f32 {
    a.lane(0)
}

#[inline]
pub fn _mm_move_ss(a: M128, b: M128) -> M128 {
    a.with_lane(0, b.lane(0))
}

#[inline]
pub fn _mm_and_ps(a: M128, b: M128) -> M128 {
    bitwise::<_, 4, 2, _>(a, b, |x, y| x & y)
}

#[inline]
pub fn _mm_andnot_ps(a: M128, b: M128) -> M128 {
    bitwise::<_, 4, 2, _>(a, b, |x, y| !x & y)
}

#[inline]
pub fn _mm_or_ps(a: M128, b: M128) -> M128 {
    bitwise::<_, 4, 2, _>(a, b, |x, y| x | y)
}

#[inline]
pub fn _mm_xor_ps(a: M128, b: M128) -> M128 {
    bitwise::<_, 4, 2, _>(a, b, |x, y| x ^ y)
}

forward_cmp! { M128, cmp_f32x4:
    _mm_cmpeq_ps => _CMP_EQ_OQ;
    _mm_cmplt_ps => _CMP_LT_OS;
    _mm_cmple_ps => _CMP_LE_OS;
    _mm_cmpgt_ps => _CMP_GT_OS;
    _mm_cmpge_ps => _CMP_GE_OS;
    _mm_cmpneq_ps => _CMP_NEQ_UQ;
    _mm_cmpnlt_ps => _CMP_NLT_US;
    _mm_cmpnle_ps => _CMP_NLE_US;
    _mm_cmpngt_ps => _CMP_NGT_US;
    _mm_cmpnge_ps => _CMP_NGE_US;
    _mm_cmpord_ps => _CMP_ORD_Q;
    _mm_cmpunord_ps => _CMP_UNORD_Q;
}

forward_cmp! { M128, cmp_ss:
    _mm_cmpeq_ss => _CMP_EQ_OQ;
    _mm_cmplt_ss => _CMP_LT_OS;
    _mm_cmple_ss => _CMP_LE_OS;
    _mm_cmpgt_ss => _CMP_GT_OS;
    _mm_cmpge_ss => _CMP_GE_OS;
    _mm_cmpneq_ss => _CMP_NEQ_UQ;
    _mm_cmpnlt_ss => _CMP_NLT_US;
    _mm_cmpnle_ss => _CMP_NLE_US;
    _mm_cmpngt_ss => _CMP_NGT_US;
    _mm_cmpnge_ss => _CMP_NGE_US;
    _mm_cmpord_ss => _CMP_ORD_Q;
    _mm_cmpunord_ss => _CMP_UNORD_Q;
}

forward_binary! { M128:
    /// Returns `b` when either lane is NaN or both are zero.
    _mm_min_ps => min_f32x4;
    _mm_max_ps => max_f32x4;
    _mm_min_ss => min_ss;
    _mm_max_ss => max_ss;
    _mm_unpacklo_ps => unpacklo_f32x4;
    _mm_unpackhi_ps => unpackhi_f32x4;
}

/// 1 when lane 0 of `a` equals lane 0 of `b`, 0 otherwise (NaN included).
#[inline]
pub fn _mm_comieq_ss(a: M128, b: M128) -> i32 {
    Active::cmp_ss::<_CMP_EQ_OQ>(a, b).reinterpret::<i32, 4>().lane(0) & 1
}

#[inline]
pub fn _mm_movemask_ps(a: M128) -> i32 {
    Active::movemask_f32x4(a)
}

#[inline]
pub fn _mm_shuffle_ps<const MASK: i32>(a: M128, b: M128) -> M128 {
    Active::shuffle_f32x4::<MASK>(a, b)
}

/// Converts lane 0 using the current rounding mode.
#[inline]
pub fn _mm_cvtss_si32(a: M128) -> i32 {
    Active::cvt_ss_i32(a)
}

#[inline]
pub fn _mm_cvt_ss2si(a: M128) -> i32 {
    Active::cvt_ss_i32(a)
}

#[inline]
pub fn _mm_cvttss_si32(a: M128) -> i32 {
    Active::cvtt_ss_i32(a)
}

#[inline]
pub fn _mm_cvtt_ss2si(a: M128) -> i32 {
    Active::cvtt_ss_i32(a)
}

#[inline]
pub fn _mm_cvtss_si64(a: M128) -> i64 {
    Active::cvt_ss_i64(a)
}

#[inline]
pub fn _mm_cvttss_si64(a: M128) -> i64 {
    Active::cvtt_ss_i64(a)
}

#[inline]
pub fn _mm_cvtsi32_ss(a: M128, b: i32) -> M128 {
    Active::cvt_i64_ss(a, i64::from(b))
}

#[inline]
pub fn _mm_cvtsi64_ss(a: M128, b: i64) -> M128 {
    Active::cvt_i64_ss(a, b)
}

forward_mmx! {
    _mm_avg_pu8 => avg_u8x16;
    _mm_avg_pu16 => avg_u16x8;
    _mm_max_pi16 => max_i16x8;
    _mm_min_pi16 => min_i16x8;
    _mm_max_pu8 => max_u8x16;
    _mm_min_pu8 => min_u8x16;
}

/// Sign bits of the eight bytes of `a`.
#[inline]
pub fn _mm_movemask_pi8(a: M64) -> i32 {
    Active::movemask_i8x16(widen(a).reinterpret())
}

/// `PSHUFW`: the low-word shuffle of the widened register.
#[inline]
pub fn _mm_shuffle_pi16<const IMM8: i32>(a: M64) -> M64 {
    narrow(Active::shufflelo_i16x8::<IMM8>(widen(a).reinterpret::<i16, 8>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sse_predicates_on_nan() {
        let a = _mm_setr_ps(1.0, f32::NAN, 3.0, 4.0);
        let b = _mm_setr_ps(2.0, 2.0, 3.0, 1.0);
        assert_eq!(_mm_movemask_ps(_mm_cmplt_ps(a, b)), 0b0001);
        assert_eq!(_mm_movemask_ps(_mm_cmpnlt_ps(a, b)), 0b1110);
        assert_eq!(_mm_movemask_ps(_mm_cmpgt_ps(a, b)), 0b1000);
        assert_eq!(_mm_movemask_ps(_mm_cmpunord_ps(a, b)), 0b0010);
        assert_eq!(_mm_movemask_ps(_mm_cmpneq_ps(a, b)), 0b1011);
    }

    #[test]
    fn test_scalar_compare_keeps_upper_lanes() {
        let a = _mm_setr_ps(1.0, 5.0, 6.0, 7.0);
        let b = _mm_set1_ps(1.0);
        let r = _mm_cmpeq_ss(a, b);
        assert_eq!(r.reinterpret::<u32, 4>().lane(0), u32::MAX);
        assert_eq!(r.lane(1), 5.0);
        assert_eq!(_mm_comieq_ss(a, b), 1);
    }

    #[test]
    fn test_min_returns_second_operand() {
        let a = _mm_setr_ps(-0.0, f32::NAN, 1.0, 2.0);
        let b = _mm_setr_ps(0.0, 3.0, f32::NAN, 1.0);
        let r = _mm_min_ps(a, b);
        assert_eq!(r.lane(0).to_bits(), 0.0f32.to_bits());
        assert_eq!(r.lane(1), 3.0);
        assert!(r.lane(2).is_nan());
        assert_eq!(r.lane(3), 1.0);
    }

    #[test]
    fn test_pshufw() {
        let a = crate::vector::I16x4::from_array([10, 11, 12, 13]).reinterpret();
        let r = _mm_shuffle_pi16::<0b00_01_10_11>(a).reinterpret::<i16, 4>();
        assert_eq!(r.to_array(), [13, 12, 11, 10]);
    }
}

//! Comparison masks: all 32 float predicates against a reference table,
//! integer compares, `movemask` and `blendv`.

use simdport::engine::compare::Predicate;
use simdport::engine::csr::{self, Mxcsr, RoundingGuard};
use simdport::intrinsics::prelude::*;
use simdport::vector::{F32x4, F64x2, I16x8, I64x2, I8x16};

const SPECIALS: [f32; 8] = [
    0.0,
    -0.0,
    1.0,
    -1.0,
    f32::INFINITY,
    f32::NEG_INFINITY,
    f32::NAN,
    f32::MIN_POSITIVE,
];

// (ordered relation, result on NaN) for the low 16 predicates
fn reference(imm: i32, a: f32, b: f32) -> bool {
    if a.is_nan() || b.is_nan() {
        return matches!(imm & 0x0f, 0x03 | 0x04 | 0x05 | 0x06 | 0x08 | 0x09 | 0x0a | 0x0f);
    }
    match imm & 0x0f {
        0x00 | 0x08 => a == b,
        0x01 | 0x09 => a < b,
        0x02 | 0x0a => a <= b,
        0x03 | 0x0b => false,
        0x04 | 0x0c => a != b,
        0x05 | 0x0d => a >= b,
        0x06 | 0x0e => a > b,
        _ => true,
    }
}

macro_rules! check_predicates {
    ($a:expr, $b:expr, $($imm:expr),*) => {
        $(
            let r = _mm_cmp_ps::<{ $imm }>($a, $b).reinterpret::<u32, 4>();
            let d = _mm_cmp_pd::<{ $imm }>(
                F64x2::from_array([f64::from($a.lane(0)), f64::from($a.lane(1))]),
                F64x2::from_array([f64::from($b.lane(0)), f64::from($b.lane(1))]),
            )
            .reinterpret::<u64, 2>();
            for i in 0..4 {
                let expected = reference($imm, $a.lane(i), $b.lane(i));
                assert_eq!(
                    r.lane(i),
                    if expected { u32::MAX } else { 0 },
                    "predicate {:#x} on ({}, {})",
                    $imm,
                    $a.lane(i),
                    $b.lane(i)
                );
                if i < 2 {
                    assert_eq!(d.lane(i), if expected { u64::MAX } else { 0 });
                }
            }
        )*
    };
}

#[test]
fn test_all_predicates_on_special_values() {
    for &x in &SPECIALS {
        for &y in &SPECIALS {
            let a = F32x4::from_array([x, y, x, 2.5]);
            let b = F32x4::from_array([y, x, x, -2.5]);
            check_predicates!(
                a, b, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b,
                0x0c, 0x0d, 0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18,
                0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f
            );
        }
    }
}

#[test]
fn test_predicate_decoding() {
    for imm in 0u8..32 {
        let p = Predicate::try_from(imm).expect("immediates below 32 decode");
        assert_eq!(p.unordered, Predicate::from_imm(i32::from(imm) ^ 0x10).unordered);
        assert_ne!(p.signaling, Predicate::from_imm(i32::from(imm) ^ 0x10).signaling);
    }
    let err = Predicate::try_from(32u8).unwrap_err();
    assert!(err.to_string().contains("predicate"));
}

#[test]
fn test_sse_names_match_avx_predicates() {
    let a = _mm_setr_ps(1.0, f32::NAN, 3.0, -0.0);
    let b = _mm_setr_ps(2.0, 1.0, 3.0, 0.0);
    // Set lanes are NaN as floats; compare the bits.
    let bits = |m: M128| m.reinterpret::<u32, 4>();
    assert_eq!(bits(_mm_cmplt_ps(a, b)), bits(_mm_cmp_ps::<_CMP_LT_OS>(a, b)));
    assert_eq!(bits(_mm_cmpnlt_ps(a, b)), bits(_mm_cmp_ps::<_CMP_NLT_US>(a, b)));
    assert_eq!(bits(_mm_cmpneq_ps(a, b)), bits(_mm_cmp_ps::<_CMP_NEQ_UQ>(a, b)));
    assert_eq!(bits(_mm_cmpord_ps(a, b)), bits(_mm_cmp_ps::<_CMP_ORD_Q>(a, b)));
    assert_eq!(_mm_movemask_ps(_mm_cmpeq_ps(a, b)), 0b1100);
}

#[test]
fn test_denormals_compare_as_zero_under_daz() {
    let tiny = f32::from_bits(1);
    let a = _mm_set1_ps(tiny);
    let b = _mm_setzero_ps();
    assert_eq!(_mm_movemask_ps(_mm_cmpeq_ps(a, b)), 0);

    let _guard = RoundingGuard::with_register(Mxcsr::DEFAULT.with_denormals_are_zero(true));
    assert!(csr::current().denormals_are_zero());
    assert_eq!(_mm_movemask_ps(_mm_cmpeq_ps(a, b)), 0b1111);
    assert_eq!(_mm_movemask_ps(_mm_cmpgt_ps(a, b)), 0);
}

#[test]
fn test_min_max_operand_order() {
    let cases: [(f64, f64, f64, f64); 5] = [
        (1.0, 2.0, 1.0, 2.0),
        (f64::NAN, 2.0, 2.0, 2.0),
        (-0.0, 0.0, 0.0, 0.0),
        (0.0, -0.0, -0.0, -0.0),
        (-1.0, f64::INFINITY, -1.0, f64::INFINITY),
    ];
    for (a, b, min, max) in cases {
        let lo = _mm_min_pd(_mm_set1_pd(a), _mm_set1_pd(b)).lane(0);
        let hi = _mm_max_pd(_mm_set1_pd(a), _mm_set1_pd(b)).lane(0);
        assert_eq!(lo.to_bits(), min.to_bits(), "min({a}, {b})");
        assert_eq!(hi.to_bits(), max.to_bits(), "max({a}, {b})");
    }
    let nan_second = _mm_min_pd(_mm_set1_pd(1.0), _mm_set1_pd(f64::NAN));
    assert!(nan_second.lane(0).is_nan());
}

#[test]
fn test_integer_compares_are_signed() {
    let a = I8x16::from_fn(|i| (i as i32 * 16 - 128) as i8);
    let b = I8x16::splat(0);
    let gt = _mm_cmpgt_epi8(a.reinterpret(), b.reinterpret()).reinterpret::<i8, 16>();
    let lt = _mm_cmplt_epi8(a.reinterpret(), b.reinterpret()).reinterpret::<i8, 16>();
    for i in 0..16 {
        assert_eq!(gt.lane(i), if a.lane(i) > 0 { -1 } else { 0 });
        assert_eq!(lt.lane(i), if a.lane(i) < 0 { -1 } else { 0 });
    }
    assert_eq!(_mm_movemask_epi8(lt.reinterpret()), 0x00ff);

    let wide = _mm_cmpgt_epi64(I64x2::from_array([-1, 1]), I64x2::from_array([i64::MIN, 2]));
    assert_eq!(wide.to_array(), [-1, 0]);

    let e = _mm_cmpeq_epi16(_mm_set1_epi16(7), I16x8::from_fn(|i| i as i16).reinterpret());
    assert_eq!(_mm_movemask_epi8(e), 0b1100_0000_0000_0000);
}

#[test]
fn test_unsigned_min_max() {
    let a = _mm_set1_epi8(-1);
    let b = _mm_set1_epi8(1);
    assert_eq!(_mm_min_epu8(a, b), b);
    assert_eq!(_mm_max_epi8(a, b), b);
    assert_eq!(_mm_max_epu32(_mm_set1_epi32(-1), _mm_set1_epi32(5)), _mm_set1_epi32(-1));
    assert_eq!(_mm_min_epu16(_mm_set1_epi16(-2), _mm_set1_epi16(3)), _mm_set1_epi16(3));
}

#[test]
fn test_blendv_reads_top_bit_only() {
    let a = _mm_set1_ps(1.0);
    let b = _mm_set1_ps(2.0);
    let mask = _mm_setr_ps(-0.0, 0.0, f32::NAN, -f32::NAN);
    let r = _mm_blendv_ps(a, b, mask);
    assert_eq!(r.to_array(), [2.0, 1.0, 1.0, 2.0]);
}

//! Backend equivalence.
//!
//! Runs every operation family on random inputs through the compiled-in
//! backend ([`Active`]), the tier it falls back to ([`Lower`]) and the scalar
//! reference, under several register states, and requires identical bits.
//! Float inputs are biased toward the values where implementations tend to
//! disagree: signed zeros, NaNs with payloads, denormals and the edges of the
//! integer conversion range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simdport::engine::compare::*;
use simdport::engine::convert::{
    _MM_FROUND_CUR_DIRECTION, _MM_FROUND_FLOOR, _MM_FROUND_NEARBYINT, _MM_FROUND_TO_NEAREST_INT,
    _MM_FROUND_TRUNC,
};
use simdport::engine::csr::{Mxcsr, RoundingGuard, RoundingMode};
use simdport::simd::{
    Active, CompareOps, ConvertOps, Lower, SaturatingOps, ScalarBackend, ShiftOps, ShuffleOps,
};
use simdport::vector::{U8x16, U8x32, Vector};
use simdport::Lane;

const ITERATIONS: usize = 200;

const F32_SPECIALS: [u32; 16] = [
    0x0000_0000, // +0
    0x8000_0000, // -0
    0x3f80_0000, // 1
    0x3f00_0000, // 0.5
    0x3fc0_0000, // 1.5
    0xc020_0000, // -2.5
    0x7f80_0000, // +inf
    0xff80_0000, // -inf
    0x7fc0_0000, // qNaN
    0xffc0_1234, // -qNaN with payload
    0x7f80_0001, // sNaN
    0x0000_0001, // smallest denormal
    0x807f_ffff, // largest negative denormal
    0x4f00_0000, // 2^31
    0xcf00_0000, // -2^31
    0x7f7f_ffff, // MAX
];

const F64_SPECIALS: [u64; 14] = [
    0x0000_0000_0000_0000,
    0x8000_0000_0000_0000,
    0x3ff0_0000_0000_0000,
    0x3fe0_0000_0000_0000,
    0xc004_0000_0000_0000,
    0x7ff0_0000_0000_0000,
    0xfff0_0000_0000_0000,
    0x7ff8_0000_0000_0000,
    0xfff8_0000_dead_beef,
    0x7ff0_0000_0000_0001,
    0x0000_0000_0000_0001,
    0x41e0_0000_0000_0000, // 2^31
    0xc3e0_0000_0000_0000, // -2^63
    0x36a0_0000_0000_0000, // below the f32 denormal range
];

fn bits128<T: Lane, const N: usize>(rng: &mut StdRng) -> Vector<T, N> {
    U8x16::from_array(rng.random()).reinterpret()
}

fn bits256<T: Lane, const N: usize>(rng: &mut StdRng) -> Vector<T, N> {
    U8x32::from_array(rng.random()).reinterpret()
}

fn f32s<const N: usize>(rng: &mut StdRng) -> Vector<f32, N> {
    Vector::from_fn(|_| match rng.random_range(0..4) {
        0 => f32::from_bits(F32_SPECIALS[rng.random_range(0..F32_SPECIALS.len())]),
        1 => f32::from_bits(rng.random()),
        _ => rng.random_range(-1.0e4f32..1.0e4),
    })
}

fn f64s<const N: usize>(rng: &mut StdRng) -> Vector<f64, N> {
    Vector::from_fn(|_| match rng.random_range(0..4) {
        0 => f64::from_bits(F64_SPECIALS[rng.random_range(0..F64_SPECIALS.len())]),
        1 => f64::from_bits(rng.random()),
        _ => rng.random_range(-1.0e4f64..1.0e4),
    })
}

/// Byte image, so NaN lanes compare by bits.
fn image<T: Lane, const N: usize, const B: usize>(v: Vector<T, N>) -> [u8; B] {
    v.reinterpret::<u8, B>().to_array()
}

fn register_states() -> Vec<Mxcsr> {
    let mut states: Vec<Mxcsr> = RoundingMode::ALL
        .into_iter()
        .map(|mode| Mxcsr::DEFAULT.with_rounding_mode(mode))
        .collect();
    states.push(Mxcsr::DEFAULT.with_denormals_are_zero(true));
    states.push(Mxcsr::DEFAULT.with_flush_to_zero(true));
    states.push(
        Mxcsr::DEFAULT
            .with_rounding_mode(RoundingMode::Up)
            .with_flush_to_zero(true)
            .with_denormals_are_zero(true),
    );
    states
}

macro_rules! same {
    ($what:expr, $bytes:literal, $b:ident => $expr:expr) => {{
        let reference: [u8; $bytes] = image({
            type $b = ScalarBackend;
            $expr
        });
        let active: [u8; $bytes] = image({
            type $b = Active;
            $expr
        });
        let lower: [u8; $bytes] = image({
            type $b = Lower;
            $expr
        });
        assert_eq!(active, reference, "Active {}", $what);
        assert_eq!(lower, reference, "Lower {}", $what);
    }};
}

macro_rules! binary {
    ($rng:ident, $family:ident, $gen:ident: $($method:ident -> $bytes:literal),* $(,)?) => {
        $(
            let a = $gen($rng);
            let b = $gen($rng);
            same!(stringify!($method), $bytes, B => <B as $family>::$method(a, b));
        )*
    };
}

macro_rules! unary {
    ($rng:ident, $family:ident, $gen:ident: $($method:ident -> $bytes:literal),* $(,)?) => {
        $(
            let a = $gen($rng);
            same!(stringify!($method), $bytes, B => <B as $family>::$method(a));
        )*
    };
}

macro_rules! predicates {
    ($a:ident, $b:ident, $method:ident -> $bytes:literal: $($imm:ident),*) => {
        $(
            same!(
                concat!(stringify!($method), "::<", stringify!($imm), ">"),
                $bytes,
                B => <B as CompareOps>::$method::<$imm>($a, $b)
            );
        )*
    };
}

fn check_saturating(rng: &mut StdRng) {
    binary!(rng, SaturatingOps, bits128:
        adds_i8x16 -> 16, adds_u8x16 -> 16, adds_i16x8 -> 16, adds_u16x8 -> 16,
        subs_i8x16 -> 16, subs_u8x16 -> 16, subs_i16x8 -> 16, subs_u16x8 -> 16,
        avg_u8x16 -> 16, avg_u16x8 -> 16,
        packs_i16x8 -> 16, packus_i16x8 -> 16, packs_i32x4 -> 16, packus_i32x4 -> 16,
    );
    binary!(rng, SaturatingOps, bits256:
        adds_i8x32 -> 32, adds_u8x32 -> 32, adds_i16x16 -> 32, adds_u16x16 -> 32,
        subs_i8x32 -> 32, subs_u8x32 -> 32, subs_i16x16 -> 32, subs_u16x16 -> 32,
        avg_u8x32 -> 32, avg_u16x16 -> 32,
        packs_i16x16 -> 32, packus_i16x16 -> 32, packs_i32x8 -> 32, packus_i32x8 -> 32,
    );
    unary!(rng, SaturatingOps, bits128: abs_i8x16 -> 16, abs_i16x8 -> 16, abs_i32x4 -> 16);
    unary!(rng, SaturatingOps, bits256: abs_i8x32 -> 32, abs_i16x16 -> 32, abs_i32x8 -> 32);
}

fn check_compare(rng: &mut StdRng) {
    let (a4, b4) = (f32s::<4>(rng), f32s::<4>(rng));
    let (a2, b2) = (f64s::<2>(rng), f64s::<2>(rng));
    let (a8, b8) = (f32s::<8>(rng), f32s::<8>(rng));
    let (a4d, b4d) = (f64s::<4>(rng), f64s::<4>(rng));
    predicates!(a4, b4, cmp_f32x4 -> 16:
        _CMP_EQ_OQ, _CMP_LT_OS, _CMP_LE_OS, _CMP_UNORD_Q, _CMP_NEQ_UQ, _CMP_NLT_US, _CMP_NLE_US,
        _CMP_ORD_Q, _CMP_EQ_UQ, _CMP_NGE_US, _CMP_NGT_US, _CMP_FALSE_OQ, _CMP_NEQ_OQ, _CMP_GE_OS,
        _CMP_GT_OS, _CMP_TRUE_UQ, _CMP_EQ_OS, _CMP_LT_OQ, _CMP_LE_OQ, _CMP_UNORD_S, _CMP_NEQ_US,
        _CMP_NLT_UQ, _CMP_NLE_UQ, _CMP_ORD_S, _CMP_EQ_US, _CMP_NGE_UQ, _CMP_NGT_UQ,
        _CMP_FALSE_OS, _CMP_NEQ_OS, _CMP_GE_OQ, _CMP_GT_OQ, _CMP_TRUE_US);
    predicates!(a2, b2, cmp_f64x2 -> 16:
        _CMP_EQ_OQ, _CMP_LT_OS, _CMP_LE_OS, _CMP_UNORD_Q, _CMP_NEQ_UQ, _CMP_NLT_US, _CMP_NLE_US,
        _CMP_ORD_Q, _CMP_EQ_UQ, _CMP_NGE_US, _CMP_NGT_US, _CMP_FALSE_OQ, _CMP_NEQ_OQ, _CMP_GE_OS,
        _CMP_GT_OS, _CMP_TRUE_UQ, _CMP_EQ_OS, _CMP_LT_OQ, _CMP_LE_OQ, _CMP_UNORD_S, _CMP_NEQ_US,
        _CMP_NLT_UQ, _CMP_NLE_UQ, _CMP_ORD_S, _CMP_EQ_US, _CMP_NGE_UQ, _CMP_NGT_UQ,
        _CMP_FALSE_OS, _CMP_NEQ_OS, _CMP_GE_OQ, _CMP_GT_OQ, _CMP_TRUE_US);
    predicates!(a8, b8, cmp_f32x8 -> 32:
        _CMP_EQ_OQ, _CMP_LT_OS, _CMP_UNORD_Q, _CMP_NEQ_UQ, _CMP_NLE_US, _CMP_EQ_UQ, _CMP_NGT_US,
        _CMP_FALSE_OQ, _CMP_NEQ_OQ, _CMP_GE_OQ, _CMP_TRUE_US);
    predicates!(a4d, b4d, cmp_f64x4 -> 32:
        _CMP_EQ_OQ, _CMP_LT_OS, _CMP_UNORD_Q, _CMP_NEQ_UQ, _CMP_NLE_US, _CMP_EQ_UQ, _CMP_NGT_US,
        _CMP_FALSE_OQ, _CMP_NEQ_OQ, _CMP_GE_OQ, _CMP_TRUE_US);
    predicates!(a4, b4, cmp_ss -> 16:
        _CMP_EQ_OQ, _CMP_LT_OS, _CMP_UNORD_Q, _CMP_NLT_US, _CMP_ORD_Q, _CMP_NEQ_OQ, _CMP_GT_OQ);
    predicates!(a2, b2, cmp_sd -> 16:
        _CMP_EQ_OQ, _CMP_LT_OS, _CMP_UNORD_Q, _CMP_NLT_US, _CMP_ORD_Q, _CMP_NEQ_OQ, _CMP_GT_OQ);

    binary!(rng, CompareOps, f32s: min_f32x4 -> 16, max_f32x4 -> 16, min_ss -> 16, max_ss -> 16);
    binary!(rng, CompareOps, f64s: min_f64x2 -> 16, max_f64x2 -> 16, min_sd -> 16, max_sd -> 16);
    binary!(rng, CompareOps, f32s: min_f32x8 -> 32, max_f32x8 -> 32);
    binary!(rng, CompareOps, f64s: min_f64x4 -> 32, max_f64x4 -> 32);
    binary!(rng, CompareOps, bits128:
        cmpeq_i8x16 -> 16, cmpeq_i16x8 -> 16, cmpeq_i32x4 -> 16, cmpeq_i64x2 -> 16,
        cmpgt_i8x16 -> 16, cmpgt_i16x8 -> 16, cmpgt_i32x4 -> 16, cmpgt_i64x2 -> 16,
        min_i8x16 -> 16, max_i8x16 -> 16, min_u8x16 -> 16, max_u8x16 -> 16,
        min_i16x8 -> 16, max_i16x8 -> 16, min_u16x8 -> 16, max_u16x8 -> 16,
        min_i32x4 -> 16, max_i32x4 -> 16, min_u32x4 -> 16, max_u32x4 -> 16,
    );
    binary!(rng, CompareOps, bits256:
        cmpeq_i8x32 -> 32, cmpeq_i16x16 -> 32, cmpeq_i32x8 -> 32, cmpeq_i64x4 -> 32,
        cmpgt_i8x32 -> 32, cmpgt_i16x16 -> 32, cmpgt_i32x8 -> 32, cmpgt_i64x4 -> 32,
        min_i8x32 -> 32, max_i8x32 -> 32, min_u8x32 -> 32, max_u8x32 -> 32,
        min_i16x16 -> 32, max_i16x16 -> 32, min_u16x16 -> 32, max_u16x16 -> 32,
        min_i32x8 -> 32, max_i32x8 -> 32, min_u32x8 -> 32, max_u32x8 -> 32,
    );

    let bytes: U8x16 = bits128(rng);
    let wide: U8x32 = bits256(rng);
    let i8x16 = bytes.reinterpret::<i8, 16>();
    let i8x32 = wide.reinterpret::<i8, 32>();
    assert_eq!(Active::movemask_i8x16(i8x16), ScalarBackend::movemask_i8x16(i8x16));
    assert_eq!(Active::movemask_i8x32(i8x32), ScalarBackend::movemask_i8x32(i8x32));
    assert_eq!(Active::movemask_f32x4(a4), ScalarBackend::movemask_f32x4(a4));
    assert_eq!(Active::movemask_f64x2(a2), ScalarBackend::movemask_f64x2(a2));
    assert_eq!(Active::movemask_f32x8(a8), ScalarBackend::movemask_f32x8(a8));
    assert_eq!(Active::movemask_f64x4(a4d), ScalarBackend::movemask_f64x4(a4d));

    let m16: Vector<i8, 16> = bits128(rng);
    let m32: Vector<i8, 32> = bits256(rng);
    same!("blendv_i8x16", 16, B => <B as CompareOps>::blendv_i8x16(i8x16, m16, m16));
    same!("blendv_i8x32", 32, B => <B as CompareOps>::blendv_i8x32(i8x32, m32, m32));
    same!("blendv_f32x4", 16, B => <B as CompareOps>::blendv_f32x4(a4, b4, b4));
    same!("blendv_f64x2", 16, B => <B as CompareOps>::blendv_f64x2(a2, b2, a2));
    same!("blendv_f32x8", 32, B => <B as CompareOps>::blendv_f32x8(a8, b8, a8));
    same!("blendv_f64x4", 32, B => <B as CompareOps>::blendv_f64x4(a4d, b4d, b4d));
}

fn check_convert(rng: &mut StdRng) {
    unary!(rng, ConvertOps, f32s:
        cvt_f32x4_i32x4 -> 16, cvtt_f32x4_i32x4 -> 16, cvt_f32x4_f64x2 -> 16,
        cvt_f32x4_f64x4 -> 32,
    );
    unary!(rng, ConvertOps, f32s: cvt_f32x8_i32x8 -> 32, cvtt_f32x8_i32x8 -> 32);
    unary!(rng, ConvertOps, f64s:
        cvt_f64x2_i32x4 -> 16, cvtt_f64x2_i32x4 -> 16, cvt_f64x2_f32x4 -> 16,
    );
    unary!(rng, ConvertOps, f64s:
        cvt_f64x4_i32x4 -> 16, cvtt_f64x4_i32x4 -> 16, cvt_f64x4_f32x4 -> 16,
    );
    unary!(rng, ConvertOps, bits128:
        cvt_i32x4_f32x4 -> 16, cvt_i32x4_f64x2 -> 16, cvt_i32x4_f64x4 -> 32,
    );
    unary!(rng, ConvertOps, bits256: cvt_i32x8_f32x8 -> 32);

    let s = f32s::<4>(rng);
    let d = f64s::<2>(rng);
    assert_eq!(Active::cvt_ss_i32(s), ScalarBackend::cvt_ss_i32(s), "cvt_ss_i32 {s:?}");
    assert_eq!(Active::cvtt_ss_i32(s), ScalarBackend::cvtt_ss_i32(s));
    assert_eq!(Active::cvt_ss_i64(s), ScalarBackend::cvt_ss_i64(s));
    assert_eq!(Active::cvtt_ss_i64(s), ScalarBackend::cvtt_ss_i64(s));
    assert_eq!(Active::cvt_sd_i32(d), ScalarBackend::cvt_sd_i32(d), "cvt_sd_i32 {d:?}");
    assert_eq!(Active::cvtt_sd_i32(d), ScalarBackend::cvtt_sd_i32(d));
    assert_eq!(Active::cvt_sd_i64(d), ScalarBackend::cvt_sd_i64(d));
    assert_eq!(Active::cvtt_sd_i64(d), ScalarBackend::cvtt_sd_i64(d));

    let int: i64 = rng.random();
    same!("cvt_i64_ss", 16, B => <B as ConvertOps>::cvt_i64_ss(s, int));
    same!("cvt_i64_sd", 16, B => <B as ConvertOps>::cvt_i64_sd(d, int));
    same!("cvt_sd_ss", 16, B => <B as ConvertOps>::cvt_sd_ss(s, d));
    same!("cvt_ss_sd", 16, B => <B as ConvertOps>::cvt_ss_sd(d, s));

    let s8 = f32s::<8>(rng);
    let d4 = f64s::<4>(rng);
    macro_rules! rounds {
        ($($imm:ident),*) => {
            $(
                same!("round_f32x4", 16, B => <B as ConvertOps>::round_f32x4::<$imm>(s));
                same!("round_f64x2", 16, B => <B as ConvertOps>::round_f64x2::<$imm>(d));
                same!("round_f32x8", 32, B => <B as ConvertOps>::round_f32x8::<$imm>(s8));
                same!("round_f64x4", 32, B => <B as ConvertOps>::round_f64x4::<$imm>(d4));
                same!("round_ss", 16, B => <B as ConvertOps>::round_ss::<$imm>(s, s));
                same!("round_sd", 16, B => <B as ConvertOps>::round_sd::<$imm>(d, d));
            )*
        };
    }
    rounds!(
        _MM_FROUND_TO_NEAREST_INT,
        _MM_FROUND_FLOOR,
        _MM_FROUND_TRUNC,
        _MM_FROUND_CUR_DIRECTION,
        _MM_FROUND_NEARBYINT
    );
}

fn check_shuffle(rng: &mut StdRng) {
    macro_rules! imm_unary {
        ($gen:ident, $method:ident -> $bytes:literal: $($imm:literal),*) => {
            $(
                let a = $gen(rng);
                same!(stringify!($method), $bytes, B => <B as ShuffleOps>::$method::<$imm>(a));
            )*
        };
    }
    macro_rules! imm_binary {
        ($gen:ident, $method:ident -> $bytes:literal: $($imm:literal),*) => {
            $(
                let a = $gen(rng);
                let b = $gen(rng);
                same!(stringify!($method), $bytes, B => <B as ShuffleOps>::$method::<$imm>(a, b));
            )*
        };
    }

    imm_unary!(bits128, shuffle_i32x4 -> 16: 0x00, 0x1b, 0xe4, 0x72);
    imm_unary!(bits256, shuffle_i32x8 -> 32: 0x00, 0x1b, 0xb1);
    imm_unary!(bits128, shufflelo_i16x8 -> 16: 0x1b, 0xff);
    imm_unary!(bits128, shufflehi_i16x8 -> 16: 0x1b, 0x40);
    imm_unary!(bits256, shufflelo_i16x16 -> 32: 0x1b, 0x93);
    imm_unary!(bits256, shufflehi_i16x16 -> 32: 0x1b, 0x0e);
    imm_binary!(f32s, shuffle_f32x4 -> 16: 0x00, 0x44, 0xee, 0x1b);
    imm_binary!(f32s, shuffle_f32x8 -> 32: 0x00, 0x4e);
    imm_binary!(f64s, shuffle_f64x2 -> 16: 0, 1, 2, 3);
    imm_binary!(f64s, shuffle_f64x4 -> 32: 0x0, 0x5, 0xa, 0xf);
    imm_binary!(bits128, alignr_u8x16 -> 16: 0, 1, 15, 16, 17, 31, 32, 255);
    imm_binary!(bits256, alignr_u8x32 -> 32: 0, 3, 16, 20, 32);
    imm_unary!(bits128, bslli_u8x16 -> 16: 0, 1, 15, 16, 200);
    imm_unary!(bits128, bsrli_u8x16 -> 16: 0, 7, 15, 16);
    imm_unary!(bits256, bslli_u8x32 -> 32: 0, 5, 16);
    imm_unary!(bits256, bsrli_u8x32 -> 32: 0, 9, 255);
    imm_unary!(bits256, permute4x64_i64x4 -> 32: 0x00, 0x1b, 0x4e, 0xd8);
    imm_unary!(f64s, permute4x64_f64x4 -> 32: 0x1b, 0xff);
    imm_binary!(bits256, permute2x128_i64x4 -> 32: 0x00, 0x21, 0x13, 0x08, 0x80, 0x31);
    imm_binary!(f32s, blend_f32x4 -> 16: 0x0, 0x5, 0xf);
    imm_binary!(f64s, blend_f64x2 -> 16: 0, 1, 2, 3);
    imm_binary!(f32s, blend_f32x8 -> 32: 0x00, 0xa5, 0xff);
    imm_binary!(f64s, blend_f64x4 -> 32: 0x0, 0x9, 0xf);
    imm_binary!(bits128, blend_i16x8 -> 16: 0x00, 0x3c, 0xff);
    imm_binary!(bits256, blend_i16x16 -> 32: 0x00, 0x81);
    imm_binary!(bits128, blend_i32x4 -> 16: 0x0, 0x6);
    imm_binary!(bits256, blend_i32x8 -> 32: 0x00, 0xf0, 0x3c);

    binary!(rng, ShuffleOps, bits128:
        unpacklo_i8x16 -> 16, unpackhi_i8x16 -> 16, unpacklo_i16x8 -> 16, unpackhi_i16x8 -> 16,
        unpacklo_i32x4 -> 16, unpackhi_i32x4 -> 16, unpacklo_i64x2 -> 16, unpackhi_i64x2 -> 16,
        shuffle_bytes_u8x16 -> 16,
    );
    binary!(rng, ShuffleOps, bits256:
        unpacklo_i8x32 -> 32, unpackhi_i8x32 -> 32, unpacklo_i16x16 -> 32, unpackhi_i16x16 -> 32,
        unpacklo_i32x8 -> 32, unpackhi_i32x8 -> 32, unpacklo_i64x4 -> 32, unpackhi_i64x4 -> 32,
        shuffle_bytes_u8x32 -> 32, permutevar8x32_i32x8 -> 32,
    );
    binary!(rng, ShuffleOps, f32s: unpacklo_f32x4 -> 16, unpackhi_f32x4 -> 16);
    binary!(rng, ShuffleOps, f64s: unpacklo_f64x2 -> 16, unpackhi_f64x2 -> 16);
    binary!(rng, ShuffleOps, f32s: unpacklo_f32x8 -> 32, unpackhi_f32x8 -> 32);
    binary!(rng, ShuffleOps, f64s: unpacklo_f64x4 -> 32, unpackhi_f64x4 -> 32);

    let table = f32s::<8>(rng);
    let idx: Vector<i32, 8> = bits256(rng);
    same!("permutevar8x32_f32x8", 32, B => <B as ShuffleOps>::permutevar8x32_f32x8(table, idx));
}

fn check_shift(rng: &mut StdRng) {
    let counts = [0, 1, 7, 15, 16, 31, 32, 63, 64, 255, 1 << 33, u64::MAX];
    let count = counts[rng.random_range(0..counts.len())];
    macro_rules! uniform {
        ($gen:ident: $($method:ident -> $bytes:literal),*) => {
            $(
                let a = $gen(rng);
                same!(stringify!($method), $bytes, B => <B as ShiftOps>::$method(a, count));
            )*
        };
    }
    uniform!(bits128:
        shl_i16x8 -> 16, shl_i32x4 -> 16, shl_i64x2 -> 16,
        shr_logical_i16x8 -> 16, shr_logical_i32x4 -> 16, shr_logical_i64x2 -> 16,
        shr_arith_i16x8 -> 16, shr_arith_i32x4 -> 16);
    uniform!(bits256:
        shl_i16x16 -> 32, shl_i32x8 -> 32, shl_i64x4 -> 32,
        shr_logical_i16x16 -> 32, shr_logical_i32x8 -> 32, shr_logical_i64x4 -> 32,
        shr_arith_i16x16 -> 32, shr_arith_i32x8 -> 32);

    // Per-lane counts mostly in range, with some past the width.
    let small = |rng: &mut StdRng| -> Vector<i32, 8> {
        Vector::from_fn(|_| {
            if rng.random_bool(0.8) {
                rng.random_range(0..32)
            } else {
                rng.random()
            }
        })
    };
    let a8: Vector<i32, 8> = bits256(rng);
    let c8 = small(rng);
    let a4: Vector<i32, 4> = a8.low_half();
    let c4: Vector<i32, 4> = c8.low_half();
    same!("shlv_i32x4", 16, B => <B as ShiftOps>::shlv_i32x4(a4, c4));
    same!("shrv_logical_i32x4", 16, B => <B as ShiftOps>::shrv_logical_i32x4(a4, c4));
    same!("shrv_arith_i32x4", 16, B => <B as ShiftOps>::shrv_arith_i32x4(a4, c4));
    same!("shlv_i32x8", 32, B => <B as ShiftOps>::shlv_i32x8(a8, c8));
    same!("shrv_logical_i32x8", 32, B => <B as ShiftOps>::shrv_logical_i32x8(a8, c8));
    same!("shrv_arith_i32x8", 32, B => <B as ShiftOps>::shrv_arith_i32x8(a8, c8));

    let q: Vector<i64, 4> = bits256(rng);
    let qc: Vector<i64, 4> = Vector::from_fn(|i| [0, 5, 63, 64][i]);
    same!("shlv_i64x4", 32, B => <B as ShiftOps>::shlv_i64x4(q, qc));
    same!("shrv_logical_i64x4", 32, B => <B as ShiftOps>::shrv_logical_i64x4(q, qc));
    let (q2, qc2): (Vector<i64, 2>, Vector<i64, 2>) = (q.high_half(), qc.high_half());
    same!("shlv_i64x2", 16, B => <B as ShiftOps>::shlv_i64x2(q2, qc2));
    same!("shrv_logical_i64x2", 16, B => <B as ShiftOps>::shrv_logical_i64x2(q2, qc2));
}

#[test]
fn test_backends_agree_under_every_register_state() {
    let _ = simdport::simd::describe();
    let mut rng = StdRng::seed_from_u64(42);
    for register in register_states() {
        let _guard = RoundingGuard::with_register(register);
        for _ in 0..ITERATIONS {
            check_saturating(&mut rng);
            check_compare(&mut rng);
            check_convert(&mut rng);
            check_shuffle(&mut rng);
            check_shift(&mut rng);
        }
    }
}

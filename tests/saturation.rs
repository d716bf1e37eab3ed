//! Exhaustive checks of the saturating 8-bit and 16-bit operations against a
//! widened reference computed in `i32`.

use simdport::intrinsics::prelude::*;
use simdport::vector::{I16x8, I32x4, I8x16, U16x8, U8x16};

fn all_i8_chunks() -> impl Iterator<Item = I8x16> {
    (0..16).map(|row| I8x16::from_fn(|i| (row * 16 + i as i32 - 128) as i8))
}

fn all_u8_chunks() -> impl Iterator<Item = U8x16> {
    (0..16).map(|row| U8x16::from_fn(|i| (row * 16 + i as i32) as u8))
}

#[test]
fn test_adds_subs_epi8_exhaustive() {
    for a in i8::MIN..=i8::MAX {
        let va = _mm_set1_epi8(a);
        for vb in all_i8_chunks() {
            let add = _mm_adds_epi8(va, vb.reinterpret()).reinterpret::<i8, 16>();
            let sub = _mm_subs_epi8(va, vb.reinterpret()).reinterpret::<i8, 16>();
            for i in 0..16 {
                let b = vb.lane(i);
                let wide_add = (i32::from(a) + i32::from(b)).clamp(-128, 127) as i8;
                let wide_sub = (i32::from(a) - i32::from(b)).clamp(-128, 127) as i8;
                assert_eq!(add.lane(i), wide_add, "adds_epi8({a}, {b})");
                assert_eq!(sub.lane(i), wide_sub, "subs_epi8({a}, {b})");
            }
        }
    }
}

#[test]
fn test_adds_subs_avg_epu8_exhaustive() {
    for a in u8::MIN..=u8::MAX {
        let va = _mm_set1_epi8(a as i8);
        for vb in all_u8_chunks() {
            let add = _mm_adds_epu8(va, vb.reinterpret()).reinterpret::<u8, 16>();
            let sub = _mm_subs_epu8(va, vb.reinterpret()).reinterpret::<u8, 16>();
            let avg = _mm_avg_epu8(va, vb.reinterpret()).reinterpret::<u8, 16>();
            for i in 0..16 {
                let b = vb.lane(i);
                assert_eq!(add.lane(i), a.saturating_add(b), "adds_epu8({a}, {b})");
                assert_eq!(sub.lane(i), a.saturating_sub(b), "subs_epu8({a}, {b})");
                let rounded = ((u32::from(a) + u32::from(b) + 1) >> 1) as u8;
                assert_eq!(avg.lane(i), rounded, "avg_epu8({a}, {b})");
            }
        }
    }
}

#[test]
fn test_saturating_16bit_edges() {
    let edges = [i16::MIN, i16::MIN + 1, -1, 0, 1, i16::MAX - 1, i16::MAX, 12_345];
    for &a in &edges {
        for &b in &edges {
            let va = _mm_set1_epi16(a);
            let vb = _mm_set1_epi16(b);
            let add = _mm_adds_epi16(va, vb).reinterpret::<i16, 8>().lane(0);
            let sub = _mm_subs_epi16(va, vb).reinterpret::<i16, 8>().lane(0);
            assert_eq!(add, a.saturating_add(b));
            assert_eq!(sub, a.saturating_sub(b));

            let (ua, ub) = (a as u16, b as u16);
            let uadd = _mm_adds_epu16(va, vb).reinterpret::<u16, 8>().lane(0);
            let usub = _mm_subs_epu16(va, vb).reinterpret::<u16, 8>().lane(0);
            let uavg = _mm_avg_epu16(va, vb).reinterpret::<u16, 8>().lane(0);
            assert_eq!(uadd, ua.saturating_add(ub));
            assert_eq!(usub, ua.saturating_sub(ub));
            assert_eq!(uavg, ((u32::from(ua) + u32::from(ub) + 1) >> 1) as u16);
        }
    }
}

#[test]
fn test_packs_clamp_every_16bit_value() {
    for start in (i32::from(i16::MIN)..=i32::from(i16::MAX)).step_by(8) {
        let v = I16x8::from_fn(|i| (start + i as i32) as i16);
        let signed = _mm_packs_epi16(v.reinterpret(), v.reinterpret()).reinterpret::<i8, 16>();
        let unsigned = _mm_packus_epi16(v.reinterpret(), v.reinterpret()).reinterpret::<u8, 16>();
        for i in 0..8 {
            let x = i32::from(v.lane(i));
            assert_eq!(signed.lane(i), x.clamp(-128, 127) as i8);
            assert_eq!(signed.lane(i + 8), signed.lane(i));
            assert_eq!(unsigned.lane(i), x.clamp(0, 255) as u8);
        }
    }
}

#[test]
fn test_packs_epi32_order_and_bounds() {
    let a = I32x4::from_array([i32::MIN, -32_769, 32_768, 7]);
    let b = I32x4::from_array([-1, 65_535, 65_536, i32::MAX]);
    let s = _mm_packs_epi32(a.reinterpret(), b.reinterpret()).reinterpret::<i16, 8>();
    assert_eq!(s, I16x8::from_array([-32_768, -32_768, 32_767, 7, -1, 32_767, 32_767, 32_767]));
    let u = _mm_packus_epi32(a.reinterpret(), b.reinterpret()).reinterpret::<u16, 8>();
    assert_eq!(u, U16x8::from_array([0, 0, 32_768, 7, 0, 65_535, 65_535, 65_535]));
}

#[test]
fn test_abs_wraps_only_at_min() {
    let v = I8x16::from_fn(|i| (i as i8).wrapping_mul(17).wrapping_sub(120));
    let r = _mm_abs_epi8(v.reinterpret()).reinterpret::<i8, 16>();
    for i in 0..16 {
        assert_eq!(r.lane(i), v.lane(i).wrapping_abs());
    }
    let m = _mm_abs_epi16(_mm_set1_epi16(i16::MIN)).reinterpret::<i16, 8>();
    assert_eq!(m, I16x8::splat(i16::MIN));
}

//! Lane shuffles, checked against index arithmetic written out per lane.

use proptest::prelude::*;
use simdport::engine::shuffle::ShuffleDescriptor;
use simdport::intrinsics::prelude::*;
use simdport::vector::{F32x4, I16x8, I32x4, I32x8, I64x4, U8x16, U8x32};

fn pshufd_reference(a: [i32; 4], imm: u8) -> [i32; 4] {
    std::array::from_fn(|i| a[usize::from((imm >> (2 * i)) & 3)])
}

proptest! {
    #[test]
    fn test_shuffle_epi32_matches_reference(a in any::<[i32; 4]>()) {
        let v = I32x4::from_array(a).reinterpret();
        let check = |imm: u8, r: M128i| {
            prop_assert_eq!(r.reinterpret::<i32, 4>().to_array(), pshufd_reference(a, imm));
            Ok(())
        };
        check(0x1b, _mm_shuffle_epi32::<0x1b>(v))?;
        check(0x00, _mm_shuffle_epi32::<0x00>(v))?;
        check(0xe4, _mm_shuffle_epi32::<0xe4>(v))?;
        check(0x9c, _mm_shuffle_epi32::<0x9c>(v))?;
    }

    #[test]
    fn test_shuffle_epi8_matches_reference(
        table in any::<[u8; 16]>(),
        indices in any::<[u8; 16]>(),
    ) {
        let r = _mm_shuffle_epi8(
            U8x16::from_array(table).reinterpret(),
            U8x16::from_array(indices).reinterpret(),
        )
        .reinterpret::<u8, 16>();
        for i in 0..16 {
            let idx = indices[i];
            let expected = if idx & 0x80 != 0 { 0 } else { table[usize::from(idx & 0x0f)] };
            prop_assert_eq!(r.lane(i), expected);
        }
    }

    #[test]
    fn test_mm256_shuffle_epi8_stays_in_halves(
        table in any::<[u8; 32]>(),
        indices in any::<[u8; 32]>(),
    ) {
        let r = _mm256_shuffle_epi8(
            U8x32::from_array(table).reinterpret(),
            U8x32::from_array(indices).reinterpret(),
        )
        .reinterpret::<u8, 32>();
        for i in 0..32 {
            let idx = indices[i];
            let base = i & !15;
            let expected = if idx & 0x80 != 0 { 0 } else { table[base + usize::from(idx & 0x0f)] };
            prop_assert_eq!(r.lane(i), expected);
        }
    }

    #[test]
    fn test_alignr_concatenates_a_over_b(a in any::<[u8; 16]>(), b in any::<[u8; 16]>()) {
        let va = U8x16::from_array(a).reinterpret();
        let vb = U8x16::from_array(b).reinterpret();
        let concat: Vec<u8> = b.iter().chain(a.iter()).copied().chain([0; 32]).collect();
        let r5 = _mm_alignr_epi8::<5>(va, vb).reinterpret::<u8, 16>();
        let r20 = _mm_alignr_epi8::<20>(va, vb).reinterpret::<u8, 16>();
        let r40 = _mm_alignr_epi8::<40>(va, vb).reinterpret::<u8, 16>();
        prop_assert_eq!(&r5.to_array()[..], &concat[5..21]);
        prop_assert_eq!(&r20.to_array()[..], &concat[20..36]);
        prop_assert_eq!(r40, U8x16::zero());
    }

    #[test]
    fn test_permutevar8x32_uses_low_three_bits(
        a in any::<[i32; 8]>(),
        idx in any::<[i32; 8]>(),
    ) {
        let r = _mm256_permutevar8x32_epi32(
            I32x8::from_array(a).reinterpret(),
            I32x8::from_array(idx).reinterpret(),
        )
        .reinterpret::<i32, 8>();
        for i in 0..8 {
            prop_assert_eq!(r.lane(i), a[(idx[i] & 7) as usize]);
        }
    }

    #[test]
    fn test_unpack_interleaves(a in any::<[i16; 8]>(), b in any::<[i16; 8]>()) {
        let va = I16x8::from_array(a).reinterpret();
        let vb = I16x8::from_array(b).reinterpret();
        let lo = _mm_unpacklo_epi16(va, vb).reinterpret::<i16, 8>();
        let hi = _mm_unpackhi_epi16(va, vb).reinterpret::<i16, 8>();
        for i in 0..4 {
            prop_assert_eq!(lo.lane(2 * i), a[i]);
            prop_assert_eq!(lo.lane(2 * i + 1), b[i]);
            prop_assert_eq!(hi.lane(2 * i), a[i + 4]);
            prop_assert_eq!(hi.lane(2 * i + 1), b[i + 4]);
        }
    }
}

#[test]
fn test_shuffle_ps_takes_two_from_each() {
    let a = F32x4::from_array([0.0, 1.0, 2.0, 3.0]);
    let b = F32x4::from_array([4.0, 5.0, 6.0, 7.0]);
    let r = _mm_shuffle_ps::<0b01_00_11_10>(a, b);
    assert_eq!(r.to_array(), [2.0, 3.0, 4.0, 5.0]);
    let s = _mm256_shuffle_ps::<0b00_00_00_00>(
        _mm256_setr_ps(0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0),
        _mm256_setr_ps(8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0),
    );
    assert_eq!(s.to_array(), [0.0, 0.0, 8.0, 8.0, 4.0, 4.0, 12.0, 12.0]);
}

#[test]
fn test_shuffle_pd_forms() {
    let a = _mm_setr_pd(1.0, 2.0);
    let b = _mm_setr_pd(3.0, 4.0);
    assert_eq!(_mm_shuffle_pd::<0b01>(a, b).to_array(), [2.0, 3.0]);
    assert_eq!(_mm_shuffle_pd::<0b10>(a, b).to_array(), [1.0, 4.0]);
    let wa = _mm256_setr_pd(0.0, 1.0, 2.0, 3.0);
    let wb = _mm256_setr_pd(4.0, 5.0, 6.0, 7.0);
    assert_eq!(_mm256_shuffle_pd::<0b0101>(wa, wb).to_array(), [1.0, 4.0, 3.0, 6.0]);
}

#[test]
fn test_shufflelo_hi_leave_other_half() {
    let v = I16x8::from_array([0, 1, 2, 3, 4, 5, 6, 7]).reinterpret();
    let lo = _mm_shufflelo_epi16::<0b00_01_10_11>(v).reinterpret::<i16, 8>();
    assert_eq!(lo.to_array(), [3, 2, 1, 0, 4, 5, 6, 7]);
    let hi = _mm_shufflehi_epi16::<0b00_00_00_00>(v).reinterpret::<i16, 8>();
    assert_eq!(hi.to_array(), [0, 1, 2, 3, 4, 4, 4, 4]);
}

#[test]
fn test_byte_shifts_and_blends() {
    let v = U8x16::from_fn(|i| i as u8 + 1).reinterpret();
    let left = _mm_bslli_si128::<3>(v).reinterpret::<u8, 16>();
    assert_eq!(&left.to_array()[..5], &[0, 0, 0, 1, 2]);
    let right = _mm_bsrli_si128::<14>(v).reinterpret::<u8, 16>();
    assert_eq!(&right.to_array()[..3], &[15, 16, 0]);
    assert_eq!(_mm_srli_si128::<16>(v), _mm_setzero_si128());

    let a = _mm256_setr_epi32(0, 1, 2, 3, 4, 5, 6, 7);
    let b = _mm256_set1_epi32(-1);
    let r = _mm256_blend_epi32::<0b1000_0001>(a, b).reinterpret::<i32, 8>();
    assert_eq!(r.to_array(), [-1, 1, 2, 3, 4, 5, 6, -1]);
    let p = _mm_blend_ps::<0b0110>(_mm_set1_ps(1.0), _mm_set1_ps(2.0));
    assert_eq!(p.to_array(), [1.0, 2.0, 2.0, 1.0]);
}

#[test]
fn test_permute2x128_and_4x64() {
    let a = I64x4::from_array([0, 1, 2, 3]);
    let b = I64x4::from_array([4, 5, 6, 7]);
    assert_eq!(_mm256_permute2x128_si256::<0x30>(a, b).to_array(), [0, 1, 6, 7]);
    assert_eq!(_mm256_permute2x128_si256::<0x88>(a, b).to_array(), [0, 0, 0, 0]);
    let pd = _mm256_permute4x64_pd::<0b11_11_00_00>(_mm256_setr_pd(1.0, 2.0, 3.0, 4.0));
    assert_eq!(pd.to_array(), [1.0, 1.0, 4.0, 4.0]);
}

#[test]
fn test_descriptor_rejects_out_of_range_indices() {
    assert!(ShuffleDescriptor::<4>::try_from_indices([3, 2, 1, 0]).is_ok());
    assert!(ShuffleDescriptor::<4>::try_from_indices([0, 1, 8, 0]).is_err());
}

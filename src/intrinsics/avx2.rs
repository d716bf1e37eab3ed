//! AVX2 intrinsics: the integer set widened to 256 bits, cross-lane permutes
//! and per-lane variable shifts.
//!
//! Most 256-bit integer instructions act on each 128-bit half independently
//! (`unpack`, `pack`, `shuffle_epi8`, `alignr`, byte shifts); the permutes are
//! the exception.

use crate::engine::shift::count_of;
use crate::engine::static_assert_uimm_bits;
use crate::simd::{Active, CompareOps, SaturatingOps, ShiftOps, ShuffleOps};
use crate::vector::{M128i, M256, M256d, M256i};

use super::{bitwise, forward_binary, forward_unary};

forward_binary! { M256i:
    _mm256_adds_epi8 => adds_i8x32;
    _mm256_adds_epu8 => adds_u8x32;
    _mm256_adds_epi16 => adds_i16x16;
    _mm256_adds_epu16 => adds_u16x16;
    _mm256_subs_epi8 => subs_i8x32;
    _mm256_subs_epu8 => subs_u8x32;
    _mm256_subs_epi16 => subs_i16x16;
    _mm256_subs_epu16 => subs_u16x16;
    _mm256_avg_epu8 => avg_u8x32;
    _mm256_avg_epu16 => avg_u16x16;

    /// Packs per 128-bit half: `a.lo, b.lo, a.hi, b.hi`.
    _mm256_packs_epi16 => packs_i16x16;
    _mm256_packus_epi16 => packus_i16x16;
    _mm256_packs_epi32 => packs_i32x8;
    _mm256_packus_epi32 => packus_i32x8;

    _mm256_cmpeq_epi8 => cmpeq_i8x32;
    _mm256_cmpeq_epi16 => cmpeq_i16x16;
    _mm256_cmpeq_epi32 => cmpeq_i32x8;
    _mm256_cmpeq_epi64 => cmpeq_i64x4;
    _mm256_cmpgt_epi8 => cmpgt_i8x32;
    _mm256_cmpgt_epi16 => cmpgt_i16x16;
    _mm256_cmpgt_epi32 => cmpgt_i32x8;
    _mm256_cmpgt_epi64 => cmpgt_i64x4;

    _mm256_min_epi8 => min_i8x32;
    _mm256_max_epi8 => max_i8x32;
    _mm256_min_epu8 => min_u8x32;
    _mm256_max_epu8 => max_u8x32;
    _mm256_min_epi16 => min_i16x16;
    _mm256_max_epi16 => max_i16x16;
    _mm256_min_epu16 => min_u16x16;
    _mm256_max_epu16 => max_u16x16;
    _mm256_min_epi32 => min_i32x8;
    _mm256_max_epi32 => max_i32x8;
    _mm256_min_epu32 => min_u32x8;
    _mm256_max_epu32 => max_u32x8;

    _mm256_unpacklo_epi8 => unpacklo_i8x32;
    _mm256_unpackhi_epi8 => unpackhi_i8x32;
    _mm256_unpacklo_epi16 => unpacklo_i16x16;
    _mm256_unpackhi_epi16 => unpackhi_i16x16;
    _mm256_unpacklo_epi32 => unpacklo_i32x8;
    _mm256_unpackhi_epi32 => unpackhi_i32x8;
    _mm256_unpacklo_epi64 => unpacklo_i64x4;
    _mm256_unpackhi_epi64 => unpackhi_i64x4;

    /// Indexes within each 128-bit half only.
    _mm256_shuffle_epi8 => shuffle_bytes_u8x32;
    /// Crosses halves: lane `i` is `a[idx[i] & 7]`.
    _mm256_permutevar8x32_epi32 => permutevar8x32_i32x8;

    _mm256_sllv_epi32 => shlv_i32x8;
    _mm256_sllv_epi64 => shlv_i64x4;
    _mm256_srlv_epi32 => shrv_logical_i32x8;
    _mm256_srlv_epi64 => shrv_logical_i64x4;
    _mm256_srav_epi32 => shrv_arith_i32x8;
}

forward_binary! { M128i:
    /// Lanes whose count is above 31 become zero.
    _mm_sllv_epi32 => shlv_i32x4;
    _mm_sllv_epi64 => shlv_i64x2;
    _mm_srlv_epi32 => shrv_logical_i32x4;
    _mm_srlv_epi64 => shrv_logical_i64x2;
    /// Counts above 31 fill with the sign bit.
    _mm_srav_epi32 => shrv_arith_i32x4;
}

forward_unary! { M256i:
    _mm256_abs_epi8 => abs_i8x32;
    _mm256_abs_epi16 => abs_i16x16;
    _mm256_abs_epi32 => abs_i32x8;
}

#[inline]
pub fn _mm256_and_si256(a: M256i, b: M256i) -> M256i {
    bitwise::<_, 4, 4, _>(a, b, |x, y| x & y)
}

#[inline]
pub fn _mm256_andnot_si256(a: M256i, b: M256i) -> M256i {
    bitwise::<_, 4, 4, _>(a, b, |x, y| !x & y)
}

#[inline]
pub fn _mm256_or_si256(a: M256i, b: M256i) -> M256i {
    bitwise::<_, 4, 4, _>(a, b, |x, y| x | y)
}

#[inline]
pub fn _mm256_xor_si256(a: M256i, b: M256i) -> M256i {
    bitwise::<_, 4, 4, _>(a, b, |x, y| x ^ y)
}

#[inline]
pub fn _mm256_movemask_epi8(a: M256i) -> i32 {
    Active::movemask_i8x32(a.reinterpret())
}

#[inline]
pub fn _mm256_blendv_epi8(a: M256i, b: M256i, mask: M256i) -> M256i {
    Active::blendv_i8x32(a.reinterpret(), b.reinterpret(), mask.reinterpret()).reinterpret()
}

/// The 8-bit immediate applies to both 128-bit halves.
#[inline]
pub fn _mm256_blend_epi16<const IMM8: i32>(a: M256i, b: M256i) -> M256i {
    Active::blend_i16x16::<IMM8>(a.reinterpret(), b.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm256_blend_epi32<const IMM8: i32>(a: M256i, b: M256i) -> M256i {
    Active::blend_i32x8::<IMM8>(a.reinterpret(), b.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm_blend_epi32<const IMM4: i32>(a: M128i, b: M128i) -> M128i {
    Active::blend_i32x4::<IMM4>(a.reinterpret(), b.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm256_shuffle_epi32<const MASK: i32>(a: M256i) -> M256i {
    Active::shuffle_i32x8::<MASK>(a.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm256_shufflelo_epi16<const IMM8: i32>(a: M256i) -> M256i {
    Active::shufflelo_i16x16::<IMM8>(a.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm256_shufflehi_epi16<const IMM8: i32>(a: M256i) -> M256i {
    Active::shufflehi_i16x16::<IMM8>(a.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm256_alignr_epi8<const IMM8: i32>(a: M256i, b: M256i) -> M256i {
    Active::alignr_u8x32::<IMM8>(a.reinterpret(), b.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm256_bslli_epi128<const IMM8: i32>(a: M256i) -> M256i {
    Active::bslli_u8x32::<IMM8>(a.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm256_bsrli_epi128<const IMM8: i32>(a: M256i) -> M256i {
    Active::bsrli_u8x32::<IMM8>(a.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm256_slli_si256<const IMM8: i32>(a: M256i) -> M256i {
    _mm256_bslli_epi128::<IMM8>(a)
}

#[inline]
pub fn _mm256_srli_si256<const IMM8: i32>(a: M256i) -> M256i {
    _mm256_bsrli_epi128::<IMM8>(a)
}

#[inline]
pub fn _mm256_permute4x64_epi64<const IMM8: i32>(a: M256i) -> M256i {
    Active::permute4x64_i64x4::<IMM8>(a)
}

#[inline]
pub fn _mm256_permute4x64_pd<const IMM8: i32>(a: M256d) -> M256d {
    Active::permute4x64_f64x4::<IMM8>(a)
}

#[inline]
pub fn _mm256_permute2x128_si256<const IMM8: i32>(a: M256i, b: M256i) -> M256i {
    Active::permute2x128_i64x4::<IMM8>(a, b)
}

#[inline]
pub fn _mm256_permutevar8x32_ps(a: M256, idx: M256i) -> M256 {
    Active::permutevar8x32_f32x8(a, idx.reinterpret())
}

#[inline]
pub fn _mm256_extracti128_si256<const IMM1: i32>(a: M256i) -> M128i {
    static_assert_uimm_bits!(IMM1, 1);
    a.split()[IMM1 as usize]
}

#[inline]
pub fn _mm256_inserti128_si256<const IMM1: i32>(a: M256i, b: M128i) -> M256i {
    static_assert_uimm_bits!(IMM1, 1);
    let mut halves = a.split();
    halves[IMM1 as usize] = b;
    M256i::join(halves[0], halves[1])
}

macro_rules! shifts {
    ($($name:ident, $imm_name:ident => $method:ident;)*) => {
        $(
            /// Every lane shifts by the low 64 bits of `count`.
            #[inline]
            pub fn $name(a: M256i, count: M128i) -> M256i {
                Active::$method(a.reinterpret(), count_of(count)).reinterpret()
            }

            #[inline]
            pub fn $imm_name<const IMM8: i32>(a: M256i) -> M256i {
                static_assert_uimm_bits!(IMM8, 8);
                Active::$method(a.reinterpret(), IMM8 as u64).reinterpret()
            }
        )*
    };
}

shifts! {
    _mm256_sll_epi16, _mm256_slli_epi16 => shl_i16x16;
    _mm256_sll_epi32, _mm256_slli_epi32 => shl_i32x8;
    _mm256_sll_epi64, _mm256_slli_epi64 => shl_i64x4;
    _mm256_srl_epi16, _mm256_srli_epi16 => shr_logical_i16x16;
    _mm256_srl_epi32, _mm256_srli_epi32 => shr_logical_i32x8;
    _mm256_srl_epi64, _mm256_srli_epi64 => shr_logical_i64x4;
    _mm256_sra_epi16, _mm256_srai_epi16 => shr_arith_i16x16;
    _mm256_sra_epi32, _mm256_srai_epi32 => shr_arith_i32x8;
}

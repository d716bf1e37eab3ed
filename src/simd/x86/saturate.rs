use super::*;

use crate::simd::traits::SaturatingOps;

impl SaturatingOps for NativeBackend {
    native_binary! { "sse2":
        adds_i8x16(I8x16) -> I8x16 => _mm_adds_epi8;
        adds_u8x16(U8x16) -> U8x16 => _mm_adds_epu8;
        adds_i16x8(I16x8) -> I16x8 => _mm_adds_epi16;
        adds_u16x8(U16x8) -> U16x8 => _mm_adds_epu16;
        subs_i8x16(I8x16) -> I8x16 => _mm_subs_epi8;
        subs_u8x16(U8x16) -> U8x16 => _mm_subs_epu8;
        subs_i16x8(I16x8) -> I16x8 => _mm_subs_epi16;
        subs_u16x8(U16x8) -> U16x8 => _mm_subs_epu16;
        avg_u8x16(U8x16) -> U8x16 => _mm_avg_epu8;
        avg_u16x8(U16x8) -> U16x8 => _mm_avg_epu16;
        packs_i16x8(I16x8) -> I8x16 => _mm_packs_epi16;
        packus_i16x8(I16x8) -> U8x16 => _mm_packus_epi16;
        packs_i32x4(I32x4) -> I16x8 => _mm_packs_epi32;
    }

    native_binary! { "sse4.1":
        packus_i32x4(I32x4) -> U16x8 => _mm_packus_epi32;
    }

    native_unary! { "ssse3":
        abs_i8x16(I8x16) -> I8x16 => _mm_abs_epi8;
        abs_i16x8(I16x8) -> I16x8 => _mm_abs_epi16;
        abs_i32x4(I32x4) -> I32x4 => _mm_abs_epi32;
    }

    native_binary! { "avx2":
        adds_i8x32(I8x32) -> I8x32 => _mm256_adds_epi8;
        adds_u8x32(U8x32) -> U8x32 => _mm256_adds_epu8;
        adds_i16x16(I16x16) -> I16x16 => _mm256_adds_epi16;
        adds_u16x16(U16x16) -> U16x16 => _mm256_adds_epu16;
        subs_i8x32(I8x32) -> I8x32 => _mm256_subs_epi8;
        subs_u8x32(U8x32) -> U8x32 => _mm256_subs_epu8;
        subs_i16x16(I16x16) -> I16x16 => _mm256_subs_epi16;
        subs_u16x16(U16x16) -> U16x16 => _mm256_subs_epu16;
        avg_u8x32(U8x32) -> U8x32 => _mm256_avg_epu8;
        avg_u16x16(U16x16) -> U16x16 => _mm256_avg_epu16;
        packs_i16x16(I16x16) -> I8x32 => _mm256_packs_epi16;
        packus_i16x16(I16x16) -> U8x32 => _mm256_packus_epi16;
        packs_i32x8(I32x8) -> I16x16 => _mm256_packs_epi32;
        packus_i32x8(I32x8) -> U16x16 => _mm256_packus_epi32;
    }

    native_unary! { "avx2":
        abs_i8x32(I8x32) -> I8x32 => _mm256_abs_epi8;
        abs_i16x16(I16x16) -> I16x16 => _mm256_abs_epi16;
        abs_i32x8(I32x8) -> I32x8 => _mm256_abs_epi32;
    }
}

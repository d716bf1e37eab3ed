use super::*;

use crate::engine::shuffle::Control;
use crate::simd::traits::ShuffleOps;

// Immediate forms. Evaluating the `Control` descriptor rejects the same
// immediates at compile time on every backend.
macro_rules! imm_unary {
    ($feature:literal: $($name:ident($ty:ty), $check:ident => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = $feature)]
            #[inline(always)]
            fn $name<const IMM: i32>(a: $ty) -> $ty {
                let _ = Control::<IMM>::$check;
                // SAFETY: the required target feature is enabled for this build.
                <$ty>::from_raw(unsafe { $intrinsic::<IMM>(a.into_raw()) })
            }
        )*
    };
}

macro_rules! imm_binary {
    ($feature:literal: $($name:ident($ty:ty), $check:ident => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = $feature)]
            #[inline(always)]
            fn $name<const IMM: i32>(a: $ty, b: $ty) -> $ty {
                let _ = Control::<IMM>::$check;
                // SAFETY: the required target feature is enabled for this build.
                <$ty>::from_raw(unsafe { $intrinsic::<IMM>(a.into_raw(), b.into_raw()) })
            }
        )*
    };
}

impl ShuffleOps for NativeBackend {
    imm_unary! { "sse2":
        shuffle_i32x4(I32x4), PSHUFD => _mm_shuffle_epi32;
        shufflelo_i16x8(I16x8), PSHUFLW => _mm_shufflelo_epi16;
        shufflehi_i16x8(I16x8), PSHUFHW => _mm_shufflehi_epi16;
        bslli_u8x16(U8x16), BSLLI => _mm_bslli_si128;
        bsrli_u8x16(U8x16), BSRLI => _mm_bsrli_si128;
    }

    imm_unary! { "avx2":
        shuffle_i32x8(I32x8), PSHUFD => _mm256_shuffle_epi32;
        shufflelo_i16x16(I16x16), PSHUFLW => _mm256_shufflelo_epi16;
        shufflehi_i16x16(I16x16), PSHUFHW => _mm256_shufflehi_epi16;
        bslli_u8x32(U8x32), BSLLI => _mm256_bslli_epi128;
        bsrli_u8x32(U8x32), BSRLI => _mm256_bsrli_epi128;
        permute4x64_i64x4(I64x4), PERMUTE4X64 => _mm256_permute4x64_epi64;
        permute4x64_f64x4(F64x4), PERMUTE4X64 => _mm256_permute4x64_pd;
    }

    imm_binary! { "sse":
        shuffle_f32x4(F32x4), SHUFPS => _mm_shuffle_ps;
    }

    imm_binary! { "sse2":
        shuffle_f64x2(F64x2), SHUFPD => _mm_shuffle_pd;
    }

    imm_binary! { "ssse3":
        alignr_u8x16(U8x16), ALIGNR16 => _mm_alignr_epi8;
    }

    imm_binary! { "sse4.1":
        blend_f32x4(F32x4), BLEND4 => _mm_blend_ps;
        blend_f64x2(F64x2), BLEND2 => _mm_blend_pd;
        blend_i16x8(I16x8), BLEND8 => _mm_blend_epi16;
    }

    imm_binary! { "avx":
        shuffle_f32x8(F32x8), SHUFPS => _mm256_shuffle_ps;
        shuffle_f64x4(F64x4), SHUFPD256 => _mm256_shuffle_pd;
        blend_f32x8(F32x8), BLEND8 => _mm256_blend_ps;
        blend_f64x4(F64x4), BLEND4 => _mm256_blend_pd;
    }

    imm_binary! { "avx2":
        alignr_u8x32(U8x32), ALIGNR16 => _mm256_alignr_epi8;
        permute2x128_i64x4(I64x4), PERMUTE2X128 => _mm256_permute2x128_si256;
        blend_i16x16(I16x16), BLEND8 => _mm256_blend_epi16;
        blend_i32x4(I32x4), BLEND4 => _mm_blend_epi32;
        blend_i32x8(I32x8), BLEND8 => _mm256_blend_epi32;
    }

    native_binary! { "sse":
        unpacklo_f32x4(F32x4) -> F32x4 => _mm_unpacklo_ps;
        unpackhi_f32x4(F32x4) -> F32x4 => _mm_unpackhi_ps;
    }

    native_binary! { "sse2":
        unpacklo_i8x16(I8x16) -> I8x16 => _mm_unpacklo_epi8;
        unpackhi_i8x16(I8x16) -> I8x16 => _mm_unpackhi_epi8;
        unpacklo_i16x8(I16x8) -> I16x8 => _mm_unpacklo_epi16;
        unpackhi_i16x8(I16x8) -> I16x8 => _mm_unpackhi_epi16;
        unpacklo_i32x4(I32x4) -> I32x4 => _mm_unpacklo_epi32;
        unpackhi_i32x4(I32x4) -> I32x4 => _mm_unpackhi_epi32;
        unpacklo_i64x2(I64x2) -> I64x2 => _mm_unpacklo_epi64;
        unpackhi_i64x2(I64x2) -> I64x2 => _mm_unpackhi_epi64;
        unpacklo_f64x2(F64x2) -> F64x2 => _mm_unpacklo_pd;
        unpackhi_f64x2(F64x2) -> F64x2 => _mm_unpackhi_pd;
    }

    native_binary! { "ssse3":
        shuffle_bytes_u8x16(U8x16) -> U8x16 => _mm_shuffle_epi8;
    }

    native_binary! { "avx":
        unpacklo_f32x8(F32x8) -> F32x8 => _mm256_unpacklo_ps;
        unpackhi_f32x8(F32x8) -> F32x8 => _mm256_unpackhi_ps;
        unpacklo_f64x4(F64x4) -> F64x4 => _mm256_unpacklo_pd;
        unpackhi_f64x4(F64x4) -> F64x4 => _mm256_unpackhi_pd;
    }

    native_binary! { "avx2":
        unpacklo_i8x32(I8x32) -> I8x32 => _mm256_unpacklo_epi8;
        unpackhi_i8x32(I8x32) -> I8x32 => _mm256_unpackhi_epi8;
        unpacklo_i16x16(I16x16) -> I16x16 => _mm256_unpacklo_epi16;
        unpackhi_i16x16(I16x16) -> I16x16 => _mm256_unpackhi_epi16;
        unpacklo_i32x8(I32x8) -> I32x8 => _mm256_unpacklo_epi32;
        unpackhi_i32x8(I32x8) -> I32x8 => _mm256_unpackhi_epi32;
        unpacklo_i64x4(I64x4) -> I64x4 => _mm256_unpacklo_epi64;
        unpackhi_i64x4(I64x4) -> I64x4 => _mm256_unpackhi_epi64;
        shuffle_bytes_u8x32(U8x32) -> U8x32 => _mm256_shuffle_epi8;
        permutevar8x32_i32x8(I32x8) -> I32x8 => _mm256_permutevar8x32_epi32;
    }

    #[cfg(target_feature = "avx2")]
    #[inline(always)]
    fn permutevar8x32_f32x8(a: F32x8, indices: I32x8) -> F32x8 {
        // SAFETY: avx2 is enabled for this build.
        F32x8::from_raw(unsafe { _mm256_permutevar8x32_ps(a.into_raw(), indices.into_raw()) })
    }
}

use super::*;

use crate::simd::traits::ShiftOps;

// The uniform-count instructions read the whole low quadword of an xmm
// register, so the full `u64` count reaches the hardware unchanged.
macro_rules! native_shift {
    ($feature:literal: $($name:ident($ty:ty) => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = $feature)]
            #[inline(always)]
            fn $name(a: $ty, count: u64) -> $ty {
                // SAFETY: the required target feature is enabled for this build.
                <$ty>::from_raw(unsafe {
                    $intrinsic(a.into_raw(), _mm_set_epi64x(0, count as i64))
                })
            }
        )*
    };
}

impl ShiftOps for NativeBackend {
    native_shift! { "sse2":
        shl_i16x8(I16x8) => _mm_sll_epi16;
        shl_i32x4(I32x4) => _mm_sll_epi32;
        shl_i64x2(I64x2) => _mm_sll_epi64;
        shr_logical_i16x8(I16x8) => _mm_srl_epi16;
        shr_logical_i32x4(I32x4) => _mm_srl_epi32;
        shr_logical_i64x2(I64x2) => _mm_srl_epi64;
        shr_arith_i16x8(I16x8) => _mm_sra_epi16;
        shr_arith_i32x4(I32x4) => _mm_sra_epi32;
    }

    native_shift! { "avx2":
        shl_i16x16(I16x16) => _mm256_sll_epi16;
        shl_i32x8(I32x8) => _mm256_sll_epi32;
        shl_i64x4(I64x4) => _mm256_sll_epi64;
        shr_logical_i16x16(I16x16) => _mm256_srl_epi16;
        shr_logical_i32x8(I32x8) => _mm256_srl_epi32;
        shr_logical_i64x4(I64x4) => _mm256_srl_epi64;
        shr_arith_i16x16(I16x16) => _mm256_sra_epi16;
        shr_arith_i32x8(I32x8) => _mm256_sra_epi32;
    }

    native_binary! { "avx2":
        shlv_i32x4(I32x4) -> I32x4 => _mm_sllv_epi32;
        shlv_i64x2(I64x2) -> I64x2 => _mm_sllv_epi64;
        shlv_i32x8(I32x8) -> I32x8 => _mm256_sllv_epi32;
        shlv_i64x4(I64x4) -> I64x4 => _mm256_sllv_epi64;
        shrv_logical_i32x4(I32x4) -> I32x4 => _mm_srlv_epi32;
        shrv_logical_i64x2(I64x2) -> I64x2 => _mm_srlv_epi64;
        shrv_logical_i32x8(I32x8) -> I32x8 => _mm256_srlv_epi32;
        shrv_logical_i64x4(I64x4) -> I64x4 => _mm256_srlv_epi64;
        shrv_arith_i32x4(I32x4) -> I32x4 => _mm_srav_epi32;
        shrv_arith_i32x8(I32x8) -> I32x8 => _mm256_srav_epi32;
    }
}

use super::*;

use crate::engine::compare::{Cmp, Relation};
use crate::engine::csr;
use crate::simd::traits::CompareOps;
use crate::simd::Lower;

// Float overrides are only exact while the emulated DAZ bit is clear; the
// hardware register is never loaded with it.
macro_rules! daz_gated_binary {
    ($feature:literal: $($name:ident($ty:ty) => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = $feature)]
            #[inline(always)]
            fn $name(a: $ty, b: $ty) -> $ty {
                if csr::current().denormals_are_zero() {
                    return Lower::$name(a, b);
                }
                // SAFETY: the required target feature is enabled for this build.
                <$ty>::from_raw(unsafe { $intrinsic(a.into_raw(), b.into_raw()) })
            }
        )*
    };
}

macro_rules! avx_cmp {
    ($($name:ident($ty:ty) => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = "avx")]
            #[inline(always)]
            fn $name<const P: i32>(a: $ty, b: $ty) -> $ty {
                if csr::current().denormals_are_zero() {
                    return Lower::$name::<P>(a, b);
                }
                // SAFETY: avx is enabled for this build.
                <$ty>::from_raw(unsafe { $intrinsic::<P>(a.into_raw(), b.into_raw()) })
            }
        )*
    };
}

// Without AVX only the eight SSE predicates exist. The ordered relation is
// evaluated with one of them and the NaN lanes are patched from CMPUNORD.
macro_rules! sse_cmp {
    ($feature:literal: $($name:ident($ty:ty) => $eq:ident, $lt:ident, $le:ident, $neq:ident,
        $unord:ident, $andnot:ident, $or:ident, $zero:ident;)*) => {
        $(
            #[cfg(all(target_feature = $feature, not(target_feature = "avx")))]
            #[inline(always)]
            fn $name<const P: i32>(a: $ty, b: $ty) -> $ty {
                if csr::current().denormals_are_zero() {
                    return Lower::$name::<P>(a, b);
                }
                let predicate = Cmp::<P>::PREDICATE;
                let (x, y) = (a.into_raw(), b.into_raw());
                // SAFETY: the required target feature is enabled for this build.
                let raw = unsafe {
                    let ordered = match predicate.relation {
                        Relation::False => $zero(),
                        Relation::Eq => $eq(x, y),
                        Relation::Lt => $lt(x, y),
                        Relation::Le => $le(x, y),
                        Relation::Gt => $lt(y, x),
                        Relation::Ge => $le(y, x),
                        Relation::Ne => $neq(x, y),
                        Relation::True => $eq($zero(), $zero()),
                    };
                    let unordered = $unord(x, y);
                    if predicate.unordered {
                        $or(ordered, unordered)
                    } else {
                        $andnot(unordered, ordered)
                    }
                };
                <$ty>::from_raw(raw)
            }
        )*
    };
}

macro_rules! native_movemask {
    ($feature:literal: $($name:ident($ty:ty) => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = $feature)]
            #[inline(always)]
            fn $name(a: $ty) -> i32 {
                // SAFETY: the required target feature is enabled for this build.
                unsafe { $intrinsic(a.into_raw()) }
            }
        )*
    };
}

macro_rules! native_blendv {
    ($feature:literal: $($name:ident($ty:ty) => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = $feature)]
            #[inline(always)]
            fn $name(a: $ty, b: $ty, mask: $ty) -> $ty {
                // SAFETY: the required target feature is enabled for this build.
                <$ty>::from_raw(unsafe { $intrinsic(a.into_raw(), b.into_raw(), mask.into_raw()) })
            }
        )*
    };
}

impl CompareOps for NativeBackend {
    avx_cmp! {
        cmp_f32x4(F32x4) => _mm_cmp_ps;
        cmp_f64x2(F64x2) => _mm_cmp_pd;
        cmp_f32x8(F32x8) => _mm256_cmp_ps;
        cmp_f64x4(F64x4) => _mm256_cmp_pd;
        cmp_ss(F32x4) => _mm_cmp_ss;
        cmp_sd(F64x2) => _mm_cmp_sd;
    }

    sse_cmp! { "sse":
        cmp_f32x4(F32x4) => _mm_cmpeq_ps, _mm_cmplt_ps, _mm_cmple_ps, _mm_cmpneq_ps,
            _mm_cmpunord_ps, _mm_andnot_ps, _mm_or_ps, _mm_setzero_ps;
    }

    sse_cmp! { "sse2":
        cmp_f64x2(F64x2) => _mm_cmpeq_pd, _mm_cmplt_pd, _mm_cmple_pd, _mm_cmpneq_pd,
            _mm_cmpunord_pd, _mm_andnot_pd, _mm_or_pd, _mm_setzero_pd;
    }

    daz_gated_binary! { "sse":
        min_f32x4(F32x4) => _mm_min_ps;
        max_f32x4(F32x4) => _mm_max_ps;
        min_ss(F32x4) => _mm_min_ss;
        max_ss(F32x4) => _mm_max_ss;
    }

    daz_gated_binary! { "sse2":
        min_f64x2(F64x2) => _mm_min_pd;
        max_f64x2(F64x2) => _mm_max_pd;
        min_sd(F64x2) => _mm_min_sd;
        max_sd(F64x2) => _mm_max_sd;
    }

    daz_gated_binary! { "avx":
        min_f32x8(F32x8) => _mm256_min_ps;
        max_f32x8(F32x8) => _mm256_max_ps;
        min_f64x4(F64x4) => _mm256_min_pd;
        max_f64x4(F64x4) => _mm256_max_pd;
    }

    native_binary! { "sse2":
        cmpeq_i8x16(I8x16) -> I8x16 => _mm_cmpeq_epi8;
        cmpeq_i16x8(I16x8) -> I16x8 => _mm_cmpeq_epi16;
        cmpeq_i32x4(I32x4) -> I32x4 => _mm_cmpeq_epi32;
        cmpgt_i8x16(I8x16) -> I8x16 => _mm_cmpgt_epi8;
        cmpgt_i16x8(I16x8) -> I16x8 => _mm_cmpgt_epi16;
        cmpgt_i32x4(I32x4) -> I32x4 => _mm_cmpgt_epi32;
        min_u8x16(U8x16) -> U8x16 => _mm_min_epu8;
        max_u8x16(U8x16) -> U8x16 => _mm_max_epu8;
        min_i16x8(I16x8) -> I16x8 => _mm_min_epi16;
        max_i16x8(I16x8) -> I16x8 => _mm_max_epi16;
    }

    native_binary! { "sse4.1":
        cmpeq_i64x2(I64x2) -> I64x2 => _mm_cmpeq_epi64;
        min_i8x16(I8x16) -> I8x16 => _mm_min_epi8;
        max_i8x16(I8x16) -> I8x16 => _mm_max_epi8;
        min_u16x8(U16x8) -> U16x8 => _mm_min_epu16;
        max_u16x8(U16x8) -> U16x8 => _mm_max_epu16;
        min_i32x4(I32x4) -> I32x4 => _mm_min_epi32;
        max_i32x4(I32x4) -> I32x4 => _mm_max_epi32;
        min_u32x4(U32x4) -> U32x4 => _mm_min_epu32;
        max_u32x4(U32x4) -> U32x4 => _mm_max_epu32;
    }

    native_binary! { "sse4.2":
        cmpgt_i64x2(I64x2) -> I64x2 => _mm_cmpgt_epi64;
    }

    native_binary! { "avx2":
        cmpeq_i8x32(I8x32) -> I8x32 => _mm256_cmpeq_epi8;
        cmpeq_i16x16(I16x16) -> I16x16 => _mm256_cmpeq_epi16;
        cmpeq_i32x8(I32x8) -> I32x8 => _mm256_cmpeq_epi32;
        cmpeq_i64x4(I64x4) -> I64x4 => _mm256_cmpeq_epi64;
        cmpgt_i8x32(I8x32) -> I8x32 => _mm256_cmpgt_epi8;
        cmpgt_i16x16(I16x16) -> I16x16 => _mm256_cmpgt_epi16;
        cmpgt_i32x8(I32x8) -> I32x8 => _mm256_cmpgt_epi32;
        cmpgt_i64x4(I64x4) -> I64x4 => _mm256_cmpgt_epi64;
        min_i8x32(I8x32) -> I8x32 => _mm256_min_epi8;
        max_i8x32(I8x32) -> I8x32 => _mm256_max_epi8;
        min_u8x32(U8x32) -> U8x32 => _mm256_min_epu8;
        max_u8x32(U8x32) -> U8x32 => _mm256_max_epu8;
        min_i16x16(I16x16) -> I16x16 => _mm256_min_epi16;
        max_i16x16(I16x16) -> I16x16 => _mm256_max_epi16;
        min_u16x16(U16x16) -> U16x16 => _mm256_min_epu16;
        max_u16x16(U16x16) -> U16x16 => _mm256_max_epu16;
        min_i32x8(I32x8) -> I32x8 => _mm256_min_epi32;
        max_i32x8(I32x8) -> I32x8 => _mm256_max_epi32;
        min_u32x8(U32x8) -> U32x8 => _mm256_min_epu32;
        max_u32x8(U32x8) -> U32x8 => _mm256_max_epu32;
    }

    native_movemask! { "sse":
        movemask_f32x4(F32x4) => _mm_movemask_ps;
    }

    native_movemask! { "sse2":
        movemask_i8x16(I8x16) => _mm_movemask_epi8;
        movemask_f64x2(F64x2) => _mm_movemask_pd;
    }

    native_movemask! { "avx":
        movemask_f32x8(F32x8) => _mm256_movemask_ps;
        movemask_f64x4(F64x4) => _mm256_movemask_pd;
    }

    native_movemask! { "avx2":
        movemask_i8x32(I8x32) => _mm256_movemask_epi8;
    }

    native_blendv! { "sse4.1":
        blendv_i8x16(I8x16) => _mm_blendv_epi8;
        blendv_f32x4(F32x4) => _mm_blendv_ps;
        blendv_f64x2(F64x2) => _mm_blendv_pd;
    }

    native_blendv! { "avx":
        blendv_f32x8(F32x8) => _mm256_blendv_ps;
        blendv_f64x4(F64x4) => _mm256_blendv_pd;
    }

    native_blendv! { "avx2":
        blendv_i8x32(I8x32) => _mm256_blendv_epi8;
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::compare::{_CMP_EQ_UQ, _CMP_NEQ_OQ, _CMP_NLT_US};
    use crate::simd::traits::CompareOps;
    use crate::simd::ScalarBackend;
    use crate::vector::F32x4;

    use super::NativeBackend;

    #[test]
    fn test_nan_patching_matches_reference() {
        let a = F32x4::from_array([1.0, f32::NAN, 3.0, -0.0]);
        let b = F32x4::from_array([1.0, 2.0, f32::NAN, 0.0]);
        let bits = |v: F32x4| v.reinterpret::<u32, 4>();
        assert_eq!(
            bits(NativeBackend::cmp_f32x4::<_CMP_EQ_UQ>(a, b)),
            bits(ScalarBackend::cmp_f32x4::<_CMP_EQ_UQ>(a, b))
        );
        assert_eq!(
            bits(NativeBackend::cmp_f32x4::<_CMP_NEQ_OQ>(a, b)),
            bits(ScalarBackend::cmp_f32x4::<_CMP_NEQ_OQ>(a, b))
        );
        assert_eq!(
            bits(NativeBackend::cmp_f32x4::<_CMP_NLT_US>(a, b)),
            bits(ScalarBackend::cmp_f32x4::<_CMP_NLT_US>(a, b))
        );
    }
}

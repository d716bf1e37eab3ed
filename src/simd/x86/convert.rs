use super::*;

use crate::engine::convert::{Round, RoundControl};
use crate::engine::csr::{self, Mxcsr, RoundingMode};
use crate::simd::traits::ConvertOps;
use crate::simd::Lower;

// The hardware register stays at its power-on value: round to nearest, no
// FTZ, no DAZ. Each gate names the part of the emulated register an
// instruction's result depends on.

#[inline(always)]
fn no_daz(register: Mxcsr) -> bool {
    !register.denormals_are_zero()
}

#[inline(always)]
fn nearest(register: Mxcsr) -> bool {
    matches!(register.rounding_mode(), RoundingMode::Nearest)
}

#[inline(always)]
fn nearest_no_daz(register: Mxcsr) -> bool {
    nearest(register) && no_daz(register)
}

#[inline(always)]
fn default_numerics(register: Mxcsr) -> bool {
    register.is_default_numerics()
}

#[inline(always)]
fn round_gate<const IMM: i32>(register: Mxcsr) -> bool {
    no_daz(register)
        && match Round::<IMM>::CONTROL {
            RoundControl::Fixed(_) => true,
            RoundControl::Current => nearest(register),
        }
}

macro_rules! gated_unary {
    ($feature:literal, $gate:ident: $($name:ident($ty:ty) -> $out:ty => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = $feature)]
            #[inline(always)]
            fn $name(a: $ty) -> $out {
                if !$gate(csr::current()) {
                    return Lower::$name(a);
                }
                // SAFETY: the required target feature is enabled for this build.
                <$out>::from_raw(unsafe { $intrinsic(a.into_raw()) })
            }
        )*
    };
}

macro_rules! gated_to_scalar {
    ($cfg:meta, $gate:ident: $($name:ident($ty:ty) -> $out:ty => $intrinsic:ident;)*) => {
        $(
            #[cfg($cfg)]
            #[inline(always)]
            fn $name(a: $ty) -> $out {
                if !$gate(csr::current()) {
                    return Lower::$name(a);
                }
                // SAFETY: the required target feature is enabled for this build.
                unsafe { $intrinsic(a.into_raw()) }
            }
        )*
    };
}

macro_rules! gated_round {
    ($feature:literal: $($name:ident($ty:ty) => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = $feature)]
            #[inline(always)]
            fn $name<const IMM: i32>(a: $ty) -> $ty {
                if !round_gate::<IMM>(csr::current()) {
                    return Lower::$name::<IMM>(a);
                }
                // SAFETY: the required target feature is enabled for this build.
                <$ty>::from_raw(unsafe { $intrinsic::<IMM>(a.into_raw()) })
            }
        )*
    };
}

macro_rules! gated_round_scalar {
    ($feature:literal: $($name:ident($ty:ty) => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = $feature)]
            #[inline(always)]
            fn $name<const IMM: i32>(a: $ty, b: $ty) -> $ty {
                if !round_gate::<IMM>(csr::current()) {
                    return Lower::$name::<IMM>(a, b);
                }
                // SAFETY: the required target feature is enabled for this build.
                <$ty>::from_raw(unsafe { $intrinsic::<IMM>(a.into_raw(), b.into_raw()) })
            }
        )*
    };
}

impl ConvertOps for NativeBackend {
    gated_unary! { "sse2", nearest_no_daz:
        cvt_f32x4_i32x4(F32x4) -> I32x4 => _mm_cvtps_epi32;
        cvt_f64x2_i32x4(F64x2) -> I32x4 => _mm_cvtpd_epi32;
    }

    gated_unary! { "sse2", no_daz:
        cvtt_f32x4_i32x4(F32x4) -> I32x4 => _mm_cvttps_epi32;
        cvtt_f64x2_i32x4(F64x2) -> I32x4 => _mm_cvttpd_epi32;
        cvt_f32x4_f64x2(F32x4) -> F64x2 => _mm_cvtps_pd;
    }

    gated_unary! { "sse2", nearest:
        cvt_i32x4_f32x4(I32x4) -> F32x4 => _mm_cvtepi32_ps;
    }

    gated_unary! { "sse2", default_numerics:
        cvt_f64x2_f32x4(F64x2) -> F32x4 => _mm_cvtpd_ps;
    }

    native_unary! { "sse2":
        cvt_i32x4_f64x2(I32x4) -> F64x2 => _mm_cvtepi32_pd;
    }

    gated_unary! { "avx", nearest_no_daz:
        cvt_f32x8_i32x8(F32x8) -> I32x8 => _mm256_cvtps_epi32;
        cvt_f64x4_i32x4(F64x4) -> I32x4 => _mm256_cvtpd_epi32;
    }

    gated_unary! { "avx", no_daz:
        cvtt_f32x8_i32x8(F32x8) -> I32x8 => _mm256_cvttps_epi32;
        cvtt_f64x4_i32x4(F64x4) -> I32x4 => _mm256_cvttpd_epi32;
        cvt_f32x4_f64x4(F32x4) -> F64x4 => _mm256_cvtps_pd;
    }

    gated_unary! { "avx", nearest:
        cvt_i32x8_f32x8(I32x8) -> F32x8 => _mm256_cvtepi32_ps;
    }

    gated_unary! { "avx", default_numerics:
        cvt_f64x4_f32x4(F64x4) -> F32x4 => _mm256_cvtpd_ps;
    }

    native_unary! { "avx":
        cvt_i32x4_f64x4(I32x4) -> F64x4 => _mm256_cvtepi32_pd;
    }

    gated_to_scalar! { target_feature = "sse", nearest_no_daz:
        cvt_ss_i32(F32x4) -> i32 => _mm_cvtss_si32;
    }

    gated_to_scalar! { target_feature = "sse", no_daz:
        cvtt_ss_i32(F32x4) -> i32 => _mm_cvttss_si32;
    }

    gated_to_scalar! { target_feature = "sse2", nearest_no_daz:
        cvt_sd_i32(F64x2) -> i32 => _mm_cvtsd_si32;
    }

    gated_to_scalar! { target_feature = "sse2", no_daz:
        cvtt_sd_i32(F64x2) -> i32 => _mm_cvttsd_si32;
    }

    gated_to_scalar! { all(target_arch = "x86_64", target_feature = "sse2"), nearest_no_daz:
        cvt_ss_i64(F32x4) -> i64 => _mm_cvtss_si64;
        cvt_sd_i64(F64x2) -> i64 => _mm_cvtsd_si64;
    }

    gated_to_scalar! { all(target_arch = "x86_64", target_feature = "sse2"), no_daz:
        cvtt_ss_i64(F32x4) -> i64 => _mm_cvttss_si64;
        cvtt_sd_i64(F64x2) -> i64 => _mm_cvttsd_si64;
    }

    #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
    #[inline(always)]
    fn cvt_i64_ss(a: F32x4, b: i64) -> F32x4 {
        if !nearest(csr::current()) {
            return Lower::cvt_i64_ss(a, b);
        }
        // SAFETY: sse is enabled for this build.
        F32x4::from_raw(unsafe { _mm_cvtsi64_ss(a.into_raw(), b) })
    }

    #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
    #[inline(always)]
    fn cvt_i64_sd(a: F64x2, b: i64) -> F64x2 {
        if !nearest(csr::current()) {
            return Lower::cvt_i64_sd(a, b);
        }
        // SAFETY: sse2 is enabled for this build.
        F64x2::from_raw(unsafe { _mm_cvtsi64_sd(a.into_raw(), b) })
    }

    #[cfg(target_feature = "sse2")]
    #[inline(always)]
    fn cvt_sd_ss(a: F32x4, b: F64x2) -> F32x4 {
        if !default_numerics(csr::current()) {
            return Lower::cvt_sd_ss(a, b);
        }
        // SAFETY: sse2 is enabled for this build.
        F32x4::from_raw(unsafe { _mm_cvtsd_ss(a.into_raw(), b.into_raw()) })
    }

    #[cfg(target_feature = "sse2")]
    #[inline(always)]
    fn cvt_ss_sd(a: F64x2, b: F32x4) -> F64x2 {
        if !no_daz(csr::current()) {
            return Lower::cvt_ss_sd(a, b);
        }
        // SAFETY: sse2 is enabled for this build.
        F64x2::from_raw(unsafe { _mm_cvtss_sd(a.into_raw(), b.into_raw()) })
    }

    gated_round! { "sse4.1":
        round_f32x4(F32x4) => _mm_round_ps;
        round_f64x2(F64x2) => _mm_round_pd;
    }

    gated_round! { "avx":
        round_f32x8(F32x8) => _mm256_round_ps;
        round_f64x4(F64x4) => _mm256_round_pd;
    }

    gated_round_scalar! { "sse4.1":
        round_ss(F32x4) => _mm_round_ss;
        round_sd(F64x2) => _mm_round_sd;
    }
}

//! x86/x86_64 native backend.
//!
//! Overrides are bound to `std::arch` intrinsics, one instruction each where
//! the ISA has one. Every override is compiled only when the target feature it
//! needs is enabled for the build (`-C target-feature=+avx2`,
//! `-C target-cpu=native`, ...); otherwise the trait default from the
//! reference engine stays in place.
//!
//! The hardware MXCSR is never written. Overrides whose result depends on the
//! rounding mode, FTZ or DAZ check the emulated register first and forward to
//! [`Lower`](crate::simd::Lower) whenever it differs from what the hardware
//! register holds.
//!
//! | feature  | families served                                             |
//! |----------|-------------------------------------------------------------|
//! | `sse2`   | saturating, int compare, packs, conversions, shuffles, shifts |
//! | `ssse3`  | `abs`, `pshufb`, `palignr`                                  |
//! | `sse4.1` | remaining int min/max, blends, `packusdw`, `round`          |
//! | `sse4.2` | 64-bit `cmpgt`                                              |
//! | `avx`    | all 32 float predicates, 256-bit float ops                  |
//! | `avx2`   | 256-bit integer ops, variable shifts, cross-lane permutes   |

#![allow(unused_unsafe)]

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::vector::{
    F32x4, F32x8, F64x2, F64x4, I16x16, I16x8, I32x4, I32x8, I64x2, I64x4, I8x16, I8x32,
    U16x16, U16x8, U32x4, U32x8, U8x16, U8x32,
};

use super::traits::Backend;
use super::BackendKind;

/// `std::arch` backend for x86 and x86_64.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NativeBackend;

impl Backend for NativeBackend {
    const KIND: BackendKind = BackendKind::Native;
    const NAME: &'static str = "x86";
}

/// Moves a vector into and out of its `std::arch` register type.
pub(crate) trait Register: Copy {
    type Raw: Copy;

    fn into_raw(self) -> Self::Raw;

    fn from_raw(raw: Self::Raw) -> Self;
}

macro_rules! register {
    ($($vector:ty => $raw:ty;)*) => {
        $(
            impl Register for $vector {
                type Raw = $raw;

                #[inline(always)]
                fn into_raw(self) -> $raw {
                    // SAFETY: equal size, and both are plain bit containers
                    // for which every bit pattern is valid.
                    unsafe { std::mem::transmute::<$vector, $raw>(self) }
                }

                #[inline(always)]
                fn from_raw(raw: $raw) -> Self {
                    // SAFETY: as above.
                    unsafe { std::mem::transmute::<$raw, $vector>(raw) }
                }
            }
        )*
    };
}

register! {
    I8x16 => __m128i;
    U8x16 => __m128i;
    I16x8 => __m128i;
    U16x8 => __m128i;
    I32x4 => __m128i;
    U32x4 => __m128i;
    I64x2 => __m128i;
    F32x4 => __m128;
    F64x2 => __m128d;
    I8x32 => __m256i;
    U8x32 => __m256i;
    I16x16 => __m256i;
    U16x16 => __m256i;
    I32x8 => __m256i;
    U32x8 => __m256i;
    I64x4 => __m256i;
    F32x8 => __m256;
    F64x4 => __m256d;
}

/// One-instruction overrides: `fn name(a: In, b: In) -> Out => intrinsic;`,
/// each compiled only under `target_feature = $feature`.
macro_rules! native_binary {
    ($feature:literal: $($name:ident($ty:ty) -> $out:ty => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = $feature)]
            #[inline(always)]
            fn $name(a: $ty, b: $ty) -> $out {
                use $crate::simd::x86::Register;
                // SAFETY: the required target feature is enabled for this build.
                <$out as Register>::from_raw(unsafe { $intrinsic(a.into_raw(), b.into_raw()) })
            }
        )*
    };
}

macro_rules! native_unary {
    ($feature:literal: $($name:ident($ty:ty) -> $out:ty => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = $feature)]
            #[inline(always)]
            fn $name(a: $ty) -> $out {
                use $crate::simd::x86::Register;
                // SAFETY: the required target feature is enabled for this build.
                <$out as Register>::from_raw(unsafe { $intrinsic(a.into_raw()) })
            }
        )*
    };
}

pub(crate) use native_binary;
pub(crate) use native_unary;

mod compare;
mod convert;
mod saturate;
mod shift;
mod shuffle;

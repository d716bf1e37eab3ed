//! aarch64 NEON backend.
//!
//! NEON has no 256-bit registers and its float-to-int conversions saturate
//! instead of producing the x86 indefinite value, so only the 128-bit
//! families whose lane results agree bit for bit are overridden here. Every
//! other method keeps the reference engine.

#![allow(unused_unsafe)]

use std::arch::aarch64::*;
use std::mem::size_of;

use crate::engine::compare::{Cmp, Relation};
use crate::engine::convert::{Round, RoundControl};
use crate::engine::csr::{self, RoundingMode};
use crate::vector::{F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U8x16};

use super::traits::{Backend, CompareOps, ConvertOps, SaturatingOps, ShiftOps, ShuffleOps};
use super::{BackendKind, Lower};

/// `std::arch::aarch64` backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeonBackend;

impl Backend for NeonBackend {
    const KIND: BackendKind = BackendKind::Native;
    const NAME: &'static str = "neon";
}

/// Reinterprets between a vector and a NEON register type of the same width.
#[inline(always)]
fn bits<A: Copy, B: Copy>(a: A) -> B {
    const { assert!(size_of::<A>() == size_of::<B>()) };
    // SAFETY: equal size, and both sides are plain bit containers for which
    // every bit pattern is valid.
    unsafe { std::mem::transmute_copy(&a) }
}

macro_rules! neon_binary {
    ($($name:ident($ty:ty: $raw:ty) -> $out:ty => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = "neon")]
            #[inline(always)]
            fn $name(a: $ty, b: $ty) -> $out {
                // SAFETY: neon is enabled for this build.
                bits(unsafe { $intrinsic(bits::<_, $raw>(a), bits::<_, $raw>(b)) })
            }
        )*
    };
}

macro_rules! neon_unary {
    ($($name:ident($ty:ty: $raw:ty) -> $out:ty => $intrinsic:ident;)*) => {
        $(
            #[cfg(target_feature = "neon")]
            #[inline(always)]
            fn $name(a: $ty) -> $out {
                // SAFETY: neon is enabled for this build.
                bits(unsafe { $intrinsic(bits::<_, $raw>(a)) })
            }
        )*
    };
}

macro_rules! neon_pack {
    ($($name:ident($ty:ty: $raw:ty) -> $out:ty => $narrow:ident, $combine:ident;)*) => {
        $(
            #[cfg(target_feature = "neon")]
            #[inline(always)]
            fn $name(a: $ty, b: $ty) -> $out {
                // SAFETY: neon is enabled for this build.
                bits(unsafe {
                    $combine($narrow(bits::<_, $raw>(a)), $narrow(bits::<_, $raw>(b)))
                })
            }
        )*
    };
}

impl SaturatingOps for NeonBackend {
    neon_binary! {
        adds_i8x16(I8x16: int8x16_t) -> I8x16 => vqaddq_s8;
        adds_u8x16(U8x16: uint8x16_t) -> U8x16 => vqaddq_u8;
        adds_i16x8(I16x8: int16x8_t) -> I16x8 => vqaddq_s16;
        adds_u16x8(U16x8: uint16x8_t) -> U16x8 => vqaddq_u16;
        subs_i8x16(I8x16: int8x16_t) -> I8x16 => vqsubq_s8;
        subs_u8x16(U8x16: uint8x16_t) -> U8x16 => vqsubq_u8;
        subs_i16x8(I16x8: int16x8_t) -> I16x8 => vqsubq_s16;
        subs_u16x8(U16x8: uint16x8_t) -> U16x8 => vqsubq_u16;
        avg_u8x16(U8x16: uint8x16_t) -> U8x16 => vrhaddq_u8;
        avg_u16x8(U16x8: uint16x8_t) -> U16x8 => vrhaddq_u16;
    }

    neon_pack! {
        packs_i16x8(I16x8: int16x8_t) -> I8x16 => vqmovn_s16, vcombine_s8;
        packus_i16x8(I16x8: int16x8_t) -> U8x16 => vqmovun_s16, vcombine_u8;
        packs_i32x4(I32x4: int32x4_t) -> I16x8 => vqmovn_s32, vcombine_s16;
        packus_i32x4(I32x4: int32x4_t) -> U16x8 => vqmovun_s32, vcombine_u16;
    }

    neon_unary! {
        abs_i8x16(I8x16: int8x16_t) -> I8x16 => vabsq_s8;
        abs_i16x8(I16x8: int16x8_t) -> I16x8 => vabsq_s16;
        abs_i32x4(I32x4: int32x4_t) -> I32x4 => vabsq_s32;
    }
}

// Ordered relation from the NEON compares, then NaN lanes patched in from the
// self-equality test.
macro_rules! neon_cmp {
    ($($name:ident($ty:ty: $raw:ty, $mask:ty, $ones:expr) => $ceq:ident, $clt:ident, $cle:ident,
        $orr:ident, $bic:ident, $and:ident, $eor:ident, $dup:ident;)*) => {
        $(
            #[cfg(target_feature = "neon")]
            #[inline(always)]
            fn $name<const P: i32>(a: $ty, b: $ty) -> $ty {
                if csr::current().denormals_are_zero() {
                    return Lower::$name::<P>(a, b);
                }
                let predicate = Cmp::<P>::PREDICATE;
                let (x, y) = (bits::<_, $raw>(a), bits::<_, $raw>(b));
                // SAFETY: neon is enabled for this build.
                let hit: $mask = unsafe {
                    let ones = $dup($ones);
                    let ordered = match predicate.relation {
                        Relation::False => $dup(0),
                        Relation::Eq => $ceq(x, y),
                        Relation::Lt => $clt(x, y),
                        Relation::Le => $cle(x, y),
                        Relation::Gt => $clt(y, x),
                        Relation::Ge => $cle(y, x),
                        Relation::Ne => $eor($ceq(x, y), ones),
                        Relation::True => ones,
                    };
                    let unordered = $eor($and($ceq(x, x), $ceq(y, y)), ones);
                    if predicate.unordered {
                        $orr(ordered, unordered)
                    } else {
                        $bic(ordered, unordered)
                    }
                };
                bits(hit)
            }
        )*
    };
}

// `MINPS`/`MAXPS` pick the second operand unless the strict compare holds,
// which covers both NaN and signed-zero ties.
macro_rules! neon_min_max {
    ($($name:ident($ty:ty: $raw:ty) => $cmp:ident, $bsl:ident;)*) => {
        $(
            #[cfg(target_feature = "neon")]
            #[inline(always)]
            fn $name(a: $ty, b: $ty) -> $ty {
                if csr::current().denormals_are_zero() {
                    return Lower::$name(a, b);
                }
                let (x, y) = (bits::<_, $raw>(a), bits::<_, $raw>(b));
                // SAFETY: neon is enabled for this build.
                bits(unsafe { $bsl($cmp(x, y), x, y) })
            }
        )*
    };
}

impl CompareOps for NeonBackend {
    neon_cmp! {
        cmp_f32x4(F32x4: float32x4_t, uint32x4_t, u32::MAX) => vceqq_f32, vcltq_f32, vcleq_f32,
            vorrq_u32, vbicq_u32, vandq_u32, veorq_u32, vdupq_n_u32;
        cmp_f64x2(F64x2: float64x2_t, uint64x2_t, u64::MAX) => vceqq_f64, vcltq_f64, vcleq_f64,
            vorrq_u64, vbicq_u64, vandq_u64, veorq_u64, vdupq_n_u64;
    }

    neon_min_max! {
        min_f32x4(F32x4: float32x4_t) => vcltq_f32, vbslq_f32;
        max_f32x4(F32x4: float32x4_t) => vcgtq_f32, vbslq_f32;
        min_f64x2(F64x2: float64x2_t) => vcltq_f64, vbslq_f64;
        max_f64x2(F64x2: float64x2_t) => vcgtq_f64, vbslq_f64;
    }

    neon_binary! {
        cmpeq_i8x16(I8x16: int8x16_t) -> I8x16 => vceqq_s8;
        cmpeq_i16x8(I16x8: int16x8_t) -> I16x8 => vceqq_s16;
        cmpeq_i32x4(I32x4: int32x4_t) -> I32x4 => vceqq_s32;
        cmpeq_i64x2(I64x2: int64x2_t) -> I64x2 => vceqq_s64;
        cmpgt_i8x16(I8x16: int8x16_t) -> I8x16 => vcgtq_s8;
        cmpgt_i16x8(I16x8: int16x8_t) -> I16x8 => vcgtq_s16;
        cmpgt_i32x4(I32x4: int32x4_t) -> I32x4 => vcgtq_s32;
        cmpgt_i64x2(I64x2: int64x2_t) -> I64x2 => vcgtq_s64;
        min_i8x16(I8x16: int8x16_t) -> I8x16 => vminq_s8;
        max_i8x16(I8x16: int8x16_t) -> I8x16 => vmaxq_s8;
        min_u8x16(U8x16: uint8x16_t) -> U8x16 => vminq_u8;
        max_u8x16(U8x16: uint8x16_t) -> U8x16 => vmaxq_u8;
        min_i16x8(I16x8: int16x8_t) -> I16x8 => vminq_s16;
        max_i16x8(I16x8: int16x8_t) -> I16x8 => vmaxq_s16;
        min_u16x8(U16x8: uint16x8_t) -> U16x8 => vminq_u16;
        max_u16x8(U16x8: uint16x8_t) -> U16x8 => vmaxq_u16;
        min_i32x4(I32x4: int32x4_t) -> I32x4 => vminq_s32;
        max_i32x4(I32x4: int32x4_t) -> I32x4 => vmaxq_s32;
    }

    #[cfg(target_feature = "neon")]
    #[inline(always)]
    fn blendv_i8x16(a: I8x16, b: I8x16, mask: I8x16) -> I8x16 {
        // SAFETY: neon is enabled for this build.
        bits(unsafe {
            let select = vreinterpretq_u8_s8(vshrq_n_s8::<7>(bits(mask)));
            vbslq_s8(select, bits(b), bits(a))
        })
    }
}

#[inline(always)]
fn round_gate<const IMM: i32>() -> Option<RoundingMode> {
    let register = csr::current();
    if register.denormals_are_zero() {
        return None;
    }
    match Round::<IMM>::CONTROL {
        RoundControl::Fixed(mode) => Some(mode),
        RoundControl::Current => Some(register.rounding_mode()),
    }
}

macro_rules! neon_round {
    ($($name:ident($ty:ty: $raw:ty) => $nearest:ident, $down:ident, $up:ident, $zero:ident;)*) => {
        $(
            #[cfg(target_feature = "neon")]
            #[inline(always)]
            fn $name<const IMM: i32>(a: $ty) -> $ty {
                let Some(mode) = round_gate::<IMM>() else {
                    return Lower::$name::<IMM>(a);
                };
                let x = bits::<_, $raw>(a);
                // SAFETY: neon is enabled for this build.
                bits(unsafe {
                    match mode {
                        RoundingMode::Nearest => $nearest(x),
                        RoundingMode::Down => $down(x),
                        RoundingMode::Up => $up(x),
                        RoundingMode::TowardZero => $zero(x),
                    }
                })
            }
        )*
    };
}

impl ConvertOps for NeonBackend {
    neon_round! {
        round_f32x4(F32x4: float32x4_t) => vrndnq_f32, vrndmq_f32, vrndpq_f32, vrndq_f32;
        round_f64x2(F64x2: float64x2_t) => vrndnq_f64, vrndmq_f64, vrndpq_f64, vrndq_f64;
    }
}

impl ShuffleOps for NeonBackend {
    neon_binary! {
        unpacklo_i8x16(I8x16: int8x16_t) -> I8x16 => vzip1q_s8;
        unpackhi_i8x16(I8x16: int8x16_t) -> I8x16 => vzip2q_s8;
        unpacklo_i16x8(I16x8: int16x8_t) -> I16x8 => vzip1q_s16;
        unpackhi_i16x8(I16x8: int16x8_t) -> I16x8 => vzip2q_s16;
        unpacklo_i32x4(I32x4: int32x4_t) -> I32x4 => vzip1q_s32;
        unpackhi_i32x4(I32x4: int32x4_t) -> I32x4 => vzip2q_s32;
        unpacklo_i64x2(I64x2: int64x2_t) -> I64x2 => vzip1q_s64;
        unpackhi_i64x2(I64x2: int64x2_t) -> I64x2 => vzip2q_s64;
        unpacklo_f32x4(F32x4: float32x4_t) -> F32x4 => vzip1q_f32;
        unpackhi_f32x4(F32x4: float32x4_t) -> F32x4 => vzip2q_f32;
        unpacklo_f64x2(F64x2: float64x2_t) -> F64x2 => vzip1q_f64;
        unpackhi_f64x2(F64x2: float64x2_t) -> F64x2 => vzip2q_f64;
    }

    /// Bit 7 pushes the table index out of range, which `TBL` turns into zero;
    /// bits 4..=6 are ignored by `PSHUFB` and cleared here.
    #[cfg(target_feature = "neon")]
    #[inline(always)]
    fn shuffle_bytes_u8x16(a: U8x16, indices: U8x16) -> U8x16 {
        // SAFETY: neon is enabled for this build.
        bits(unsafe {
            let idx = vandq_u8(bits(indices), vdupq_n_u8(0x8f));
            vqtbl1q_u8(bits(a), idx)
        })
    }
}

// `USHL`/`SSHL` take a signed per-lane count where negative shifts right, and
// only its low byte; counts are range checked before they reach it.
macro_rules! neon_shift {
    ($($name:ident($ty:ty: $lane:ty, $raw:ty, $count:ty) => $kind:ident, $dup:ident, $shl:ident;)*) => {
        $(
            #[cfg(target_feature = "neon")]
            #[inline(always)]
            fn $name(a: $ty, count: u64) -> $ty {
                const BITS: u64 = <$lane>::BITS as u64;
                let by = neon_shift!(@count $kind, count, BITS);
                let Some(by) = by else {
                    return <$ty>::zero();
                };
                // SAFETY: neon is enabled for this build.
                bits(unsafe { $shl(bits::<_, $raw>(a), $dup(by as $count)) })
            }
        )*
    };
    (@count left, $count:ident, $bits:ident) => {
        ($count < $bits).then_some($count as i64)
    };
    (@count logical, $count:ident, $bits:ident) => {
        ($count < $bits).then_some(-($count as i64))
    };
    (@count arith, $count:ident, $bits:ident) => {
        Some(-($count.min($bits - 1) as i64))
    };
}

impl ShiftOps for NeonBackend {
    neon_shift! {
        shl_i16x8(I16x8: i16, int16x8_t, i16) => left, vdupq_n_s16, vshlq_s16;
        shl_i32x4(I32x4: i32, int32x4_t, i32) => left, vdupq_n_s32, vshlq_s32;
        shl_i64x2(I64x2: i64, int64x2_t, i64) => left, vdupq_n_s64, vshlq_s64;
        shr_logical_i16x8(I16x8: i16, uint16x8_t, i16) => logical, vdupq_n_s16, vshlq_u16;
        shr_logical_i32x4(I32x4: i32, uint32x4_t, i32) => logical, vdupq_n_s32, vshlq_u32;
        shr_logical_i64x2(I64x2: i64, uint64x2_t, i64) => logical, vdupq_n_s64, vshlq_u64;
        shr_arith_i16x8(I16x8: i16, int16x8_t, i16) => arith, vdupq_n_s16, vshlq_s16;
        shr_arith_i32x4(I32x4: i32, int32x4_t, i32) => arith, vdupq_n_s32, vshlq_s32;
    }
}

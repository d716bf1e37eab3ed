//! `core::simd` backend.
//!
//! Generic vector code the compiler lowers to whatever the target offers. Only
//! compiled on nightly (`cfg(simdport_portable)`). Operations `core::simd` has
//! no direct equivalent for keep the engine defaults.

use std::simd::prelude::*;

use crate::engine::compare::{Cmp, Relation};
use crate::engine::csr;
use crate::vector::{
    F32x4, F32x8, F64x2, F64x4, I16x16, I16x8, I32x4, I32x8, I64x2, I64x4, I8x16, I8x32,
    U16x16, U16x8, U32x4, U32x8, U8x16, U8x32, Vector,
};

use super::scalar::ScalarBackend;
use super::traits::{Backend, CompareOps, ConvertOps, SaturatingOps, ShiftOps, ShuffleOps};
use super::BackendKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortableBackend;

// Moves two vectors into `Simd`, evaluates `$body`, and moves the result back.
macro_rules! portable_binary {
    ($($name:ident($ty:ident: $lane:ty, $n:literal) => |$a:ident, $b:ident| $body:expr;)*) => {
        $(
            #[inline(always)]
            fn $name(a: $ty, b: $ty) -> $ty {
                let $a = Simd::<$lane, $n>::from_array(a.to_array());
                let $b = Simd::<$lane, $n>::from_array(b.to_array());
                Vector::from_array(($body).to_array())
            }
        )*
    };
}

impl SaturatingOps for PortableBackend {
    portable_binary! {
        adds_i8x16(I8x16: i8, 16) => |a, b| a.saturating_add(b);
        adds_u8x16(U8x16: u8, 16) => |a, b| a.saturating_add(b);
        adds_i16x8(I16x8: i16, 8) => |a, b| a.saturating_add(b);
        adds_u16x8(U16x8: u16, 8) => |a, b| a.saturating_add(b);
        subs_i8x16(I8x16: i8, 16) => |a, b| a.saturating_sub(b);
        subs_u8x16(U8x16: u8, 16) => |a, b| a.saturating_sub(b);
        subs_i16x8(I16x8: i16, 8) => |a, b| a.saturating_sub(b);
        subs_u16x8(U16x8: u16, 8) => |a, b| a.saturating_sub(b);
        adds_i8x32(I8x32: i8, 32) => |a, b| a.saturating_add(b);
        adds_u8x32(U8x32: u8, 32) => |a, b| a.saturating_add(b);
        adds_i16x16(I16x16: i16, 16) => |a, b| a.saturating_add(b);
        adds_u16x16(U16x16: u16, 16) => |a, b| a.saturating_add(b);
        subs_i8x32(I8x32: i8, 32) => |a, b| a.saturating_sub(b);
        subs_u8x32(U8x32: u8, 32) => |a, b| a.saturating_sub(b);
        subs_i16x16(I16x16: i16, 16) => |a, b| a.saturating_sub(b);
        subs_u16x16(U16x16: u16, 16) => |a, b| a.saturating_sub(b);
    }
}

// Float predicate evaluation shared by every width. `Relation` is known at
// compile time, so the match folds away.
macro_rules! portable_cmp {
    ($($name:ident($ty:ident: $lane:ty, $int:ty, $n:literal);)*) => {
        $(
            #[inline(always)]
            fn $name<const P: i32>(a: $ty, b: $ty) -> $ty {
                if csr::current().denormals_are_zero() {
                    return ScalarBackend::$name::<P>(a, b);
                }
                let predicate = Cmp::<P>::PREDICATE;
                let x = Simd::<$lane, $n>::from_array(a.to_array());
                let y = Simd::<$lane, $n>::from_array(b.to_array());
                let unordered = x.is_nan() | y.is_nan();
                let ordered = match predicate.relation {
                    Relation::False => Mask::splat(false),
                    Relation::Eq => x.simd_eq(y),
                    Relation::Lt => x.simd_lt(y),
                    Relation::Le => x.simd_le(y),
                    Relation::Gt => x.simd_gt(y),
                    Relation::Ge => x.simd_ge(y),
                    Relation::Ne => x.simd_ne(y),
                    Relation::True => Mask::splat(true),
                };
                let hit = (unordered & Mask::splat(predicate.unordered)) | (!unordered & ordered);
                Vector::<$int, $n>::from_array(hit.to_int().to_array()).reinterpret()
            }
        )*
    };
}

macro_rules! portable_int_cmp {
    ($($name:ident($ty:ident: $lane:ty, $n:literal) => $method:ident;)*) => {
        $(
            #[inline(always)]
            fn $name(a: $ty, b: $ty) -> $ty {
                let x = Simd::<$lane, $n>::from_array(a.to_array());
                let y = Simd::<$lane, $n>::from_array(b.to_array());
                Vector::from_array(x.$method(y).to_int().to_array())
            }
        )*
    };
}

macro_rules! portable_blendv {
    ($($name:ident($ty:ident: $lane:ty, $int:ty, $n:literal);)*) => {
        $(
            #[inline(always)]
            fn $name(a: $ty, b: $ty, mask: $ty) -> $ty {
                let sign = Simd::<$int, $n>::from_array(mask.reinterpret::<$int, $n>().to_array())
                    .simd_lt(Simd::splat(0));
                let x = Simd::<$lane, $n>::from_array(a.to_array());
                let y = Simd::<$lane, $n>::from_array(b.to_array());
                Vector::from_array(sign.select(y, x).to_array())
            }
        )*
    };
}

impl CompareOps for PortableBackend {
    portable_cmp! {
        cmp_f32x4(F32x4: f32, i32, 4);
        cmp_f64x2(F64x2: f64, i64, 2);
        cmp_f32x8(F32x8: f32, i32, 8);
        cmp_f64x4(F64x4: f64, i64, 4);
    }

    portable_int_cmp! {
        cmpeq_i8x16(I8x16: i8, 16) => simd_eq;
        cmpeq_i16x8(I16x8: i16, 8) => simd_eq;
        cmpeq_i32x4(I32x4: i32, 4) => simd_eq;
        cmpeq_i64x2(I64x2: i64, 2) => simd_eq;
        cmpeq_i8x32(I8x32: i8, 32) => simd_eq;
        cmpeq_i16x16(I16x16: i16, 16) => simd_eq;
        cmpeq_i32x8(I32x8: i32, 8) => simd_eq;
        cmpeq_i64x4(I64x4: i64, 4) => simd_eq;
        cmpgt_i8x16(I8x16: i8, 16) => simd_gt;
        cmpgt_i16x8(I16x8: i16, 8) => simd_gt;
        cmpgt_i32x4(I32x4: i32, 4) => simd_gt;
        cmpgt_i64x2(I64x2: i64, 2) => simd_gt;
        cmpgt_i8x32(I8x32: i8, 32) => simd_gt;
        cmpgt_i16x16(I16x16: i16, 16) => simd_gt;
        cmpgt_i32x8(I32x8: i32, 8) => simd_gt;
        cmpgt_i64x4(I64x4: i64, 4) => simd_gt;
    }

    portable_binary! {
        min_i8x16(I8x16: i8, 16) => |a, b| a.simd_min(b);
        max_i8x16(I8x16: i8, 16) => |a, b| a.simd_max(b);
        min_u8x16(U8x16: u8, 16) => |a, b| a.simd_min(b);
        max_u8x16(U8x16: u8, 16) => |a, b| a.simd_max(b);
        min_i16x8(I16x8: i16, 8) => |a, b| a.simd_min(b);
        max_i16x8(I16x8: i16, 8) => |a, b| a.simd_max(b);
        min_u16x8(U16x8: u16, 8) => |a, b| a.simd_min(b);
        max_u16x8(U16x8: u16, 8) => |a, b| a.simd_max(b);
        min_i32x4(I32x4: i32, 4) => |a, b| a.simd_min(b);
        max_i32x4(I32x4: i32, 4) => |a, b| a.simd_max(b);
        min_u32x4(U32x4: u32, 4) => |a, b| a.simd_min(b);
        max_u32x4(U32x4: u32, 4) => |a, b| a.simd_max(b);
        min_i8x32(I8x32: i8, 32) => |a, b| a.simd_min(b);
        max_i8x32(I8x32: i8, 32) => |a, b| a.simd_max(b);
        min_u8x32(U8x32: u8, 32) => |a, b| a.simd_min(b);
        max_u8x32(U8x32: u8, 32) => |a, b| a.simd_max(b);
        min_i16x16(I16x16: i16, 16) => |a, b| a.simd_min(b);
        max_i16x16(I16x16: i16, 16) => |a, b| a.simd_max(b);
        min_u16x16(U16x16: u16, 16) => |a, b| a.simd_min(b);
        max_u16x16(U16x16: u16, 16) => |a, b| a.simd_max(b);
        min_i32x8(I32x8: i32, 8) => |a, b| a.simd_min(b);
        max_i32x8(I32x8: i32, 8) => |a, b| a.simd_max(b);
        min_u32x8(U32x8: u32, 8) => |a, b| a.simd_min(b);
        max_u32x8(U32x8: u32, 8) => |a, b| a.simd_max(b);
    }

    portable_blendv! {
        blendv_i8x16(I8x16: i8, i8, 16);
        blendv_f32x4(F32x4: f32, i32, 4);
        blendv_f64x2(F64x2: f64, i64, 2);
        blendv_i8x32(I8x32: i8, i8, 32);
        blendv_f32x8(F32x8: f32, i32, 8);
        blendv_f64x4(F64x4: f64, i64, 4);
    }
}

impl ConvertOps for PortableBackend {}

// `interleave` of two 128-bit vectors is exactly the low/high unpack pair.
macro_rules! portable_unpack {
    ($($lo:ident, $hi:ident($ty:ident: $lane:ty, $n:literal);)*) => {
        $(
            #[inline(always)]
            fn $lo(a: $ty, b: $ty) -> $ty {
                let x = Simd::<$lane, $n>::from_array(a.to_array());
                let y = Simd::<$lane, $n>::from_array(b.to_array());
                Vector::from_array(x.interleave(y).0.to_array())
            }

            #[inline(always)]
            fn $hi(a: $ty, b: $ty) -> $ty {
                let x = Simd::<$lane, $n>::from_array(a.to_array());
                let y = Simd::<$lane, $n>::from_array(b.to_array());
                Vector::from_array(x.interleave(y).1.to_array())
            }
        )*
    };
}

impl ShuffleOps for PortableBackend {
    portable_unpack! {
        unpacklo_i8x16, unpackhi_i8x16(I8x16: i8, 16);
        unpacklo_i16x8, unpackhi_i16x8(I16x8: i16, 8);
        unpacklo_i32x4, unpackhi_i32x4(I32x4: i32, 4);
        unpacklo_i64x2, unpackhi_i64x2(I64x2: i64, 2);
        unpacklo_f32x4, unpackhi_f32x4(F32x4: f32, 4);
        unpacklo_f64x2, unpackhi_f64x2(F64x2: f64, 2);
    }
}

// Uniform shifts: the count check happens once, then one vector shift.
macro_rules! portable_shift {
    ($($shl:ident, $shr:ident($ty:ident: $lane:ty, $unsigned:ty, $n:literal);)*) => {
        $(
            #[inline(always)]
            fn $shl(a: $ty, count: u64) -> $ty {
                if count >= u64::from(<$lane>::BITS) {
                    return Vector::zero();
                }
                let x = Simd::<$lane, $n>::from_array(a.to_array());
                Vector::from_array((x << Simd::splat(count as $lane)).to_array())
            }

            #[inline(always)]
            fn $shr(a: $ty, count: u64) -> $ty {
                if count >= u64::from(<$lane>::BITS) {
                    return Vector::zero();
                }
                let x = Simd::<$unsigned, $n>::from_array(a.reinterpret::<$unsigned, $n>().to_array());
                let shifted = x >> Simd::splat(count as $unsigned);
                Vector::<$unsigned, $n>::from_array(shifted.to_array()).reinterpret()
            }
        )*
    };
}

macro_rules! portable_sra {
    ($($name:ident($ty:ident: $lane:ty, $n:literal);)*) => {
        $(
            #[inline(always)]
            fn $name(a: $ty, count: u64) -> $ty {
                let n = count.min(u64::from(<$lane>::BITS - 1)) as $lane;
                let x = Simd::<$lane, $n>::from_array(a.to_array());
                Vector::from_array((x >> Simd::splat(n)).to_array())
            }
        )*
    };
}

impl ShiftOps for PortableBackend {
    portable_shift! {
        shl_i16x8, shr_logical_i16x8(I16x8: i16, u16, 8);
        shl_i32x4, shr_logical_i32x4(I32x4: i32, u32, 4);
        shl_i64x2, shr_logical_i64x2(I64x2: i64, u64, 2);
        shl_i16x16, shr_logical_i16x16(I16x16: i16, u16, 16);
        shl_i32x8, shr_logical_i32x8(I32x8: i32, u32, 8);
        shl_i64x4, shr_logical_i64x4(I64x4: i64, u64, 4);
    }

    portable_sra! {
        shr_arith_i16x8(I16x8: i16, 8);
        shr_arith_i32x4(I32x4: i32, 4);
        shr_arith_i16x16(I16x16: i16, 16);
        shr_arith_i32x8(I32x8: i32, 8);
    }
}

impl Backend for PortableBackend {
    const KIND: BackendKind = BackendKind::Portable;
    const NAME: &'static str = "core::simd";
}

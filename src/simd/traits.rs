//! Backend operation families.
//!
//! Each trait groups one instruction family. Every method is an associated
//! function with a default body that calls the reference engine, so a backend
//! implements a trait with an empty `impl` block and then overrides only the
//! methods it has a faster path for. Overrides must return the same bits as the
//! default for every input; `tests/backend_equivalence.rs` holds them to that.
//!
//! Method names carry the lane layout they operate on (`adds_i8x16`,
//! `cmp_f64x4`, ...) so that a native override can bind each one to a single
//! instruction.

use crate::engine::compare::{self, Cmp};
use crate::engine::convert::{self, Round};
use crate::engine::saturate;
use crate::engine::shift;
use crate::engine::shuffle::{self, Control, Unpack};
use crate::vector::{
    F32x4, F32x8, F64x2, F64x4, I16x16, I16x8, I32x4, I32x8, I64x2, I64x4, I8x16, I8x32,
    U16x16, U16x8, U32x4, U32x8, U8x16, U8x32,
};

use super::BackendKind;

macro_rules! binary_defaults {
    ($($name:ident($ty:ty) -> $out:ty => $engine:path;)*) => {
        $(
            #[inline(always)]
            fn $name(a: $ty, b: $ty) -> $out {
                $engine(a, b)
            }
        )*
    };
}

macro_rules! unary_defaults {
    ($($name:ident($ty:ty) -> $out:ty => $engine:path;)*) => {
        $(
            #[inline(always)]
            fn $name(a: $ty) -> $out {
                $engine(a)
            }
        )*
    };
}

/// Saturating add/sub, averages, `abs` and narrowing packs.
pub trait SaturatingOps {
    binary_defaults! {
        adds_i8x16(I8x16) -> I8x16 => saturate::adds;
        adds_u8x16(U8x16) -> U8x16 => saturate::adds;
        adds_i16x8(I16x8) -> I16x8 => saturate::adds;
        adds_u16x8(U16x8) -> U16x8 => saturate::adds;
        subs_i8x16(I8x16) -> I8x16 => saturate::subs;
        subs_u8x16(U8x16) -> U8x16 => saturate::subs;
        subs_i16x8(I16x8) -> I16x8 => saturate::subs;
        subs_u16x8(U16x8) -> U16x8 => saturate::subs;
        adds_i8x32(I8x32) -> I8x32 => saturate::adds;
        adds_u8x32(U8x32) -> U8x32 => saturate::adds;
        adds_i16x16(I16x16) -> I16x16 => saturate::adds;
        adds_u16x16(U16x16) -> U16x16 => saturate::adds;
        subs_i8x32(I8x32) -> I8x32 => saturate::subs;
        subs_u8x32(U8x32) -> U8x32 => saturate::subs;
        subs_i16x16(I16x16) -> I16x16 => saturate::subs;
        subs_u16x16(U16x16) -> U16x16 => saturate::subs;
        avg_u8x16(U8x16) -> U8x16 => saturate::avg;
        avg_u16x8(U16x8) -> U16x8 => saturate::avg;
        avg_u8x32(U8x32) -> U8x32 => saturate::avg;
        avg_u16x16(U16x16) -> U16x16 => saturate::avg;
        packs_i16x8(I16x8) -> I8x16 => saturate::pack;
        packus_i16x8(I16x8) -> U8x16 => saturate::pack;
        packs_i32x4(I32x4) -> I16x8 => saturate::pack;
        packus_i32x4(I32x4) -> U16x8 => saturate::pack;
        packs_i16x16(I16x16) -> I8x32 => saturate::pack;
        packus_i16x16(I16x16) -> U8x32 => saturate::pack;
        packs_i32x8(I32x8) -> I16x16 => saturate::pack;
        packus_i32x8(I32x8) -> U16x16 => saturate::pack;
    }

    unary_defaults! {
        abs_i8x16(I8x16) -> I8x16 => saturate::abs;
        abs_i16x8(I16x8) -> I16x8 => saturate::abs;
        abs_i32x4(I32x4) -> I32x4 => saturate::abs;
        abs_i8x32(I8x32) -> I8x32 => saturate::abs;
        abs_i16x16(I16x16) -> I16x16 => saturate::abs;
        abs_i32x8(I32x8) -> I32x8 => saturate::abs;
    }
}

/// Predicate compares, `min`/`max`, `movemask` and blends.
pub trait CompareOps {
    #[inline(always)]
    fn cmp_f32x4<const P: i32>(a: F32x4, b: F32x4) -> F32x4 {
        compare::cmp(Cmp::<P>::PREDICATE, a, b)
    }

    #[inline(always)]
    fn cmp_f64x2<const P: i32>(a: F64x2, b: F64x2) -> F64x2 {
        compare::cmp(Cmp::<P>::PREDICATE, a, b)
    }

    #[inline(always)]
    fn cmp_f32x8<const P: i32>(a: F32x8, b: F32x8) -> F32x8 {
        compare::cmp(Cmp::<P>::PREDICATE, a, b)
    }

    #[inline(always)]
    fn cmp_f64x4<const P: i32>(a: F64x4, b: F64x4) -> F64x4 {
        compare::cmp(Cmp::<P>::PREDICATE, a, b)
    }

    /// Lane 0 only; upper lanes of `a` pass through.
    #[inline(always)]
    fn cmp_ss<const P: i32>(a: F32x4, b: F32x4) -> F32x4 {
        compare::cmp_scalar(Cmp::<P>::PREDICATE, a, b)
    }

    #[inline(always)]
    fn cmp_sd<const P: i32>(a: F64x2, b: F64x2) -> F64x2 {
        compare::cmp_scalar(Cmp::<P>::PREDICATE, a, b)
    }

    binary_defaults! {
        min_f32x4(F32x4) -> F32x4 => compare::min;
        max_f32x4(F32x4) -> F32x4 => compare::max;
        min_f64x2(F64x2) -> F64x2 => compare::min;
        max_f64x2(F64x2) -> F64x2 => compare::max;
        min_f32x8(F32x8) -> F32x8 => compare::min;
        max_f32x8(F32x8) -> F32x8 => compare::max;
        min_f64x4(F64x4) -> F64x4 => compare::min;
        max_f64x4(F64x4) -> F64x4 => compare::max;
        min_ss(F32x4) -> F32x4 => compare::min_scalar;
        max_ss(F32x4) -> F32x4 => compare::max_scalar;
        min_sd(F64x2) -> F64x2 => compare::min_scalar;
        max_sd(F64x2) -> F64x2 => compare::max_scalar;

        cmpeq_i8x16(I8x16) -> I8x16 => compare::cmpeq;
        cmpeq_i16x8(I16x8) -> I16x8 => compare::cmpeq;
        cmpeq_i32x4(I32x4) -> I32x4 => compare::cmpeq;
        cmpeq_i64x2(I64x2) -> I64x2 => compare::cmpeq;
        cmpeq_i8x32(I8x32) -> I8x32 => compare::cmpeq;
        cmpeq_i16x16(I16x16) -> I16x16 => compare::cmpeq;
        cmpeq_i32x8(I32x8) -> I32x8 => compare::cmpeq;
        cmpeq_i64x4(I64x4) -> I64x4 => compare::cmpeq;
        cmpgt_i8x16(I8x16) -> I8x16 => compare::cmpgt;
        cmpgt_i16x8(I16x8) -> I16x8 => compare::cmpgt;
        cmpgt_i32x4(I32x4) -> I32x4 => compare::cmpgt;
        cmpgt_i64x2(I64x2) -> I64x2 => compare::cmpgt;
        cmpgt_i8x32(I8x32) -> I8x32 => compare::cmpgt;
        cmpgt_i16x16(I16x16) -> I16x16 => compare::cmpgt;
        cmpgt_i32x8(I32x8) -> I32x8 => compare::cmpgt;
        cmpgt_i64x4(I64x4) -> I64x4 => compare::cmpgt;

        min_i8x16(I8x16) -> I8x16 => compare::min_int;
        max_i8x16(I8x16) -> I8x16 => compare::max_int;
        min_u8x16(U8x16) -> U8x16 => compare::min_int;
        max_u8x16(U8x16) -> U8x16 => compare::max_int;
        min_i16x8(I16x8) -> I16x8 => compare::min_int;
        max_i16x8(I16x8) -> I16x8 => compare::max_int;
        min_u16x8(U16x8) -> U16x8 => compare::min_int;
        max_u16x8(U16x8) -> U16x8 => compare::max_int;
        min_i32x4(I32x4) -> I32x4 => compare::min_int;
        max_i32x4(I32x4) -> I32x4 => compare::max_int;
        min_u32x4(U32x4) -> U32x4 => compare::min_int;
        max_u32x4(U32x4) -> U32x4 => compare::max_int;
        min_i8x32(I8x32) -> I8x32 => compare::min_int;
        max_i8x32(I8x32) -> I8x32 => compare::max_int;
        min_u8x32(U8x32) -> U8x32 => compare::min_int;
        max_u8x32(U8x32) -> U8x32 => compare::max_int;
        min_i16x16(I16x16) -> I16x16 => compare::min_int;
        max_i16x16(I16x16) -> I16x16 => compare::max_int;
        min_u16x16(U16x16) -> U16x16 => compare::min_int;
        max_u16x16(U16x16) -> U16x16 => compare::max_int;
        min_i32x8(I32x8) -> I32x8 => compare::min_int;
        max_i32x8(I32x8) -> I32x8 => compare::max_int;
        min_u32x8(U32x8) -> U32x8 => compare::min_int;
        max_u32x8(U32x8) -> U32x8 => compare::max_int;
    }

    unary_defaults! {
        movemask_i8x16(I8x16) -> i32 => compare::movemask;
        movemask_f32x4(F32x4) -> i32 => compare::movemask;
        movemask_f64x2(F64x2) -> i32 => compare::movemask;
        movemask_i8x32(I8x32) -> i32 => compare::movemask;
        movemask_f32x8(F32x8) -> i32 => compare::movemask;
        movemask_f64x4(F64x4) -> i32 => compare::movemask;
    }

    #[inline(always)]
    fn blendv_i8x16(a: I8x16, b: I8x16, mask: I8x16) -> I8x16 {
        compare::blendv(a, b, mask)
    }

    #[inline(always)]
    fn blendv_f32x4(a: F32x4, b: F32x4, mask: F32x4) -> F32x4 {
        compare::blendv(a, b, mask)
    }

    #[inline(always)]
    fn blendv_f64x2(a: F64x2, b: F64x2, mask: F64x2) -> F64x2 {
        compare::blendv(a, b, mask)
    }

    #[inline(always)]
    fn blendv_i8x32(a: I8x32, b: I8x32, mask: I8x32) -> I8x32 {
        compare::blendv(a, b, mask)
    }

    #[inline(always)]
    fn blendv_f32x8(a: F32x8, b: F32x8, mask: F32x8) -> F32x8 {
        compare::blendv(a, b, mask)
    }

    #[inline(always)]
    fn blendv_f64x4(a: F64x4, b: F64x4, mask: F64x4) -> F64x4 {
        compare::blendv(a, b, mask)
    }
}

/// Conversions and `round`. All of these read the emulated register.
pub trait ConvertOps {
    unary_defaults! {
        cvt_f32x4_i32x4(F32x4) -> I32x4 => convert::to_int;
        cvtt_f32x4_i32x4(F32x4) -> I32x4 => convert::to_int_truncate;
        cvt_i32x4_f32x4(I32x4) -> F32x4 => convert::i32_to_f32;
        cvt_f64x2_i32x4(F64x2) -> I32x4 => convert::to_int;
        cvtt_f64x2_i32x4(F64x2) -> I32x4 => convert::to_int_truncate;
        cvt_f64x2_f32x4(F64x2) -> F32x4 => convert::f64_to_f32;
        cvt_f32x4_f64x2(F32x4) -> F64x2 => convert::f32_to_f64;
        cvt_i32x4_f64x2(I32x4) -> F64x2 => convert::i32_to_f64;
        cvt_f32x8_i32x8(F32x8) -> I32x8 => convert::to_int;
        cvtt_f32x8_i32x8(F32x8) -> I32x8 => convert::to_int_truncate;
        cvt_i32x8_f32x8(I32x8) -> F32x8 => convert::i32_to_f32;
        cvt_f64x4_i32x4(F64x4) -> I32x4 => convert::to_int;
        cvtt_f64x4_i32x4(F64x4) -> I32x4 => convert::to_int_truncate;
        cvt_f64x4_f32x4(F64x4) -> F32x4 => convert::f64_to_f32;
        cvt_f32x4_f64x4(F32x4) -> F64x4 => convert::f32_to_f64;
        cvt_i32x4_f64x4(I32x4) -> F64x4 => convert::i32_to_f64;

        cvt_ss_i32(F32x4) -> i32 => convert::scalar_to_int;
        cvtt_ss_i32(F32x4) -> i32 => convert::scalar_to_int_truncate;
        cvt_ss_i64(F32x4) -> i64 => convert::scalar_to_int;
        cvtt_ss_i64(F32x4) -> i64 => convert::scalar_to_int_truncate;
        cvt_sd_i32(F64x2) -> i32 => convert::scalar_to_int;
        cvtt_sd_i32(F64x2) -> i32 => convert::scalar_to_int_truncate;
        cvt_sd_i64(F64x2) -> i64 => convert::scalar_to_int;
        cvtt_sd_i64(F64x2) -> i64 => convert::scalar_to_int_truncate;
    }

    /// `a` with lane 0 replaced by `b` rounded to `f32` in the current mode.
    #[inline(always)]
    fn cvt_i64_ss(a: F32x4, b: i64) -> F32x4 {
        a.with_lane(0, convert::int_to_f32(b, crate::engine::csr::rounding_mode()))
    }

    #[inline(always)]
    fn cvt_i64_sd(a: F64x2, b: i64) -> F64x2 {
        a.with_lane(0, convert::int_to_f64(b, crate::engine::csr::rounding_mode()))
    }

    /// `a` with lane 0 replaced by lane 0 of `b` narrowed to `f32`.
    #[inline(always)]
    fn cvt_sd_ss(a: F32x4, b: F64x2) -> F32x4 {
        a.with_lane(0, convert::narrow_f64(b.lane(0), crate::engine::csr::current()))
    }

    #[inline(always)]
    fn cvt_ss_sd(a: F64x2, b: F32x4) -> F64x2 {
        a.with_lane(0, convert::widen_f32(b.lane(0), crate::engine::csr::current()))
    }

    #[inline(always)]
    fn round_f32x4<const IMM: i32>(a: F32x4) -> F32x4 {
        convert::round(Round::<IMM>::CONTROL, a)
    }

    #[inline(always)]
    fn round_f64x2<const IMM: i32>(a: F64x2) -> F64x2 {
        convert::round(Round::<IMM>::CONTROL, a)
    }

    #[inline(always)]
    fn round_f32x8<const IMM: i32>(a: F32x8) -> F32x8 {
        convert::round(Round::<IMM>::CONTROL, a)
    }

    #[inline(always)]
    fn round_f64x4<const IMM: i32>(a: F64x4) -> F64x4 {
        convert::round(Round::<IMM>::CONTROL, a)
    }

    #[inline(always)]
    fn round_ss<const IMM: i32>(a: F32x4, b: F32x4) -> F32x4 {
        convert::round_scalar(Round::<IMM>::CONTROL, a, b)
    }

    #[inline(always)]
    fn round_sd<const IMM: i32>(a: F64x2, b: F64x2) -> F64x2 {
        convert::round_scalar(Round::<IMM>::CONTROL, a, b)
    }
}

macro_rules! unpack_defaults {
    ($($lo:ident, $hi:ident($ty:ty, $per:literal);)*) => {
        $(
            #[inline(always)]
            fn $lo(a: $ty, b: $ty) -> $ty {
                shuffle::per_sub_lane(Unpack::<$per>::LOW, a, b)
            }

            #[inline(always)]
            fn $hi(a: $ty, b: $ty) -> $ty {
                shuffle::per_sub_lane(Unpack::<$per>::HIGH, a, b)
            }
        )*
    };
}

/// Immediate and variable shuffles.
pub trait ShuffleOps {
    /// `PSHUFD`, per 128-bit sub-lane.
    #[inline(always)]
    fn shuffle_i32x4<const IMM: i32>(a: I32x4) -> I32x4 {
        shuffle::per_sub_lane(Control::<IMM>::PSHUFD, a, a)
    }

    #[inline(always)]
    fn shuffle_i32x8<const IMM: i32>(a: I32x8) -> I32x8 {
        shuffle::per_sub_lane(Control::<IMM>::PSHUFD, a, a)
    }

    #[inline(always)]
    fn shufflelo_i16x8<const IMM: i32>(a: I16x8) -> I16x8 {
        shuffle::per_sub_lane(Control::<IMM>::PSHUFLW, a, a)
    }

    #[inline(always)]
    fn shufflehi_i16x8<const IMM: i32>(a: I16x8) -> I16x8 {
        shuffle::per_sub_lane(Control::<IMM>::PSHUFHW, a, a)
    }

    #[inline(always)]
    fn shufflelo_i16x16<const IMM: i32>(a: I16x16) -> I16x16 {
        shuffle::per_sub_lane(Control::<IMM>::PSHUFLW, a, a)
    }

    #[inline(always)]
    fn shufflehi_i16x16<const IMM: i32>(a: I16x16) -> I16x16 {
        shuffle::per_sub_lane(Control::<IMM>::PSHUFHW, a, a)
    }

    #[inline(always)]
    fn shuffle_f32x4<const IMM: i32>(a: F32x4, b: F32x4) -> F32x4 {
        shuffle::per_sub_lane(Control::<IMM>::SHUFPS, a, b)
    }

    #[inline(always)]
    fn shuffle_f32x8<const IMM: i32>(a: F32x8, b: F32x8) -> F32x8 {
        shuffle::per_sub_lane(Control::<IMM>::SHUFPS, a, b)
    }

    #[inline(always)]
    fn shuffle_f64x2<const IMM: i32>(a: F64x2, b: F64x2) -> F64x2 {
        shuffle::whole(Control::<IMM>::SHUFPD, a, b)
    }

    #[inline(always)]
    fn shuffle_f64x4<const IMM: i32>(a: F64x4, b: F64x4) -> F64x4 {
        shuffle::whole(Control::<IMM>::SHUFPD256, a, b)
    }

    unpack_defaults! {
        unpacklo_i8x16, unpackhi_i8x16(I8x16, 16);
        unpacklo_i16x8, unpackhi_i16x8(I16x8, 8);
        unpacklo_i32x4, unpackhi_i32x4(I32x4, 4);
        unpacklo_i64x2, unpackhi_i64x2(I64x2, 2);
        unpacklo_f32x4, unpackhi_f32x4(F32x4, 4);
        unpacklo_f64x2, unpackhi_f64x2(F64x2, 2);
        unpacklo_i8x32, unpackhi_i8x32(I8x32, 16);
        unpacklo_i16x16, unpackhi_i16x16(I16x16, 8);
        unpacklo_i32x8, unpackhi_i32x8(I32x8, 4);
        unpacklo_i64x4, unpackhi_i64x4(I64x4, 2);
        unpacklo_f32x8, unpackhi_f32x8(F32x8, 4);
        unpacklo_f64x4, unpackhi_f64x4(F64x4, 2);
    }

    /// `PSHUFB`.
    #[inline(always)]
    fn shuffle_bytes_u8x16(a: U8x16, indices: U8x16) -> U8x16 {
        shuffle::shuffle_bytes(a, indices)
    }

    #[inline(always)]
    fn shuffle_bytes_u8x32(a: U8x32, indices: U8x32) -> U8x32 {
        shuffle::shuffle_bytes(a, indices)
    }

    /// `PALIGNR`: `(a:b) >> (IMM * 8)`, low 16 bytes of each sub-lane.
    #[inline(always)]
    fn alignr_u8x16<const IMM: i32>(a: U8x16, b: U8x16) -> U8x16 {
        shuffle::per_sub_lane(Control::<IMM>::ALIGNR16, b, a)
    }

    #[inline(always)]
    fn alignr_u8x32<const IMM: i32>(a: U8x32, b: U8x32) -> U8x32 {
        shuffle::per_sub_lane(Control::<IMM>::ALIGNR16, b, a)
    }

    #[inline(always)]
    fn bslli_u8x16<const IMM: i32>(a: U8x16) -> U8x16 {
        shuffle::per_sub_lane(Control::<IMM>::BSLLI, a, a)
    }

    #[inline(always)]
    fn bsrli_u8x16<const IMM: i32>(a: U8x16) -> U8x16 {
        shuffle::per_sub_lane(Control::<IMM>::BSRLI, a, a)
    }

    #[inline(always)]
    fn bslli_u8x32<const IMM: i32>(a: U8x32) -> U8x32 {
        shuffle::per_sub_lane(Control::<IMM>::BSLLI, a, a)
    }

    #[inline(always)]
    fn bsrli_u8x32<const IMM: i32>(a: U8x32) -> U8x32 {
        shuffle::per_sub_lane(Control::<IMM>::BSRLI, a, a)
    }

    #[inline(always)]
    fn permute4x64_i64x4<const IMM: i32>(a: I64x4) -> I64x4 {
        shuffle::whole(Control::<IMM>::PERMUTE4X64, a, a)
    }

    #[inline(always)]
    fn permute4x64_f64x4<const IMM: i32>(a: F64x4) -> F64x4 {
        shuffle::whole(Control::<IMM>::PERMUTE4X64, a, a)
    }

    /// `VPERM2I128`; the float forms reinterpret through this one.
    #[inline(always)]
    fn permute2x128_i64x4<const IMM: i32>(a: I64x4, b: I64x4) -> I64x4 {
        shuffle::whole(Control::<IMM>::PERMUTE2X128, a, b)
    }

    #[inline(always)]
    fn permutevar8x32_i32x8(a: I32x8, indices: I32x8) -> I32x8 {
        shuffle::permutevar8x32(a, indices)
    }

    #[inline(always)]
    fn permutevar8x32_f32x8(a: F32x8, indices: I32x8) -> F32x8 {
        shuffle::permutevar8x32(a, indices)
    }

    #[inline(always)]
    fn blend_f32x4<const IMM: i32>(a: F32x4, b: F32x4) -> F32x4 {
        shuffle::whole(Control::<IMM>::BLEND4, a, b)
    }

    #[inline(always)]
    fn blend_f64x2<const IMM: i32>(a: F64x2, b: F64x2) -> F64x2 {
        shuffle::whole(Control::<IMM>::BLEND2, a, b)
    }

    #[inline(always)]
    fn blend_f32x8<const IMM: i32>(a: F32x8, b: F32x8) -> F32x8 {
        shuffle::whole(Control::<IMM>::BLEND8, a, b)
    }

    #[inline(always)]
    fn blend_f64x4<const IMM: i32>(a: F64x4, b: F64x4) -> F64x4 {
        shuffle::whole(Control::<IMM>::BLEND4, a, b)
    }

    /// `PBLENDW`; the 256-bit form reuses the 8-bit immediate per sub-lane.
    #[inline(always)]
    fn blend_i16x8<const IMM: i32>(a: I16x8, b: I16x8) -> I16x8 {
        shuffle::per_sub_lane(Control::<IMM>::BLEND8, a, b)
    }

    #[inline(always)]
    fn blend_i16x16<const IMM: i32>(a: I16x16, b: I16x16) -> I16x16 {
        shuffle::per_sub_lane(Control::<IMM>::BLEND8, a, b)
    }

    #[inline(always)]
    fn blend_i32x4<const IMM: i32>(a: I32x4, b: I32x4) -> I32x4 {
        shuffle::whole(Control::<IMM>::BLEND4, a, b)
    }

    #[inline(always)]
    fn blend_i32x8<const IMM: i32>(a: I32x8, b: I32x8) -> I32x8 {
        shuffle::whole(Control::<IMM>::BLEND8, a, b)
    }
}

macro_rules! shift_defaults {
    ($($name:ident($ty:ty) => $engine:path;)*) => {
        $(
            #[inline(always)]
            fn $name(a: $ty, count: u64) -> $ty {
                $engine(a, count)
            }
        )*
    };
}

/// Uniform-count and per-lane shifts.
pub trait ShiftOps {
    shift_defaults! {
        shl_i16x8(I16x8) => shift::shl;
        shl_i32x4(I32x4) => shift::shl;
        shl_i64x2(I64x2) => shift::shl;
        shl_i16x16(I16x16) => shift::shl;
        shl_i32x8(I32x8) => shift::shl;
        shl_i64x4(I64x4) => shift::shl;
        shr_logical_i16x8(I16x8) => shift::shr_logical;
        shr_logical_i32x4(I32x4) => shift::shr_logical;
        shr_logical_i64x2(I64x2) => shift::shr_logical;
        shr_logical_i16x16(I16x16) => shift::shr_logical;
        shr_logical_i32x8(I32x8) => shift::shr_logical;
        shr_logical_i64x4(I64x4) => shift::shr_logical;
        shr_arith_i16x8(I16x8) => shift::shr_arith;
        shr_arith_i32x4(I32x4) => shift::shr_arith;
        shr_arith_i16x16(I16x16) => shift::shr_arith;
        shr_arith_i32x8(I32x8) => shift::shr_arith;
    }

    binary_defaults! {
        shlv_i32x4(I32x4) -> I32x4 => shift::shl_var;
        shlv_i64x2(I64x2) -> I64x2 => shift::shl_var;
        shlv_i32x8(I32x8) -> I32x8 => shift::shl_var;
        shlv_i64x4(I64x4) -> I64x4 => shift::shl_var;
        shrv_logical_i32x4(I32x4) -> I32x4 => shift::shr_logical_var;
        shrv_logical_i64x2(I64x2) -> I64x2 => shift::shr_logical_var;
        shrv_logical_i32x8(I32x8) -> I32x8 => shift::shr_logical_var;
        shrv_logical_i64x4(I64x4) -> I64x4 => shift::shr_logical_var;
        shrv_arith_i32x4(I32x4) -> I32x4 => shift::shr_arith_var;
        shrv_arith_i32x8(I32x8) -> I32x8 => shift::shr_arith_var;
    }
}

/// A complete backend: every family plus an identity.
pub trait Backend:
    SaturatingOps + CompareOps + ConvertOps + ShuffleOps + ShiftOps + Copy + Default + 'static
{
    const KIND: BackendKind;

    /// Short name for logs and benchmark labels.
    const NAME: &'static str;
}

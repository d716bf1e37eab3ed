//! Lane element types.
//!
//! A [`Lane`] is one fixed-width element of a vector register. The set of lane
//! types is closed: signed and unsigned 8/16/32/64-bit integers and 32/64-bit
//! IEEE 754 floats. Every lane type can produce a canonical mask value (all bits
//! set or all bits clear) and report its most significant bit, which is what the
//! comparison, select and movemask paths are built on.

use std::fmt::Debug;
use std::num::FpCategory;

use num::traits::{AsPrimitive, Float, PrimInt};

mod sealed {
    pub trait Sealed {}
}

/// One element of a fixed-width vector.
pub trait Lane: sealed::Sealed + Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    /// Width of the lane in bits.
    const BITS: u32;

    /// Canonical mask lane: all bits set when `set`, all bits clear otherwise.
    fn mask(set: bool) -> Self;

    /// Most significant (sign) bit of the lane's bit pattern.
    fn msb(self) -> bool;

    /// `true` for the all-ones bit pattern.
    fn is_all_ones(self) -> bool;
}

/// Integer lanes.
pub trait IntLane: Lane + PrimInt + AsPrimitive<i64> + AsPrimitive<u64> {
    /// `true` for the two's complement lane types.
    const SIGNED: bool;

    /// Builds a lane from the low `BITS` bits of `bits`.
    fn from_u64_bits(bits: u64) -> Self;

    /// Bit pattern of the lane, zero extended.
    fn to_u64_bits(self) -> u64;
}

/// Integer lanes narrow enough for the saturating instructions.
///
/// The exact result of any add, subtract or narrowing pack of two such lanes
/// fits in `Wide`, so clamping `Wide` back into the lane type is lossless
/// everywhere except at the bounds, which is the saturation itself.
pub trait SaturatingLane: IntLane {
    /// Intermediate wide enough to hold any exact result.
    type Wide: PrimInt + AsPrimitive<Self> + 'static;

    fn widen(self) -> Self::Wide;

    /// Clamps `wide` into `[Self::MIN, Self::MAX]`.
    fn saturate(wide: Self::Wide) -> Self;
}

/// Floating point lanes.
pub trait FloatLane: Lane + Float {
    /// Unsigned integer with the same width as the float.
    type Bits: IntLane;

    /// Raw IEEE 754 encoding.
    fn to_lane_bits(self) -> Self::Bits;

    fn from_lane_bits(bits: Self::Bits) -> Self;

    /// Rounds to the nearest integral value, ties to even.
    fn round_even(self) -> Self;

    /// Exact widening to `f64`.
    fn widen_f64(self) -> f64;

    /// Sets the quiet bit of a NaN, leaving payload and sign alone.
    fn quiet(self) -> Self;

    #[inline(always)]
    fn is_denormal(self) -> bool {
        self.classify() == FpCategory::Subnormal
    }

    /// Signed zero with the sign of `self`.
    #[inline(always)]
    fn signed_zero(self) -> Self {
        if self.is_sign_negative() {
            Self::neg_zero()
        } else {
            Self::zero()
        }
    }
}

macro_rules! impl_int_lane {
    ($($ty:ty => $signed:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Lane for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline(always)]
                fn mask(set: bool) -> Self {
                    if set { !0 } else { 0 }
                }

                #[inline(always)]
                fn msb(self) -> bool {
                    (self >> (<$ty>::BITS - 1)) & 1 == 1
                }

                #[inline(always)]
                fn is_all_ones(self) -> bool {
                    self == !0
                }
            }

            impl IntLane for $ty {
                const SIGNED: bool = $signed;

                #[inline(always)]
                fn from_u64_bits(bits: u64) -> Self {
                    bits as $ty
                }

                #[inline(always)]
                fn to_u64_bits(self) -> u64 {
                    // widen through the unsigned type of the same width so
                    // negative values do not sign extend
                    self as u64 & (u64::MAX >> (64 - <$ty>::BITS))
                }
            }
        )*
    };
}

impl_int_lane! {
    i8 => true,
    u8 => false,
    i16 => true,
    u16 => false,
    i32 => true,
    u32 => false,
    i64 => true,
    u64 => false,
}

macro_rules! impl_saturating_lane {
    ($($ty:ty),*) => {
        $(
            impl SaturatingLane for $ty {
                type Wide = i32;

                #[inline(always)]
                fn widen(self) -> i32 {
                    self.as_()
                }

                #[inline(always)]
                fn saturate(wide: i32) -> Self {
                    let lo: i32 = <$ty>::MIN.as_();
                    let hi: i32 = <$ty>::MAX.as_();
                    num::clamp(wide, lo, hi).as_()
                }
            }
        )*
    };
}

impl_saturating_lane!(i8, u8, i16, u16);

macro_rules! impl_float_lane {
    ($($ty:ty => $bits:ty, $quiet:expr);* $(;)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Lane for $ty {
                const BITS: u32 = <$bits>::BITS;

                #[inline(always)]
                fn mask(set: bool) -> Self {
                    <$ty>::from_bits(if set { <$bits>::MAX } else { 0 })
                }

                #[inline(always)]
                fn msb(self) -> bool {
                    self.is_sign_negative()
                }

                #[inline(always)]
                fn is_all_ones(self) -> bool {
                    <$ty>::to_bits(self) == <$bits>::MAX
                }
            }

            impl FloatLane for $ty {
                type Bits = $bits;

                #[inline(always)]
                fn to_lane_bits(self) -> $bits {
                    <$ty>::to_bits(self)
                }

                #[inline(always)]
                fn from_lane_bits(bits: $bits) -> Self {
                    <$ty>::from_bits(bits)
                }

                #[inline(always)]
                fn round_even(self) -> Self {
                    <$ty>::round_ties_even(self)
                }

                #[inline(always)]
                fn widen_f64(self) -> f64 {
                    self as f64
                }

                #[inline(always)]
                fn quiet(self) -> Self {
                    if self.is_nan() {
                        <$ty>::from_bits(<$ty>::to_bits(self) | $quiet)
                    } else {
                        self
                    }
                }
            }
        )*
    };
}

impl_float_lane! {
    f32 => u32, 1 << 22;
    f64 => u64, 1 << 51;
}

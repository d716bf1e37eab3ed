//! Rounding-mode-aware conversions.
//!
//! Conversions that can be inexact read the emulated MXCSR (see
//! [`csr`](crate::engine::csr)) and never write it:
//!
//! - float → integer rounds by the current mode, or truncates for the `cvtt*`
//!   forms. NaN, infinities and anything outside the target range produce the
//!   integer indefinite value, the bit pattern of `MIN` for the width. That value
//!   is the documented result, not an error.
//! - integer → `f32`, `i64` → `f64` and `f64` → `f32` round by the current mode.
//! - `round` produces an integral float in the mode encoded by its immediate
//!   or, with `_MM_FROUND_CUR_DIRECTION`, the current mode.
//!
//! With DAZ set, denormal float inputs are read as zero of the same sign; with
//! FTZ set, a denormal `f32` produced by narrowing is flushed to zero.

use std::cmp::Ordering;

use crate::engine::csr::{self, Mxcsr, RoundingMode};
use crate::lane::{FloatLane, IntLane};
use crate::vector::Vector;

pub const _MM_FROUND_TO_NEAREST_INT: i32 = 0x00;
pub const _MM_FROUND_TO_NEG_INF: i32 = 0x01;
pub const _MM_FROUND_TO_POS_INF: i32 = 0x02;
pub const _MM_FROUND_TO_ZERO: i32 = 0x03;
pub const _MM_FROUND_CUR_DIRECTION: i32 = 0x04;
pub const _MM_FROUND_RAISE_EXC: i32 = 0x00;
pub const _MM_FROUND_NO_EXC: i32 = 0x08;
pub const _MM_FROUND_NINT: i32 = 0x00;
pub const _MM_FROUND_FLOOR: i32 = 0x01;
pub const _MM_FROUND_CEIL: i32 = 0x02;
pub const _MM_FROUND_TRUNC: i32 = 0x03;
pub const _MM_FROUND_RINT: i32 = 0x04;
pub const _MM_FROUND_NEARBYINT: i32 = 0x0c;

/// Signed integer widths a float can be converted to.
pub trait IndefiniteInt: IntLane {
    /// Integer indefinite: the result of any invalid conversion.
    const INDEFINITE: Self;

    /// `2^(BITS - 1)`, the first positive value out of range.
    const LIMIT: f64;

    /// Converts an integral, in-range `f64`.
    fn from_integral(value: f64) -> Self;
}

impl IndefiniteInt for i32 {
    const INDEFINITE: i32 = i32::MIN;
    const LIMIT: f64 = 2_147_483_648.0;

    #[inline(always)]
    fn from_integral(value: f64) -> i32 {
        value as i32
    }
}

impl IndefiniteInt for i64 {
    const INDEFINITE: i64 = i64::MIN;
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    #[inline(always)]
    fn from_integral(value: f64) -> i64 {
        value as i64
    }
}

/// Rounding selected by an SSE4.1 `ROUND*` immediate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundControl {
    Fixed(RoundingMode),
    Current,
}

impl RoundControl {
    /// Decodes a 4-bit `_MM_FROUND_*` immediate. Bit 3 only suppresses the
    /// precision exception and does not change the result.
    pub const fn from_imm(imm: i32) -> RoundControl {
        assert!(imm >= 0 && imm < 16, "rounding immediate must be in 0..=15");
        if imm & _MM_FROUND_CUR_DIRECTION != 0 {
            RoundControl::Current
        } else {
            RoundControl::Fixed(RoundingMode::from_rc(imm as u32))
        }
    }

    #[inline(always)]
    pub fn resolve(self, register: Mxcsr) -> RoundingMode {
        match self {
            RoundControl::Fixed(mode) => mode,
            RoundControl::Current => register.rounding_mode(),
        }
    }
}

/// Resolves a rounding immediate at compile time.
pub struct Round<const IMM: i32>;

impl<const IMM: i32> Round<IMM> {
    pub const CONTROL: RoundControl = RoundControl::from_imm(IMM);
}

#[inline(always)]
fn flush<F: FloatLane>(x: F, daz: bool) -> F {
    if daz && x.is_denormal() {
        x.signed_zero()
    } else {
        x
    }
}

/// Rounds to an integral value in `mode`, keeping the sign of zero and
/// quieting NaN.
#[inline(always)]
pub fn round_integral<F: FloatLane>(x: F, mode: RoundingMode) -> F {
    if x.is_nan() {
        return x.quiet();
    }
    match mode {
        RoundingMode::Nearest => x.round_even(),
        RoundingMode::Down => x.floor(),
        RoundingMode::Up => x.ceil(),
        RoundingMode::TowardZero => x.trunc(),
    }
}

/// Converts one float to a signed integer in `mode`.
///
/// NaN and out-of-range values (after rounding) yield `I::INDEFINITE`.
#[inline(always)]
pub fn float_to_int<F: FloatLane, I: IndefiniteInt>(x: F, mode: RoundingMode, daz: bool) -> I {
    let x = flush(x, daz);
    if x.is_nan() {
        return I::INDEFINITE;
    }
    let rounded = round_integral(x, mode).widen_f64();
    if rounded >= I::LIMIT || rounded < -I::LIMIT {
        I::INDEFINITE
    } else {
        I::from_integral(rounded)
    }
}

/// Converts one float under the current register.
#[inline(always)]
pub fn convert_float_to_int<F: FloatLane, I: IndefiniteInt>(x: F) -> I {
    let register = csr::current();
    float_to_int(x, register.rounding_mode(), register.denormals_are_zero())
}

/// Converts one float with truncation, whatever the current mode.
#[inline(always)]
pub fn truncate_float_to_int<F: FloatLane, I: IndefiniteInt>(x: F) -> I {
    float_to_int(x, RoundingMode::TowardZero, csr::current().denormals_are_zero())
}

/// Next representable value toward +∞ (`up`) or −∞.
#[inline(always)]
fn step<F: FloatLane>(x: F, up: bool) -> F {
    if x == F::zero() {
        let tiny = F::from_lane_bits(num::one());
        return if up { tiny } else { -tiny };
    }
    let bits = x.to_lane_bits();
    let away_from_zero = (x > F::zero()) == up;
    let one: F::Bits = num::one();
    F::from_lane_bits(if away_from_zero { bits + one } else { bits - one })
}

/// Corrects a round-to-nearest result into `mode`.
///
/// `nearest` is the correctly rounded value and `order` is how it compares to
/// the exact value it approximates.
#[inline(always)]
fn direct<F: FloatLane>(nearest: F, order: Ordering, mode: RoundingMode) -> F {
    match (mode, order) {
        (RoundingMode::Down, Ordering::Greater) => step(nearest, false),
        (RoundingMode::Up, Ordering::Less) => step(nearest, true),
        (RoundingMode::TowardZero, Ordering::Greater) if nearest > F::zero() => {
            step(nearest, false)
        }
        (RoundingMode::TowardZero, Ordering::Less) if nearest < F::zero() => step(nearest, true),
        _ => nearest,
    }
}

/// `i64` → `f32` rounded in `mode`.
#[inline(always)]
pub fn int_to_f32(x: i64, mode: RoundingMode) -> f32 {
    let nearest = x as f32;
    let order = (f64::from(nearest) as i128).cmp(&i128::from(x));
    direct(nearest, order, mode)
}

/// `i64` → `f64` rounded in `mode`.
#[inline(always)]
pub fn int_to_f64(x: i64, mode: RoundingMode) -> f64 {
    let nearest = x as f64;
    let order = (nearest as i128).cmp(&i128::from(x));
    direct(nearest, order, mode)
}

/// NaN narrowing keeps the sign and the top 22 payload bits and sets the quiet bit.
#[inline(always)]
fn narrow_nan(x: f64) -> f32 {
    let bits = x.to_bits();
    let sign = ((bits >> 63) as u32) << 31;
    let payload = ((bits >> 29) & 0x003f_ffff) as u32;
    f32::from_bits(sign | 0x7fc0_0000 | payload)
}

#[inline(always)]
fn widen_nan(x: f32) -> f64 {
    let bits = x.to_bits();
    let sign = u64::from(bits >> 31) << 63;
    let payload = u64::from(bits & 0x003f_ffff) << 29;
    f64::from_bits(sign | 0x7ff8_0000_0000_0000 | payload)
}

/// `f64` → `f32` under `register` (rounding mode, FTZ and DAZ).
#[inline(always)]
pub fn narrow_f64(x: f64, register: Mxcsr) -> f32 {
    let x = flush(x, register.denormals_are_zero());
    if x.is_nan() {
        return narrow_nan(x);
    }
    let nearest = x as f32;
    let order = f64::from(nearest)
        .partial_cmp(&x)
        .unwrap_or(Ordering::Equal);
    let rounded = direct(nearest, order, register.rounding_mode());
    if register.flush_to_zero() && rounded.is_denormal() {
        rounded.signed_zero()
    } else {
        rounded
    }
}

/// `f32` → `f64`; exact except that NaN is quieted and DAZ applies.
#[inline(always)]
pub fn widen_f32(x: f32, register: Mxcsr) -> f64 {
    let x = flush(x, register.denormals_are_zero());
    if x.is_nan() {
        widen_nan(x)
    } else {
        f64::from(x)
    }
}

/// Packed float → integer under the current register. Destination lanes past
/// the source lane count are zero (`CVTPD2DQ` fills the upper half that way).
#[inline(always)]
pub fn to_int<F, I, const N: usize, const M: usize>(v: Vector<F, N>) -> Vector<I, M>
where
    F: FloatLane,
    I: IndefiniteInt,
{
    let register = csr::current();
    let (mode, daz) = (register.rounding_mode(), register.denormals_are_zero());
    Vector::from_fn(|i| {
        if i < N {
            float_to_int(v.lane(i), mode, daz)
        } else {
            I::zero()
        }
    })
}

/// Packed float → integer with truncation.
#[inline(always)]
pub fn to_int_truncate<F, I, const N: usize, const M: usize>(v: Vector<F, N>) -> Vector<I, M>
where
    F: FloatLane,
    I: IndefiniteInt,
{
    let daz = csr::current().denormals_are_zero();
    Vector::from_fn(|i| {
        if i < N {
            float_to_int(v.lane(i), RoundingMode::TowardZero, daz)
        } else {
            I::zero()
        }
    })
}

/// Packed `i32` → `f32` in the current rounding mode.
#[inline(always)]
pub fn i32_to_f32<const N: usize>(v: Vector<i32, N>) -> Vector<f32, N> {
    let mode = csr::rounding_mode();
    v.map(|x| int_to_f32(i64::from(x), mode))
}

/// Low `M` lanes of `i32` → `f64`, always exact.
#[inline(always)]
pub fn i32_to_f64<const N: usize, const M: usize>(v: Vector<i32, N>) -> Vector<f64, M> {
    Vector::from_fn(|i| f64::from(v.lane(i)))
}

/// Packed `f64` → `f32`; destination lanes past the source count are zero.
#[inline(always)]
pub fn f64_to_f32<const N: usize, const M: usize>(v: Vector<f64, N>) -> Vector<f32, M> {
    let register = csr::current();
    Vector::from_fn(|i| if i < N { narrow_f64(v.lane(i), register) } else { 0.0 })
}

/// Low `M` lanes of `f32` → `f64`.
#[inline(always)]
pub fn f32_to_f64<const N: usize, const M: usize>(v: Vector<f32, N>) -> Vector<f64, M> {
    let register = csr::current();
    Vector::from_fn(|i| widen_f32(v.lane(i), register))
}

/// Lane 0 float → integer under the current register.
#[inline(always)]
pub fn scalar_to_int<F: FloatLane, I: IndefiniteInt, const N: usize>(v: Vector<F, N>) -> I {
    convert_float_to_int(v.lane(0))
}

/// Lane 0 float → integer with truncation.
#[inline(always)]
pub fn scalar_to_int_truncate<F: FloatLane, I: IndefiniteInt, const N: usize>(
    v: Vector<F, N>,
) -> I {
    truncate_float_to_int(v.lane(0))
}

/// Packed round to integral under `control`.
#[inline(always)]
pub fn round<F: FloatLane, const N: usize>(control: RoundControl, v: Vector<F, N>) -> Vector<F, N> {
    let register = csr::current();
    let mode = control.resolve(register);
    let daz = register.denormals_are_zero();
    v.map(|x| round_integral(flush(x, daz), mode))
}

/// Lane 0 of `b` rounded, upper lanes from `a`.
#[inline(always)]
pub fn round_scalar<F: FloatLane, const N: usize>(
    control: RoundControl,
    a: Vector<F, N>,
    b: Vector<F, N>,
) -> Vector<F, N> {
    a.with_lane(0, round(control, b).lane(0))
}

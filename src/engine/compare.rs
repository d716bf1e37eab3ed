//! Comparison mask engine.
//!
//! Float comparisons follow the AVX `VCMPPS` predicate table: the 5-bit
//! immediate selects an ordered relation and the result to produce when either
//! operand is NaN. Predicates 16..=31 are the signalling twins of 0..=15; since
//! floating point exceptions are not modelled they produce identical masks.
//!
//! Every result lane is a canonical mask: all bits set or all bits clear.
//!
//! Denormal inputs are read as signed zero while DAZ is set in the emulated
//! register, as the hardware does for every packed float instruction.

use crate::engine::csr;
use crate::lane::{FloatLane, IntLane, Lane};
use crate::vector::Vector;

pub const _CMP_EQ_OQ: i32 = 0x00;
pub const _CMP_LT_OS: i32 = 0x01;
pub const _CMP_LE_OS: i32 = 0x02;
pub const _CMP_UNORD_Q: i32 = 0x03;
pub const _CMP_NEQ_UQ: i32 = 0x04;
pub const _CMP_NLT_US: i32 = 0x05;
pub const _CMP_NLE_US: i32 = 0x06;
pub const _CMP_ORD_Q: i32 = 0x07;
pub const _CMP_EQ_UQ: i32 = 0x08;
pub const _CMP_NGE_US: i32 = 0x09;
pub const _CMP_NGT_US: i32 = 0x0a;
pub const _CMP_FALSE_OQ: i32 = 0x0b;
pub const _CMP_NEQ_OQ: i32 = 0x0c;
pub const _CMP_GE_OS: i32 = 0x0d;
pub const _CMP_GT_OS: i32 = 0x0e;
pub const _CMP_TRUE_UQ: i32 = 0x0f;
pub const _CMP_EQ_OS: i32 = 0x10;
pub const _CMP_LT_OQ: i32 = 0x11;
pub const _CMP_LE_OQ: i32 = 0x12;
pub const _CMP_UNORD_S: i32 = 0x13;
pub const _CMP_NEQ_US: i32 = 0x14;
pub const _CMP_NLT_UQ: i32 = 0x15;
pub const _CMP_NLE_UQ: i32 = 0x16;
pub const _CMP_ORD_S: i32 = 0x17;
pub const _CMP_EQ_US: i32 = 0x18;
pub const _CMP_NGE_UQ: i32 = 0x19;
pub const _CMP_NGT_UQ: i32 = 0x1a;
pub const _CMP_FALSE_OS: i32 = 0x1b;
pub const _CMP_NEQ_OS: i32 = 0x1c;
pub const _CMP_GE_OQ: i32 = 0x1d;
pub const _CMP_GT_OQ: i32 = 0x1e;
pub const _CMP_TRUE_US: i32 = 0x1f;

/// Relation evaluated when both operands are ordered (neither is NaN).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Relation {
    False,
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
    Ne,
    True,
}

impl Relation {
    #[inline(always)]
    fn holds<F: FloatLane>(self, a: F, b: F) -> bool {
        match self {
            Relation::False => false,
            Relation::Eq => a == b,
            Relation::Lt => a < b,
            Relation::Le => a <= b,
            Relation::Gt => a > b,
            Relation::Ge => a >= b,
            Relation::Ne => a != b,
            Relation::True => true,
        }
    }
}

/// A decoded comparison predicate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Predicate {
    /// Relation for ordered operands.
    pub relation: Relation,
    /// Result when either operand is NaN.
    pub unordered: bool,
    /// Whether the hardware would signal on quiet NaN operands.
    pub signaling: bool,
}

impl Predicate {
    /// Decodes a `_CMP_*` immediate.
    ///
    /// Panics for immediates outside `0..=31`; evaluated in a const context that
    /// panic is a compile error.
    pub const fn from_imm(imm: i32) -> Predicate {
        assert!(imm >= 0 && imm < 32, "comparison predicate must be in 0..=31");

        let (relation, unordered) = match imm & 0x0f {
            0x00 => (Relation::Eq, false),
            0x01 => (Relation::Lt, false),
            0x02 => (Relation::Le, false),
            0x03 => (Relation::False, true),
            0x04 => (Relation::Ne, true),
            0x05 => (Relation::Ge, true),
            0x06 => (Relation::Gt, true),
            0x07 => (Relation::True, false),
            0x08 => (Relation::Eq, true),
            0x09 => (Relation::Lt, true),
            0x0a => (Relation::Le, true),
            0x0b => (Relation::False, false),
            0x0c => (Relation::Ne, false),
            0x0d => (Relation::Ge, false),
            0x0e => (Relation::Gt, false),
            _ => (Relation::True, true),
        };

        // LT, LE, NLT, NLE, NGE, NGT, GE, GT signal on QNaN in the low half;
        // the upper half flips that.
        let base_signaling = matches!(imm & 0x0f, 0x01 | 0x02 | 0x05 | 0x06 | 0x09 | 0x0a | 0x0d | 0x0e);
        let signaling = base_signaling != (imm & 0x10 != 0);

        Predicate {
            relation,
            unordered,
            signaling,
        }
    }

    /// Evaluates the predicate on two scalars.
    #[inline(always)]
    pub fn holds<F: FloatLane>(self, a: F, b: F) -> bool {
        if a.is_nan() || b.is_nan() {
            self.unordered
        } else {
            self.relation.holds(a, b)
        }
    }
}

/// Resolves a predicate immediate at compile time.
pub struct Cmp<const IMM: i32>;

impl<const IMM: i32> Cmp<IMM> {
    pub const PREDICATE: Predicate = Predicate::from_imm(IMM);
}

impl TryFrom<u8> for Predicate {
    type Error = crate::error::SimdportError;

    fn try_from(imm: u8) -> crate::error::Result<Self> {
        if imm < 32 {
            Ok(Predicate::from_imm(i32::from(imm)))
        } else {
            Err(crate::error::immediate_error("predicate", i64::from(imm), 31))
        }
    }
}

#[inline(always)]
fn flush<F: FloatLane>(x: F, daz: bool) -> F {
    if daz && x.is_denormal() {
        x.signed_zero()
    } else {
        x
    }
}

/// Packed float comparison producing a mask per lane.
#[inline(always)]
pub fn cmp<F: FloatLane, const N: usize>(
    predicate: Predicate,
    a: Vector<F, N>,
    b: Vector<F, N>,
) -> Vector<F, N> {
    let daz = csr::current().denormals_are_zero();
    a.zip_map(b, |x, y| F::mask(predicate.holds(flush(x, daz), flush(y, daz))))
}

/// Scalar comparison of lane 0; upper lanes are copied from `a`.
#[inline(always)]
pub fn cmp_scalar<F: FloatLane, const N: usize>(
    predicate: Predicate,
    a: Vector<F, N>,
    b: Vector<F, N>,
) -> Vector<F, N> {
    let daz = csr::current().denormals_are_zero();
    let lane0 = predicate.holds(flush(a.lane(0), daz), flush(b.lane(0), daz));
    a.with_lane(0, F::mask(lane0))
}

/// `MINPS` semantics: `a < b ? a : b`.
///
/// When either operand is NaN, or both are zeros of any sign, the second
/// operand is returned. The operation is therefore not commutative.
#[inline(always)]
pub fn min<F: FloatLane, const N: usize>(a: Vector<F, N>, b: Vector<F, N>) -> Vector<F, N> {
    let daz = csr::current().denormals_are_zero();
    a.zip_map(b, |x, y| {
        let (x, y) = (flush(x, daz), flush(y, daz));
        if x < y {
            x
        } else {
            y
        }
    })
}

/// `MAXPS` semantics: `a > b ? a : b`, second operand on NaN or equal zeros.
#[inline(always)]
pub fn max<F: FloatLane, const N: usize>(a: Vector<F, N>, b: Vector<F, N>) -> Vector<F, N> {
    let daz = csr::current().denormals_are_zero();
    a.zip_map(b, |x, y| {
        let (x, y) = (flush(x, daz), flush(y, daz));
        if x > y {
            x
        } else {
            y
        }
    })
}

/// Lane 0 through [`min`], upper lanes from `a`.
#[inline(always)]
pub fn min_scalar<F: FloatLane, const N: usize>(a: Vector<F, N>, b: Vector<F, N>) -> Vector<F, N> {
    a.with_lane(0, min(a, b).lane(0))
}

/// Lane 0 through [`max`], upper lanes from `a`.
#[inline(always)]
pub fn max_scalar<F: FloatLane, const N: usize>(a: Vector<F, N>, b: Vector<F, N>) -> Vector<F, N> {
    a.with_lane(0, max(a, b).lane(0))
}

/// Integer equality mask.
#[inline(always)]
pub fn cmpeq<T: IntLane, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.zip_map(b, |x, y| T::mask(x == y))
}

/// Integer greater-than mask, at the signedness of `T`.
#[inline(always)]
pub fn cmpgt<T: IntLane, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.zip_map(b, |x, y| T::mask(x > y))
}

/// Integer lane minimum, at the signedness of `T`.
#[inline(always)]
pub fn min_int<T: IntLane, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.zip_map(b, |x, y| if x < y { x } else { y })
}

/// Integer lane maximum, at the signedness of `T`.
#[inline(always)]
pub fn max_int<T: IntLane, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.zip_map(b, |x, y| if x > y { x } else { y })
}

/// Gathers the most significant bit of every lane into an integer.
#[inline(always)]
pub fn movemask<T: Lane, const N: usize>(a: Vector<T, N>) -> i32 {
    a.msb_mask() as i32
}

/// Picks `b` where the mask lane's most significant bit is set, else `a`.
#[inline(always)]
pub fn blendv<T: Lane, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
    mask: Vector<T, N>,
) -> Vector<T, N> {
    Vector::from_fn(|i| if mask.lane(i).msb() { b.lane(i) } else { a.lane(i) })
}

/// Bitwise select: `(mask & b) | (!mask & a)`.
#[inline(always)]
pub fn select<T: IntLane, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
    mask: Vector<T, N>,
) -> Vector<T, N> {
    Vector::from_fn(|i| (mask.lane(i) & b.lane(i)) | (!mask.lane(i) & a.lane(i)))
}

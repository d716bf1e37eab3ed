//! Scalar semantic-equivalence engine.
//!
//! Every operation here is the reference behaviour of one instruction family,
//! written lane by lane over [`Vector`](crate::vector::Vector). The scalar
//! backend is nothing but these functions; the native and portable backends
//! must agree with them bit for bit.
//!
//! - [`saturate`]: clamped add/sub, saturating packs, `abs`, `avg`
//! - [`compare`]: predicate masks, `min`/`max`, `movemask`, blends
//! - [`csr`]: the emulated MXCSR (rounding mode, FTZ, DAZ)
//! - [`convert`]: rounding-mode-aware conversions and `round`
//! - [`shuffle`]: compile-time shuffle descriptors and their resolution
//! - [`shift`]: lane shifts with the compare-then-zero count rule

pub mod compare;
pub mod convert;
pub mod csr;
pub mod saturate;
pub mod shift;
pub mod shuffle;

use std::marker::PhantomData;

/// Compile-time range check for an unsigned immediate of `BITS` bits.
pub(crate) struct UimmBits<const IMM: i32, const BITS: u32>(PhantomData<()>);

impl<const IMM: i32, const BITS: u32> UimmBits<IMM, BITS> {
    pub(crate) const VALID: () = assert!(
        IMM >= 0 && (IMM as i64) < (1i64 << BITS),
        "immediate operand out of range"
    );
}

/// Rejects an out-of-range immediate at compile time.
macro_rules! static_assert_uimm_bits {
    ($imm:ident, $bits:expr) => {
        #[allow(clippy::let_unit_value)]
        let () = $crate::engine::UimmBits::<$imm, $bits>::VALID;
    };
}

pub(crate) use static_assert_uimm_bits;

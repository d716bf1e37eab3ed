//! Scalar fallback backend: the reference engine with no overrides.

use super::traits::{Backend, CompareOps, ConvertOps, SaturatingOps, ShiftOps, ShuffleOps};
use super::BackendKind;

/// Lane-by-lane reference implementation. Available on every target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScalarBackend;

impl SaturatingOps for ScalarBackend {}
impl CompareOps for ScalarBackend {}
impl ConvertOps for ScalarBackend {}
impl ShuffleOps for ScalarBackend {}
impl ShiftOps for ScalarBackend {}

impl Backend for ScalarBackend {
    const KIND: BackendKind = BackendKind::Scalar;
    const NAME: &'static str = "scalar";
}

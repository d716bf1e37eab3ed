//! Compile-time backend selection.
//!
//! Three tiers implement the operation families in [`traits`]:
//!
//! 1. **native**: `std::arch` single-instruction builtins (SSE2 through AVX2 on
//!    x86, NEON on aarch64), each override gated on the target feature it needs
//! 2. **portable**: `core::simd` generic vectors, available on nightly
//! 3. **scalar**: the reference engine, always available
//!
//! `build.rs` picks the tier from the compilation target's features, the
//! toolchain channel, the `force-scalar` cargo feature and the
//! `SIMDPORT_BACKEND` environment variable, and emits
//! `cfg(simdport_backend = "...")`. [`Active`] is a type alias resolved from that
//! cfg; there is no runtime detection and no dynamic dispatch.
//!
//! A native method that cannot serve a call (missing target feature, or an
//! emulated register state the hardware instruction would not honour) forwards
//! to [`Lower`], the best tier below it.

use std::fmt;
use std::str::FromStr;

use crate::error::{self, SimdportError};

pub mod scalar;
pub mod traits;

#[cfg(simdport_portable)]
pub mod portable;

#[cfg(all(
    simdport_backend = "native",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub mod x86;

#[cfg(all(simdport_backend = "native", target_arch = "aarch64"))]
pub mod neon;

#[cfg(all(
    simdport_backend = "native",
    not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64"))
))]
compile_error!("the native backend supports x86, x86_64 and aarch64 targets only");

#[cfg(all(simdport_backend = "portable", not(simdport_portable)))]
compile_error!("the portable backend needs core::simd, which requires a nightly toolchain");

pub use scalar::ScalarBackend;
pub use traits::{Backend, CompareOps, ConvertOps, SaturatingOps, ShiftOps, ShuffleOps};

#[cfg(simdport_portable)]
pub use portable::PortableBackend;

#[cfg(all(
    simdport_backend = "native",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub use x86::NativeBackend;

#[cfg(all(simdport_backend = "native", target_arch = "aarch64"))]
pub use neon::NeonBackend;

/// Tier a native method falls back to.
#[cfg(simdport_portable)]
pub type Lower = portable::PortableBackend;

#[cfg(not(simdport_portable))]
pub type Lower = scalar::ScalarBackend;

/// The backend every intrinsic routes through.
#[cfg(all(
    simdport_backend = "native",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub type Active = x86::NativeBackend;

#[cfg(all(simdport_backend = "native", target_arch = "aarch64"))]
pub type Active = neon::NeonBackend;

#[cfg(simdport_backend = "portable")]
pub type Active = portable::PortableBackend;

#[cfg(not(any(simdport_backend = "native", simdport_backend = "portable")))]
pub type Active = scalar::ScalarBackend;

/// Backend tiers, best first.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub enum BackendKind {
    Native,
    Portable,
    Scalar,
}

impl BackendKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            BackendKind::Native => "native",
            BackendKind::Portable => "portable",
            BackendKind::Scalar => "scalar",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = SimdportError;

    /// Accepts the same names as the `SIMDPORT_BACKEND` build override.
    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(BackendKind::Native),
            "portable" => Ok(BackendKind::Portable),
            "scalar" | "fallback" => Ok(BackendKind::Scalar),
            other => Err(error::parse_error("backend", other)),
        }
    }
}

/// What was compiled in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BackendInfo {
    pub kind: BackendKind,
    pub name: &'static str,
    /// Tier a native method drops to when it cannot serve a call.
    pub fallback: BackendKind,
    pub target_features: &'static [&'static str],
}

impl fmt::Display for BackendInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}), fallback {}", self.name, self.kind, self.fallback)?;
        if !self.target_features.is_empty() {
            write!(f, ", features [{}]", self.target_features.join(", "))?;
        }
        Ok(())
    }
}

const TARGET_FEATURES: &[&str] = &[
    #[cfg(target_feature = "sse2")]
    "sse2",
    #[cfg(target_feature = "ssse3")]
    "ssse3",
    #[cfg(target_feature = "sse4.1")]
    "sse4.1",
    #[cfg(target_feature = "sse4.2")]
    "sse4.2",
    #[cfg(target_feature = "avx")]
    "avx",
    #[cfg(target_feature = "avx2")]
    "avx2",
    #[cfg(target_feature = "neon")]
    "neon",
];

/// The compiled-in backend.
pub const ACTIVE: BackendInfo = BackendInfo {
    kind: <Active as Backend>::KIND,
    name: <Active as Backend>::NAME,
    fallback: <Lower as Backend>::KIND,
    target_features: TARGET_FEATURES,
};

/// Logs the compiled-in backend at `debug` and returns it.
pub fn describe() -> BackendInfo {
    log::debug!("simdport backend: {}", ACTIVE);
    ACTIVE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_parse() {
        assert_eq!("native".parse::<BackendKind>().ok(), Some(BackendKind::Native));
        assert_eq!(" Scalar".parse::<BackendKind>().ok(), Some(BackendKind::Scalar));
        assert_eq!("fallback".parse::<BackendKind>().ok(), Some(BackendKind::Scalar));
        assert!("avx1024".parse::<BackendKind>().is_err());
    }

    #[test]
    fn test_active_matches_build_cfg() {
        let info = describe();
        if cfg!(simdport_backend = "native") {
            assert_eq!(info.kind, BackendKind::Native);
        } else if cfg!(simdport_backend = "portable") {
            assert_eq!(info.kind, BackendKind::Portable);
        } else {
            assert_eq!(info.kind, BackendKind::Scalar);
        }
        assert!(info.fallback > BackendKind::Native);
    }

    #[test]
    fn test_display_lists_features() {
        let info = BackendInfo {
            kind: BackendKind::Native,
            name: "x86",
            fallback: BackendKind::Scalar,
            target_features: &["sse2", "avx2"],
        };
        assert_eq!(info.to_string(), "x86 (native), fallback scalar, features [sse2, avx2]");
    }
}

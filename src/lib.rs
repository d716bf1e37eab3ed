//! Bit-exact portable emulation of the x86 SIMD intrinsics, SSE through AVX2.
//!
//! The crate has three layers:
//!
//! - [`vector`]: fixed-width lane vectors ([`Vector<T, N>`](vector::Vector))
//!   and the Intel register aliases (`M128i`, `M256`, ...), with free
//!   reinterpretation between layouts of the same width.
//! - [`engine`]: the reference semantics. Saturating arithmetic, the 32
//!   comparison predicates, conversions under the emulated `MXCSR`, shuffle
//!   control decoding and shift count rules.
//! - [`simd`]: backends. The engine is always available as
//!   [`ScalarBackend`](simd::ScalarBackend); native (`std::arch`) and portable
//!   (`core::simd`) tiers override what they can do faster. The tier is chosen
//!   when the crate is built.
//!
//! [`intrinsics`] puts the published names on top, so code written against
//! `core::arch::x86_64` ports by switching the import:
//!
//! ```rust
//! use simdport::intrinsics::prelude::*;
//!
//! let a = _mm_setr_ps(1.5, 2.5, -1.5, f32::NAN);
//! let r = _mm_cvtps_epi32(a);
//! assert_eq!(_mm_cvtsi128_si32(r), 2);
//! assert_eq!(_mm_extract_epi32::<3>(r), i32::MIN);
//! ```
#![cfg_attr(simdport_portable, feature(portable_simd))]

pub mod engine;
pub mod error;
pub mod intrinsics;
pub mod lane;
pub mod simd;
pub mod vector;

pub use error::{Result, SimdportError};
pub use lane::Lane;
pub use vector::Vector;

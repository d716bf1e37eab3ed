//! Emulated SSE control/status register (MXCSR).
//!
//! The register lives in thread-local storage, mirroring the per-thread
//! hardware register. It starts at the power-on default `0x1F80` (all
//! exceptions masked, round to nearest, FTZ and DAZ off) and changes only
//! through the setters in this module. Nothing restores it automatically:
//! code that needs a different rounding mode for a while should hold a
//! [`RoundingGuard`], which puts the previous value back when it is dropped,
//! including on early return and unwinding.
//!
//! The real MXCSR is never touched. Native backends fall back to the engine
//! whenever the emulated register is not at its default.
//!
//! ```rust
//! use simdport::engine::csr::{self, RoundingGuard, RoundingMode};
//!
//! {
//!     let _guard = RoundingGuard::new(RoundingMode::Down);
//!     assert_eq!(csr::rounding_mode(), RoundingMode::Down);
//! }
//! assert_eq!(csr::rounding_mode(), RoundingMode::Nearest);
//! ```

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::{self, SimdportError};

/// Rounding control field of MXCSR.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties to even.
    #[default]
    Nearest,
    /// Round toward negative infinity.
    Down,
    /// Round toward positive infinity.
    Up,
    /// Round toward zero (truncate).
    TowardZero,
}

impl RoundingMode {
    /// All modes, in rounding-control encoding order.
    pub const ALL: [RoundingMode; 4] = [
        RoundingMode::Nearest,
        RoundingMode::Down,
        RoundingMode::Up,
        RoundingMode::TowardZero,
    ];

    /// Mode from the two-bit rounding-control field.
    pub const fn from_rc(rc: u32) -> RoundingMode {
        match rc & 0b11 {
            0 => RoundingMode::Nearest,
            1 => RoundingMode::Down,
            2 => RoundingMode::Up,
            _ => RoundingMode::TowardZero,
        }
    }

    /// Two-bit rounding-control field.
    pub const fn rc(self) -> u32 {
        match self {
            RoundingMode::Nearest => 0,
            RoundingMode::Down => 1,
            RoundingMode::Up => 2,
            RoundingMode::TowardZero => 3,
        }
    }

    /// The `_MM_ROUND_*` encoding (rounding control in place, bits 13..=14).
    pub const fn to_mm_round(self) -> u32 {
        self.rc() << Mxcsr::RC_SHIFT
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::Nearest => "nearest",
            RoundingMode::Down => "down",
            RoundingMode::Up => "up",
            RoundingMode::TowardZero => "toward-zero",
        };
        f.write_str(name)
    }
}

impl TryFrom<u32> for RoundingMode {
    type Error = SimdportError;

    /// Accepts exactly the `_MM_ROUND_*` values.
    fn try_from(value: u32) -> error::Result<Self> {
        if value & !Mxcsr::RC_MASK != 0 {
            return Err(error::immediate_error(
                "rounding mode",
                i64::from(value),
                i64::from(Mxcsr::RC_MASK),
            ));
        }
        Ok(RoundingMode::from_rc(value >> Mxcsr::RC_SHIFT))
    }
}

impl FromStr for RoundingMode {
    type Err = SimdportError;

    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "even" => Ok(RoundingMode::Nearest),
            "down" | "floor" | "-inf" => Ok(RoundingMode::Down),
            "up" | "ceil" | "+inf" => Ok(RoundingMode::Up),
            "toward-zero" | "zero" | "truncate" => Ok(RoundingMode::TowardZero),
            other => Err(error::parse_error("rounding mode", other)),
        }
    }
}

/// Raw MXCSR image.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Mxcsr(u32);

impl Default for Mxcsr {
    fn default() -> Self {
        Mxcsr::DEFAULT
    }
}

impl Mxcsr {
    /// Power-on value: exceptions masked, round to nearest.
    pub const DEFAULT: Mxcsr = Mxcsr(0x1F80);

    pub const EXCEPTION_MASK: u32 = 0x003F;
    pub const DAZ: u32 = 0x0040;
    pub const MASK_MASK: u32 = 0x1F80;
    pub const RC_SHIFT: u32 = 13;
    pub const RC_MASK: u32 = 0x6000;
    pub const FTZ: u32 = 0x8000;

    /// Bits defined by the architecture; writes to anything else are dropped.
    pub const DEFINED: u32 = 0xFFFF;

    pub const fn from_bits(bits: u32) -> Mxcsr {
        Mxcsr(bits & Self::DEFINED)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn rounding_mode(self) -> RoundingMode {
        RoundingMode::from_rc((self.0 & Self::RC_MASK) >> Self::RC_SHIFT)
    }

    pub const fn with_rounding_mode(self, mode: RoundingMode) -> Mxcsr {
        Mxcsr((self.0 & !Self::RC_MASK) | mode.to_mm_round())
    }

    pub const fn flush_to_zero(self) -> bool {
        self.0 & Self::FTZ != 0
    }

    pub const fn with_flush_to_zero(self, on: bool) -> Mxcsr {
        if on {
            Mxcsr(self.0 | Self::FTZ)
        } else {
            Mxcsr(self.0 & !Self::FTZ)
        }
    }

    pub const fn denormals_are_zero(self) -> bool {
        self.0 & Self::DAZ != 0
    }

    pub const fn with_denormals_are_zero(self, on: bool) -> Mxcsr {
        if on {
            Mxcsr(self.0 | Self::DAZ)
        } else {
            Mxcsr(self.0 & !Self::DAZ)
        }
    }

    /// `true` when conversions behave as with the power-on register:
    /// round to nearest with neither FTZ nor DAZ set.
    pub const fn is_default_numerics(self) -> bool {
        matches!(self.rounding_mode(), RoundingMode::Nearest)
            && !self.flush_to_zero()
            && !self.denormals_are_zero()
    }
}

thread_local! {
    static REGISTER: Cell<Mxcsr> = const { Cell::new(Mxcsr::DEFAULT) };
}

/// Current value of this thread's register.
#[inline(always)]
pub fn current() -> Mxcsr {
    REGISTER.with(Cell::get)
}

/// Replaces this thread's register, returning the previous value.
#[inline]
pub fn replace(register: Mxcsr) -> Mxcsr {
    REGISTER.with(|cell| cell.replace(register))
}

#[inline]
pub fn set(register: Mxcsr) {
    replace(register);
}

#[inline(always)]
pub fn rounding_mode() -> RoundingMode {
    current().rounding_mode()
}

/// Sets the rounding mode, leaving the other fields alone.
#[inline]
pub fn set_rounding_mode(mode: RoundingMode) {
    set(current().with_rounding_mode(mode));
}

#[inline]
pub fn set_flush_to_zero(on: bool) {
    set(current().with_flush_to_zero(on));
}

#[inline]
pub fn set_denormals_are_zero(on: bool) {
    set(current().with_denormals_are_zero(on));
}

/// Scoped register change.
///
/// Captures the register on construction, installs the requested value, and
/// writes the captured value back on drop. Guards nest: each one restores what
/// it saw, so dropping in reverse order unwinds every change.
///
/// The guard is tied to the thread it was created on.
#[must_use = "the previous register is restored as soon as the guard is dropped"]
pub struct RoundingGuard {
    previous: Mxcsr,
    _thread_bound: PhantomData<*const ()>,
}

impl RoundingGuard {
    /// Switches to `mode` until the guard is dropped.
    pub fn new(mode: RoundingMode) -> Self {
        Self::with_register(current().with_rounding_mode(mode))
    }

    /// Installs a whole register image until the guard is dropped.
    pub fn with_register(register: Mxcsr) -> Self {
        let previous = replace(register);
        log::trace!(
            "mxcsr {:#06x} -> {:#06x} ({})",
            previous.bits(),
            register.bits(),
            register.rounding_mode()
        );
        RoundingGuard {
            previous,
            _thread_bound: PhantomData,
        }
    }

    /// Register value that will be restored.
    pub fn previous(&self) -> Mxcsr {
        self.previous
    }
}

impl Drop for RoundingGuard {
    fn drop(&mut self) {
        let replaced = replace(self.previous);
        log::trace!(
            "mxcsr restored {:#06x} -> {:#06x}",
            replaced.bits(),
            self.previous.bits()
        );
    }
}

/// Runs `f` with `mode` installed, restoring the previous register afterwards.
pub fn with_rounding_mode<F, R>(mode: RoundingMode, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = RoundingGuard::new(mode);
    f()
}

/// Runs `f` with a whole register image installed.
pub fn with_register<F, R>(register: Mxcsr, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = RoundingGuard::with_register(register);
    f()
}

//! MXCSR accessors.
//!
//! These read and write the emulated, thread-local register in
//! [`engine::csr`](crate::engine::csr); the hardware register is untouched.

use crate::engine::csr::{self, Mxcsr};

pub const _MM_EXCEPT_MASK: u32 = Mxcsr::EXCEPTION_MASK;
pub const _MM_MASK_MASK: u32 = Mxcsr::MASK_MASK;

pub const _MM_ROUND_NEAREST: u32 = 0x0000;
pub const _MM_ROUND_DOWN: u32 = 0x2000;
pub const _MM_ROUND_UP: u32 = 0x4000;
pub const _MM_ROUND_TOWARD_ZERO: u32 = 0x6000;
pub const _MM_ROUND_MASK: u32 = Mxcsr::RC_MASK;

pub const _MM_FLUSH_ZERO_ON: u32 = Mxcsr::FTZ;
pub const _MM_FLUSH_ZERO_OFF: u32 = 0x0000;
pub const _MM_FLUSH_ZERO_MASK: u32 = Mxcsr::FTZ;

pub const _MM_DENORMALS_ZERO_ON: u32 = Mxcsr::DAZ;
pub const _MM_DENORMALS_ZERO_OFF: u32 = 0x0000;
pub const _MM_DENORMALS_ZERO_MASK: u32 = Mxcsr::DAZ;

#[inline]
pub fn _mm_getcsr() -> u32 {
    csr::current().bits()
}

/// Bits above 15 are dropped.
#[inline]
pub fn _mm_setcsr(value: u32) {
    csr::set(Mxcsr::from_bits(value));
}

#[inline]
fn update(mask: u32, value: u32) {
    let bits = csr::current().bits();
    csr::set(Mxcsr::from_bits((bits & !mask) | (value & mask)));
}

#[allow(non_snake_case)]
#[inline]
pub fn _MM_GET_ROUNDING_MODE() -> u32 {
    _mm_getcsr() & _MM_ROUND_MASK
}

#[allow(non_snake_case)]
#[inline]
pub fn _MM_SET_ROUNDING_MODE(mode: u32) {
    update(_MM_ROUND_MASK, mode);
}

#[allow(non_snake_case)]
#[inline]
pub fn _MM_GET_FLUSH_ZERO_MODE() -> u32 {
    _mm_getcsr() & _MM_FLUSH_ZERO_MASK
}

#[allow(non_snake_case)]
#[inline]
pub fn _MM_SET_FLUSH_ZERO_MODE(mode: u32) {
    update(_MM_FLUSH_ZERO_MASK, mode);
}

#[allow(non_snake_case)]
#[inline]
pub fn _MM_GET_DENORMALS_ZERO_MODE() -> u32 {
    _mm_getcsr() & _MM_DENORMALS_ZERO_MASK
}

#[allow(non_snake_case)]
#[inline]
pub fn _MM_SET_DENORMALS_ZERO_MODE(mode: u32) {
    update(_MM_DENORMALS_ZERO_MASK, mode);
}

#[allow(non_snake_case)]
#[inline]
pub fn _MM_GET_EXCEPTION_MASK() -> u32 {
    _mm_getcsr() & _MM_MASK_MASK
}

#[allow(non_snake_case)]
#[inline]
pub fn _MM_SET_EXCEPTION_MASK(mask: u32) {
    update(_MM_MASK_MASK, mask);
}

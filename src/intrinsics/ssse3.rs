//! SSSE3 intrinsics.

use crate::simd::{Active, SaturatingOps, ShuffleOps};
use crate::vector::{I64x1, M128i, M64, U8x16};

use super::{narrow, pair, widen};

/// Wraps on `MIN`: `abs(-128)` is `-128`.
#[inline]
pub fn _mm_abs_epi8(a: M128i) -> M128i {
    Active::abs_i8x16(a.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm_abs_epi16(a: M128i) -> M128i {
    Active::abs_i16x8(a.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm_abs_epi32(a: M128i) -> M128i {
    Active::abs_i32x4(a.reinterpret()).reinterpret()
}

/// `PSHUFB`: byte `i` of the result is `a[b[i] & 15]`, or zero when bit 7 of
/// `b[i]` is set.
#[inline]
pub fn _mm_shuffle_epi8(a: M128i, b: M128i) -> M128i {
    Active::shuffle_bytes_u8x16(a.reinterpret(), b.reinterpret()).reinterpret()
}

/// Concatenates `a:b`, shifts right by `IMM8` bytes and keeps the low 16.
#[inline]
pub fn _mm_alignr_epi8<const IMM8: i32>(a: M128i, b: M128i) -> M128i {
    Active::alignr_u8x16::<IMM8>(a.reinterpret(), b.reinterpret()).reinterpret()
}

#[inline]
pub fn _mm_abs_pi8(a: M64) -> M64 {
    narrow(Active::abs_i8x16(widen(a).reinterpret()))
}

#[inline]
pub fn _mm_abs_pi16(a: M64) -> M64 {
    narrow(Active::abs_i16x8(widen(a).reinterpret()))
}

#[inline]
pub fn _mm_abs_pi32(a: M64) -> M64 {
    narrow(Active::abs_i32x4(widen(a).reinterpret()))
}

/// The 64-bit form indexes with the low three bits only.
#[inline]
pub fn _mm_shuffle_pi8(a: M64, b: M64) -> M64 {
    let indices = widen(b).reinterpret::<u8, 16>().map(|i| i & 0x87);
    narrow(Active::shuffle_bytes_u8x16(widen(a).reinterpret(), indices))
}

/// `b` sits below `a` in the 16-byte source; a byte shift right of that pair
/// is exactly `PALIGNR` on 64-bit operands.
#[inline]
pub fn _mm_alignr_pi8<const IMM8: i32>(a: M64, b: M64) -> M64 {
    let shifted: U8x16 = Active::bsrli_u8x16::<IMM8>(pair(b, a).reinterpret());
    I64x1::from_array([shifted.reinterpret::<i64, 2>().lane(0)])
}

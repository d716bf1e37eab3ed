//! Lane shifts.
//!
//! The count is compared against the lane width before shifting. A logical
//! shift by the width or more produces zero; an arithmetic right shift by the
//! width or more fills every bit with the sign bit. Counts are never masked to
//! the lane width, so `shl(x, 33)` on 32-bit lanes is zero, not `x << 1`.
//!
//! Signedness of the lane type does not matter for the logical shifts: they
//! always shift in zeros.

use crate::lane::IntLane;
use crate::vector::Vector;

#[inline(always)]
fn in_range<T: IntLane>(count: u64) -> Option<u32> {
    if count < u64::from(T::BITS) {
        Some(count as u32)
    } else {
        None
    }
}

/// Low 64 bits of a count register, as `PSLLW xmm, xmm` reads them.
#[inline(always)]
pub fn count_of<const N: usize>(count: Vector<i64, N>) -> u64 {
    count.lane(0) as u64
}

/// Shift left, zero when `count` is at least the lane width.
#[inline(always)]
pub fn shl<T: IntLane, const N: usize>(a: Vector<T, N>, count: u64) -> Vector<T, N> {
    match in_range::<T>(count) {
        Some(n) => a.map(|x| x.unsigned_shl(n)),
        None => Vector::zero(),
    }
}

/// Logical shift right, zero when `count` is at least the lane width.
#[inline(always)]
pub fn shr_logical<T: IntLane, const N: usize>(a: Vector<T, N>, count: u64) -> Vector<T, N> {
    match in_range::<T>(count) {
        Some(n) => a.map(|x| x.unsigned_shr(n)),
        None => Vector::zero(),
    }
}

/// Arithmetic shift right; counts past the width act as `width - 1`.
#[inline(always)]
pub fn shr_arith<T: IntLane, const N: usize>(a: Vector<T, N>, count: u64) -> Vector<T, N> {
    let n = in_range::<T>(count).unwrap_or(T::BITS - 1);
    a.map(|x| x.signed_shr(n))
}

/// Per-lane left shift, each count read as unsigned (`VPSLLVD`/`VPSLLVQ`).
#[inline(always)]
pub fn shl_var<T: IntLane, const N: usize>(a: Vector<T, N>, counts: Vector<T, N>) -> Vector<T, N> {
    a.zip_map(counts, |x, c| match in_range::<T>(c.to_u64_bits()) {
        Some(n) => x.unsigned_shl(n),
        None => T::zero(),
    })
}

/// Per-lane logical right shift (`VPSRLVD`/`VPSRLVQ`).
#[inline(always)]
pub fn shr_logical_var<T: IntLane, const N: usize>(
    a: Vector<T, N>,
    counts: Vector<T, N>,
) -> Vector<T, N> {
    a.zip_map(counts, |x, c| match in_range::<T>(c.to_u64_bits()) {
        Some(n) => x.unsigned_shr(n),
        None => T::zero(),
    })
}

/// Per-lane arithmetic right shift (`VPSRAVD`).
#[inline(always)]
pub fn shr_arith_var<T: IntLane, const N: usize>(
    a: Vector<T, N>,
    counts: Vector<T, N>,
) -> Vector<T, N> {
    a.zip_map(counts, |x, c| {
        let n = in_range::<T>(c.to_u64_bits()).unwrap_or(T::BITS - 1);
        x.signed_shr(n)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{I16x8, I32x4, I32x8, I64x2, U16x8, U64x2};

    #[test]
    fn test_logical_shift_past_width_is_zero() {
        let a = U16x8::splat(0xffff);
        assert_eq!(shl(a, 15), U16x8::splat(0x8000));
        assert_eq!(shl(a, 16), U16x8::zero());
        assert_eq!(shr_logical(a, 17), U16x8::zero());
        assert_eq!(shl(a, u64::MAX), U16x8::zero());
    }

    #[test]
    fn test_logical_shift_on_signed_lanes_shifts_in_zero() {
        let a = I16x8::splat(-1);
        assert_eq!(shr_logical(a, 4), I16x8::splat(0x0fff));
    }

    #[test]
    fn test_arith_shift_fills_sign() {
        let a = I32x4::from_array([-8, 8, i32::MIN, 1]);
        assert_eq!(shr_arith(a, 2).to_array(), [-2, 2, i32::MIN >> 2, 0]);
        assert_eq!(shr_arith(a, 32).to_array(), [-1, 0, -1, 0]);
        assert_eq!(shr_arith(a, 1000).to_array(), [-1, 0, -1, 0]);
    }

    #[test]
    fn test_count_of_reads_low_quadword() {
        let count = I64x2::from_array([3, 1]);
        assert_eq!(count_of(count), 3);
        let count = U64x2::from_array([1 << 40, 0]).reinterpret::<i64, 2>();
        assert_eq!(shl(I32x4::splat(1), count_of(count)), I32x4::zero());
    }

    #[test]
    fn test_variable_shifts() {
        let a = I32x8::splat(-16);
        let counts = I32x8::from_array([0, 1, 4, 31, 32, -1, 2, 100]);
        assert_eq!(
            shl_var(a, counts).to_array(),
            [-16, -32, -256, 0, 0, 0, -64, 0]
        );
        assert_eq!(
            shr_arith_var(a, counts).to_array(),
            [-16, -8, -1, -1, -1, -1, -4, -1]
        );
        let logical = shr_logical_var(a, counts).to_array();
        assert_eq!(logical[1], 0x7fff_fff8);
        assert_eq!(logical[5], 0);
    }
}

//! Saturating integer arithmetic.
//!
//! All operations compute the mathematically exact result in
//! [`SaturatingLane::Wide`] and clamp it back into the lane type, so
//! `adds(a, b) == clamp(widen(a) + widen(b), T::MIN, T::MAX)` for every input.
//! Wraparound is never observable.

use num::traits::{AsPrimitive, WrappingSub};

use crate::lane::{IntLane, SaturatingLane};
use crate::vector::Vector;

/// Lane-wise saturating addition.
#[inline(always)]
pub fn adds<T: SaturatingLane, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.zip_map(b, |x, y| T::saturate(x.widen() + y.widen()))
}

/// Lane-wise saturating subtraction.
#[inline(always)]
pub fn subs<T: SaturatingLane, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.zip_map(b, |x, y| T::saturate(x.widen() - y.widen()))
}

/// Rounded-up unsigned average, `(a + b + 1) >> 1`, computed without overflow.
#[inline(always)]
pub fn avg<T: SaturatingLane, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.zip_map(b, |x, y| {
        let one: T::Wide = num::one();
        T::saturate((x.widen() + y.widen() + one) >> 1)
    })
}

/// Lane-wise absolute value.
///
/// `abs(MIN)` wraps back to `MIN`, as `PABSB/W/D` do; the result is meant to be
/// read as unsigned.
#[inline(always)]
pub fn abs<T: IntLane + WrappingSub, const N: usize>(a: Vector<T, N>) -> Vector<T, N> {
    a.map(|x| {
        if x < T::zero() {
            T::zero().wrapping_sub(&x)
        } else {
            x
        }
    })
}

/// Saturating narrowing pack of two vectors, applied per 128-bit sub-lane.
///
/// Within each 128-bit slice the destination holds the narrowed lanes of `a`
/// followed by the narrowed lanes of `b`. For 128-bit inputs that is simply
/// `a` then `b`; for 256-bit inputs the halves interleave, as `VPACKSSWB` does.
#[inline(always)]
pub fn pack<S, D, const N: usize, const M: usize>(a: Vector<S, N>, b: Vector<S, N>) -> Vector<D, M>
where
    S: IntLane + AsPrimitive<D::Wide>,
    D: SaturatingLane,
{
    let src_per_lane = Vector::<S, N>::LANES_PER_128;
    let dst_per_lane = Vector::<D, M>::LANES_PER_128;
    debug_assert_eq!(dst_per_lane, 2 * src_per_lane);

    Vector::from_fn(|i| {
        let block = i / dst_per_lane;
        let j = i % dst_per_lane;
        let source = if j < src_per_lane {
            a.lane(block * src_per_lane + j)
        } else {
            b.lane(block * src_per_lane + j - src_per_lane)
        };
        D::saturate(source.as_())
    })
}

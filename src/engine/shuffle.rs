//! Lane shuffle resolution.
//!
//! Immediate-controlled shuffles are described by a [`ShuffleDescriptor`]: one
//! source index per destination lane into the concatenation of the two
//! operands, first operand's lanes first, or [`ShuffleDescriptor::ZERO`] for a
//! lane that is cleared. Descriptors are built by `const fn`s from the
//! immediate and exposed through [`Control`], so every shuffle's lane map is
//! fixed at compile time; resolving it at run time is a gather.
//!
//! A descriptor is applied either over the whole register ([`whole`]) or
//! independently to every 128-bit sub-lane ([`per_sub_lane`]). The latter is
//! how most 256-bit AVX/AVX2 shuffles behave: the two halves never exchange
//! data, and each reads only the matching half of each operand.
//!
//! ```rust
//! use simdport::engine::shuffle::{self, Control};
//! use simdport::vector::I32x4;
//!
//! let a = I32x4::from_array([10, 11, 12, 13]);
//! let r = shuffle::per_sub_lane(Control::<0b00_01_10_11>::PSHUFD, a, a);
//! assert_eq!(r.to_array(), [13, 12, 11, 10]);
//! ```

use crate::error::{self, SimdportError};
use crate::lane::Lane;
use crate::vector::{Vector, SUB_LANE_BYTES};

/// Destination-lane → source-lane map for `N` lanes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct ShuffleDescriptor<const N: usize> {
    indices: [u8; N],
}

impl<const N: usize> ShuffleDescriptor<N> {
    /// Index that clears the destination lane.
    pub const ZERO: u8 = 0xff;

    /// Identity map over the first operand.
    pub const IDENTITY: Self = {
        let mut indices = [0u8; N];
        let mut i = 0;
        while i < N {
            indices[i] = i as u8;
            i += 1;
        }
        ShuffleDescriptor { indices }
    };

    /// Builds a descriptor from explicit indices.
    ///
    /// Every index must be below `2 * N` or equal to [`Self::ZERO`].
    pub const fn from_indices(indices: [u8; N]) -> Self {
        let mut i = 0;
        while i < N {
            assert!(
                indices[i] == Self::ZERO || (indices[i] as usize) < 2 * N,
                "shuffle index out of range"
            );
            i += 1;
        }
        ShuffleDescriptor { indices }
    }

    /// Checked construction for indices only known at run time.
    pub fn try_from_indices(indices: [u8; N]) -> error::Result<Self> {
        match indices
            .iter()
            .find(|&&idx| idx != Self::ZERO && usize::from(idx) >= 2 * N)
        {
            Some(&bad) => Err(error::immediate_error(
                "shuffle index",
                i64::from(bad),
                (2 * N - 1) as i64,
            )),
            None => Ok(ShuffleDescriptor { indices }),
        }
    }

    pub const fn indices(&self) -> [u8; N] {
        self.indices
    }

    #[inline(always)]
    pub const fn index(&self, lane: usize) -> u8 {
        self.indices[lane]
    }
}

impl<const N: usize> TryFrom<[u8; N]> for ShuffleDescriptor<N> {
    type Error = SimdportError;

    fn try_from(indices: [u8; N]) -> error::Result<Self> {
        Self::try_from_indices(indices)
    }
}

const fn check_imm8(imm: i32) {
    assert!(imm >= 0 && imm < 256, "shuffle immediate must be in 0..=255");
}

/// `PSHUFD`: four 2-bit fields pick lanes of the first operand.
pub const fn pshufd(imm: i32) -> ShuffleDescriptor<4> {
    check_imm8(imm);
    let imm = imm as u8;
    ShuffleDescriptor {
        indices: [imm & 3, (imm >> 2) & 3, (imm >> 4) & 3, (imm >> 6) & 3],
    }
}

/// `SHUFPS`: low two lanes from the first operand, high two from the second.
pub const fn shufps(imm: i32) -> ShuffleDescriptor<4> {
    check_imm8(imm);
    let imm = imm as u8;
    ShuffleDescriptor {
        indices: [imm & 3, (imm >> 2) & 3, 4 + ((imm >> 4) & 3), 4 + ((imm >> 6) & 3)],
    }
}

/// `SHUFPD` on 128 bits; only the low two immediate bits are read.
pub const fn shufpd(imm: i32) -> ShuffleDescriptor<2> {
    check_imm8(imm);
    let imm = imm as u8;
    ShuffleDescriptor {
        indices: [imm & 1, 2 + ((imm >> 1) & 1)],
    }
}

/// `VSHUFPD` on 256 bits. Each sub-lane has its own two control bits, so
/// this one is resolved over the whole register. Bits 4..=7 are ignored.
pub const fn shufpd256(imm: i32) -> ShuffleDescriptor<4> {
    check_imm8(imm);
    let imm = imm as u8;
    ShuffleDescriptor {
        indices: [
            imm & 1,
            4 + ((imm >> 1) & 1),
            2 + ((imm >> 2) & 1),
            6 + ((imm >> 3) & 1),
        ],
    }
}

/// `PSHUFLW`: shuffles the low four words, keeps the high four.
pub const fn pshuflw(imm: i32) -> ShuffleDescriptor<8> {
    check_imm8(imm);
    let imm = imm as u8;
    ShuffleDescriptor {
        indices: [imm & 3, (imm >> 2) & 3, (imm >> 4) & 3, (imm >> 6) & 3, 4, 5, 6, 7],
    }
}

/// `PSHUFHW`: keeps the low four words, shuffles the high four.
pub const fn pshufhw(imm: i32) -> ShuffleDescriptor<8> {
    check_imm8(imm);
    let imm = imm as u8;
    ShuffleDescriptor {
        indices: [
            0,
            1,
            2,
            3,
            4 + (imm & 3),
            4 + ((imm >> 2) & 3),
            4 + ((imm >> 4) & 3),
            4 + ((imm >> 6) & 3),
        ],
    }
}

/// `PUNPCKL*`: interleaves the low halves of both operands.
pub const fn unpack_low<const L: usize>() -> ShuffleDescriptor<L> {
    let mut indices = [0u8; L];
    let mut j = 0;
    while j < L / 2 {
        indices[2 * j] = j as u8;
        indices[2 * j + 1] = (L + j) as u8;
        j += 1;
    }
    ShuffleDescriptor { indices }
}

/// `PUNPCKH*`: interleaves the high halves of both operands.
pub const fn unpack_high<const L: usize>() -> ShuffleDescriptor<L> {
    let mut indices = [0u8; L];
    let mut j = 0;
    while j < L / 2 {
        indices[2 * j] = (L / 2 + j) as u8;
        indices[2 * j + 1] = (L + L / 2 + j) as u8;
        j += 1;
    }
    ShuffleDescriptor { indices }
}

/// `PALIGNR` over `L` bytes.
///
/// The source is `b` in the low bytes and `a` above it, shifted right by `imm`
/// bytes, so the descriptor is resolved with the operands as `(b, a)`. Bytes
/// shifted in from beyond both operands are zero.
pub const fn alignr<const L: usize>(imm: i32) -> ShuffleDescriptor<L> {
    check_imm8(imm);
    let mut indices = [ShuffleDescriptor::<L>::ZERO; L];
    let mut i = 0;
    while i < L {
        let src = imm as usize + i;
        if src < 2 * L {
            indices[i] = src as u8;
        }
        i += 1;
    }
    ShuffleDescriptor { indices }
}

/// `PSLLDQ`: byte shift left within 16 bytes; counts above 15 clear everything.
pub const fn bslli(imm: i32) -> ShuffleDescriptor<SUB_LANE_BYTES> {
    check_imm8(imm);
    let shift = imm as usize;
    let mut indices = [ShuffleDescriptor::<SUB_LANE_BYTES>::ZERO; SUB_LANE_BYTES];
    let mut i = 0;
    while i < SUB_LANE_BYTES {
        if i >= shift {
            indices[i] = (i - shift) as u8;
        }
        i += 1;
    }
    ShuffleDescriptor { indices }
}

/// `PSRLDQ`: byte shift right within 16 bytes.
pub const fn bsrli(imm: i32) -> ShuffleDescriptor<SUB_LANE_BYTES> {
    check_imm8(imm);
    let shift = imm as usize;
    let mut indices = [ShuffleDescriptor::<SUB_LANE_BYTES>::ZERO; SUB_LANE_BYTES];
    let mut i = 0;
    while i < SUB_LANE_BYTES {
        if i + shift < SUB_LANE_BYTES {
            indices[i] = (i + shift) as u8;
        }
        i += 1;
    }
    ShuffleDescriptor { indices }
}

/// `VPERMQ`/`VPERMPD`: full-width permutation of four 64-bit lanes.
pub const fn permute4x64(imm: i32) -> ShuffleDescriptor<4> {
    check_imm8(imm);
    let imm = imm as u8;
    ShuffleDescriptor {
        indices: [imm & 3, (imm >> 2) & 3, (imm >> 4) & 3, (imm >> 6) & 3],
    }
}

/// `VPERM2F128`/`VPERM2I128` at 64-bit lane granularity.
///
/// Each nibble selects a 128-bit half of `a` (0, 1) or `b` (2, 3); bit 3 of
/// the nibble clears the destination half instead.
pub const fn permute2x128(imm: i32) -> ShuffleDescriptor<4> {
    check_imm8(imm);
    let mut indices = [ShuffleDescriptor::<4>::ZERO; 4];
    let mut half = 0;
    while half < 2 {
        let control = (imm >> (4 * half)) & 0x0f;
        if control & 0x08 == 0 {
            let first = 2 * (control & 0x03) as u8;
            indices[2 * half] = first;
            indices[2 * half + 1] = first + 1;
        }
        half += 1;
    }
    ShuffleDescriptor { indices }
}

/// `BLENDPS`/`BLENDPD`/`PBLENDW`: bit `i` of the immediate takes lane `i`
/// from the second operand.
pub const fn blend<const L: usize>(imm: i32) -> ShuffleDescriptor<L> {
    assert!(
        imm >= 0 && (imm as i64) < (1i64 << L),
        "blend immediate has more bits than lanes"
    );
    let mut indices = [0u8; L];
    let mut i = 0;
    while i < L {
        indices[i] = if (imm >> i) & 1 == 1 { (L + i) as u8 } else { i as u8 };
        i += 1;
    }
    ShuffleDescriptor { indices }
}

/// Compile-time descriptors for immediate `IMM`.
///
/// Naming a constant evaluates its constructor during compilation, so an
/// immediate the instruction cannot encode is a build error.
pub struct Control<const IMM: i32>;

impl<const IMM: i32> Control<IMM> {
    pub const PSHUFD: ShuffleDescriptor<4> = pshufd(IMM);
    pub const SHUFPS: ShuffleDescriptor<4> = shufps(IMM);
    pub const SHUFPD: ShuffleDescriptor<2> = shufpd(IMM);
    pub const SHUFPD256: ShuffleDescriptor<4> = shufpd256(IMM);
    pub const PSHUFLW: ShuffleDescriptor<8> = pshuflw(IMM);
    pub const PSHUFHW: ShuffleDescriptor<8> = pshufhw(IMM);
    pub const ALIGNR8: ShuffleDescriptor<8> = alignr::<8>(IMM);
    pub const ALIGNR16: ShuffleDescriptor<16> = alignr::<16>(IMM);
    pub const BSLLI: ShuffleDescriptor<16> = bslli(IMM);
    pub const BSRLI: ShuffleDescriptor<16> = bsrli(IMM);
    pub const PERMUTE4X64: ShuffleDescriptor<4> = permute4x64(IMM);
    pub const PERMUTE2X128: ShuffleDescriptor<4> = permute2x128(IMM);
    pub const BLEND2: ShuffleDescriptor<2> = blend::<2>(IMM);
    pub const BLEND4: ShuffleDescriptor<4> = blend::<4>(IMM);
    pub const BLEND8: ShuffleDescriptor<8> = blend::<8>(IMM);
}

/// Unpack descriptors for `L` lanes per 128 bits.
pub struct Unpack<const L: usize>;

impl<const L: usize> Unpack<L> {
    pub const LOW: ShuffleDescriptor<L> = unpack_low::<L>();
    pub const HIGH: ShuffleDescriptor<L> = unpack_high::<L>();
}

#[inline(always)]
fn pick<T: Lane, const N: usize>(
    index: u8,
    base: usize,
    span: usize,
    a: &Vector<T, N>,
    b: &Vector<T, N>,
) -> T {
    let index = usize::from(index);
    if index < span {
        a.lane(base + index)
    } else if index < 2 * span {
        b.lane(base + index - span)
    } else {
        T::default()
    }
}

/// Applies `descriptor` across the whole register.
#[inline(always)]
pub fn whole<T: Lane, const N: usize>(
    descriptor: ShuffleDescriptor<N>,
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<T, N> {
    Vector::from_fn(|i| pick(descriptor.index(i), 0, N, &a, &b))
}

/// Applies an `L`-lane descriptor to every block of `L` lanes independently.
///
/// For 128-bit and 64-bit registers this is the same as [`whole`]; for 256-bit
/// registers each 128-bit half is shuffled on its own.
#[inline(always)]
pub fn per_sub_lane<T: Lane, const N: usize, const L: usize>(
    descriptor: ShuffleDescriptor<L>,
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<T, N> {
    debug_assert!(L > 0 && N % L == 0);
    Vector::from_fn(|i| {
        let base = i - i % L;
        pick(descriptor.index(i % L), base, L, &a, &b)
    })
}

/// `PSHUFB`: byte gather controlled by a second vector.
///
/// Within each 128-bit sub-lane (or the whole register, if narrower) an
/// index byte with its top bit set clears the destination byte; otherwise its
/// low bits pick a byte from the same sub-lane.
#[inline(always)]
pub fn shuffle_bytes<const N: usize>(a: Vector<u8, N>, indices: Vector<u8, N>) -> Vector<u8, N> {
    let block = N.min(SUB_LANE_BYTES);
    Vector::from_fn(|i| {
        let index = indices.lane(i);
        if index & 0x80 != 0 {
            0
        } else {
            let base = i - i % block;
            a.lane(base + usize::from(index) % block)
        }
    })
}

/// `VPERMD`/`VPERMPS`: full-width gather of eight 32-bit lanes by the low three
/// bits of each index lane.
#[inline(always)]
pub fn permutevar8x32<T: Lane>(a: Vector<T, 8>, indices: Vector<i32, 8>) -> Vector<T, 8> {
    Vector::from_fn(|i| a.lane((indices.lane(i) & 7) as usize))
}

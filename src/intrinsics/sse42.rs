//! SSE4.2 intrinsics. Only the 64-bit signed compare; the string and CRC
//! instructions are out of scope.

use crate::simd::{Active, CompareOps};
use crate::vector::M128i;

use super::forward_binary;

forward_binary! { M128i:
    _mm_cmpgt_epi64 => cmpgt_i64x2;
}

//! Reciprocal tables for 8-bit lanes.
//!
//! Entry `d - 1` holds `ceil(2^16 / d)` split into a high and a low byte. For
//! every `n < 256` and `2 <= d < 256`, `(n * ceil(2^16 / d)) >> 16` is exactly
//! `n / d`: the rounding error is below `n / 2^16 < 1 / 256`, which never
//! reaches the gap of at least `1 / d` below the next integer.
//!
//! `d = 1` has no 16-bit reciprocal and is blended in separately. The last
//! slot, reached by `d = 0`, holds zero so an invalid divisor still indexes in
//! bounds.

use crate::vector::LaneVector;
use crate::DivisionResult;

const fn reciprocals() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut index = 1;
    while index < 255 {
        let d = index as u32 + 1;
        table[index] = (((1 << 16) + d - 1) / d) as u16;
        index += 1;
    }
    table
}

const fn split(table: &[u16; 256], shift: u32) -> [u8; 256] {
    let mut half = [0u8; 256];
    let mut index = 0;
    while index < 256 {
        half[index] = (table[index] >> shift) as u8;
        index += 1;
    }
    half
}

const RECIPROCALS: [u16; 256] = reciprocals();

/// High bytes of `ceil(2^16 / d)`, indexed by `d - 1`.
pub static RECIPROCAL_HI: [u8; 256] = split(&RECIPROCALS, 8);
/// Low bytes of `ceil(2^16 / d)`, indexed by `d - 1`.
pub static RECIPROCAL_LO: [u8; 256] = split(&RECIPROCALS, 0);

/// `ceil(2^16 / d)` for `2 <= d < 256`; zero for `d` of 0 or 1.
#[inline]
pub fn reciprocal(d: u8) -> u16 {
    let index = usize::from(d.wrapping_sub(1));
    u16::from(RECIPROCAL_HI[index]) << 8 | u16::from(RECIPROCAL_LO[index])
}

/// Divides 8-bit lanes with one table lookup and one 16-bit multiply-high
/// instead of the eight shift-and-subtract steps.
pub fn div_reciprocal_table<const N: usize>(
    numer: LaneVector<u8, N>,
    denom: LaneVector<u8, N>,
) -> DivisionResult<LaneVector<u8, N>> {
    let one = LaneVector::splat(1u8);
    let index = denom - one;

    let hi = index.lookup(&RECIPROCAL_HI).widen();
    let lo = index.lookup(&RECIPROCAL_LO).widen();
    let reciprocal = (hi << 8) | lo;

    let estimate = numer.widen().mul_hi(reciprocal).narrow();
    let quot = denom.simd_eq(one).select(numer, estimate);

    DivisionResult {
        quot,
        rem: numer - quot * denom,
    }
}

/// `floor(2^exp / d)` and its remainder for a `d` that is not a power of two.
///
/// `floor(2^exp / d) = floor(floor(2^16 / d) / 2^(16 - exp))`, and because `d`
/// does not divide `2^16` the inner floor is one below the stored ceiling.
pub(crate) fn div_pow2(exp: u32, d: u8) -> (u16, u16) {
    debug_assert!((8..16).contains(&exp));
    debug_assert!(d > 2 && !d.is_power_of_two());

    let quot = (reciprocal(d) - 1) >> (16 - exp);
    let rem = (1u32 << exp) - u32::from(quot) * u32::from(d);
    (quot, rem as u16)
}

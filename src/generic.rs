//! Division by a divisor that may change on every call and in every lane.

use std::ops::{Div, Rem};

use crate::lane::{DividerInt, SignedDividerInt, UnsignedDividerInt};
use crate::vector::LaneVector;
use crate::DivisionResult;

/// Divides every lane of `numer` by the matching lane of `denom`, truncating
/// toward zero.
///
/// A zero divisor lane, or a signed `MIN / -1` lane, yields an unspecified
/// value for that lane and leaves the other lanes intact.
#[inline]
pub fn div<T: DividerInt, const N: usize>(
    numer: LaneVector<T, N>,
    denom: LaneVector<T, N>,
) -> DivisionResult<LaneVector<T, N>> {
    T::div_lanes(numer, denom)
}

/// Restoring binary long division, stopping once every lane is reduced below
/// its divisor.
#[inline]
pub fn div_shift_subtract<T: UnsignedDividerInt, const N: usize>(
    numer: LaneVector<T, N>,
    denom: LaneVector<T, N>,
) -> DivisionResult<LaneVector<T, N>> {
    shift_subtract::<T, N, true>(numer, denom)
}

/// Restoring binary long division that always runs all `T::BITS` steps.
#[inline]
pub fn div_shift_subtract_exhaustive<T: UnsignedDividerInt, const N: usize>(
    numer: LaneVector<T, N>,
    denom: LaneVector<T, N>,
) -> DivisionResult<LaneVector<T, N>> {
    shift_subtract::<T, N, false>(numer, denom)
}

fn shift_subtract<T: UnsignedDividerInt, const N: usize, const EARLY_EXIT: bool>(
    numer: LaneVector<T, N>,
    denom: LaneVector<T, N>,
) -> DivisionResult<LaneVector<T, N>> {
    let zero = LaneVector::splat(T::zero());
    let mut quotient = zero;
    let mut remainder = numer;

    for s in (0..T::BITS).rev() {
        // Once a lane is below its divisor every later step is a no-op for
        // it, so the loop may end when that holds for all lanes at once.
        if EARLY_EXIT && !remainder.simd_ge(denom).any() {
            break;
        }

        // (r >> s) >= d implies d << s <= r, so the shifted divisor never
        // loses bits in the lanes where it is subtracted.
        let b = (remainder >> s).simd_ge(denom);
        remainder = remainder - b.select(denom << s, zero);
        quotient = quotient | b.select(LaneVector::splat(T::one() << s as usize), zero);
    }

    DivisionResult {
        quot: quotient,
        rem: remainder,
    }
}

/// Signed lanes divide their magnitudes, then restore the signs so the
/// quotient truncates toward zero and the remainder follows the numerator.
pub(crate) fn div_signed_lanes<T: SignedDividerInt, const N: usize>(
    numer: LaneVector<T, N>,
    denom: LaneVector<T, N>,
) -> DivisionResult<LaneVector<T, N>> {
    let sign_bit = T::BITS - 1;
    let rem_sign = numer >> sign_bit;
    let quot_sign = rem_sign ^ (denom >> sign_bit);

    let unsigned = T::Unsigned::div_unsigned_lanes(
        numer.wrapping_abs().to_unsigned(),
        denom.wrapping_abs().to_unsigned(),
    );
    let quot = LaneVector::<T, N>::from_unsigned(unsigned.quot);
    let rem = LaneVector::<T, N>::from_unsigned(unsigned.rem);

    DivisionResult {
        quot: (quot ^ quot_sign) - quot_sign,
        rem: (rem ^ rem_sign) - rem_sign,
    }
}

impl<T: DividerInt, const N: usize> Div for LaneVector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        div(self, rhs).quot
    }
}

impl<T: DividerInt, const N: usize> Rem for LaneVector<T, N> {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        div(self, rhs).rem
    }
}

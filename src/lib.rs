//! Lane-parallel integer division without a hardware divide.
//!
//! Two dividers work on [`LaneVector`]s of 8, 16, 32 or 64-bit lanes, signed
//! or unsigned:
//!
//! * [`div`] divides by a divisor that may change on every call and in every
//!   lane, using restoring long division (or a reciprocal table for `u8`).
//! * [`InvariantDenominator`] derives a magic multiplier once per divisor and
//!   turns every later division into a multiply-high and a shift.
//!
//! ```
//! use lanedivide::{div, InvariantDenominator, LaneVector};
//!
//! let numer = LaneVector::from_array([250u8, 17, 0, 255]);
//! let result = div(numer, LaneVector::from_array([7, 8, 3, 1]));
//! assert_eq!(result.quot.to_array(), [35, 2, 0, 255]);
//! assert_eq!(result.rem.to_array(), [5, 1, 0, 0]);
//!
//! let by_seven = InvariantDenominator::<u32, 4>::new(7);
//! let quot = LaneVector::from_array([0, 6, 7, u32::MAX]) / &by_seven;
//! assert_eq!(quot.to_array(), [0, 0, 1, u32::MAX / 7]);
//! ```
//!
//! Division by zero and signed `MIN / -1` never panic; the affected lanes
//! hold an unspecified value.

mod denominator;
mod generic;
mod lane;
mod table;
mod vector;

pub use denominator::{Denominator, DenominatorKind, InvariantDenominator};
pub use generic::{div, div_shift_subtract, div_shift_subtract_exhaustive};
pub use lane::{DividerInt, SignedDividerInt, UnsignedDividerInt};
pub use table::{div_reciprocal_table, reciprocal, RECIPROCAL_HI, RECIPROCAL_LO};
pub use vector::{LaneVector, Mask};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerError {
    #[error("divider must be != 0")]
    Zero,
}

/// Quotient and remainder of a truncating division.
///
/// `quot * divisor + rem == numer`, and `rem` is zero or has the sign of the
/// numerator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DivisionResult<V> {
    pub quot: V,
    pub rem: V,
}

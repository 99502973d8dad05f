use std::fmt::Debug;
use std::hash::Hash;

use num_integer::Integer;
use num_traits::{One, PrimInt, Signed, Unsigned, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};

use crate::denominator::{self, Denominator, InvariantDenominator};
use crate::generic;
use crate::table;
use crate::vector::LaneVector;
use crate::DivisionResult;

/// A fixed-width integer that can sit in a lane and be divided.
///
/// Every width/signedness combination supplies its own derivation and
/// division strategy through this trait, so the public types stay generic
/// over `T` while the per-width arithmetic is picked at compile time.
pub trait DividerInt:
    PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + Hash
    + Debug
    + Send
    + Sync
    + 'static
{
    const BITS: u32;
    const SIGNED: bool;
    /// Twice as wide as `Self`, same signedness.
    type Double: PrimInt + Integer + Debug;
    /// Same width as `Self`, unsigned.
    type Unsigned: UnsignedDividerInt;

    fn widen(self) -> Self::Double;
    /// Keeps the low `BITS` bits of `wide`.
    fn truncate(wide: Self::Double) -> Self;
    fn to_unsigned(self) -> Self::Unsigned;
    fn from_unsigned(bits: Self::Unsigned) -> Self;
    fn wrapping_abs(self) -> Self;

    /// The upper half of the full double-width product.
    #[inline]
    fn mul_hi(self, rhs: Self) -> Self {
        Self::truncate((self.widen() * rhs.widen()) >> Self::BITS as usize)
    }

    fn derive(self) -> Denominator<Self>;
    fn recover(denom: &Denominator<Self>) -> Self;
    fn div_by(self, denom: &Denominator<Self>) -> Self;
    fn div_lanes<const N: usize>(
        numer: LaneVector<Self, N>,
        denom: LaneVector<Self, N>,
    ) -> DivisionResult<LaneVector<Self, N>>;
    fn apply_lanes<const N: usize>(
        denom: &InvariantDenominator<Self, N>,
        numer: LaneVector<Self, N>,
    ) -> LaneVector<Self, N>;
}

pub trait UnsignedDividerInt: DividerInt<Unsigned = Self> + Unsigned {
    /// `floor(2^exp / d)` and the remainder, for `exp < 2 * BITS`.
    #[inline]
    fn div_pow2(exp: u32, d: Self) -> (Self::Double, Self::Double) {
        (Self::Double::one() << exp as usize).div_rem(&d.widen())
    }

    #[inline]
    fn div_unsigned_lanes<const N: usize>(
        numer: LaneVector<Self, N>,
        denom: LaneVector<Self, N>,
    ) -> DivisionResult<LaneVector<Self, N>> {
        generic::div_shift_subtract(numer, denom)
    }
}

pub trait SignedDividerInt: DividerInt + Signed {}

macro_rules! impl_unsigned {
    ($($t:ty => $double:ty),* $(,)?) => {$(
        impl DividerInt for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = false;
            type Double = $double;
            type Unsigned = Self;

            #[inline]
            fn widen(self) -> $double {
                self as $double
            }

            #[inline]
            fn truncate(wide: $double) -> Self {
                wide as Self
            }

            #[inline]
            fn to_unsigned(self) -> Self {
                self
            }

            #[inline]
            fn from_unsigned(bits: Self) -> Self {
                bits
            }

            #[inline]
            fn wrapping_abs(self) -> Self {
                self
            }

            fn derive(self) -> Denominator<Self> {
                denominator::derive_unsigned(self)
            }

            fn recover(denom: &Denominator<Self>) -> Self {
                denominator::recover_unsigned(denom)
            }

            #[inline]
            fn div_by(self, denom: &Denominator<Self>) -> Self {
                denominator::unsigned_div_by(self, denom)
            }

            #[inline]
            fn div_lanes<const N: usize>(
                numer: LaneVector<Self, N>,
                denom: LaneVector<Self, N>,
            ) -> DivisionResult<LaneVector<Self, N>> {
                Self::div_unsigned_lanes(numer, denom)
            }

            #[inline]
            fn apply_lanes<const N: usize>(
                denom: &InvariantDenominator<Self, N>,
                numer: LaneVector<Self, N>,
            ) -> LaneVector<Self, N> {
                denominator::apply_unsigned_lanes(denom, numer)
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty => $double:ty, $unsigned:ty),* $(,)?) => {$(
        impl DividerInt for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = true;
            type Double = $double;
            type Unsigned = $unsigned;

            #[inline]
            fn widen(self) -> $double {
                self as $double
            }

            #[inline]
            fn truncate(wide: $double) -> Self {
                wide as Self
            }

            #[inline]
            fn to_unsigned(self) -> $unsigned {
                self as $unsigned
            }

            #[inline]
            fn from_unsigned(bits: $unsigned) -> Self {
                bits as Self
            }

            #[inline]
            fn wrapping_abs(self) -> Self {
                <$t>::wrapping_abs(self)
            }

            fn derive(self) -> Denominator<Self> {
                denominator::derive_signed(self)
            }

            fn recover(denom: &Denominator<Self>) -> Self {
                denominator::recover_signed(denom)
            }

            #[inline]
            fn div_by(self, denom: &Denominator<Self>) -> Self {
                denominator::signed_div_by(self, denom)
            }

            #[inline]
            fn div_lanes<const N: usize>(
                numer: LaneVector<Self, N>,
                denom: LaneVector<Self, N>,
            ) -> DivisionResult<LaneVector<Self, N>> {
                generic::div_signed_lanes(numer, denom)
            }

            #[inline]
            fn apply_lanes<const N: usize>(
                denom: &InvariantDenominator<Self, N>,
                numer: LaneVector<Self, N>,
            ) -> LaneVector<Self, N> {
                denominator::apply_signed_lanes(denom, numer)
            }
        }

        impl SignedDividerInt for $t {}
    )*};
}

impl_unsigned!(u8 => u16, u16 => u32, u32 => u64, u64 => u128);
impl_signed!(i8 => i16, u8, i16 => i32, u16, i32 => i64, u32, i64 => i128, u64);

// 8-bit lanes have no widening multiply-high across a register, so both the
// generic divider and the derivation consult the reciprocal table instead.
impl UnsignedDividerInt for u8 {
    #[inline]
    fn div_pow2(exp: u32, d: Self) -> (u16, u16) {
        table::div_pow2(exp, d)
    }

    #[inline]
    fn div_unsigned_lanes<const N: usize>(
        numer: LaneVector<Self, N>,
        denom: LaneVector<Self, N>,
    ) -> DivisionResult<LaneVector<Self, N>> {
        table::div_reciprocal_table(numer, denom)
    }
}

impl UnsignedDividerInt for u16 {}
impl UnsignedDividerInt for u32 {}
impl UnsignedDividerInt for u64 {}

// Derivation follows libdivide (https://libdivide.com):
//
// Copyright (C) 2010 - 2021 ridiculous_fish, <libdivide@ridiculousfish.com>
// Copyright (C) 2016 - 2021 Kim Walisch, <kim.walisch@gmail.com>
//
// libdivide is dual-licensed under the Boost or zlib licenses.

use std::array;
use std::ops::{Div, DivAssign, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign};

use num_integer::Integer;
use num_traits::{One, PrimInt, WrappingAdd, WrappingSub, Zero};
use tracing::trace;

use crate::lane::{DividerInt, SignedDividerInt, UnsignedDividerInt};
use crate::vector::{LaneVector, Mask};
use crate::{DividerError, DivisionResult};

// Explanation of the "more" field:
//
// * Bits 0-5 hold the shift value (for the shift path or the multiply path).
// * Bit 6 is the add indicator for the multiply path: the multiplier is
//   2^BITS + magic, one bit wider than the lane.
// * Bit 7 is set if the divisor is negative. Only signed lanes set it.
//
// A magic number of 0 indicates the shift path, which covers powers of two
// and the divisors 1 and -1 (a shift by zero).
//
// For signed lanes the magic number on the multiply path is negated when the
// divisor is negative.

const SHIFT_MASK: u8 = 0x3F;
const ADD_MARKER: u8 = 0x40;
const NEGATIVE_DIVISOR: u8 = 0x80;

/// Which division strategy a lane of a denominator uses.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DenominatorKind {
    /// Divisor 1: the numerator passes through.
    Unit,
    /// Divisor -1: the numerator is negated.
    NegativeUnit,
    /// `|d| = 2^k`: a shift, rounded toward zero for signed lanes.
    PowerOfTwo,
    /// A multiply-high by a `BITS`-wide multiplier, then a shift.
    Multiply,
    /// A multiply-high by a `BITS + 1`-wide multiplier, then a shift.
    MultiplyAdd,
}

/// A divisor prepared for repeated division of scalars.
///
/// Holds the magic multiplier, the shift and flag byte, and the divisor
/// itself for remainder recovery. Construction performs the only divisions;
/// [`apply`](Self::apply) is a multiply-high and a few shifts and adds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Denominator<T> {
    magic: T,
    more: u8,
    divisor: T,
}

impl<T: DividerInt> Denominator<T> {
    /// Derives the denominator for `d`.
    ///
    /// `d` must be nonzero. A zero divisor is not detected in release builds
    /// and produces an unspecified, but harmless, denominator.
    #[inline]
    pub fn new(d: T) -> Self {
        d.derive()
    }

    pub fn try_new(d: T) -> Result<Self, DividerError> {
        if d.is_zero() {
            return Err(DividerError::Zero);
        }
        Ok(d.derive())
    }

    /// The divisor this denominator divides by.
    #[inline]
    pub fn value(&self) -> T {
        self.divisor
    }

    /// Reconstructs the divisor from the multiplier, shift and flags alone.
    pub fn recover(&self) -> T {
        T::recover(self)
    }

    pub fn kind(&self) -> DenominatorKind {
        let negative = self.more & NEGATIVE_DIVISOR != 0;
        if !self.magic.is_zero() {
            if self.more & ADD_MARKER != 0 {
                DenominatorKind::MultiplyAdd
            } else {
                DenominatorKind::Multiply
            }
        } else if self.shift() != 0 {
            DenominatorKind::PowerOfTwo
        } else if negative {
            DenominatorKind::NegativeUnit
        } else {
            DenominatorKind::Unit
        }
    }

    #[inline]
    pub fn magic(&self) -> T {
        self.magic
    }

    #[inline]
    pub fn shift(&self) -> u32 {
        u32::from(self.more & SHIFT_MASK)
    }

    /// The quotient `numer / d`, truncated toward zero.
    #[inline]
    pub fn apply(&self, numer: T) -> T {
        numer.div_by(self)
    }

    #[inline]
    pub fn div_rem(&self, numer: T) -> DivisionResult<T> {
        let quot = self.apply(numer);
        DivisionResult {
            quot,
            rem: numer.wrapping_sub(&quot.wrapping_mul(&self.divisor)),
        }
    }

    #[inline]
    fn from_parts(magic: T, more: u8, divisor: T) -> Self {
        Self {
            magic,
            more,
            divisor,
        }
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.more & NEGATIVE_DIVISOR != 0
    }

    #[inline]
    fn with_shift(&self, shift: u32, divisor: T) -> Self {
        Self::from_parts(self.magic, (self.more & !SHIFT_MASK) | shift as u8, divisor)
    }

    /// Whether the candidate divides the extreme numerators exactly.
    fn holds_at_boundary(&self) -> bool {
        [T::min_value(), T::zero(), T::max_value()]
            .into_iter()
            .all(|n| n.div_by(self) == n / self.divisor)
    }

    fn traced(self) -> Self {
        trace!(
            divisor = ?self.divisor,
            kind = ?self.kind(),
            magic = ?self.magic,
            shift = self.shift(),
            "derived denominator"
        );
        self
    }
}

// Scaling by 2^s only moves the post shift: floor(floor(x) / 2^s) equals
// floor(x / 2^s), and the same holds for the signed round-toward-zero fixup.
impl<T: DividerInt> ShlAssign<u32> for Denominator<T> {
    /// Multiplies the divisor by `2^s`, clamped so the divisor stays
    /// representable.
    fn shl_assign(&mut self, s: u32) {
        let d = self.divisor;
        let headroom = if T::SIGNED {
            // redundant sign bits
            (d ^ (d >> (T::BITS - 1) as usize)).leading_zeros() - 1
        } else {
            d.leading_zeros()
        };
        let shift = self.shift();
        let s = s.min(headroom).min(T::BITS - 1 - shift);
        *self = self.with_shift(shift + s, d << s as usize);
    }
}

impl<T: DividerInt> ShrAssign<u32> for Denominator<T> {
    /// Divides the divisor by `2^s`, shifting out at most its trailing zeros.
    fn shr_assign(&mut self, s: u32) {
        let s = s.min(self.divisor.trailing_zeros()).min(T::BITS - 1);
        let shift = self.shift();
        let d = self.divisor >> s as usize;
        *self = if s <= shift {
            self.with_shift(shift - s, d)
        } else {
            // a reduced multiplier gave up the shift this needs
            d.derive()
        };
    }
}

impl<T: DividerInt> Shl<u32> for Denominator<T> {
    type Output = Self;

    #[inline]
    fn shl(mut self, s: u32) -> Self {
        self <<= s;
        self
    }
}

impl<T: DividerInt> Shr<u32> for Denominator<T> {
    type Output = Self;

    #[inline]
    fn shr(mut self, s: u32) -> Self {
        self >>= s;
        self
    }
}

impl<T: DividerInt> From<T> for Denominator<T> {
    fn from(d: T) -> Self {
        d.derive()
    }
}

pub(crate) fn derive_unsigned<T: UnsignedDividerInt>(d: T) -> Denominator<T> {
    debug_assert!(!d.is_zero(), "divider must be != 0");

    let floor_log_2_d = (T::BITS - 1).saturating_sub(d.leading_zeros());

    // Power of 2, including 1
    if (d & d.wrapping_sub(&T::one())).is_zero() {
        return Denominator::from_parts(T::zero(), floor_log_2_d as u8, d).traced();
    }

    // (1 << (BITS + floor_log_2_d)) / d
    let (proposed_m, rem) = T::div_pow2(floor_log_2_d + T::BITS, d);
    let mut proposed_m = T::truncate(proposed_m);
    let rem = T::truncate(rem);
    debug_assert!(!rem.is_zero() && rem < d);

    // proposed_m + 1 is ceil(2^(BITS + floor_log_2_d) / d) and e is how far
    // magic * d overshoots that power. The BITS-wide magic is exact over the
    // whole numerator range when e < 2^floor_log_2_d.
    let e = d - rem;
    if e < (T::one() << floor_log_2_d as usize) {
        let short = Denominator::from_parts(proposed_m + T::one(), floor_log_2_d as u8, d);
        // Verification only: the bound on e already guarantees exactness, so
        // no divisor fails this and the wide multiplier below is reached
        // through the bound alone.
        if short.holds_at_boundary() {
            return reduce(short).traced();
        }
        trace!(divisor = ?d, "short multiplier failed boundary verification");
    }

    // Fall back to the BITS + 1 bit multiplier: double the quotient and the
    // remainder of 2^(BITS + floor_log_2_d) / d to get one more bit. The top
    // bit wraps out of proposed_m and is implied by ADD_MARKER.
    proposed_m = proposed_m.wrapping_add(&proposed_m);
    let twice_rem = rem.wrapping_add(&rem);
    if twice_rem >= d || twice_rem < rem {
        proposed_m = proposed_m.wrapping_add(&T::one());
    }
    let wide = Denominator::from_parts(
        proposed_m.wrapping_add(&T::one()),
        floor_log_2_d as u8 | ADD_MARKER,
        d,
    );
    debug_assert!(wide.holds_at_boundary());
    wide.traced()
}

/// Halves an even multiplier while shift remains, giving the smallest
/// multiplier that computes the same quotients.
fn reduce<T: UnsignedDividerInt>(denom: Denominator<T>) -> Denominator<T> {
    let mut magic = denom.magic;
    let mut shift = denom.more & SHIFT_MASK;
    while shift > 0 && (magic & T::one()).is_zero() {
        magic = magic >> 1;
        shift -= 1;
    }
    Denominator::from_parts(magic, shift, denom.divisor)
}

pub(crate) fn derive_signed<T: SignedDividerInt>(d: T) -> Denominator<T> {
    debug_assert!(!d.is_zero(), "divider must be != 0");

    let one = <T::Unsigned as One>::one();
    let negative = if d < T::zero() { NEGATIVE_DIVISOR } else { 0 };

    // |d| a power of two, including -1 and 1, takes the shift path. The
    // wrapping |MIN| reinterpreted as unsigned is 2^(BITS - 1), so MIN lands
    // here too.
    let abs_d = d.wrapping_abs().to_unsigned();
    let floor_log_2_d = (T::BITS - 1).saturating_sub(abs_d.leading_zeros());
    if (abs_d & abs_d.wrapping_sub(&one)).is_zero() {
        return Denominator::from_parts(T::zero(), floor_log_2_d as u8 | negative, d).traced();
    }

    debug_assert!(floor_log_2_d >= 1);
    let signed_magic = |proposed_m: T::Unsigned| {
        let magic = T::from_unsigned(proposed_m.wrapping_add(&one));
        if negative != 0 {
            magic.wrapping_neg()
        } else {
            magic
        }
    };

    // 2^(BITS - 1 + floor_log_2_d) / |d|
    let (proposed_m, rem) = T::Unsigned::div_pow2(floor_log_2_d - 1 + T::BITS, abs_d);
    let proposed_m = T::Unsigned::truncate(proposed_m);
    let rem = T::Unsigned::truncate(rem);
    let e = abs_d - rem;

    // Short candidate with post shift floor_log_2_d - 1.
    if e < (one << floor_log_2_d as usize) {
        let short = Denominator::from_parts(
            signed_magic(proposed_m),
            (floor_log_2_d - 1) as u8 | negative,
            d,
        );
        // Verification only, as in the unsigned derivation: the bound on e
        // guarantees exactness and this never rejects.
        if short.holds_at_boundary() {
            return short.traced();
        }
        trace!(divisor = ?d, "short multiplier failed boundary verification");
    }

    // One bit higher. proposed_m still fits the unsigned lane but reads as
    // negative once reinterpreted.
    let mut proposed_m = proposed_m.wrapping_add(&proposed_m);
    let twice_rem = rem.wrapping_add(&rem);
    if twice_rem >= abs_d || twice_rem < rem {
        proposed_m = proposed_m.wrapping_add(&one);
    }
    let wide = Denominator::from_parts(
        signed_magic(proposed_m),
        floor_log_2_d as u8 | ADD_MARKER | negative,
        d,
    );
    debug_assert!(wide.holds_at_boundary());
    wide.traced()
}

#[inline]
pub(crate) fn unsigned_div_by<T: UnsignedDividerInt>(numer: T, denom: &Denominator<T>) -> T {
    let more = denom.more;
    if denom.magic.is_zero() {
        numer >> more as usize
    } else {
        let q = denom.magic.mul_hi(numer);
        if more & ADD_MARKER != 0 {
            let t = ((numer - q) >> 1) + q;
            t >> (more & SHIFT_MASK) as usize
        } else {
            // no flag bits without ADD_MARKER
            q >> more as usize
        }
    }
}

#[inline]
pub(crate) fn signed_div_by<T: SignedDividerInt>(numer: T, denom: &Denominator<T>) -> T {
    let more = denom.more;
    let shift = (more & SHIFT_MASK) as usize;
    let sign_bit = (T::BITS - 1) as usize;
    // all ones if the divisor is negative
    let sign = if denom.is_negative() {
        T::zero().wrapping_sub(&T::one())
    } else {
        T::zero()
    };

    if denom.magic.is_zero() {
        // Round toward zero: add 2^shift - 1 to negative numerators.
        let mask = (<T::Unsigned as One>::one() << shift) - <T::Unsigned as One>::one();
        let uq = numer
            .to_unsigned()
            .wrapping_add(&((numer >> sign_bit).to_unsigned() & mask));
        let q = T::from_unsigned(uq) >> shift;
        (q ^ sign).wrapping_sub(&sign)
    } else {
        let mut uq = denom.magic.mul_hi(numer);
        if more & ADD_MARKER != 0 {
            // add the numerator, negated for a negative divisor
            uq = uq.wrapping_add(&(numer ^ sign).wrapping_sub(&sign));
        }
        let q = uq >> shift;
        // q += (q < 0)
        q.wrapping_sub(&(q >> sign_bit))
    }
}

pub(crate) fn recover_unsigned<T: UnsignedDividerInt>(denom: &Denominator<T>) -> T {
    let more = denom.more;
    let shift = u32::from(more & SHIFT_MASK);
    let one = <T::Double as One>::one();

    if denom.magic.is_zero() {
        T::one() << shift as usize
    } else if more & ADD_MARKER == 0 {
        // m = ceil(2^(BITS + shift) / d) and d is not a power of two, so
        // d = floor(2^(BITS + shift) / m) + 1.
        let dividend = one << (shift + T::BITS) as usize;
        T::one() + T::truncate(dividend / denom.magic.widen())
    } else {
        // d - 1 = floor(2^(BITS + shift + 1) / (2^BITS + m)). The dividend
        // can overflow Double, so divide half of it and double the quotient,
        // carrying from the doubled remainder.
        let half_n = one << (T::BITS + shift) as usize;
        let d = (one << T::BITS as usize) | denom.magic.widen();
        let (half_q, rem) = half_n.div_rem(&d);
        let half_q = T::truncate(half_q);
        let carry = if (rem << 1) >= d { T::one() } else { T::zero() };
        let full_q = half_q + half_q + carry;
        full_q + T::one()
    }
}

pub(crate) fn recover_signed<T: SignedDividerInt>(denom: &Denominator<T>) -> T {
    let shift = denom.shift();

    let abs_d = if denom.magic.is_zero() {
        <T::Unsigned as One>::one() << shift as usize
    } else {
        // The magic number was negated exactly when the divisor was.
        let magic = if denom.is_negative() {
            denom.magic.wrapping_neg().to_unsigned()
        } else {
            denom.magic.to_unsigned()
        };
        let n = <<T::Unsigned as DividerInt>::Double as One>::one() << (T::BITS + shift) as usize;
        T::Unsigned::truncate(n / magic.widen()) + <T::Unsigned as One>::one()
    };

    let d = T::from_unsigned(abs_d);
    if denom.is_negative() {
        d.wrapping_neg()
    } else {
        d
    }
}

/// A divisor per lane, prepared for repeated lockstep division.
///
/// Each lane is derived independently, exactly like a scalar [`Denominator`],
/// and stored lane-wise so [`apply`](Self::apply) runs every lane through the
/// same multiply-high, shift and select steps with no cross-lane interaction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct InvariantDenominator<T, const N: usize> {
    magic: LaneVector<T, N>,
    shift: LaneVector<u32, N>,
    // 2^shift - 1 on shift lanes, added to negative numerators so that the
    // arithmetic shift truncates toward zero
    round: LaneVector<T, N>,
    // all ones in lanes with a negative divisor
    sign: LaneVector<T, N>,
    multiply: Mask<N>,
    add: Mask<N>,
    more: [u8; N],
    divisor: LaneVector<T, N>,
}

impl<T: DividerInt, const N: usize> InvariantDenominator<T, N> {
    /// Derives `d` once and broadcasts it to every lane.
    pub fn new(d: T) -> Self {
        Self::from(Denominator::new(d))
    }

    pub fn try_new(d: T) -> Result<Self, DividerError> {
        Denominator::try_new(d).map(Self::from)
    }

    /// Derives every lane from its own divisor. Every lane must be nonzero.
    pub fn from_lanes(divisors: LaneVector<T, N>) -> Self {
        Self::from_denominators(divisors.to_array().map(Denominator::new))
    }

    pub fn try_from_lanes(divisors: LaneVector<T, N>) -> Result<Self, DividerError> {
        if divisors.simd_eq(LaneVector::splat(T::zero())).any() {
            return Err(DividerError::Zero);
        }
        Ok(Self::from_lanes(divisors))
    }

    pub fn from_denominators(lanes: [Denominator<T>; N]) -> Self {
        trace!(lanes = N, "building invariant denominator");
        let zero = T::zero();
        Self {
            magic: LaneVector::from_array(lanes.map(|lane| lane.magic)),
            shift: LaneVector::from_array(lanes.map(|lane| lane.shift())),
            round: LaneVector::from_array(lanes.map(|lane| {
                if lane.magic.is_zero() {
                    (T::one() << lane.shift() as usize).wrapping_sub(&T::one())
                } else {
                    zero
                }
            })),
            sign: LaneVector::from_array(lanes.map(|lane| {
                if lane.is_negative() {
                    zero.wrapping_sub(&T::one())
                } else {
                    zero
                }
            })),
            multiply: Mask::from_array(lanes.map(|lane| !lane.magic.is_zero())),
            add: Mask::from_array(lanes.map(|lane| lane.more & ADD_MARKER != 0)),
            more: lanes.map(|lane| lane.more),
            divisor: LaneVector::from_array(lanes.map(|lane| lane.divisor)),
        }
    }

    /// The per-lane divisors.
    #[inline]
    pub fn value(&self) -> LaneVector<T, N> {
        self.divisor
    }

    /// The scalar denominator of lane `index`.
    pub fn lane(&self, index: usize) -> Denominator<T> {
        Denominator::from_parts(
            self.magic.extract(index),
            self.more[index],
            self.divisor.extract(index),
        )
    }

    /// The lane-wise quotients `numer / d`, truncated toward zero.
    #[inline]
    pub fn apply(&self, numer: LaneVector<T, N>) -> LaneVector<T, N> {
        T::apply_lanes(self, numer)
    }

    #[inline]
    pub fn div_rem(&self, numer: LaneVector<T, N>) -> DivisionResult<LaneVector<T, N>> {
        let quot = self.apply(numer);
        DivisionResult {
            quot,
            rem: numer - quot * self.divisor,
        }
    }
}

impl<T: DividerInt, const N: usize> From<Denominator<T>> for InvariantDenominator<T, N> {
    fn from(denom: Denominator<T>) -> Self {
        Self::from_denominators(array::from_fn(|_| denom))
    }
}

#[inline]
pub(crate) fn apply_unsigned_lanes<T: UnsignedDividerInt, const N: usize>(
    denom: &InvariantDenominator<T, N>,
    numer: LaneVector<T, N>,
) -> LaneVector<T, N> {
    let t = numer.mul_hi(denom.magic);
    let fused = denom.add.select(((numer - t) >> 1) + t, t);
    // shift lanes divide the numerator itself
    denom.multiply.select(fused, numer).shr_lanes(denom.shift)
}

#[inline]
pub(crate) fn apply_signed_lanes<T: SignedDividerInt, const N: usize>(
    denom: &InvariantDenominator<T, N>,
    numer: LaneVector<T, N>,
) -> LaneVector<T, N> {
    let sign_bit = T::BITS - 1;
    let sign = denom.sign;

    let rounded = (numer + ((numer >> sign_bit) & denom.round)).shr_lanes(denom.shift);
    let shifted = (rounded ^ sign) - sign;

    let t = numer.mul_hi(denom.magic);
    let t = denom.add.select(t + ((numer ^ sign) - sign), t);
    let q = t.shr_lanes(denom.shift);
    let multiplied = q - (q >> sign_bit);

    denom.multiply.select(multiplied, shifted)
}

impl<T: DividerInt, const N: usize> ShlAssign<u32> for InvariantDenominator<T, N> {
    /// Multiplies every lane's divisor by `2^s`, clamped per lane.
    fn shl_assign(&mut self, s: u32) {
        *self = Self::from_denominators(array::from_fn(|i| self.lane(i) << s));
    }
}

impl<T: DividerInt, const N: usize> ShrAssign<u32> for InvariantDenominator<T, N> {
    /// Divides every lane's divisor by `2^s`, clamped per lane.
    fn shr_assign(&mut self, s: u32) {
        *self = Self::from_denominators(array::from_fn(|i| self.lane(i) >> s));
    }
}

impl<T: DividerInt, const N: usize> Shl<u32> for InvariantDenominator<T, N> {
    type Output = Self;

    #[inline]
    fn shl(mut self, s: u32) -> Self {
        self <<= s;
        self
    }
}

impl<T: DividerInt, const N: usize> Shr<u32> for InvariantDenominator<T, N> {
    type Output = Self;

    #[inline]
    fn shr(mut self, s: u32) -> Self {
        self >>= s;
        self
    }
}

impl<T: DividerInt, const N: usize> Div<&InvariantDenominator<T, N>> for LaneVector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, denom: &InvariantDenominator<T, N>) -> Self {
        denom.apply(self)
    }
}

impl<T: DividerInt, const N: usize> Div<InvariantDenominator<T, N>> for LaneVector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, denom: InvariantDenominator<T, N>) -> Self {
        denom.apply(self)
    }
}

impl<T: DividerInt, const N: usize> Rem<&InvariantDenominator<T, N>> for LaneVector<T, N> {
    type Output = Self;

    #[inline]
    fn rem(self, denom: &InvariantDenominator<T, N>) -> Self {
        denom.div_rem(self).rem
    }
}

impl<T: DividerInt, const N: usize> Rem<InvariantDenominator<T, N>> for LaneVector<T, N> {
    type Output = Self;

    #[inline]
    fn rem(self, denom: InvariantDenominator<T, N>) -> Self {
        denom.div_rem(self).rem
    }
}

impl<T: DividerInt, const N: usize> DivAssign<&InvariantDenominator<T, N>> for LaneVector<T, N> {
    #[inline]
    fn div_assign(&mut self, denom: &InvariantDenominator<T, N>) {
        *self = denom.apply(*self);
    }
}

impl<T: DividerInt, const N: usize> RemAssign<&InvariantDenominator<T, N>> for LaneVector<T, N> {
    #[inline]
    fn rem_assign(&mut self, denom: &InvariantDenominator<T, N>) {
        *self = denom.div_rem(*self).rem;
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {$(
        impl Div<&Denominator<$t>> for $t {
            type Output = Self;

            #[inline]
            fn div(self, denom: &Denominator<$t>) -> Self {
                denom.apply(self)
            }
        }

        impl Div<Denominator<$t>> for $t {
            type Output = Self;

            #[inline]
            fn div(self, denom: Denominator<$t>) -> Self {
                denom.apply(self)
            }
        }

        impl Rem<&Denominator<$t>> for $t {
            type Output = Self;

            #[inline]
            fn rem(self, denom: &Denominator<$t>) -> Self {
                denom.div_rem(self).rem
            }
        }

        impl Rem<Denominator<$t>> for $t {
            type Output = Self;

            #[inline]
            fn rem(self, denom: Denominator<$t>) -> Self {
                denom.div_rem(self).rem
            }
        }

        impl DivAssign<&Denominator<$t>> for $t {
            #[inline]
            fn div_assign(&mut self, denom: &Denominator<$t>) {
                *self = denom.apply(*self);
            }
        }

        impl RemAssign<&Denominator<$t>> for $t {
            #[inline]
            fn rem_assign(&mut self, denom: &Denominator<$t>) {
                *self = denom.div_rem(*self).rem;
            }
        }
    )*};
}

impl_scalar_ops!(u8, u16, u32, u64, i8, i16, i32, i64);

//! Portable lane vectors.
//!
//! `LaneVector` holds `N` lanes that are always operated on in lockstep. It
//! only provides the primitive lane operations the division engine consumes:
//! wrapping arithmetic, multiply-high, bitwise logic, shifts, compares,
//! select, and lane access. Each operation is a straight loop over a fixed
//! size array, which the compiler lowers to the target's vector instructions.

use std::array;
use std::ops::{Add, BitAnd, BitOr, BitXor, Index, Mul, Shl, Shr, Sub};

use crate::lane::DividerInt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct LaneVector<T, const N: usize>([T; N]);

/// One boolean per lane, produced by the lane compares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct Mask<const N: usize>([bool; N]);

impl<const N: usize> Mask<N> {
    #[inline]
    pub const fn from_array(lanes: [bool; N]) -> Self {
        Self(lanes)
    }

    #[inline]
    pub fn to_array(self) -> [bool; N] {
        self.0
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.0.iter().any(|&lane| lane)
    }

    /// Blend: lanes set in the mask come from `if_true`, the rest from
    /// `if_false`.
    #[inline]
    pub fn select<T: Copy>(
        self,
        if_true: LaneVector<T, N>,
        if_false: LaneVector<T, N>,
    ) -> LaneVector<T, N> {
        LaneVector(array::from_fn(|i| {
            if self.0[i] {
                if_true.0[i]
            } else {
                if_false.0[i]
            }
        }))
    }
}

impl<T: Copy, const N: usize> LaneVector<T, N> {
    #[inline]
    pub const fn from_array(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    /// Broadcasts `value` to every lane.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn extract(&self, index: usize) -> T {
        self.0[index]
    }

    #[inline]
    pub fn map<U: Copy>(self, f: impl FnMut(T) -> U) -> LaneVector<U, N> {
        LaneVector(self.0.map(f))
    }

    #[inline]
    fn zip_map<U: Copy>(self, rhs: Self, mut f: impl FnMut(T, T) -> U) -> LaneVector<U, N> {
        LaneVector(array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    #[inline]
    fn compare(self, rhs: Self, mut f: impl FnMut(T, T) -> bool) -> Mask<N> {
        Mask(array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }
}

impl<T: DividerInt, const N: usize> LaneVector<T, N> {
    #[inline]
    pub fn mul_hi(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::mul_hi)
    }

    #[inline]
    pub fn wrapping_abs(self) -> Self {
        self.map(T::wrapping_abs)
    }

    #[inline]
    pub fn simd_eq(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a == b)
    }

    #[inline]
    pub fn simd_ge(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a >= b)
    }

    /// Shifts each lane right by its own amount; arithmetic for signed lanes.
    #[inline]
    pub fn shr_lanes(self, amounts: LaneVector<u32, N>) -> Self {
        LaneVector(array::from_fn(|i| self.0[i] >> amounts.0[i] as usize))
    }

    /// Reinterprets the lane bits as unsigned.
    #[inline]
    pub fn to_unsigned(self) -> LaneVector<T::Unsigned, N> {
        self.map(T::to_unsigned)
    }

    #[inline]
    pub fn from_unsigned(bits: LaneVector<T::Unsigned, N>) -> Self {
        bits.map(T::from_unsigned)
    }
}

impl<const N: usize> LaneVector<u8, N> {
    /// Zero-extends every lane to 16 bits.
    #[inline]
    pub fn widen(self) -> LaneVector<u16, N> {
        self.map(u16::from)
    }

    /// Replaces every lane with `table[lane]`.
    #[inline]
    pub fn lookup(self, table: &[u8; 256]) -> Self {
        self.map(|index| table[usize::from(index)])
    }
}

impl<const N: usize> LaneVector<u16, N> {
    /// Keeps the low byte of every lane.
    #[inline]
    pub fn narrow(self) -> LaneVector<u8, N> {
        self.map(|lane| lane as u8)
    }
}

impl<T, const N: usize> Index<usize> for LaneVector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

macro_rules! impl_lane_op {
    ($($trait:ident, $fn:ident, |$a:ident, $b:ident| $body:expr;)*) => {$(
        impl<T: DividerInt, const N: usize> $trait for LaneVector<T, N> {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: Self) -> Self {
                self.zip_map(rhs, |$a, $b| $body)
            }
        }
    )*};
}

impl_lane_op! {
    Add, add, |a, b| a.wrapping_add(&b);
    Sub, sub, |a, b| a.wrapping_sub(&b);
    Mul, mul, |a, b| a.wrapping_mul(&b);
    BitAnd, bitand, |a, b| a & b;
    BitOr, bitor, |a, b| a | b;
    BitXor, bitxor, |a, b| a ^ b;
}

impl<T: DividerInt, const N: usize> Shl<u32> for LaneVector<T, N> {
    type Output = Self;

    #[inline]
    fn shl(self, amount: u32) -> Self {
        self.map(|lane| lane << amount as usize)
    }
}

impl<T: DividerInt, const N: usize> Shr<u32> for LaneVector<T, N> {
    type Output = Self;

    #[inline]
    fn shr(self, amount: u32) -> Self {
        self.map(|lane| lane >> amount as usize)
    }
}

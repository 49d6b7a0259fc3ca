use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use fwint_internals::*;

use crate::UInt;

/// # Addition and subtraction
///
/// The `+`, `-`, and unary `-` operators are modular over the bitwidth; the
/// `overflowing_` forms additionally return the carry or borrow out of the
/// most significant word.
impl<const BW: usize, const LEN: usize> UInt<BW, LEN> {
    /// Computes `self + rhs`, returning the wrapped sum and the carry-out
    #[must_use]
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let mut sum = Self::zero();
        let mut carry = false;
        for i in 0..LEN {
            let tmp = add_with_carry(self.words[i], rhs.words[i], carry);
            sum.words[i] = tmp.0;
            carry = tmp.1;
        }
        (sum, carry)
    }

    /// Computes `self - rhs`, returning the wrapped difference and the
    /// borrow-out
    #[must_use]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let mut diff = Self::zero();
        let mut borrow = false;
        for i in 0..LEN {
            let tmp = sub_with_borrow(self.words[i], rhs.words[i], borrow);
            diff.words[i] = tmp.0;
            borrow = tmp.1;
        }
        (diff, borrow)
    }

    /// Computes `self + rhs` modulo the bitwidth
    #[must_use]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Computes `self - rhs` modulo the bitwidth
    #[must_use]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Computes the two's complement `!self + 1`
    #[must_use]
    pub fn wrapping_neg(self) -> Self {
        (!self).wrapping_add(Self::one())
    }
}

impl<const BW: usize, const LEN: usize> Add for UInt<BW, LEN> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl<const BW: usize, const LEN: usize> AddAssign for UInt<BW, LEN> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.wrapping_add(rhs);
    }
}

impl<const BW: usize, const LEN: usize> Sub for UInt<BW, LEN> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl<const BW: usize, const LEN: usize> SubAssign for UInt<BW, LEN> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.wrapping_sub(rhs);
    }
}

impl<const BW: usize, const LEN: usize> Neg for UInt<BW, LEN> {
    type Output = Self;

    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

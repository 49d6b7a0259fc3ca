use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use fwint_internals::*;

use crate::UInt;

/// # Bit utilities
impl<const BW: usize, const LEN: usize> UInt<BW, LEN> {
    /// Returns the least significant bit
    #[inline]
    #[must_use]
    pub const fn lsb(&self) -> bool {
        (self.words[0] & 1) != 0
    }

    /// Returns the most significant bit
    #[inline]
    #[must_use]
    pub const fn msb(&self) -> bool {
        (self.words[LEN - 1] >> (BITS - 1)) != 0
    }

    /// Returns the number of leading zero bits
    #[must_use]
    pub const fn lz(&self) -> usize {
        let mut i = LEN;
        while i > 0 {
            i -= 1;
            let w = self.words[i];
            if w != 0 {
                return ((LEN - 1 - i) * BITS) + (w.leading_zeros() as usize);
            }
        }
        BW
    }

    /// Returns the number of words up to and including the highest nonzero
    /// word, i.e. zero only for the zero value
    #[must_use]
    pub const fn sig_words(&self) -> usize {
        let mut i = LEN;
        while i > 0 {
            i -= 1;
            if self.words[i] != 0 {
                return i + 1;
            }
        }
        0
    }
}

impl<const BW: usize, const LEN: usize> Not for UInt<BW, LEN> {
    type Output = Self;

    fn not(mut self) -> Self {
        for i in 0..LEN {
            self.words[i] = !self.words[i];
        }
        self
    }
}

macro_rules! impl_bitwise {
    ($($trait_:ident, $fn_:ident, $assign_trait:ident, $assign_fn:ident, $op:tt);*;) => {
        $(
            impl<const BW: usize, const LEN: usize> $assign_trait for UInt<BW, LEN> {
                fn $assign_fn(&mut self, rhs: Self) {
                    for i in 0..LEN {
                        self.words[i] $op rhs.words[i];
                    }
                }
            }

            impl<const BW: usize, const LEN: usize> $trait_ for UInt<BW, LEN> {
                type Output = Self;

                fn $fn_(mut self, rhs: Self) -> Self {
                    self.$assign_fn(rhs);
                    self
                }
            }
        )*
    };
}

impl_bitwise!(
    BitAnd, bitand, BitAndAssign, bitand_assign, &=;
    BitOr, bitor, BitOrAssign, bitor_assign, |=;
    BitXor, bitxor, BitXorAssign, bitxor_assign, ^=;
);

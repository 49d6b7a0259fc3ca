use core::ops::{Mul, MulAssign};

use fwint_internals::*;

use crate::{UInt, U1024, U128, U256, U512};

/// # Multiplication
impl<const BW: usize, const LEN: usize> UInt<BW, LEN> {
    /// Assigns `cin + (self * rhs)` to `self` and returns the overflow word
    pub fn short_cin_mul(&mut self, cin: u64, rhs: u64) -> u64 {
        let mut carry = cin;
        for i in 0..LEN {
            let tmp = widen_mul_add(self.words[i], rhs, carry);
            self.words[i] = tmp.0;
            carry = tmp.1;
        }
        carry
    }
}

/// Truncated multiplication using word access and discarding the high part
/// of the result product
impl<const BW: usize, const LEN: usize> Mul for UInt<BW, LEN> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut p = Self::zero();
        for j in 0..LEN {
            // running carry of the short multiplication
            let mut k = 0;
            for i in 0..(LEN - 1 - j) {
                let tmp0 = widen_mul_add(self.words[i], rhs.words[j], k);
                let tmp1 = add_with_carry(p.words[i + j], tmp0.0, false);
                p.words[i + j] = tmp1.0;
                k = tmp0.1 + (tmp1.1 as u64);
            }
            // the final column only contributes its low half
            p.words[LEN - 1] = p.words[LEN - 1]
                .wrapping_add(self.words[LEN - 1 - j].wrapping_mul(rhs.words[j]))
                .wrapping_add(k);
        }
        p
    }
}

impl<const BW: usize, const LEN: usize> MulAssign for UInt<BW, LEN> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// # Widening multiplication
impl U128 {
    /// Computes the full double-width product, specialized at the word layer
    pub fn umul(self, rhs: Self) -> U256 {
        let (lo, hi) = widening_mul_add_u128(self.to_u128(), rhs.to_u128(), 0);
        U256::from_halves(U128::from_u128(hi), U128::from_u128(lo))
    }
}

macro_rules! impl_umul {
    ($uint:ty, $half:ty, $double:ty) => {
        /// # Widening multiplication
        impl $uint {
            /// Computes the full double-width product through the recursive
            /// two-half schoolbook decomposition
            pub fn umul(self, rhs: Self) -> $double {
                let t0 = self.lo().umul(rhs.lo());
                let t1 = self.hi().umul(rhs.lo());
                let t2 = self.lo().umul(rhs.hi());
                let t3 = self.hi().umul(rhs.hi());

                let u1 = t1.wrapping_add(<$uint>::from(t0.hi()));
                let u2 = t2.wrapping_add(<$uint>::from(u1.lo()));

                let l = <$uint>::from_halves(u2.lo(), t0.lo());
                let h = t3
                    .wrapping_add(<$uint>::from(u2.hi()))
                    .wrapping_add(<$uint>::from(u1.hi()));

                <$double>::from_halves(h, l)
            }

            /// Computes the truncated square of `self`. Valid only in the
            /// truncating sense; the high half of the full product is
            /// discarded.
            pub fn sqr(self) -> Self {
                let t = self.lo().umul(self.lo());
                let h = ((self.lo() * self.hi()) << 1u32).wrapping_add(t.hi());
                Self::from_halves(h, t.lo())
            }
        }
    };
}

impl_umul!(U256, U128, U512);
impl_umul!(U512, U256, U1024);

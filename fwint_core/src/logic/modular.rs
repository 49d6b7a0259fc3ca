use crate::{U256, U320, U512};

/// # Modular arithmetic
impl U256 {
    /// Computes `(self + y) % m` over the unbounded integers, using a
    /// carry-extended 320-bit numerator so the intermediate sum cannot wrap.
    ///
    /// When the modulus occupies all four words and both operands are at
    /// most slightly bigger than it (always the case when they are already
    /// reduced), a conditional-subtraction fast path is taken instead of the
    /// full division.
    ///
    /// # Panics
    ///
    /// If `m` is zero.
    #[track_caller]
    #[must_use]
    pub fn addmod(self, y: Self, m: Self) -> Self {
        if (m.words[3] != 0) && (self.words[3] <= m.words[3]) && (y.words[3] <= m.words[3]) {
            let (xr, borrow) = self.overflowing_sub(m);
            let x = if borrow { self } else { xr };

            let (yr, borrow) = y.overflowing_sub(m);
            let y = if borrow { y } else { yr };

            let (sum, carry) = x.overflowing_add(y);
            let (t, borrow) = sum.overflowing_sub(m);
            return if carry || !borrow { t } else { sum };
        }

        let (sum, carry) = self.overflowing_add(y);
        let mut n: U320 = sum.zero_resize();
        n.words[4] = carry as u64;
        let rem = n.udivrem(U320::from(m)).1;
        rem.zero_resize()
    }

    /// Computes `(self * y) % m` over the unbounded integers through the
    /// full 512-bit product.
    ///
    /// # Panics
    ///
    /// If `m` is zero.
    #[track_caller]
    #[must_use]
    pub fn mulmod(self, y: Self, m: Self) -> Self {
        let p = self.umul(y);
        p.udivrem(U512::from(m)).1.lo()
    }
}

macro_rules! impl_exp {
    ($uint:ty) => {
        /// # Exponentiation
        impl $uint {
            /// Computes `self` raised to `exponent` modulo the bitwidth by
            /// binary exponentiation
            #[must_use]
            pub fn exp(self, exponent: Self) -> Self {
                let mut result = Self::one();
                if self == Self::from_u64(2) {
                    return result << exponent;
                }

                let mut base = self;
                let mut exponent = exponent;
                while !exponent.is_zero() {
                    if exponent.lsb() {
                        result *= base;
                    }
                    base = base.sqr();
                    exponent = exponent >> 1u32;
                }
                result
            }
        }
    };
}

impl_exp!(U256);
impl_exp!(U512);

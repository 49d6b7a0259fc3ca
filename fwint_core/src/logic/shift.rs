use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use fwint_internals::BITS;

use crate::UInt;

// Every native word shift below is fed an amount in `[0, 63]`. The cross-word
// overflow for a residual shift `s` is computed as two chained shifts of
// `63 - s` and `1`, which degrades to a zero contribution when `s == 0`
// instead of an invalid shift by the word width.

fn shl_words<const BW: usize, const LEN: usize>(x: UInt<BW, LEN>, s: usize) -> UInt<BW, LEN> {
    let mut r = UInt::zero();
    if s >= BW {
        return r;
    }
    let skip = s / BITS;
    let s = (s % BITS) as u32;
    let mut carry = 0;
    for i in 0..(LEN - skip) {
        let w = x.words[i];
        r.words[i + skip] = (w << s) | carry;
        carry = (w >> (BITS as u32 - s - 1)) >> 1;
    }
    r
}

fn shr_words<const BW: usize, const LEN: usize>(x: UInt<BW, LEN>, s: usize) -> UInt<BW, LEN> {
    let mut r = UInt::zero();
    if s >= BW {
        return r;
    }
    let skip = s / BITS;
    let s = (s % BITS) as u32;
    let mut carry = 0;
    for i in (skip..LEN).rev() {
        let w = x.words[i];
        r.words[i - skip] = (w >> s) | carry;
        carry = (w << (BITS as u32 - s - 1)) << 1;
    }
    r
}

macro_rules! impl_prim_shifts {
    ($($ty:ty),*) => {
        $(
            /// Left shift; shift amounts of the bitwidth or more produce zero
            impl<const BW: usize, const LEN: usize> Shl<$ty> for UInt<BW, LEN> {
                type Output = Self;

                fn shl(self, s: $ty) -> Self {
                    if s >= (BW as $ty) {
                        Self::zero()
                    } else {
                        shl_words(self, s as usize)
                    }
                }
            }

            /// Logical right shift; shift amounts of the bitwidth or more
            /// produce zero
            impl<const BW: usize, const LEN: usize> Shr<$ty> for UInt<BW, LEN> {
                type Output = Self;

                fn shr(self, s: $ty) -> Self {
                    if s >= (BW as $ty) {
                        Self::zero()
                    } else {
                        shr_words(self, s as usize)
                    }
                }
            }

            impl<const BW: usize, const LEN: usize> ShlAssign<$ty> for UInt<BW, LEN> {
                fn shl_assign(&mut self, s: $ty) {
                    *self = *self << s;
                }
            }

            impl<const BW: usize, const LEN: usize> ShrAssign<$ty> for UInt<BW, LEN> {
                fn shr_assign(&mut self, s: $ty) {
                    *self = *self >> s;
                }
            }
        )*
    };
}

impl_prim_shifts!(u32, u64, u128, usize);

/// Left shift by a shift amount of the same wide type; shift amounts of the
/// bitwidth or more produce zero
impl<const BW: usize, const LEN: usize> Shl<UInt<BW, LEN>> for UInt<BW, LEN> {
    type Output = Self;

    fn shl(self, s: Self) -> Self {
        if (s.sig_words() > 1) || (s.words[0] >= (BW as u64)) {
            Self::zero()
        } else {
            shl_words(self, s.words[0] as usize)
        }
    }
}

/// Logical right shift by a shift amount of the same wide type; shift
/// amounts of the bitwidth or more produce zero
impl<const BW: usize, const LEN: usize> Shr<UInt<BW, LEN>> for UInt<BW, LEN> {
    type Output = Self;

    fn shr(self, s: Self) -> Self {
        if (s.sig_words() > 1) || (s.words[0] >= (BW as u64)) {
            Self::zero()
        } else {
            shr_words(self, s.words[0] as usize)
        }
    }
}

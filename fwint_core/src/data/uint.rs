use core::{
    fmt,
    ops::{Index, IndexMut},
};

use fwint_internals::*;

/// Checks that the `BW` and `LEN` values are valid for a `UInt`.
///
/// # Panics
///
/// If `BW != 64 * LEN` or `LEN < 2`.
pub(crate) const fn assert_uint_invariants<const BW: usize, const LEN: usize>() {
    if BW != LEN * BITS {
        panic!("Tried to use a `UInt<BW, LEN>` with `BW != 64 * LEN`")
    }
    if LEN < 2 {
        panic!("Tried to use a `UInt<BW, LEN>` with a bitwidth smaller than 128")
    }
}

// `UInt` has two parameters, because we absolutely have to have a parameter
// that directly specifies the word array length, and because we also want
// Rust's typechecking to distinguish between different bitwidth `UInt`s.

/// A fixed width unsigned integer with const generic bitwidth, stored as a
/// little-endian word array inline on the stack.
///
/// The two const generic parameters are redundant (`BW == 64 * LEN` always),
/// which is a workaround for const generics limitations. The width aliases
/// `U128`, `U256`, `U320`, `U512`, and `U1024` should be used instead of
/// spelling out the parameters.
///
/// Two views of the value are maintained: the flat word view through
/// indexing and `as_words`, and the recursive view through `lo`, `hi`, and
/// `from_halves` on the power-of-two widths. Both describe the same bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UInt<const BW: usize, const LEN: usize> {
    pub(crate) words: [u64; LEN],
}

/// 128-bit unsigned integer, the base case of the halving construction
pub type U128 = UInt<128, 2>;
/// 256-bit unsigned integer
pub type U256 = UInt<256, 4>;
/// 320-bit unsigned integer, the carry-extended numerator width of `addmod`
pub type U320 = UInt<320, 5>;
/// 512-bit unsigned integer
pub type U512 = UInt<512, 8>;
/// 1024-bit unsigned integer, the full product width of `U512`
pub type U1024 = UInt<1024, 16>;

/// # Basic value construction and access
impl<const BW: usize, const LEN: usize> UInt<BW, LEN> {
    /// The bitwidth
    pub const BITS: usize = BW;
    /// The number of words
    pub const WORDS: usize = LEN;

    /// Zero-value construction
    #[inline]
    pub const fn zero() -> Self {
        assert_uint_invariants::<BW, LEN>();
        UInt { words: [0; LEN] }
    }

    /// One-value construction
    #[inline]
    pub const fn one() -> Self {
        let mut x = Self::zero();
        x.words[0] = 1;
        x
    }

    /// Maximum-value construction, with all bits set
    #[inline]
    pub const fn max() -> Self {
        assert_uint_invariants::<BW, LEN>();
        UInt { words: [MAX; LEN] }
    }

    /// Constructs from a little-endian word array
    #[inline]
    pub const fn from_words(words: [u64; LEN]) -> Self {
        assert_uint_invariants::<BW, LEN>();
        UInt { words }
    }

    /// Returns a reference to the little-endian word array
    #[inline]
    pub const fn as_words(&self) -> &[u64; LEN] {
        &self.words
    }

    /// Returns a mutable reference to the little-endian word array
    #[inline]
    pub fn as_words_mut(&mut self) -> &mut [u64; LEN] {
        &mut self.words
    }

    /// Resize-copies `self` to a different width, truncating or
    /// zero-extending
    pub fn zero_resize<const BW2: usize, const LEN2: usize>(&self) -> UInt<BW2, LEN2> {
        let mut r = UInt::<BW2, LEN2>::zero();
        let len = if LEN2 < LEN { LEN2 } else { LEN };
        r.words[..len].copy_from_slice(&self.words[..len]);
        r
    }
}

/// # Primitive conversion
impl<const BW: usize, const LEN: usize> UInt<BW, LEN> {
    /// Zero-extending construction from a word
    #[inline]
    pub const fn from_u64(x: u64) -> Self {
        let mut r = Self::zero();
        r.words[0] = x;
        r
    }

    /// Zero-extending construction from a `u128`
    #[inline]
    pub const fn from_u128(x: u128) -> Self {
        let mut r = Self::zero();
        r.words[0] = x as u64;
        r.words[1] = (x >> 64) as u64;
        r
    }

    /// Truncates to the least significant word
    #[inline]
    pub const fn to_u64(&self) -> u64 {
        self.words[0]
    }

    /// Truncates to the 128 least significant bits
    #[inline]
    pub const fn to_u128(&self) -> u128 {
        (self.words[0] as u128) | ((self.words[1] as u128) << 64)
    }

    /// Truncates to the least significant byte
    #[inline]
    pub const fn to_u8(&self) -> u8 {
        self.words[0] as u8
    }

    /// Truncates to the 16 least significant bits
    #[inline]
    pub const fn to_u16(&self) -> u16 {
        self.words[0] as u16
    }

    /// Truncates to the 32 least significant bits
    #[inline]
    pub const fn to_u32(&self) -> u32 {
        self.words[0] as u32
    }

    /// Truncates to the width of a `usize`
    #[inline]
    pub const fn to_usize(&self) -> usize {
        self.words[0] as usize
    }
}

macro_rules! impl_from_prim {
    ($($ty:ty),*) => {
        $(
            impl<const BW: usize, const LEN: usize> From<$ty> for UInt<BW, LEN> {
                #[inline]
                fn from(x: $ty) -> Self {
                    Self::from_u64(x as u64)
                }
            }
        )*
    };
}

impl_from_prim!(bool, u8, u16, u32, u64, usize);

impl<const BW: usize, const LEN: usize> From<u128> for UInt<BW, LEN> {
    #[inline]
    fn from(x: u128) -> Self {
        Self::from_u128(x)
    }
}

impl<const BW: usize, const LEN: usize> Default for UInt<BW, LEN> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<const BW: usize, const LEN: usize> Index<usize> for UInt<BW, LEN> {
    type Output = u64;

    #[inline]
    fn index(&self, i: usize) -> &u64 {
        &self.words[i]
    }
}

impl<const BW: usize, const LEN: usize> IndexMut<usize> for UInt<BW, LEN> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut u64 {
        &mut self.words[i]
    }
}

impl<const BW: usize, const LEN: usize> fmt::Debug for UInt<BW, LEN> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x")?;
        fmt::LowerHex::fmt(self, f)
    }
}

macro_rules! impl_hex_fmt {
    ($($ty:ident, $fmt_word:tt, $fmt_top:tt);*;) => {
        $(
            impl<const BW: usize, const LEN: usize> fmt::$ty for UInt<BW, LEN> {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    let mut started = false;
                    for i in (0..LEN).rev() {
                        let w = self.words[i];
                        if started {
                            write!(f, $fmt_word, w)?;
                        } else if (w != 0) || (i == 0) {
                            write!(f, $fmt_top, w)?;
                            started = true;
                        }
                    }
                    Ok(())
                }
            }
        )*
    };
}

impl_hex_fmt!(
    LowerHex, "{:016x}", "{:x}";
    UpperHex, "{:016X}", "{:X}";
);

macro_rules! impl_halves {
    ($uint:ty, $half:ty, $half_len:expr) => {
        /// # The two-half view
        impl $uint {
            /// Constructs from the most significant and least significant
            /// halves
            pub const fn from_halves(hi: $half, lo: $half) -> Self {
                let mut x = Self::zero();
                let mut i = 0;
                while i < $half_len {
                    x.words[i] = lo.words[i];
                    x.words[i + $half_len] = hi.words[i];
                    i += 1;
                }
                x
            }

            /// Returns the least significant half
            pub const fn lo(&self) -> $half {
                let mut x = <$half>::zero();
                let mut i = 0;
                while i < $half_len {
                    x.words[i] = self.words[i];
                    i += 1;
                }
                x
            }

            /// Returns the most significant half
            pub const fn hi(&self) -> $half {
                let mut x = <$half>::zero();
                let mut i = 0;
                while i < $half_len {
                    x.words[i] = self.words[i + $half_len];
                    i += 1;
                }
                x
            }
        }

        impl From<$half> for $uint {
            /// Zero-extends the half-width integer
            #[inline]
            fn from(x: $half) -> Self {
                Self::from_halves(<$half>::zero(), x)
            }
        }
    };
}

impl_halves!(U256, U128, 2);
impl_halves!(U512, U256, 4);
impl_halves!(U1024, U512, 8);

/// # The two-half view
impl U128 {
    /// Constructs from the most significant and least significant words
    #[inline]
    pub const fn from_halves(hi: u64, lo: u64) -> Self {
        Self::from_words([lo, hi])
    }

    /// Returns the least significant word
    #[inline]
    pub const fn lo(&self) -> u64 {
        self.words[0]
    }

    /// Returns the most significant word
    #[inline]
    pub const fn hi(&self) -> u64 {
        self.words[1]
    }
}

impl From<U256> for U320 {
    /// Zero-extends into the carry-extended width
    #[inline]
    fn from(x: U256) -> Self {
        x.zero_resize()
    }
}

use fwint_internals::WORD_BYTES;

use crate::{UInt, U1024, U128, U256, U320, U512};

/// # Serialization
///
/// The little-endian byte format is a direct image of the word array with
/// each word in little-endian byte order; the big-endian format is the
/// reverse byte sequence. The slice functions check lengths and return
/// `None` on mismatch; the pointer functions place that burden on the
/// caller.
impl<const BW: usize, const LEN: usize> UInt<BW, LEN> {
    /// The number of bytes in the serialized value
    pub const BYTES: usize = BW / 8;

    /// Reverses the order of the words and the byte order within each word,
    /// i.e. reverses the entire byte image. `x.bswap().bswap() == x`.
    #[must_use]
    pub fn bswap(self) -> Self {
        let mut r = Self::zero();
        for i in 0..LEN {
            r.words[LEN - 1 - i] = self.words[i].swap_bytes();
        }
        r
    }

    /// Stores the little-endian bytes of `self` into `dst`, which must be
    /// exactly `BW / 8` bytes long or `None` is returned.
    #[must_use]
    pub fn store_le(&self, dst: &mut [u8]) -> Option<()> {
        if dst.len() != Self::BYTES {
            return None;
        }
        for (i, chunk) in dst.chunks_exact_mut(WORD_BYTES).enumerate() {
            chunk.copy_from_slice(&self.words[i].to_le_bytes());
        }
        Some(())
    }

    /// Loads a value from the little-endian bytes of `src`, which must be
    /// exactly `BW / 8` bytes long or `None` is returned.
    #[must_use]
    pub fn load_le(src: &[u8]) -> Option<Self> {
        if src.len() != Self::BYTES {
            return None;
        }
        let mut x = Self::zero();
        for (i, chunk) in src.chunks_exact(WORD_BYTES).enumerate() {
            let mut b = [0u8; WORD_BYTES];
            b.copy_from_slice(chunk);
            x.words[i] = u64::from_le_bytes(b);
        }
        Some(x)
    }

    /// Stores the big-endian bytes of `self` into `dst`, which must be
    /// exactly `BW / 8` bytes long or `None` is returned.
    #[must_use]
    pub fn store_be(&self, dst: &mut [u8]) -> Option<()> {
        self.bswap().store_le(dst)
    }

    /// Loads a value from the big-endian bytes of `src`, zero-extending if
    /// `src` is shorter than `BW / 8` bytes. Returns `None` if it is longer.
    #[must_use]
    pub fn load_be(src: &[u8]) -> Option<Self> {
        if src.len() > Self::BYTES {
            return None;
        }
        let mut x = Self::zero();
        for (i, &b) in src.iter().rev().enumerate() {
            x.words[i / WORD_BYTES] |= (b as u64) << ((i % WORD_BYTES) * 8);
        }
        Some(x)
    }

    /// Stores the least significant `dst.len()` big-endian bytes of `self`
    /// into `dst`, which must be strictly shorter than `BW / 8` bytes or
    /// `None` is returned.
    #[must_use]
    pub fn store_be_trunc(&self, dst: &mut [u8]) -> Option<()> {
        if dst.len() >= Self::BYTES {
            return None;
        }
        for (i, b) in dst.iter_mut().rev().enumerate() {
            *b = (self.words[i / WORD_BYTES] >> ((i % WORD_BYTES) * 8)) as u8;
        }
        Some(())
    }

    /// Loads a value from `BW / 8` big-endian bytes at `src`.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of `BW / 8` bytes.
    #[must_use]
    pub unsafe fn load_be_ptr(src: *const u8) -> Self {
        let mut x = Self::zero();
        for i in 0..Self::BYTES {
            // Safety: the caller guarantees `BW / 8` readable bytes
            let b = unsafe { src.add(i).read() };
            let j = Self::BYTES - 1 - i;
            x.words[j / WORD_BYTES] |= (b as u64) << ((j % WORD_BYTES) * 8);
        }
        x
    }

    /// Stores the `BW / 8` big-endian bytes of `self` at `dst`.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writes of `BW / 8` bytes.
    pub unsafe fn store_be_ptr(&self, dst: *mut u8) {
        for i in 0..Self::BYTES {
            let j = Self::BYTES - 1 - i;
            let b = (self.words[j / WORD_BYTES] >> ((j % WORD_BYTES) * 8)) as u8;
            // Safety: the caller guarantees `BW / 8` writable bytes
            unsafe { dst.add(i).write(b) };
        }
    }
}

macro_rules! impl_byte_arrays {
    ($($uint:ty, $bytes:expr);*;) => {
        $(
            /// # Byte array conversion
            impl $uint {
                /// Returns the little-endian byte image
                #[must_use]
                pub fn to_le_bytes(&self) -> [u8; $bytes] {
                    let mut bytes = [0; $bytes];
                    self.store_le(&mut bytes).unwrap();
                    bytes
                }

                /// Returns the big-endian byte image
                #[must_use]
                pub fn to_be_bytes(&self) -> [u8; $bytes] {
                    let mut bytes = [0; $bytes];
                    self.store_be(&mut bytes).unwrap();
                    bytes
                }

                /// Loads from a little-endian byte image
                #[must_use]
                pub fn from_le_bytes(bytes: [u8; $bytes]) -> Self {
                    Self::load_le(&bytes).unwrap()
                }

                /// Loads from a big-endian byte image
                #[must_use]
                pub fn from_be_bytes(bytes: [u8; $bytes]) -> Self {
                    Self::load_be(&bytes).unwrap()
                }
            }
        )*
    };
}

impl_byte_arrays!(
    U128, 16;
    U256, 32;
    U320, 40;
    U512, 64;
    U1024, 128;
);

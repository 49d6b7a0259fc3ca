use core::fmt;

use serde::{de, de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

use crate::{UInt, U1024, U128, U256, U320, U512};

const HEX_CHARS: [u8; 16] = *b"0123456789abcdef";

macro_rules! impl_serialize {
    ($($uint:ty, $bytes:expr);*;) => {
        $(
            /// A `serde_support` impl
            impl Serialize for $uint {
                /// In human readable formats, serializes into a
                /// `0x`-prefixed hexadecimal string with leading zeros
                /// trimmed, the same form the `FromStr` impl accepts. In
                /// compact formats, serializes the little-endian byte image.
                ///
                /// This is all done with stack buffers and no allocation.
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    if serializer.is_human_readable() {
                        let mut buf = [b'0'; 2 + 2 * $bytes];
                        buf[1] = b'x';
                        let sig_bits = Self::BITS - self.lz();
                        let digits = if sig_bits == 0 { 1 } else { (sig_bits + 3) / 4 };
                        for i in 0..digits {
                            let nibble = (self.as_words()[(i * 4) / 64] >> ((i * 4) % 64)) & 0xf;
                            buf[2 + digits - 1 - i] = HEX_CHARS[nibble as usize];
                        }
                        // the buffer is pure ASCII
                        match core::str::from_utf8(&buf[..(2 + digits)]) {
                            Ok(s) => serializer.serialize_str(s),
                            Err(_) => unreachable!(),
                        }
                    } else {
                        serializer.serialize_bytes(&self.to_le_bytes())
                    }
                }
            }
        )*
    };
}

impl_serialize!(
    U128, 16;
    U256, 32;
    U320, 40;
    U512, 64;
    U1024, 128;
);

struct UIntVisitor<const BW: usize, const LEN: usize>;

impl<'de, const BW: usize, const LEN: usize> Visitor<'de> for UIntVisitor<BW, LEN> {
    type Value = UInt<BW, LEN>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "a decimal or 0x-prefixed hexadecimal string, or {} little-endian bytes",
            BW / 8
        )
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        s.parse().map_err(de::Error::custom)
    }

    fn visit_bytes<E>(self, bytes: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        UInt::load_le(bytes)
            .ok_or_else(|| de::Error::invalid_length(bytes.len(), &self))
    }
}

/// A `serde_support` impl
impl<'de, const BW: usize, const LEN: usize> Deserialize<'de> for UInt<BW, LEN> {
    /// Deserializes from the string form in human readable formats and from
    /// the little-endian byte image otherwise.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(UIntVisitor)
        } else {
            deserializer.deserialize_bytes(UIntVisitor)
        }
    }
}

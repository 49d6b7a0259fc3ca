use core::str::FromStr;

use fwint_internals::{ParseError, ParseError::*, BITS};

use crate::UInt;

/// # String representation conversion
impl<const BW: usize, const LEN: usize> UInt<BW, LEN> {
    /// Parses hexadecimal bytes without a prefix
    fn from_hex_bytes(src: &[u8]) -> Result<Self, ParseError> {
        let mut x = Self::zero();
        let mut shl = 0;
        let mut any = false;
        let mut i = src.len();
        while i > 0 {
            i -= 1;
            let b = src[i];
            if b == b'_' {
                continue;
            }
            let digit = if b >= b'0' && b <= b'9' {
                b - b'0'
            } else if b >= b'a' && b <= b'f' {
                b - b'a' + 10
            } else if b >= b'A' && b <= b'F' {
                b - b'A' + 10
            } else {
                return Err(InvalidChar);
            } as u64;
            any = true;
            if shl >= BW {
                // there may be a bunch of leading zeros
                if digit != 0 {
                    return Err(Overflow);
                }
            } else {
                // a nibble at a multiple-of-4 position never straddles a
                // word boundary
                x.words[shl / BITS] |= digit << (shl % BITS);
            }
            shl += 4;
        }
        if !any {
            return Err(Empty);
        }
        Ok(x)
    }

    /// Parses decimal bytes
    fn from_dec_bytes(src: &[u8]) -> Result<Self, ParseError> {
        let mut x = Self::zero();
        let mut any = false;
        for &b in src {
            if b == b'_' {
                continue;
            }
            if b < b'0' || b > b'9' {
                return Err(InvalidChar);
            }
            any = true;
            if x.short_cin_mul((b - b'0') as u64, 10) != 0 {
                return Err(Overflow);
            }
        }
        if !any {
            return Err(Empty);
        }
        Ok(x)
    }
}

impl<const BW: usize, const LEN: usize> FromStr for UInt<BW, LEN> {
    type Err = ParseError;

    /// Parses a decimal string, or a hexadecimal string prefixed by `0x` or
    /// `0X`. The char `_` is ignored as a separator. Values too large for
    /// the bitwidth result in `ParseError::Overflow`.
    fn from_str(s: &str) -> Result<Self, ParseError> {
        let src = s.as_bytes();
        if let Some(hex) = src
            .strip_prefix(b"0x")
            .or_else(|| src.strip_prefix(b"0X"))
        {
            Self::from_hex_bytes(hex)
        } else {
            Self::from_dec_bytes(src)
        }
    }
}

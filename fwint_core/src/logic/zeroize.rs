use zeroize::Zeroize;

use crate::UInt;

/// A `zeroize_support` impl
impl<const BW: usize, const LEN: usize> Zeroize for UInt<BW, LEN> {
    fn zeroize(&mut self) {
        self.words.zeroize();
    }
}

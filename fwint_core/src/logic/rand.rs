use crate::UInt;

/// `rand_support` functions
impl<const BW: usize, const LEN: usize> UInt<BW, LEN> {
    /// Randomly-assigns `self` using a `rand_core::RngCore` random number
    /// generator, drawing one `u64` per word.
    pub fn rand_assign_using<R>(&mut self, rng: &mut R)
    where
        R: rand_core::RngCore,
    {
        for i in 0..LEN {
            self.words[i] = rng.next_u64();
        }
    }
}

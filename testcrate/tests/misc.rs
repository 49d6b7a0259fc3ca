use fwint::prelude::*;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};

#[test]
fn layout_consts() {
    assert_eq!(U128::BITS, 128);
    assert_eq!(U128::WORDS, 2);
    assert_eq!(U256::BITS, 256);
    assert_eq!(U256::WORDS, 4);
    assert_eq!(U256::BYTES, 32);
    assert_eq!(U320::WORDS, 5);
    assert_eq!(U512::BYTES, 64);
    assert_eq!(U1024::BITS, 1024);
    assert_eq!(core::mem::size_of::<U256>(), 32);
    assert_eq!(core::mem::size_of::<U1024>(), 128);
}

#[test]
fn word_indexing_is_bidirectional() {
    let mut x = U256::zero();
    x[0] = 0x1111;
    x[3] = 0x4444;
    assert_eq!(x[0], 0x1111);
    assert_eq!(x[1], 0);
    assert_eq!(x[3], 0x4444);
    assert_eq!(x, U256::from_words([0x1111, 0, 0, 0x4444]));
    assert_eq!(x.as_words(), &[0x1111, 0, 0, 0x4444]);
    x.as_words_mut()[1] = 7;
    assert_eq!(x[1], 7);
}

#[test]
#[should_panic]
fn word_index_out_of_range() {
    let x = U256::zero();
    let _ = x[4];
}

#[test]
fn primitive_conversions() {
    assert_eq!(U256::from(true), U256::one());
    assert_eq!(U256::from(false), U256::zero());
    assert_eq!(U256::from(0xffu8).to_u8(), 0xff);
    assert_eq!(U256::from(0xffffu16).to_u16(), 0xffff);
    assert_eq!(U256::from(5u32), U256::from_u64(5));
    assert_eq!(U256::from(usize::MAX).to_usize(), usize::MAX);
    let x = U256::from_u128(u128::MAX);
    assert_eq!(x.to_u128(), u128::MAX);
    assert_eq!(x[0], u64::MAX);
    assert_eq!(x[1], u64::MAX);
    assert_eq!(x[2], 0);
    // conversion to a smaller integer truncates
    let y = U256::max();
    assert_eq!(y.to_u64(), u64::MAX);
    assert_eq!(y.to_u32(), u32::MAX);
    assert_eq!(y.to_u128(), u128::MAX);
}

#[test]
fn zero_extension_between_widths() {
    let x: U256 = "0x123456789abcdef0f0debc9a78563412".parse().unwrap();
    let wide = U512::from(x);
    assert_eq!(wide.lo(), x);
    assert_eq!(wide.hi(), U256::zero());
    let back: U256 = wide.zero_resize();
    assert_eq!(back, x);
    // truncating resize drops the high words
    let top_heavy = U512::from_halves(U256::max(), x);
    let trunc: U256 = top_heavy.zero_resize();
    assert_eq!(trunc, x);
    let ext: U320 = U320::from(x);
    assert_eq!(ext[4], 0);
    assert_eq!(ext[0], x[0]);
}

#[test]
fn halves_of_the_base_case() {
    let x = U128::from_halves(0xdead, 0xbeef);
    assert_eq!(x.hi(), 0xdead);
    assert_eq!(x.lo(), 0xbeef);
    assert_eq!(x[0], 0xbeef);
    assert_eq!(x[1], 0xdead);
    assert_eq!(x.to_u128(), (0xdead_u128 << 64) | 0xbeef);
}

#[test]
fn halves_and_flat_views_coincide() {
    let lo = U128::from_u128(0x1111_2222_3333_4444_5555_6666_7777_8888);
    let hi = U128::from_u128(0x9999_aaaa_bbbb_cccc_dddd_eeee_ffff_0000);
    let x = U256::from_halves(hi, lo);
    assert_eq!(x[0], lo[0]);
    assert_eq!(x[1], lo[1]);
    assert_eq!(x[2], hi[0]);
    assert_eq!(x[3], hi[1]);
    assert_eq!(x.lo(), lo);
    assert_eq!(x.hi(), hi);
}

#[test]
fn bit_utilities() {
    assert_eq!(U256::zero().lz(), 256);
    assert_eq!(U256::zero().sig_words(), 0);
    assert_eq!(U256::one().lz(), 255);
    assert_eq!(U256::one().sig_words(), 1);
    assert_eq!(U256::max().lz(), 0);
    assert_eq!(U256::max().sig_words(), 4);
    let x = U256::one() << 64u32;
    assert_eq!(x.lz(), 191);
    assert_eq!(x.sig_words(), 2);
    assert!(!x.lsb() && !x.msb());
    assert!(U256::one().lsb());
    assert!((U256::one() << 255u32).msb());
}

#[test]
fn default_and_ordering() {
    assert_eq!(U256::default(), U256::zero());
    assert!(U256::zero() < U256::one());
    assert!(U256::one() < U256::max());
    let a = U256::from_words([5, 0, 0, 1]);
    let b = U256::from_words([4, 0, 0, 2]);
    // comparison runs from the most significant word down
    assert!(a < b);
    assert_eq!(a.max(b), b);
}

/// The word-layer widening multiply base case against the recursive product
#[test]
fn fwint_internals_test() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    for _ in 0..1000 {
        let mut lhs = U128::zero();
        let mut rhs = U128::zero();
        let mut add = U128::zero();
        lhs.rand_assign_using(&mut rng);
        rhs.rand_assign_using(&mut rng);
        add.rand_assign_using(&mut rng);
        let (lo, hi) =
            fwint_internals::widening_mul_add_u128(lhs.to_u128(), rhs.to_u128(), add.to_u128());
        let expected = lhs.umul(rhs) + U256::from(add);
        assert_eq!(
            U256::from_halves(U128::from_u128(hi), U128::from_u128(lo)),
            expected
        );
    }
}

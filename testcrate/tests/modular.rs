use fwint::prelude::*;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

fn p256(s: &str) -> U256 {
    s.parse().unwrap()
}

fn rand_u256(rng: &mut Xoshiro128StarStar) -> U256 {
    let mut x = U256::zero();
    x.rand_assign_using(rng);
    // probe top-word edge shapes often, the fast path guard depends on them
    match rng.next_u32() % 4 {
        0 => x[3] = 0,
        1 => x[3] |= 1 << 63,
        _ => (),
    }
    x
}

/// The carry-extended reference formulation: a 257-bit sum packed into a
/// `U320` numerator and reduced by the division engine
fn addmod_simple(x: U256, y: U256, m: U256) -> U256 {
    let (sum, carry) = x.overflowing_add(y);
    let mut n = U320::from(sum);
    n[4] = carry as u64;
    n.udivrem(U320::from(m)).1.zero_resize()
}

/// The reduce-first formulation
fn addmod_prenormalize(x: U256, y: U256, m: U256) -> U256 {
    let xm = if x >= m { x % m } else { x };
    let ym = if y >= m { y % m } else { y };
    let (sum, carry) = xm.overflowing_add(ym);
    if carry || sum >= m {
        sum.wrapping_sub(m)
    } else {
        sum
    }
}

/// All formulations of `addmod` agree, whichever path the public one takes
#[test]
fn addmod_agreement() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    for _ in 0..10000 {
        let x = rand_u256(&mut rng);
        let y = rand_u256(&mut rng);
        let m = rand_u256(&mut rng);
        if m.is_zero() {
            continue;
        }
        let expected = addmod_simple(x, y, m);
        assert_eq!(x.addmod(y, m), expected);
        assert_eq!(addmod_prenormalize(x, y, m), expected);

        // inputs reduced modulo `m` force the fast path whenever the guard
        // can hold at all
        let xr = x % m;
        let yr = y % m;
        let expected = addmod_simple(xr, yr, m);
        assert_eq!(xr.addmod(yr, m), expected);
        assert_eq!(addmod_prenormalize(xr, yr, m), expected);
    }
}

/// `addmod(2^256 - 1, 2^256 - 1, 2^255) == 2^255 - 2`, which requires the
/// carry extension of the 257-bit numerator
#[test]
fn addmod_carry_extension() {
    let m = U256::one() << 255u32;
    assert_eq!(
        U256::max().addmod(U256::max(), m),
        m - U256::from_u64(2)
    );
}

#[test]
fn addmod_vectors() {
    let a = p256("0x43b7a3a69a8dca03580d7b71d8f564135be6128e18c267976142ea7d17be3111");
    let b = p256("0xec1b8ca1f91e1d4c1ff49b7889463e85759cde66bacfb3d00b1f9163ce9ff57f");
    let m = p256("0xe2acf72f9e574f7aa0ee89aed453dd324b0dbb418d5288f1142c3fe860e7a113");
    let out = p256("0x4d263918f55497d4d7138d3b8de7c566867535b3463f927658363bf88576857d");
    assert_eq!(a.addmod(b, m), out);

    assert_eq!(a.addmod(b, U256::one()), U256::zero());
    assert_eq!(U256::zero().addmod(U256::zero(), m), U256::zero());
}

#[test]
fn mulmod_vectors() {
    // 2^128 * 2^128 mod (2^256 - 189) == 189
    let x = U256::one() << 128u32;
    let m = U256::zero() - U256::from_u64(189);
    assert_eq!(x.mulmod(x, m), U256::from_u64(189));

    let a = p256("0x43b7a3a69a8dca03580d7b71d8f564135be6128e18c267976142ea7d17be3111");
    let b = p256("0xec1b8ca1f91e1d4c1ff49b7889463e85759cde66bacfb3d00b1f9163ce9ff57f");
    let m = p256("0xe2acf72f9e574f7aa0ee89aed453dd324b0dbb418d5288f1142c3fe860e7a113");
    let out = p256("0x9f47bd5f0991a20f1a0bcabbdce7f915afe95366b42f0e9163775ab8079aaec5");
    assert_eq!(a.mulmod(b, m), out);
}

/// `mulmod` through the full product agrees with reducing both operands
/// first and with the truncated product when nothing overflows
#[test]
fn mulmod_agreement() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    for _ in 0..10000 {
        let x = rand_u256(&mut rng);
        let y = rand_u256(&mut rng);
        let m = rand_u256(&mut rng);
        if m.is_zero() {
            continue;
        }
        let out = x.mulmod(y, m);
        assert!(out < m);
        assert_eq!(out, (x % m).mulmod(y % m, m));
        // against an independent reduction of the double-width product
        let p = x.umul(y);
        let expected: U256 = p.udivrem(U512::from(m)).1.zero_resize();
        assert_eq!(out, expected);
    }
}

#[test]
fn exp_powers_of_two() {
    assert_eq!(
        U256::from_u64(2).exp(U256::from_u64(255)),
        U256::one() << 255u32
    );
    assert_eq!(U256::from_u64(2).exp(U256::from_u64(256)), U256::zero());
    assert_eq!(U256::from_u64(2).exp(U256::max()), U256::zero());
    assert_eq!(
        U512::from_u64(2).exp(U512::from_u64(511)),
        U512::one() << 511u32
    );
}

#[test]
fn exp_vectors() {
    // the last 256 bits of 3^256
    assert_eq!(
        U256::from_u64(3).exp(U256::from_u64(256)),
        p256("0xc7adeeb80d4fff81fed242815e55bc8375a205de07597d51d2105f2f0730f401")
    );
    assert_eq!(
        U256::from_u64(7).exp(U256::from_u64(100)),
        p256("0x5319d5e494c9a977611d99b7b5cb34b967d4a2c6aecef68933be1fc93d3a1a61")
    );
    assert_eq!(U256::from_u64(3).exp(U256::zero()), U256::one());
    assert_eq!(U256::zero().exp(U256::zero()), U256::one());
    assert_eq!(U256::zero().exp(U256::from_u64(5)), U256::zero());
    let x = p256("0x123456789abcdef0fedcba9876543210");
    assert_eq!(x.exp(U256::one()), x);
    assert_eq!(
        U512::from_u64(3).exp(U512::from_u64(10)),
        U512::from_u64(59049)
    );
}

/// `exp(x, a) * exp(x, b) == exp(x, a + b)` modulo the bitwidth
#[test]
fn exp_is_a_homomorphism() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    for _ in 0..200 {
        let x = rand_u256(&mut rng);
        let a = U256::from_u64(rng.next_u64() % (1 << 10));
        let b = U256::from_u64(rng.next_u64() % (1 << 10));
        assert_eq!(x.exp(a) * x.exp(b), x.exp(a + b));
    }
}

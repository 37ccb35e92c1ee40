//! prime number arithmetic

use crate::error::{Error, Result};
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// computes `x^-1 mod modulus` as `x^(modulus-2)`, `modulus` must be prime
/// Example:
/// ```
/// use ecshare::math::mod_inverse;
/// use num_bigint::BigUint;
///
/// let inv = mod_inverse(&BigUint::from(3u32), &BigUint::from(7u32)).unwrap();
/// assert_eq!(inv, BigUint::from(5u32));
/// ```
pub fn mod_inverse(x: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus <= &BigUint::one() {
        return Err(Error::NotInvertible);
    }
    let x = x % modulus;
    if x.is_zero() {
        return Err(Error::NotInvertible);
    }
    Ok(x.modpow(&(modulus - 2u32), modulus))
}

/// admits a signed integer as a scalar, rejecting negative values
pub fn scalar_from_signed(value: &BigInt) -> Result<BigUint> {
    value.to_biguint().ok_or(Error::InvalidScalar)
}

pub trait PseudoPrimalityTester {
    const MAX_ITERTIME: usize = 64;

    /// tests `n` against witness `a`, false means `n` is composite
    fn check(n: &BigUint, a: &BigUint) -> bool;

    /// probabilistic primality test with witnesses drawn from `rng`
    fn is_prime<R: RngCore + CryptoRng + ?Sized>(n: &BigUint, rng: &mut R) -> bool {
        let two = BigUint::from(2u32);
        let three = BigUint::from(3u32);
        if *n == two || *n == three {
            return true;
        }
        if *n < two || !n.bit(0) {
            return false;
        }
        let upper = n - 1u32;
        for _ in 0..Self::MAX_ITERTIME {
            let witness = rng.gen_biguint_range(&two, &upper);
            if !Self::check(n, &witness) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FermatTester;

impl PseudoPrimalityTester for FermatTester {
    fn check(n: &BigUint, a: &BigUint) -> bool {
        a.modpow(&(n - 1u32), n).is_one()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MillerRabinTester;

impl PseudoPrimalityTester for MillerRabinTester {
    fn check(n: &BigUint, a: &BigUint) -> bool {
        let minus_one = n - 1u32;
        let h = minus_one.trailing_zeros().unwrap_or(0);
        let t = &minus_one >> h;
        let mut b = a.modpow(&t, n);
        if b.is_one() || b == minus_one {
            return true;
        }
        for _ in 1..h {
            b = &b * &b % n;
            if b == minus_one {
                return true;
            }
            if b.is_one() {
                return false;
            }
        }
        false
    }
}

#[test]
fn test_mod_inverse() {
    let p = BigUint::from(101u32);
    for x in 1u32..101 {
        let inv = mod_inverse(&BigUint::from(x), &p).unwrap();
        assert!((inv * x % &p).is_one());
    }
    // reduced before inverting
    assert_eq!(
        mod_inverse(&BigUint::from(104u32), &p),
        mod_inverse(&BigUint::from(3u32), &p)
    );
}

#[test]
fn test_mod_inverse_of_zero() {
    let p = BigUint::from(101u32);
    assert_eq!(mod_inverse(&BigUint::zero(), &p), Err(Error::NotInvertible));
    assert_eq!(mod_inverse(&p, &p), Err(Error::NotInvertible));
}

#[test]
fn test_scalar_from_signed() {
    assert_eq!(scalar_from_signed(&BigInt::from(42)), Ok(BigUint::from(42u32)));
    assert_eq!(scalar_from_signed(&BigInt::zero()), Ok(BigUint::zero()));
    assert_eq!(scalar_from_signed(&BigInt::from(-1)), Err(Error::InvalidScalar));
}

#[test]
fn test_carmichael() {
    // 561 = 3 * 11 * 17 fools the Fermat check for base 2
    let n = BigUint::from(561u32);
    let a = BigUint::from(2u32);
    assert!(FermatTester::check(&n, &a));
    assert!(!MillerRabinTester::check(&n, &a));
}

#[test]
fn test_is_prime() {
    use rand::{rngs::StdRng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(7);
    for p in [2u32, 3, 5, 7, 65537, 2147483647] {
        assert!(MillerRabinTester::is_prime(&BigUint::from(p), &mut rng));
    }
    for c in [0u32, 1, 4, 9, 561, 65535, 2147483649] {
        assert!(!MillerRabinTester::is_prime(&BigUint::from(c), &mut rng));
    }
}

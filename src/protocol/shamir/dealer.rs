//! deals Shamir shares at the indices 1..=n

use super::{
    polynomial::{evaluate_polynomial, generate_coefficients},
    SecretSharing, Share,
};
use crate::error::{Error, Result};
use crate::math::Curve;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// evaluates the polynomial at `x = 1, 2, ..., n`
pub fn compute_shares(coefficients: &[BigUint], n: usize, curve: &Curve) -> Result<Vec<Share>> {
    if coefficients.is_empty() {
        return Err(Error::InvalidThreshold);
    }
    if n < 1 {
        return Err(Error::InvalidShareCount);
    }
    let shares = (1..=n)
        .map(|index| {
            let value = evaluate_polynomial(coefficients, &BigUint::from(index), curve.r());
            Share::new(index, value)
        })
        .collect();
    log::debug!("computed {} shares over {}", n, curve.name());
    Ok(shares)
}

/// (t, n) Shamir dealer over the scalar field of a curve
#[derive(Clone, Copy, Debug)]
pub struct Dealer<'a> {
    curve: &'a Curve,
    threshold: usize,
}

impl<'a> Dealer<'a> {
    pub fn new(curve: &'a Curve, threshold: usize) -> Result<Self> {
        if threshold < 1 {
            return Err(Error::InvalidThreshold);
        }
        Ok(Self { curve, threshold })
    }

    pub fn curve(&self) -> &'a Curve {
        self.curve
    }
}

impl SecretSharing for Dealer<'_> {
    fn threshold(&self) -> usize {
        self.threshold
    }

    fn split<R: RngCore + CryptoRng + ?Sized>(
        &self,
        secret: &BigUint,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Share>> {
        if n < 1 {
            return Err(Error::InvalidShareCount);
        }
        let coefficients = generate_coefficients(secret, self.threshold, self.curve, rng)?;
        compute_shares(&coefficients, n, self.curve)
    }
}

#[test]
fn test_compute_shares() {
    use crate::math::registry;
    let curve = registry::lookup("secp256r1").unwrap();
    let coefficients: Vec<BigUint> = [7u32, 3, 5].iter().map(|&c| BigUint::from(c)).collect();
    let shares = compute_shares(&coefficients, 3, curve).unwrap();
    let expected = [(1, 15u32), (2, 33), (3, 61)];
    assert_eq!(shares.len(), 3);
    for (share, (index, value)) in shares.iter().zip(expected) {
        assert_eq!(share.index, index);
        assert_eq!(share.value, BigUint::from(value));
    }
}

#[test]
fn test_compute_shares_rejects_bad_input() {
    use crate::math::registry;
    let curve = registry::lookup("secp256r1").unwrap();
    let coefficients = vec![BigUint::from(1u32)];
    assert_eq!(compute_shares(&coefficients, 0, curve), Err(Error::InvalidShareCount));
    assert_eq!(compute_shares(&[], 3, curve), Err(Error::InvalidThreshold));
}

#[test]
fn test_fewer_shares_than_threshold() {
    use crate::math::registry;
    use rand::{rngs::StdRng, SeedableRng};
    let curve = registry::lookup("secp192r1").unwrap();
    let dealer = Dealer::new(curve, 4).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let shares = dealer.split(&BigUint::from(9u32), 2, &mut rng).unwrap();
    assert_eq!(shares.len(), 2);
    assert_eq!(dealer.threshold(), 4);
}

#[test]
fn test_split_with_threshold_one() {
    use crate::math::registry;
    use rand::rngs::OsRng;
    // a constant polynomial hands every holder the secret itself
    let curve = registry::lookup("secp521r1").unwrap();
    let dealer = Dealer::new(curve, 1).unwrap();
    let secret = BigUint::from(123456789u32);
    let shares = dealer.split(&secret, 5, &mut OsRng).unwrap();
    assert!(shares.iter().all(|share| share.value == secret));
    assert!(Dealer::new(curve, 0).is_err());
}

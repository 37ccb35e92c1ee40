//! Feldman commitments to a sharing polynomial
//!
//! Publishing `C_i = c_i * B` for every coefficient lets a holder check its
//! share against `sum(index^i * C_i)` without learning the coefficients.
//! `C_0` is the public key of the secret.

use super::Share;
use crate::error::{Error, Result};
use crate::math::{Curve, Point};
use num_bigint::BigUint;
use num_traits::One;

/// commits to each coefficient by multiplying the curve's base point
pub fn commit(coefficients: &[BigUint], curve: &Curve) -> Result<Vec<Point>> {
    coefficients
        .iter()
        .map(|coefficient| curve.multiply_point(curve.base(), coefficient))
        .collect()
}

/// computes the public key of the share held at `index`
pub fn share_public_key(commitments: &[Point], index: usize, curve: &Curve) -> Result<Point> {
    let index = BigUint::from(index);
    let mut power = BigUint::one();
    let mut sum = Point::Infinity;
    for commitment in commitments {
        let term = curve.multiply_point(commitment, &power)?;
        sum = curve.add_points(&sum, &term)?;
        power = power * &index % curve.r();
    }
    Ok(sum)
}

/// checks that a share lies on the committed polynomial
pub fn verify_share(share: &Share, commitments: &[Point], curve: &Curve) -> Result<()> {
    let expected = curve.multiply_point(curve.base(), &share.value)?;
    if expected == share_public_key(commitments, share.index, curve)? {
        Ok(())
    } else {
        Err(Error::InconsistentShare(share.index))
    }
}

#[test]
fn test_verify_dealt_shares() {
    use super::{compute_shares, generate_coefficients};
    use crate::math::registry;
    use rand::{rngs::StdRng, SeedableRng};
    let curve = registry::lookup("secp192r1").unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let secret = BigUint::from(31337u32);
    let coefficients = generate_coefficients(&secret, 3, curve, &mut rng).unwrap();
    let commitments = commit(&coefficients, curve).unwrap();
    assert_eq!(
        commitments[0],
        curve.multiply_point(curve.base(), &secret).unwrap()
    );
    let mut shares = compute_shares(&coefficients, 4, curve).unwrap();
    for share in &shares {
        assert_eq!(verify_share(share, &commitments, curve), Ok(()));
    }
    shares[2].value += 1u32;
    assert_eq!(
        verify_share(&shares[2], &commitments, curve),
        Err(Error::InconsistentShare(3))
    );
}

#[test]
fn test_share_public_key_on_toy_curve() {
    use crate::math::curve::toy_curve;
    let curve = toy_curve();
    // f(x) = 2 + 3x over GF(19), so f(4) = 14
    let coefficients = vec![BigUint::from(2u32), BigUint::from(3u32)];
    let commitments = commit(&coefficients, &curve).unwrap();
    let expected = curve.multiply_point(curve.base(), &BigUint::from(14u32)).unwrap();
    assert_eq!(share_public_key(&commitments, 4, &curve).unwrap(), expected);
    assert_eq!(share_public_key(&[], 4, &curve).unwrap(), Point::Infinity);
}

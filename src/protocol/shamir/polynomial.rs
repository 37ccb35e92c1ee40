//! sharing polynomials over the group order of a curve

use crate::error::{Error, Result};
use crate::math::Curve;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// draws the coefficients of a degree `threshold - 1` polynomial whose
/// constant term is the secret
/// * `secret` - reduced modulo the group order into coefficient 0
/// * `threshold` - number of coefficients, at least 1
/// * `rng` - source of the remaining coefficients, uniform in `[1, r-1]`
pub fn generate_coefficients<R: RngCore + CryptoRng + ?Sized>(
    secret: &BigUint,
    threshold: usize,
    curve: &Curve,
    rng: &mut R,
) -> Result<Vec<BigUint>> {
    if threshold < 1 {
        return Err(Error::InvalidThreshold);
    }
    let one = BigUint::one();
    let order = curve.r();
    if threshold > 1 && order <= &one {
        return Err(Error::InvalidCurve(format!("{}: group order too small", curve.name())));
    }
    let mut coefficients = Vec::with_capacity(threshold);
    coefficients.push(secret % order);
    for _ in 1..threshold {
        coefficients.push(rng.gen_biguint_range(&one, order));
    }
    log::debug!("drew {} coefficients over {}", threshold, curve.name());
    Ok(coefficients)
}

/// computes `sum(c_i * x^i) mod r` by Horner's rule
pub fn evaluate_polynomial(coefficients: &[BigUint], x: &BigUint, r: &BigUint) -> BigUint {
    let x = x % r;
    coefficients
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, coefficient| (acc * &x + coefficient) % r)
}

#[cfg(test)]
fn naive_evaluate(coefficients: &[BigUint], x: &BigUint, r: &BigUint) -> BigUint {
    let mut sum = BigUint::zero();
    for (i, coefficient) in coefficients.iter().enumerate() {
        sum += coefficient * x.modpow(&BigUint::from(i), r);
    }
    sum % r
}

#[test]
fn test_generate_coefficients() {
    use crate::math::registry;
    use rand::{rngs::StdRng, SeedableRng};
    let curve = registry::lookup("secp256r1").unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let secret = BigUint::from(42u32);
    let coefficients = generate_coefficients(&secret, 5, curve, &mut rng).unwrap();
    assert_eq!(coefficients.len(), 5);
    assert_eq!(coefficients[0], secret);
    for coefficient in &coefficients[1..] {
        assert!(!coefficient.is_zero());
        assert!(coefficient < curve.r());
    }
    // the secret is reduced into the scalar field
    let wrapped = curve.r() + 7u32;
    let coefficients = generate_coefficients(&wrapped, 1, curve, &mut rng).unwrap();
    assert_eq!(coefficients, vec![BigUint::from(7u32)]);
}

#[test]
fn test_generate_coefficients_rejects_zero_threshold() {
    use crate::math::registry;
    use rand::rngs::OsRng;
    let curve = registry::lookup("secp192r1").unwrap();
    assert_eq!(
        generate_coefficients(&BigUint::one(), 0, curve, &mut OsRng),
        Err(Error::InvalidThreshold)
    );
}

#[test]
fn test_evaluate_polynomial() {
    let r = BigUint::from(19u32);
    let coefficients: Vec<BigUint> = [7u32, 3, 5].iter().map(|&c| BigUint::from(c)).collect();
    // 7 + 3x + 5x^2
    let expected = [7u32, 15, 14, 4, 4, 14];
    for (x, y) in expected.iter().enumerate() {
        let x = BigUint::from(x);
        assert_eq!(evaluate_polynomial(&coefficients, &x, &r), BigUint::from(*y));
        assert_eq!(
            evaluate_polynomial(&coefficients, &x, &r),
            naive_evaluate(&coefficients, &x, &r)
        );
    }
    // x is reduced first, so x = r behaves like x = 0
    assert_eq!(evaluate_polynomial(&coefficients, &r, &r), BigUint::from(7u32));
    assert_eq!(evaluate_polynomial(&[], &BigUint::one(), &r), BigUint::zero());
}

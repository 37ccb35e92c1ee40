//! derives the public key of a secret and runs a full dealing

use super::shamir::{compute_shares, feldman, generate_coefficients, Share};
use crate::config::ShareConfig;
use crate::error::{Error, Result};
use crate::math::{Curve, Point};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// multiplies `base` by the secret scalar
pub fn derive_public_key(secret: &BigUint, curve: &Curve, base: &Point) -> Result<Point> {
    curve.multiply_point(base, secret)
}

/// shares and public key produced by one run of the pipeline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dealing {
    pub curve: &'static str,
    pub threshold: usize,
    pub shares: Vec<Share>,
    pub public_key: Point,
    /// Feldman commitments, present when requested
    pub commitments: Option<Vec<Point>>,
}

/// draws a fresh polynomial from `rng` and deals it
pub fn deal<R: RngCore + CryptoRng + ?Sized>(config: &ShareConfig, rng: &mut R) -> Result<Dealing> {
    let curve = config.curve()?;
    let coefficients = generate_coefficients(&config.secret, config.threshold, curve, rng)?;
    deal_with_coefficients(config, &coefficients)
}

/// deals a given polynomial, which must have `config.threshold` coefficients
/// and the configured secret as its constant term
pub fn deal_with_coefficients(config: &ShareConfig, coefficients: &[BigUint]) -> Result<Dealing> {
    let curve = config.curve()?;
    if coefficients.is_empty() || coefficients.len() != config.threshold {
        return Err(Error::InvalidThreshold);
    }
    if coefficients[0] != &config.secret % curve.r() {
        return Err(Error::SecretMismatch);
    }
    log::debug!(
        "dealing {} shares with threshold {} over {}",
        config.num_shares,
        config.threshold,
        curve.name()
    );
    let shares = compute_shares(coefficients, config.num_shares, curve)?;
    let public_key = derive_public_key(&config.secret, curve, curve.base())?;
    let commitments = if config.feldman {
        Some(feldman::commit(coefficients, curve)?)
    } else {
        None
    };
    Ok(Dealing {
        curve: curve.name(),
        threshold: config.threshold,
        shares,
        public_key,
        commitments,
    })
}

#[cfg(test)]
fn parse(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 10).unwrap()
}

#[test]
fn test_public_key_of_one_is_base() {
    use crate::math::registry;
    let curve = registry::lookup("secp256r1").unwrap();
    let base = Point::new(
        parse("28180968562641497067278236429211977508043174361740661643726011666495902464602"),
        parse("71059786474789917358912012681919876999588411700471748715771920653989729645170"),
    );
    assert_eq!(curve.base(), &base);
    let public_key = derive_public_key(&BigUint::from(1u32), curve, &base).unwrap();
    assert_eq!(public_key, base);
}

#[test]
fn test_known_public_keys() {
    use crate::math::registry;
    let curve = registry::lookup("secp256r1").unwrap();
    let cases = [
        (
            2u32,
            "112321057109537675011733344352038511954637948781727278830143426155882534787733",
            "79849315145246188977162923392619640837411993306104507002190731368522552890149",
        ),
        (
            3,
            "24628105943323532343830382306665647625145362086699452298943152996282910627304",
            "104895835305117921381820270823788761793040407462693811414823596203839087610158",
        ),
        (
            12345,
            "67525219802428095605546919704008788768098572570428444929722920274592393150812",
            "35663154633832246190178119134901892310700649944362506029138465508273411537120",
        ),
    ];
    for (secret, x, y) in cases {
        let public_key = derive_public_key(&BigUint::from(secret), curve, curve.base()).unwrap();
        assert_eq!(public_key, Point::new(parse(x), parse(y)), "{}", secret);
    }
}

#[test]
fn test_zero_secret() {
    use rand::{rngs::StdRng, SeedableRng};
    let config = ShareConfig::from_args("3", "2", "0", None).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let dealing = deal(&config, &mut rng).unwrap();
    assert_eq!(dealing.shares.len(), 3);
    assert_eq!(dealing.public_key, Point::Infinity);
    assert!(dealing.commitments.is_none());
}

#[test]
fn test_deal_is_deterministic_for_fixed_coefficients() {
    let mut config = ShareConfig::from_args("4", "3", "99", Some("secp192r1")).unwrap();
    config.feldman = true;
    let coefficients = vec![BigUint::from(99u32), BigUint::from(5u32), BigUint::from(11u32)];
    let first = deal_with_coefficients(&config, &coefficients).unwrap();
    let second = deal_with_coefficients(&config, &coefficients).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.curve, "secp192r1");
    assert_eq!(first.threshold, 3);
    let commitments = first.commitments.unwrap();
    assert_eq!(commitments.len(), 3);
    assert_eq!(commitments[0], first.public_key);
}

#[test]
fn test_deal_with_seeded_rng() {
    use num_traits::Zero;
    use rand::{rngs::StdRng, SeedableRng};
    let config = ShareConfig::from_args("5", "3", "7", None).unwrap();
    let first = deal(&config, &mut StdRng::seed_from_u64(11)).unwrap();
    let second = deal(&config, &mut StdRng::seed_from_u64(11)).unwrap();
    assert_eq!(first, second);
    let indices: Vec<usize> = first.shares.iter().map(|share| share.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    assert!(first.shares.iter().all(|share| !share.value.is_zero()));
}

#[test]
fn test_deal_rejects_foreign_polynomial() {
    // shares of 9 must not be published under the public key of 5
    let config = ShareConfig::from_args("3", "2", "5", None).unwrap();
    let coefficients = vec![BigUint::from(9u32), BigUint::from(4u32)];
    assert_eq!(
        deal_with_coefficients(&config, &coefficients),
        Err(Error::SecretMismatch)
    );
    // an unreduced constant term is not a scalar field element
    let curve = config.curve().unwrap();
    let wrapped = vec![curve.r() + 5u32, BigUint::from(4u32)];
    assert_eq!(
        deal_with_coefficients(&config, &wrapped),
        Err(Error::SecretMismatch)
    );
    let reduced = vec![BigUint::from(5u32), BigUint::from(4u32)];
    let dealing = deal_with_coefficients(&config, &reduced).unwrap();
    assert_eq!(
        dealing.public_key,
        derive_public_key(&reduced[0], curve, curve.base()).unwrap()
    );
}

#[test]
fn test_deal_rejects_wrong_coefficient_count() {
    let config = ShareConfig::from_args("3", "2", "5", None).unwrap();
    assert_eq!(deal_with_coefficients(&config, &[]), Err(Error::InvalidThreshold));
    let three = vec![BigUint::from(5u32), BigUint::from(4u32), BigUint::from(1u32)];
    assert_eq!(
        deal_with_coefficients(&config, &three),
        Err(Error::InvalidThreshold)
    );
}

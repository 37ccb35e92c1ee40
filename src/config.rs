//! configuration of a single dealing, built from the `shamir-share`
//! arguments or directly by library callers
//!
//! counts and the sign of the secret are checked here, before any curve
//! arithmetic runs

use crate::error::{Error, Result};
use crate::math::{registry, scalar_from_signed, Curve};
use clap::ArgMatches;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use std::str::FromStr;

/// how the dealing is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// parameters of one split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// number of shares to hand out (n)
    pub num_shares: usize,

    /// number of shares needed to reconstruct (t)
    pub threshold: usize,

    /// secret scalar, reduced mod r when sharing
    pub secret: BigUint,

    /// SEC name of the curve, e.g. "secp256r1"
    pub curve: String,

    /// also publish Feldman commitments to the polynomial
    pub feldman: bool,

    /// validate the curve parameters before dealing
    pub check_curve: bool,

    pub format: OutputFormat,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            num_shares: 1,
            threshold: 1,
            secret: BigUint::zero(),
            curve: String::from(registry::DEFAULT_CURVE),
            feldman: false,
            check_curve: false,
            format: OutputFormat::Text,
        }
    }
}

fn parse_integer(what: &str, value: &str) -> Result<BigInt> {
    BigInt::from_str(value.trim()).map_err(|_| Error::Parse(format!("{} '{}'", what, value)))
}

fn parse_count(what: &str, value: &str, error: Error) -> Result<usize> {
    let count = parse_integer(what, value)?;
    if count < BigInt::from(1) {
        return Err(error);
    }
    usize::try_from(count).map_err(|_| Error::Parse(format!("{} '{}'", what, value)))
}

impl ShareConfig {
    /// builds a configuration from the positional arguments; the curve name
    /// is resolved first so an unknown curve wins over malformed numbers
    pub fn from_args(
        num_shares: &str,
        threshold: &str,
        secret: &str,
        curve: Option<&str>,
    ) -> Result<Self> {
        let curve = curve.unwrap_or(registry::DEFAULT_CURVE);
        registry::lookup(curve)?;
        Ok(Self {
            num_shares: parse_count("numShares", num_shares, Error::InvalidShareCount)?,
            threshold: parse_count("threshold", threshold, Error::InvalidThreshold)?,
            secret: scalar_from_signed(&parse_integer("secret", secret)?)?,
            curve: curve.to_owned(),
            ..Self::default()
        })
    }

    /// builds a configuration from the matches of the `shamir-share` app
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let required = |name: &str| {
            matches
                .value_of(name)
                .ok_or_else(|| Error::Parse(format!("missing argument {}", name)))
        };
        let mut config = Self::from_args(
            required("numShares")?,
            required("threshold")?,
            required("secret")?,
            matches.value_of("curveName"),
        )?;
        config.feldman = matches.is_present("feldman");
        config.check_curve = matches.is_present("check");
        if matches.is_present("json") {
            config.format = OutputFormat::Json;
        }
        Ok(config)
    }

    /// resolves the configured curve in the registry
    pub fn curve(&self) -> Result<&'static Curve> {
        registry::lookup(&self.curve)
    }
}

#[test]
fn test_from_args_defaults() {
    let config = ShareConfig::from_args("5", "3", "1234", None).unwrap();
    assert_eq!(config.num_shares, 5);
    assert_eq!(config.threshold, 3);
    assert_eq!(config.secret, BigUint::from(1234u32));
    assert_eq!(config.curve, "secp256r1");
    assert_eq!(config.format, OutputFormat::Text);
    assert!(!config.feldman);
    assert_eq!(config.curve().unwrap().name(), "secp256r1");
}

#[test]
fn test_from_args_named_curve() {
    let config = ShareConfig::from_args("2", "2", "0", Some("secp521r1")).unwrap();
    assert_eq!(config.curve, "secp521r1");
    assert!(config.secret.is_zero());
}

#[test]
fn test_from_args_rejections() {
    assert_eq!(
        ShareConfig::from_args("3", "2", "1", Some("bogus")),
        Err(Error::UnknownCurve("bogus".to_owned()))
    );
    // the curve is checked before the numbers
    assert_eq!(
        ShareConfig::from_args("x", "2", "1", Some("bogus")),
        Err(Error::UnknownCurve("bogus".to_owned()))
    );
    assert_eq!(
        ShareConfig::from_args("0", "2", "1", None),
        Err(Error::InvalidShareCount)
    );
    assert_eq!(
        ShareConfig::from_args("3", "-1", "1", None),
        Err(Error::InvalidThreshold)
    );
    assert_eq!(
        ShareConfig::from_args("3", "2", "-5", None),
        Err(Error::InvalidScalar)
    );
    assert!(matches!(
        ShareConfig::from_args("three", "2", "1", None),
        Err(Error::Parse(_))
    ));
}

#[test]
fn test_big_secret() {
    let digits = "115792089210356248762697446949407573529996955224135760342422259061068512044370";
    let config = ShareConfig::from_args("1", "1", digits, None).unwrap();
    assert_eq!(config.secret.to_string(), digits);
}

//! secret sharing algorithms

use crate::error::Result;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use std::fmt;

/// a point `(index, f(index))` on the sharing polynomial
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Share {
    /// evaluation coordinate, starting at 1
    pub index: usize,
    pub value: BigUint,
}

impl Share {
    pub fn new(index: usize, value: BigUint) -> Self {
        Self { index, value }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.index, self.value)
    }
}

/// splits a secret into `n` shares
pub trait SecretSharing {
    fn threshold(&self) -> usize;
    fn split<R: RngCore + CryptoRng + ?Sized>(
        &self,
        secret: &BigUint,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Share>>;
}

pub mod dealer;
pub mod feldman;
pub mod polynomial;

pub use dealer::{compute_shares, Dealer};
pub use polynomial::{evaluate_polynomial, generate_coefficients};

#[test]
fn test_share_display() {
    let share = Share::new(3, BigUint::from(1234u32));
    assert_eq!(share.to_string(), "(3, 1234)");
}

//! threshold secret sharing over the scalar fields of NIST prime curves
//!
//! A secret is split into shares by evaluating a random polynomial modulo
//! the group order of the chosen curve, and the matching public key is the
//! curve's base point multiplied by the secret.

pub mod config;
pub mod error;
pub mod math;
pub mod protocol;

pub use error::{Error, Result};

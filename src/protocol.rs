//! secret sharing and key derivation over curve scalar fields

pub mod keygen;
pub mod shamir;

//! provides elliptic curve math over prime fields

pub mod curve;
pub mod fermat;
pub mod point;

pub use curve::{registry, Curve};
pub use fermat::{mod_inverse, scalar_from_signed, MillerRabinTester, PseudoPrimalityTester};
pub use point::Point;

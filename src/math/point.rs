//! points of a short Weierstrass curve in affine form

use num_bigint::BigUint;
use std::fmt;

/// represents a curve point, either the identity or an affine pair
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    /// the point at infinity
    Infinity,
    Affine { x: BigUint, y: BigUint },
}

impl Point {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// get the affine coordinates, `None` for the identity
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "Infinity"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

#[test]
fn test_display() {
    let point = Point::new(BigUint::from(3u32), BigUint::from(10u32));
    assert_eq!(point.to_string(), "(3, 10)");
    assert_eq!(Point::Infinity.to_string(), "Infinity");
    assert_eq!(
        point.coordinates(),
        Some((&BigUint::from(3u32), &BigUint::from(10u32)))
    );
    assert!(Point::Infinity.coordinates().is_none());
}

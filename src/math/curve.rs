//! group law of short Weierstrass curves `y^2 = x^3 + ax + b` over a prime field

use super::{
    fermat::{mod_inverse, MillerRabinTester, PseudoPrimalityTester},
    point::Point,
};
use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

/// represents the parameters of a named curve together with its base point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    name: &'static str,
    a: BigUint,
    b: BigUint,
    p: BigUint,
    r: BigUint,
    base: Point,
}

impl Curve {
    pub fn new(
        name: &'static str,
        a: BigUint,
        b: BigUint,
        p: BigUint,
        r: BigUint,
        base: Point,
    ) -> Self {
        Self {
            name,
            a,
            b,
            p,
            r,
            base,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// get the prime of the coordinate field
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// get the order of the group generated by the base point
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// get the fixed base point public keys are derived from
    pub fn base(&self) -> &Point {
        &self.base
    }

    fn sub_mod(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        (lhs % &self.p + &self.p - rhs % &self.p) % &self.p
    }

    /// brings affine coordinates into `[0, p)`
    pub fn reduce(&self, p: &Point) -> Point {
        match p {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::new(x % &self.p, y % &self.p),
        }
    }

    /// adds two points, dispatching equal and opposite operands explicitly
    pub fn add_points(&self, p: &Point, q: &Point) -> Result<Point> {
        let (p, q) = (self.reduce(p), self.reduce(q));
        if p.is_infinity() {
            return Ok(q);
        }
        if q.is_infinity() {
            return Ok(p);
        }
        let (Some((x1, _)), Some((x2, _))) = (p.coordinates(), q.coordinates()) else {
            return Err(Error::DegenerateAddition);
        };
        if p == q {
            self.point_double(&p)
        } else if x1 == x2 {
            // q is the reflection of p
            Ok(Point::Infinity)
        } else {
            self.chord(&p, &q)
        }
    }

    /// chord rule for affine points with distinct x coordinates
    fn chord(&self, p: &Point, q: &Point) -> Result<Point> {
        let (Some((x1, y1)), Some((x2, y2))) = (p.coordinates(), q.coordinates()) else {
            return Err(Error::DegenerateAddition);
        };
        let dx = mod_inverse(&self.sub_mod(x1, x2), &self.p)
            .map_err(|_| Error::DegenerateAddition)?;
        let s = self.sub_mod(y1, y2) * dx % &self.p;
        let x = self.sub_mod(&(&s * &s), &(x1 + x2));
        let y = self.sub_mod(&(&s * self.sub_mod(x1, &x)), y1);
        Ok(Point::new(x, y))
    }

    /// doubles a point along its tangent, a vertical tangent gives the identity
    pub fn point_double(&self, p: &Point) -> Result<Point> {
        let p = self.reduce(p);
        let (x1, y1) = match p.coordinates() {
            None => return Ok(Point::Infinity),
            Some((_, y)) if y.is_zero() => return Ok(Point::Infinity),
            Some(xy) => xy,
        };
        let numerator = (3u32 * x1 * x1 + &self.a) % &self.p;
        let s = numerator * mod_inverse(&(2u32 * y1), &self.p)? % &self.p;
        let x = self.sub_mod(&(&s * &s), &(2u32 * x1));
        let y = self.sub_mod(&(&s * self.sub_mod(x1, &x)), y1);
        Ok(Point::new(x, y))
    }

    /// double-and-add over the bits of `scalar`, least significant first
    pub fn multiply_point(&self, base: &Point, scalar: &BigUint) -> Result<Point> {
        let mut acc = Point::Infinity;
        let mut doubled = base.clone();
        for i in 0..scalar.bits() {
            if scalar.bit(i) {
                acc = self.add_points(&acc, &doubled)?;
            }
            doubled = self.point_double(&doubled)?;
        }
        Ok(acc)
    }

    /// reflects a point across the x axis
    pub fn negate(&self, p: &Point) -> Point {
        match p {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::new(x % &self.p, self.sub_mod(&BigUint::zero(), y)),
        }
    }

    /// checks that a point satisfies the curve equation
    pub fn contains(&self, p: &Point) -> bool {
        match p {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                if x >= &self.p || y >= &self.p {
                    return false;
                }
                let lhs = y * y % &self.p;
                let rhs = (x * x * x + &self.a * x + &self.b) % &self.p;
                lhs == rhs
            }
        }
    }

    /// checks the parameters: prime field and order, non-singular curve,
    /// base point on the curve and of order `r`
    pub fn validate<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<()> {
        let invalid = |what: &str| Error::InvalidCurve(format!("{}: {}", self.name, what));
        if !MillerRabinTester::is_prime(&self.p, rng) {
            return Err(invalid("field modulus is not prime"));
        }
        if !MillerRabinTester::is_prime(&self.r, rng) {
            return Err(invalid("group order is not prime"));
        }
        let discriminant = (4u32 * &self.a * &self.a * &self.a + 27u32 * &self.b * &self.b) % &self.p;
        if discriminant.is_zero() {
            return Err(invalid("curve is singular"));
        }
        if self.base.is_infinity() || !self.contains(&self.base) {
            return Err(invalid("base point is not on the curve"));
        }
        if !self.multiply_point(&self.base, &self.r)?.is_infinity() {
            return Err(invalid("base point order does not match"));
        }
        Ok(())
    }
}

pub mod registry;

#[cfg(test)]
pub(crate) fn toy_curve() -> Curve {
    // y^2 = x^3 + 2x + 2 over GF(17), generated by (5, 1) of order 19
    Curve::new(
        "toy17",
        BigUint::from(2u32),
        BigUint::from(2u32),
        BigUint::from(17u32),
        BigUint::from(19u32),
        Point::new(BigUint::from(5u32), BigUint::from(1u32)),
    )
}

#[cfg(test)]
fn toy_point(x: u32, y: u32) -> Point {
    Point::new(BigUint::from(x), BigUint::from(y))
}

#[test]
fn test_add_points() {
    let curve = toy_curve();
    let g = curve.base().clone();
    assert_eq!(curve.add_points(&g, &toy_point(6, 3)).unwrap(), toy_point(10, 6));
    assert_eq!(curve.add_points(&g, &g).unwrap(), toy_point(6, 3));
    assert_eq!(curve.add_points(&g, &Point::Infinity).unwrap(), g);
    assert_eq!(curve.add_points(&Point::Infinity, &g).unwrap(), g);
    // 9G and 10G share an x coordinate
    assert_eq!(
        curve.add_points(&toy_point(7, 6), &toy_point(7, 11)).unwrap(),
        Point::Infinity
    );
}

#[test]
fn test_unreduced_coordinates() {
    let curve = toy_curve();
    // (22, 18) is G = (5, 1) written with coordinates offset by p
    let lifted = toy_point(22, 18);
    assert_eq!(curve.reduce(&lifted), toy_point(5, 1));
    assert_eq!(curve.add_points(curve.base(), &lifted).unwrap(), toy_point(6, 3));
    assert_eq!(curve.add_points(&lifted, &toy_point(5, 16)).unwrap(), Point::Infinity);
    assert_eq!(curve.add_points(&Point::Infinity, &lifted).unwrap(), toy_point(5, 1));
    assert_eq!(curve.point_double(&lifted).unwrap(), toy_point(6, 3));
    assert_eq!(
        curve.multiply_point(&lifted, &BigUint::from(13u32)).unwrap(),
        toy_point(16, 4)
    );
}

#[test]
fn test_chord_rejects_equal_x() {
    let curve = toy_curve();
    assert_eq!(
        curve.chord(&toy_point(7, 6), &toy_point(7, 11)),
        Err(Error::DegenerateAddition)
    );
}

#[test]
fn test_point_double() {
    let curve = toy_curve();
    assert_eq!(curve.point_double(curve.base()).unwrap(), toy_point(6, 3));
    assert_eq!(curve.point_double(&Point::Infinity).unwrap(), Point::Infinity);
    // y^2 = x^3 - x has the 2-torsion point (0, 0)
    let curve = Curve::new(
        "torsion17",
        BigUint::from(16u32),
        BigUint::zero(),
        BigUint::from(17u32),
        BigUint::from(2u32),
        toy_point(0, 0),
    );
    assert!(curve.contains(curve.base()));
    assert_eq!(curve.point_double(curve.base()).unwrap(), Point::Infinity);
}

#[test]
fn test_multiply_point() {
    let curve = toy_curve();
    let g = curve.base();
    let expected = [
        (0u32, Point::Infinity),
        (1, toy_point(5, 1)),
        (2, toy_point(6, 3)),
        (5, toy_point(9, 16)),
        (13, toy_point(16, 4)),
        (18, toy_point(5, 16)),
        (19, Point::Infinity),
        (20, toy_point(5, 1)),
    ];
    for (k, point) in expected {
        assert_eq!(curve.multiply_point(g, &BigUint::from(k)).unwrap(), point);
    }
}

#[test]
fn test_negate_and_contains() {
    let curve = toy_curve();
    let g = curve.base();
    assert_eq!(curve.negate(g), toy_point(5, 16));
    assert_eq!(curve.negate(&Point::Infinity), Point::Infinity);
    assert!(curve.contains(&curve.negate(g)));
    assert!(!curve.contains(&toy_point(5, 2)));
    assert!(!curve.contains(&toy_point(22, 1)));
}

#[test]
fn test_validate() {
    use rand::{rngs::StdRng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(17);
    assert_eq!(toy_curve().validate(&mut rng), Ok(()));

    let off_curve = Curve::new(
        "bad",
        BigUint::from(2u32),
        BigUint::from(2u32),
        BigUint::from(17u32),
        BigUint::from(19u32),
        toy_point(5, 2),
    );
    assert!(matches!(off_curve.validate(&mut rng), Err(Error::InvalidCurve(_))));

    let wrong_order = Curve::new(
        "bad",
        BigUint::from(2u32),
        BigUint::from(2u32),
        BigUint::from(17u32),
        BigUint::from(23u32),
        toy_point(5, 1),
    );
    assert!(matches!(wrong_order.validate(&mut rng), Err(Error::InvalidCurve(_))));
}

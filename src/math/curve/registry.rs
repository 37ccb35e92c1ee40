//! named NIST prime curves

use super::Curve;
use crate::error::{Error, Result};
use crate::math::point::Point;
use num_bigint::BigUint;
use std::collections::BTreeMap;

/// curve used when the caller does not name one
pub const DEFAULT_CURVE: &str = "secp256r1";

fn constant(digits: &str, radix: u32) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), radix).expect("curve constants are valid literals")
}

lazy_static::lazy_static! {
    static ref CURVES: BTreeMap<&'static str, Curve> = {
        let mut curves = BTreeMap::new();

        // NIST P-192
        curves.insert("secp192r1", Curve::new(
            "secp192r1",
            constant("6277101735386680763835789423207666416083908700390324961276", 10),
            constant("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1", 16),
            constant("6277101735386680763835789423207666416083908700390324961279", 10),
            constant("6277101735386680763835789423176059013767194773182842284081", 10),
            Point::new(
                constant("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012", 16),
                constant("07192b95ffc8da78631011ed6b24cdd573f977a11e794811", 16),
            ),
        ));

        // NIST P-256, with the fixed base point public keys are published against
        curves.insert("secp256r1", Curve::new(
            "secp256r1",
            constant("115792089210356248762697446949407573530086143415290314195533631308867097853948", 10),
            constant("41058363725152142129326129780047268409114441015993725554835256314039467401291", 10),
            constant("115792089210356248762697446949407573530086143415290314195533631308867097853951", 10),
            constant("115792089210356248762697446949407573529996955224135760342422259061068512044369", 10),
            Point::new(
                constant("28180968562641497067278236429211977508043174361740661643726011666495902464602", 10),
                constant("71059786474789917358912012681919876999588411700471748715771920653989729645170", 10),
            ),
        ));

        // NIST P-521
        curves.insert("secp521r1", Curve::new(
            "secp521r1",
            constant("6864797660130609714981900799081393217269435300143305409394463459185543183397656052122559640661454554977296311391480858037121987999716643812574028291115057148", 10),
            constant("1093849038073734274511112390766805569936207598951683748994586394495953116150735016013708737573759623248592132296706313309438452531591012912142327488478985984", 10),
            constant("6864797660130609714981900799081393217269435300143305409394463459185543183397656052122559640661454554977296311391480858037121987999716643812574028291115057151", 10),
            constant("6864797660130609714981900799081393217269435300143305409394463459185543183397655394245057746333217197532963996371363321113864768612440380340372808892707005449", 10),
            Point::new(
                constant("c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66", 16),
                constant("11839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650", 16),
            ),
        ));

        curves
    };
}

/// looks up a curve by its SEC name
pub fn lookup(name: &str) -> Result<&'static Curve> {
    CURVES
        .get(name)
        .ok_or_else(|| Error::UnknownCurve(name.to_owned()))
}

/// names of every registered curve, sorted
pub fn known_names() -> Vec<&'static str> {
    CURVES.keys().copied().collect()
}

#[test]
fn test_lookup() {
    for name in ["secp192r1", "secp256r1", "secp521r1"] {
        assert_eq!(lookup(name).unwrap().name(), name);
    }
    assert_eq!(
        lookup("bogus").unwrap_err(),
        Error::UnknownCurve("bogus".to_owned())
    );
    assert!(lookup(DEFAULT_CURVE).is_ok());
}

#[test]
fn test_known_names() {
    assert_eq!(known_names(), vec!["secp192r1", "secp256r1", "secp521r1"]);
}

#[test]
fn test_registered_curves_are_valid() {
    use rand::{rngs::StdRng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(256);
    for name in known_names() {
        let curve = lookup(name).unwrap();
        assert_eq!(curve.validate(&mut rng), Ok(()), "{}", name);
    }
}

#[test]
fn test_order_minus_one_is_negation() {
    for name in known_names() {
        let curve = lookup(name).unwrap();
        let k = curve.r() - 1u32;
        let point = curve.multiply_point(curve.base(), &k).unwrap();
        assert_eq!(point, curve.negate(curve.base()), "{}", name);
    }
}

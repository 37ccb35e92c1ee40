use proptest::prelude::*;

use ecshare::config::ShareConfig;
use ecshare::math::{registry, Point};
use ecshare::protocol::keygen::{deal_with_coefficients, derive_public_key};
use ecshare::protocol::shamir::{compute_shares, evaluate_polynomial, generate_coefficients};
use num_bigint::BigUint;
use rand::{rngs::StdRng, SeedableRng};

fn curve_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["secp192r1", "secp256r1", "secp521r1"])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn shares_are_indexed_one_to_n(
        name in curve_name(),
        secret in prop::collection::vec(any::<u8>(), 0..80),
        threshold in 1usize..8,
        n in 1usize..16,
        seed in any::<u64>(),
    ) {
        let curve = registry::lookup(name).unwrap();
        let secret = BigUint::from_bytes_be(&secret);
        let mut rng = StdRng::seed_from_u64(seed);
        let coefficients = generate_coefficients(&secret, threshold, curve, &mut rng).unwrap();
        let shares = compute_shares(&coefficients, n, curve).unwrap();
        prop_assert_eq!(shares.len(), n);
        for (i, share) in shares.iter().enumerate() {
            prop_assert_eq!(share.index, i + 1);
            prop_assert!(&share.value < curve.r());
        }
    }

    #[test]
    fn polynomial_at_zero_is_the_secret(
        name in curve_name(),
        secret in prop::collection::vec(any::<u8>(), 0..80),
        threshold in 1usize..8,
        seed in any::<u64>(),
    ) {
        let curve = registry::lookup(name).unwrap();
        let secret = BigUint::from_bytes_be(&secret);
        let mut rng = StdRng::seed_from_u64(seed);
        let coefficients = generate_coefficients(&secret, threshold, curve, &mut rng).unwrap();
        let at_zero = evaluate_polynomial(&coefficients, &BigUint::from(0u32), curve.r());
        prop_assert_eq!(&at_zero, &coefficients[0]);
        prop_assert_eq!(at_zero, secret % curve.r());
    }

    #[test]
    fn adding_a_point_to_itself_doubles_it(k in 1u64..u64::MAX) {
        let curve = registry::lookup("secp256r1").unwrap();
        let point = curve.multiply_point(curve.base(), &BigUint::from(k)).unwrap();
        prop_assume!(!point.is_infinity());
        let sum = curve.add_points(&point, &point).unwrap();
        prop_assert_eq!(&sum, &curve.point_double(&point).unwrap());
        prop_assert!(curve.contains(&sum));
        prop_assert_eq!(curve.add_points(&point, &curve.negate(&point)).unwrap(), Point::Infinity);
    }

    #[test]
    fn public_keys_are_homomorphic(a in any::<u32>(), b in any::<u32>()) {
        let curve = registry::lookup("secp256r1").unwrap();
        let pa = derive_public_key(&BigUint::from(a), curve, curve.base()).unwrap();
        let pb = derive_public_key(&BigUint::from(b), curve, curve.base()).unwrap();
        let sum = BigUint::from(a) + BigUint::from(b);
        prop_assert_eq!(
            curve.add_points(&pa, &pb).unwrap(),
            derive_public_key(&sum, curve, curve.base()).unwrap()
        );
    }

    #[test]
    fn fixed_coefficients_deal_identically(
        values in prop::collection::vec(1u64..u64::MAX, 1..5),
        n in 1usize..6,
    ) {
        let coefficients: Vec<BigUint> = values.iter().map(|&v| BigUint::from(v)).collect();
        let secret = coefficients[0].to_string();
        let threshold = coefficients.len().to_string();
        let config = ShareConfig::from_args(&n.to_string(), &threshold, &secret, None).unwrap();
        let first = deal_with_coefficients(&config, &coefficients).unwrap();
        let second = deal_with_coefficients(&config, &coefficients).unwrap();
        prop_assert_eq!(first.threshold, coefficients.len());
        prop_assert_eq!(first, second);
    }
}

#[test]
fn base_point_times_order_is_identity() {
    for name in registry::known_names() {
        let curve = registry::lookup(name).unwrap();
        assert_eq!(
            curve.multiply_point(curve.base(), curve.r()).unwrap(),
            Point::Infinity,
            "{}",
            name
        );
        assert_eq!(
            curve.multiply_point(curve.base(), &BigUint::from(0u32)).unwrap(),
            Point::Infinity
        );
        assert_eq!(
            &curve.multiply_point(curve.base(), &BigUint::from(1u32)).unwrap(),
            curve.base()
        );
    }
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecshare::math::registry;
use num_bigint::BigUint;

fn bench_multiply_point(c: &mut Criterion) {
    for name in registry::known_names() {
        let curve = registry::lookup(name).unwrap();
        let scalar = curve.r() - 2u32;
        c.bench_function(&format!("multiply_point {}", name), |b| {
            b.iter(|| curve.multiply_point(black_box(curve.base()), black_box(&scalar)))
        });
    }
}

fn bench_compute_shares(c: &mut Criterion) {
    let curve = registry::lookup("secp256r1").unwrap();
    let coefficients: Vec<BigUint> = (1u32..=10).map(|i| curve.r() - i).collect();
    c.bench_function("compute_shares 10-of-100 secp256r1", |b| {
        b.iter(|| ecshare::protocol::shamir::compute_shares(black_box(&coefficients), 100, curve))
    });
}

criterion_group!(benches, bench_multiply_point, bench_compute_shares);
criterion_main!(benches);

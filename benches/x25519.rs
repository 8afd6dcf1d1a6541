use avb_curve25519::keys::x25519::{BASEPOINT, x_scalar_mult};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_ladder(c: &mut Criterion) {
    c.bench_function("x25519 scalar mult", |b| {
        b.iter(|| x_scalar_mult(black_box(&[0x42u8; 32]), black_box(&BASEPOINT)))
    });
}

criterion_group!(benches, bench_ladder);
criterion_main!(benches);

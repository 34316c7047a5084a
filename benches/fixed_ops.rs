use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fixmath::fixed::{raw_div, raw_mul, sqrt_raw, sqrt_raw_with_seed};
use fixmath::{trig, FixedPoint, FixedQuat, FixedVec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 1024;

fn operands(seed: u64, lo: i64, hi: i64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES).map(|_| rng.gen_range(lo..hi)).collect()
}

fn bench_mul(c: &mut Criterion) {
    let a = operands(1, -(1 << 30), 1 << 30);
    let b = operands(2, -(1 << 20), 1 << 20);
    c.bench_function("raw_mul_1024", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .fold(0i64, |acc, (&x, &y)| acc.wrapping_add(raw_mul(black_box(x), black_box(y))))
        })
    });
}

fn bench_div(c: &mut Criterion) {
    let a = operands(3, -(1 << 30), 1 << 30);
    let b = operands(4, 1, 1 << 24);
    c.bench_function("raw_div_1024", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .fold(0i64, |acc, (&x, &y)| acc.wrapping_add(raw_div(black_box(x), black_box(y))))
        })
    });
}

fn bench_sqrt(c: &mut Criterion) {
    let values = operands(5, 1, 1 << 40);
    c.bench_function("sqrt_raw_1024", |bench| {
        bench.iter(|| values.iter().fold(0i64, |acc, &v| acc.wrapping_add(sqrt_raw(black_box(v)))))
    });

    // Seeded with the previous root, as a per-frame length update would be
    let seeds: Vec<i64> = values.iter().map(|&v| sqrt_raw(v)).collect();
    c.bench_function("sqrt_raw_seeded_1024", |bench| {
        bench.iter(|| {
            values
                .iter()
                .zip(&seeds)
                .fold(0i64, |acc, (&v, &s)| acc.wrapping_add(sqrt_raw_with_seed(black_box(v), s)))
        })
    });
}

fn bench_trig(c: &mut Criterion) {
    // Warm the tables outside the timed loop
    let _ = trig::tables();
    let angles: Vec<FixedPoint> = operands(6, -(20 << 16), 20 << 16)
        .into_iter()
        .map(FixedPoint::from_raw)
        .collect();

    c.bench_function("sin_1024", |bench| {
        bench.iter(|| angles.iter().fold(FixedPoint::ZERO, |acc, &a| acc + black_box(a).sin()))
    });
    c.bench_function("atan_1024", |bench| {
        bench.iter(|| angles.iter().fold(FixedPoint::ZERO, |acc, &a| acc + black_box(a).atan()))
    });
}

fn bench_rotation(c: &mut Criterion) {
    let q = FixedQuat::from_angle_axis(FixedPoint::from_f64(0.7), FixedVec3::from_ints(1, 2, 3));
    let v = FixedVec3::from_ints(5, -2, 9);
    c.bench_function("quat_rotate_vec3", |bench| bench.iter(|| black_box(q) * black_box(v)));
}

criterion_group!(benches, bench_mul, bench_div, bench_sqrt, bench_trig, bench_rotation);
criterion_main!(benches);

use cryptal_rand::rng::{OsSource, Rand, Source, Zipf};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_source(c: &mut Criterion) {
    let src = OsSource::new();

    c.bench_function("OsSource::uint64", |b| b.iter(|| black_box(src.uint64())));
    c.bench_function("OsSource::int63", |b| b.iter(|| black_box(src.int63())));
}

pub fn bench_generator(c: &mut Criterion) {
    let r = Rand::new(OsSource);

    c.bench_function("Rand::intn 1000", |b| b.iter(|| r.intn(black_box(1000))));
    c.bench_function("Rand::float64", |b| b.iter(|| black_box(r.float64())));
    c.bench_function("Rand::norm_float64", |b| b.iter(|| black_box(r.norm_float64())));
    c.bench_function("Rand::perm 64", |b| b.iter(|| r.perm(black_box(64))));

    let z = Zipf::new(&r, 1.1, 1.0, 100_000).unwrap();
    c.bench_function("Zipf::uint64", |b| b.iter(|| black_box(z.uint64())));
}

pub fn bench_read(c: &mut Criterion) {
    let mut buf = [0u8; 4096];

    c.bench_function("read 4096 bytes", |b| {
        b.iter(|| cryptal_rand::read(black_box(&mut buf)).unwrap())
    });
}

criterion_group!(benches, bench_source, bench_generator, bench_read);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use px_core::{KernelSize, Raster};
use px_filter::high_boost_filter;

fn make_gray(w: u32, h: u32) -> Raster {
    let mut img = Raster::new(w, h, 1);
    for y in 0..h {
        for x in 0..w {
            img.set_sample(x, y, 0, ((x * 7 + y * 13) % 256) as u8);
        }
    }
    img
}

fn bench_highboost(c: &mut Criterion) {
    let img = make_gray(512, 512);
    c.bench_function("high_boost_512_5x5", |b| {
        b.iter(|| high_boost_filter(black_box(&img), black_box(1.5), KernelSize::DEFAULT));
    });

    let wide = KernelSize::new(15, 15).unwrap_or_default();
    c.bench_function("high_boost_512_15x15", |b| {
        b.iter(|| high_boost_filter(black_box(&img), black_box(1.5), wide));
    });
}

criterion_group!(benches, bench_highboost);
criterion_main!(benches);

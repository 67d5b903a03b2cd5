use bluenoise_swap::{BlueNoise, MaskConfig};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_step(c: &mut Criterion) {
    let config = MaskConfig::default().with_size(32).with_seed(42);

    c.bench_function("step_32x32", |b| {
        let mut noise = BlueNoise::generate(config).expect("allocate");
        b.iter(|| black_box(noise.step()))
    });

    c.bench_function("step_32x32_single_thread", |b| {
        let mut noise = BlueNoise::generate(config.with_threads(Some(1)))
            .expect("allocate");
        b.iter(|| black_box(noise.step()))
    });
}

criterion_group!(benches, bench_step);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::Rgba;
use seamcarve::{calculate_energy, seamcarve, SeamFinder, TwoDimensionalMap};

fn noisy(width: u32, height: u32) -> TwoDimensionalMap<Rgba<u8>> {
    TwoDimensionalMap::from_fn(width, height, |x, y| {
        let v = ((x * 7919 + y * 104_729) % 251) as u8;
        Rgba([v, v.wrapping_mul(3), v.wrapping_add(90), 255])
    })
}

fn energy(c: &mut Criterion) {
    let image = noisy(320, 240);
    c.bench_function("sobel energy 320x240", |b| {
        b.iter(|| calculate_energy(black_box(&image)))
    });
}

fn one_seam(c: &mut Criterion) {
    let energy = calculate_energy(&noisy(320, 240));
    c.bench_function("one vertical seam 320x240", |b| {
        b.iter(|| black_box(&energy).find_vertical_seam())
    });
}

fn carve(c: &mut Criterion) {
    let image = noisy(160, 120);
    c.bench_function("carve 160x120 to 140x100", |b| {
        b.iter(|| seamcarve(black_box(image.clone()), 140, 100))
    });
}

criterion_group!(benches, energy, one_seam, carve);
criterion_main!(benches);

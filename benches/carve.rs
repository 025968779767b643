use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seamcarve::{
    compute_energy, find_seam_greedy, find_seam_optimal, remove_seam, Axis, Channels, Image,
};

fn test_card(width: usize, height: usize) -> Image {
    Image::from_fn(width, height, Channels::Rgb, |x, y| {
        let v = (x * 37 + y * 91 + x * y * 13) % 251;
        vec![v as u8, (v * 3 % 256) as u8, (255 - v) as u8]
    })
    .unwrap()
}

fn bench_carve(c: &mut Criterion) {
    let image = test_card(320, 240);
    let energy = compute_energy(&image).unwrap();
    let seam = find_seam_optimal(&energy, Axis::Vertical).unwrap();

    c.bench_function("energy 320x240", |b| {
        b.iter(|| compute_energy(black_box(&image)))
    });
    c.bench_function("optimal vertical seam", |b| {
        b.iter(|| find_seam_optimal(black_box(&energy), Axis::Vertical))
    });
    c.bench_function("optimal horizontal seam", |b| {
        b.iter(|| find_seam_optimal(black_box(&energy), Axis::Horizontal))
    });
    c.bench_function("greedy vertical seam", |b| {
        b.iter(|| find_seam_greedy(black_box(&energy), Axis::Vertical))
    });
    c.bench_function("remove vertical seam", |b| {
        b.iter(|| remove_seam(black_box(&image), black_box(&seam), Axis::Vertical))
    });
}

criterion_group!(benches, bench_carve);
criterion_main!(benches);

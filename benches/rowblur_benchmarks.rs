//! Performance benchmarks for rowblur
//!
//! Measures the striped blur across image sizes and worker counts to track
//! regressions and to see where extra workers stop paying off.

use criterion::*;
use image::Rgba;
use itertools::iproduct;
use rowblur::{blur, BlurConfig, Image, RowBlur};
use std::hint::black_box;

/// Helper function to create a test RGBA image with specific dimensions
fn create_rgba_image(width: u32, height: u32) -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(width, height);

    // Fill with semi-transparent pattern
    iproduct!(0..height, 0..width).for_each(|(y, x)| {
        let r = ((x * 255) / width) as u8;
        let g = ((y * 255) / height) as u8;
        let b = ((x + y) * 255 / (width + height)) as u8;
        let a = if (x + y) % 3 == 0 { 128 } else { 255 }; // Varying alpha
        image.put_pixel(x, y, Rgba([r, g, b, a]));
    });

    image
}

/// Benchmark the default four-worker blur across different image sizes
fn bench_row_blur(c: &mut Criterion) {
    let sizes = vec![
        (100, 100),   // Small
        (500, 500),   // Medium
        (1000, 1000), // Large
        (1920, 1080), // HD
    ];

    let mut group = c.benchmark_group("row_blur");
    group.sample_size(10);

    for (width, height) in sizes {
        let pixels = width * height;
        group.throughput(Throughput::Elements(pixels as u64));

        let image = create_rgba_image(width, height);

        group.bench_with_input(
            BenchmarkId::new("row_blur_default", format!("{}x{}", width, height)),
            &image,
            |b, img| b.iter(|| black_box(img.row_blur_default().unwrap())),
        );
    }

    group.finish();
}

/// Benchmark worker scaling on an HD frame
fn bench_worker_scaling(c: &mut Criterion) {
    let (width, height) = (1920, 1080);
    let image = create_rgba_image(width, height);
    let raw = image.as_raw();

    let mut group = c.benchmark_group("worker_scaling");
    group.sample_size(10);
    group.throughput(Throughput::Elements(u64::from(width * height)));

    for workers in [1, 2, 4, 7, 8, 16] {
        let config = BlurConfig::new(workers).unwrap();
        group.bench_with_input(BenchmarkId::new("workers", workers), &config, |b, config| {
            b.iter(|| black_box(blur(raw, width, height, config).unwrap()))
        });
    }

    #[cfg(feature = "rayon")]
    {
        let config = BlurConfig::new(8)
            .unwrap()
            .with_scheduler(rowblur::Scheduler::Rayon);
        group.bench_with_input(BenchmarkId::new("rayon", 8), &config, |b, config| {
            b.iter(|| black_box(blur(raw, width, height, config).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_row_blur, bench_worker_scaling);
criterion_main!(benches);

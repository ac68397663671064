use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shrinkit::codec::{encode_jpeg, encode_webp};
use shrinkit::naming::derive_output_path;
use shrinkit::params::{parse_quality, TargetFormat};
use std::path::Path;

fn gradient_image(width: u32, height: u32) -> image::DynamicImage {
    image::DynamicImage::ImageRgb8(image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8])
    }))
}

fn bench_parse_quality(c: &mut Criterion) {
    c.bench_function("parse_quality", |b| {
        b.iter(|| parse_quality(black_box("85")))
    });
}

fn bench_derive_output_path(c: &mut Criterion) {
    c.bench_function("derive_output_path", |b| {
        b.iter(|| {
            derive_output_path(
                black_box(Path::new("photos/vacation/IMG_1234.PNG")),
                black_box(Path::new("./compressed")),
                TargetFormat::Jpeg,
            )
        })
    });
}

fn bench_jpeg_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("jpeg_encoding");

    for (width, height) in [(320, 240), (1280, 720)] {
        let img = gradient_image(width, height);
        group.bench_with_input(
            BenchmarkId::new("encode", format!("{}x{}", width, height)),
            &img,
            |b, img| b.iter(|| encode_jpeg(black_box(img), 80).unwrap()),
        );
    }

    group.finish();
}

fn bench_webp_encoding(c: &mut Criterion) {
    let img = gradient_image(640, 480);

    let mut group = c.benchmark_group("webp_encoding");
    group.bench_function("lossy_q80", |b| {
        b.iter(|| encode_webp(black_box(&img), 80, false).unwrap())
    });
    group.bench_function("near_lossless", |b| {
        b.iter(|| encode_webp(black_box(&img), 0, true).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_parse_quality,
    bench_derive_output_path,
    bench_jpeg_encoding,
    bench_webp_encoding
);
criterion_main!(benches);

//! Conversion and gamut search benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tonal_core::{
    DEFAULT_EPSILON, Gamut, Hues, Oklch, Palette, PaletteConfig, Quantization, Rgb, max_chroma,
    oklch_to_rgb, oklch_to_rgb_batch, rgb_to_oklch_batch, simd,
};

fn generate_oklch(count: usize) -> Vec<Oklch> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            Oklch::new(t, 0.15 * ((t * 7.0) % 1.0), t * 360.0 * 13.0)
        })
        .collect()
}

// ============================================================================
// Conversion
// ============================================================================

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("oklch_to_rgb_scalar");
    let lch = Oklch::new(0.7, 0.12, 210.0);

    for gamut in Gamut::ALL {
        group.bench_function(gamut.name(), |b| {
            b.iter(|| oklch_to_rgb(black_box(lch), black_box(gamut)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("oklch_to_rgb_batch");

    for size in [100, 1000, 10000, 100000].iter() {
        let input = generate_oklch(*size);
        let mut rgb = vec![Rgb::default(); *size];
        let mut back = vec![Oklch::default(); *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("forward", size), size, |b, _| {
            b.iter(|| oklch_to_rgb_batch(black_box(&input), Gamut::Srgb, &mut rgb))
        });

        group.bench_with_input(BenchmarkId::new("scalar_loop", size), size, |b, _| {
            b.iter(|| {
                for (lch, out) in input.iter().zip(rgb.iter_mut()) {
                    *out = oklch_to_rgb(black_box(*lch), Gamut::Srgb);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("reverse", size), size, |b, _| {
            b.iter(|| rgb_to_oklch_batch(black_box(&rgb), Gamut::Srgb, &mut back))
        });
    }

    group.finish();
}

// ============================================================================
// Gamut search and palettes
// ============================================================================

fn bench_max_chroma(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_chroma");

    for gamut in Gamut::ALL {
        group.bench_function(gamut.name(), |b| {
            b.iter(|| max_chroma(black_box(0.8), black_box(120.0), gamut, DEFAULT_EPSILON))
        });
    }

    group.finish();
}

fn bench_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");
    let config = PaletteConfig {
        swatch_step: 1.0,
        peak_lightness: 0.6,
        peak_chroma: 0.3,
        hues: Hues::new(250.0, 330.0),
    };

    group.bench_function("generate", |b| {
        b.iter(|| Palette::generate(black_box(config), Quantization::default()))
    });
    group.bench_function("generate_par", |b| {
        b.iter(|| Palette::generate_par(black_box(config), Quantization::default()))
    });

    group.finish();
}

fn print_simd_info(_c: &mut Criterion) {
    println!("\n=== SIMD Info ===");
    println!("Active features: {}", simd::active_features());
    println!("=================\n");
}

criterion_group!(
    benches,
    print_simd_info,
    bench_scalar,
    bench_batch,
    bench_max_chroma,
    bench_palette,
);

criterion_main!(benches);

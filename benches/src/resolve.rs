use std::hint::black_box;

use sunny16::{camera::Camera, sensor::Fixed};
use sunny16_core::{
    common::lx,
    exposure::{Aperture, Ev, Iso, ShutterSpeed},
    lens::LensKind,
};
use sunny16_driver::{metering, program};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const TEST_LEVELS: &[f32] = &[1., 80., 14400.];

fn quantize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sunny16/metering");

    TEST_LEVELS.iter().for_each(|&lux| {
        group.bench_with_input(BenchmarkId::new("quantize", lux), &lux, |b, &lux| {
            b.iter(|| metering::quantize(black_box(lux) * lx))
        });
    });
    group.finish();
}

fn resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sunny16/program");

    let lens = LensKind::Manual {
        widest: Aperture::F1_0,
    };

    (0u8..=15).step_by(5).for_each(|ev| {
        group.bench_with_input(BenchmarkId::new("AperturePriority", ev), &ev, |b, &ev| {
            b.iter(|| {
                program::resolve_aperture_priority(
                    Ev(black_box(ev)),
                    Iso::Iso100,
                    Aperture::F5_6,
                    &lens,
                    ShutterSpeed::T1000,
                )
            })
        });
        group.bench_with_input(BenchmarkId::new("ShutterPriority", ev), &ev, |b, &ev| {
            b.iter(|| {
                program::resolve_shutter_priority(
                    Ev(black_box(ev)),
                    Iso::Iso100,
                    ShutterSpeed::T125,
                    &lens,
                    ShutterSpeed::T1000,
                )
            })
        });
    });
    group.finish();
}

fn meter(c: &mut Criterion) {
    let mut group = c.benchmark_group("sunny16/camera");

    TEST_LEVELS.iter().for_each(|&lux| {
        group.bench_with_input(BenchmarkId::new("meter", lux), &lux, |b, &lux| {
            let mut camera = Camera::new(
                Fixed { lux: lux * lx },
                LensKind::Manual {
                    widest: Aperture::F1_0,
                },
            );
            b.iter(|| {
                let _ = black_box(&mut camera).meter();
            })
        });
    });
    group.finish();
}

criterion_group!(benches, quantize, resolve, meter,);
criterion_main!(benches);

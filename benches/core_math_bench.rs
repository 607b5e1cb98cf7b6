use axis_rs::core::{
    NumericDomain, ProportionalRatio, Range, TimeDomain, logarithmic_to_pixel,
    proportional_to_pixel, proportional_to_value,
};
use axis_rs::{AxisEngineConfig, TimeAxis};
use chrono::{DateTime, TimeDelta, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_linear_round_trip(c: &mut Criterion) {
    let range = Range::new(0.0, 10_000.0).expect("valid range");

    c.bench_function("linear_round_trip", |b| {
        b.iter(|| {
            let px = proportional_to_pixel(&range, black_box(4_321.123), 1920.0);
            let _ = proportional_to_value(&NumericDomain, &range, px, 1920.0);
        })
    });
}

fn bench_logarithmic_projection(c: &mut Criterion) {
    let range = Range::new(0.0, 10_000.0).expect("valid range");
    let ratio = ProportionalRatio::default();

    c.bench_function("logarithmic_projection_1k", |b| {
        b.iter(|| {
            for i in 0..1_000 {
                let value = (i as f64 - 500.0) * 1_000.0;
                let _ = logarithmic_to_pixel(&range, black_box(value), 1920.0, ratio);
            }
        })
    });
}

fn bench_time_tick_generation(c: &mut Criterion) {
    let begin = DateTime::<Utc>::from_timestamp(1_704_067_200, 0).expect("valid timestamp");
    let mut axis =
        TimeAxis::new(TimeDomain::default(), AxisEngineConfig::default()).expect("axis init");
    axis.set_value(Range::new(begin, begin + TimeDelta::days(1)).expect("valid range"));
    axis.set_pixel_size(1920.0).expect("pixel size");

    c.bench_function("time_tick_generation_one_day", |b| {
        b.iter(|| {
            let _ = black_box(axis.generate_ticks());
        })
    });

    axis.set_value(Range::new(begin, begin + TimeDelta::days(3_650)).expect("valid range"));
    c.bench_function("time_tick_generation_ten_years", |b| {
        b.iter(|| {
            let _ = black_box(axis.generate_ticks());
        })
    });
}

criterion_group!(
    benches,
    bench_linear_round_trip,
    bench_logarithmic_projection,
    bench_time_tick_generation
);
criterion_main!(benches);

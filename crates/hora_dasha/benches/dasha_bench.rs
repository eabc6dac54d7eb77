use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hora_dasha::nakshatra::nakshatra_from_longitude;
use hora_dasha::vimshottari::{
    TimelineConfig, add_years, birth_balance, build_timeline, snapshot_at,
};

const BIRTH_JD: f64 = 2_447_892.5;

fn bench_locate(c: &mut Criterion) {
    c.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(217.4)))
    });
}

fn bench_balance(c: &mut Criterion) {
    c.bench_function("birth_balance", |b| b.iter(|| birth_balance(black_box(217.4))));
}

fn bench_build_timeline(c: &mut Criterion) {
    let shallow = TimelineConfig { depth: 1, cycles: 1 };
    c.bench_function("build_timeline_depth_1", |b| {
        b.iter(|| build_timeline(black_box(BIRTH_JD), black_box(217.4), &shallow))
    });

    let full = TimelineConfig::default();
    c.bench_function("build_timeline_depth_3", |b| {
        b.iter(|| build_timeline(black_box(BIRTH_JD), black_box(217.4), &full))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let config = TimelineConfig::default();
    let query_jd = add_years(BIRTH_JD, 42.0);
    c.bench_function("snapshot_at", |b| {
        b.iter(|| snapshot_at(black_box(BIRTH_JD), black_box(217.4), &config, black_box(query_jd)))
    });
}

criterion_group!(benches, bench_locate, bench_balance, bench_build_timeline, bench_snapshot);
criterion_main!(benches);

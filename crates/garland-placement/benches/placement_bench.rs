//! Benchmarks for the ornament placement engine.
//!
//! Measures performance of:
//! - String hashing
//! - Slot-to-position geometry
//! - Per-ornament placement (both strategies)
//! - Full-tree batch placement
//! - Seeded decoration generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use garland_placement::{
    generate_decor, hash_str, placement_for_ornament, position_for_slot, seeded_random, BANDS,
    TOTAL_CAPACITY,
};

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_str");

    let inputs = [
        ("short", "a1b2"),
        ("address", "0x71c7656ec7ab88b098defb751b7401b5f6d89a21"),
        ("long", "ornament-with-a-much-longer-identity-string-0123456789"),
    ];

    for (label, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(label), &input, |b, &s| {
            b.iter(|| hash_str(black_box(s)))
        });
    }
    group.finish();
}

fn bench_seeded_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("seeded_random");

    group.bench_function("string_seed", |b| {
        b.iter(|| seeded_random(black_box("festive-seed")))
    });
    group.bench_function("numeric_seed", |b| {
        b.iter(|| seeded_random(black_box(123_456u32)))
    });
    group.finish();
}

fn bench_position_for_slot(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_for_slot");

    for band in 0..BANDS {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(band), &band, |b, &band| {
            b.iter(|| position_for_slot(black_box(band), black_box(11)))
        });
    }
    group.finish();
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement_for_ornament");

    group.throughput(Throughput::Elements(1));
    group.bench_function("hash_spread", |b| {
        b.iter(|| placement_for_ornament(black_box("ornament-042"), black_box(42), false))
    });
    group.bench_function("viewer_owned", |b| {
        b.iter(|| placement_for_ornament(black_box("ornament-042"), black_box(42), true))
    });
    group.finish();
}

fn bench_full_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_tree");

    let ids: Vec<String> = (0..TOTAL_CAPACITY).map(|i| format!("ornament-{i}")).collect();

    group.throughput(Throughput::Elements(TOTAL_CAPACITY as u64));
    group.bench_function("capacity_batch", |b| {
        b.iter(|| {
            ids.iter()
                .enumerate()
                .map(|(i, id)| placement_for_ornament(black_box(id), i as u32, i < 8))
                .count()
        })
    });
    group.finish();
}

fn bench_decor(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_decor");
    group.sample_size(50);

    group.bench_function("full_set", |b| {
        b.iter(|| generate_decor(black_box("FESTIVE_2025_V1")))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_hash,
    bench_seeded_random,
    bench_position_for_slot,
    bench_placement,
    bench_full_tree,
    bench_decor,
);

criterion_main!(benches);

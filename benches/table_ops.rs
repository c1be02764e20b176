//! Benchmark suite for chained hash table operations.

use chainset::{hash, ChainedHashTable, Poly37BuildHasher, TableBuilder};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::time::Duration;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn titles(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Night of the Living Dead {i}")).collect()
}

/// Benchmark insertion of distinct keys into a table of the default capacity.
///
/// Every size above 101 pays for one or more rehashes.
fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in SIZES.iter() {
        let keys = titles(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                let mut table = ChainedHashTable::new();
                for key in keys {
                    table.insert(black_box(key));
                }
                table
            });
        });
    }
    group.finish();
}

/// Benchmark insertion into a table created large enough to never rehash.
fn insert_presized_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_presized");

    for size in SIZES.iter() {
        let keys = titles(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                let mut table = ChainedHashTable::with_capacity(keys.len());
                for key in keys {
                    table.insert(black_box(key));
                }
                table
            });
        });
    }
    group.finish();
}

/// Benchmark `contains` on a pre-populated table, half hits and half misses.
fn contains_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for size in SIZES.iter() {
        let keys = titles(*size * 2);
        let table: ChainedHashTable<_> = keys.iter().step_by(2).collect();

        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| keys.iter().filter(|k| table.contains(black_box(k))).count());
        });
    }
    group.finish();
}

/// Benchmark the insert, search and delete passes of the three input orderings,
/// the same way the `chainset` binary times them.
fn orderings_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("orderings");
    let size = 10_000;

    let mut sorted = titles(size);
    sorted.sort();
    let mut shuffled = sorted.clone();
    shuffled.shuffle(&mut StdRng::seed_from_u64(42));
    let mut reversed = sorted.clone();
    reversed.reverse();

    group.throughput(Throughput::Elements(size as u64 * 3));
    for (name, keys) in [
        ("already_sorted", &sorted),
        ("shuffled", &shuffled),
        ("reversed", &reversed),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut table = ChainedHashTable::new();
                for key in keys {
                    table.insert(key);
                }
                for key in keys {
                    black_box(table.contains(key));
                }
                for key in keys {
                    table.remove(key);
                }
                table
            });
        });
    }
    group.finish();
}

/// Benchmark the default SipHash hasher against the seedless `Poly37BuildHasher`.
fn hasher_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hasher");
    let keys = titles(10_000);

    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("sip13", |b| {
        b.iter(|| {
            let mut table = TableBuilder::new().build();
            keys.iter().for_each(|k| {
                table.insert(black_box(k));
            });
            table
        });
    });
    group.bench_function("poly37", |b| {
        b.iter(|| {
            let mut table = TableBuilder::new().build_with_hasher(Poly37BuildHasher);
            keys.iter().for_each(|k| {
                table.insert(black_box(k));
            });
            table
        });
    });
    group.finish();
}

/// Benchmark the standalone polynomial string hash.
fn string_hash_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_hash");
    let keys = titles(1_000);

    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("hash_211", |b| {
        b.iter(|| keys.iter().map(|k| hash(black_box(k), 211)).sum::<usize>());
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = insert_benchmark, insert_presized_benchmark, contains_benchmark,
              orderings_benchmark, hasher_benchmark, string_hash_benchmark
}

criterion_main!(benches);

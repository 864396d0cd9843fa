//! Kilo Benchmarks
//!
//! Benchmarks for trie insertion, single-trie lookups, merged group lookups
//! and parallel index construction, using the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode,
    Throughput,
};
use kilo_lib::bench::{synthetic_corpus, synthetic_lookups};
use kilo_lib::config::IndexConfig;
use kilo_lib::corpus::{Candidate, Corpus};
use kilo_lib::data_structures::PathValueTrie;
use kilo_lib::index::IndexBuilder;
use std::sync::Arc;
use std::time::Duration;

fn fill_trie(corpus: &Corpus, max_len: usize) -> PathValueTrie<Candidate> {
    let mut trie = PathValueTrie::new(max_len);
    for entry in corpus.entries() {
        for key in &entry.keys {
            let _ = trie.put(key, Arc::clone(&entry.candidate));
        }
    }
    trie
}

/// Benchmark filling a single trie
fn bench_trie_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_value_trie_put");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(20);

    for size in [1_000, 10_000, 50_000] {
        let corpus = synthetic_corpus(size);
        group.throughput(Throughput::Elements((size * 2) as u64));
        for max_len in [10, 200] {
            group.bench_with_input(
                BenchmarkId::new(format!("max_len_{max_len}"), size),
                &corpus,
                |b, corpus| b.iter(|| fill_trie(black_box(corpus), max_len)),
            );
        }
    }

    group.finish();
}

/// Benchmark prefix lookups on a single trie
fn bench_trie_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_value_trie_get");
    let trie = fill_trie(&synthetic_corpus(50_000), 200);
    let lookups = synthetic_lookups();
    group.throughput(Throughput::Elements(lookups.len() as u64));

    group.bench_function("get_copy", |b| {
        b.iter(|| {
            for lookup in &lookups {
                black_box(trie.get(black_box(lookup)));
            }
        })
    });
    group.bench_function("values_at_borrow", |b| {
        b.iter(|| {
            for lookup in &lookups {
                black_box(trie.values_at(black_box(lookup)).len());
            }
        })
    });

    group.finish();
}

/// Benchmark merged lookups and index construction
fn bench_trie_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_group");
    group.sampling_mode(SamplingMode::Flat);
    group.sample_size(10);

    let corpus = synthetic_corpus(50_000);
    let config = IndexConfig::default();

    group.bench_function("build_three_encoders", |b| {
        b.iter_batched(
            || IndexBuilder::new(&config),
            |builder| builder.build(black_box(&corpus)),
            BatchSize::LargeInput,
        )
    });

    let built = match IndexBuilder::new(&config).build(&corpus) {
        Ok(built) => built,
        Err(e) => panic!("index build failed: {e}"),
    };
    let lookups = synthetic_lookups();
    for max_results_len in [10, 200] {
        let merged = kilo_lib::data_structures::TrieGroup::new(
            built.group.tries().to_vec(),
            max_results_len,
        )
        .unwrap_or_else(|e| panic!("group assembly failed: {e}"));
        group.bench_with_input(
            BenchmarkId::new("merged_get", max_results_len),
            &merged,
            |b, merged| {
                b.iter(|| {
                    for lookup in &lookups {
                        black_box(merged.get(black_box(lookup)));
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_trie_put, bench_trie_get, bench_trie_group);
criterion_main!(benches);

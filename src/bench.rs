//! Benchmarking support for Kilo.
//!
//! Deterministic synthetic corpora for the criterion benches, so runs are
//! comparable without shipping a data file.

use std::sync::Arc;

use crate::corpus::{Candidate, Corpus, CorpusEntry};

const SYLLABLES: [&str; 12] = [
    "ka", "lo", "mi", "ne", "pu", "ri", "sa", "te", "vo", "wa", "ya", "zu",
];

/// Builds `size` candidates with two surface keys each, best first.
///
/// Names are three to five syllables, so prefixes are shared heavily near
/// the root and sparsely deeper down.
pub fn synthetic_corpus(size: usize) -> Corpus {
    let mut entries: Vec<CorpusEntry> = (0..size)
        .map(|i| {
            let name = synthetic_name(i);
            let title = format!("{} {}", capitalize(&name), synthetic_name(i / 7 + size));
            let score = ((i * 7919) % 10_000) as f32 / 10_000.0;
            CorpusEntry {
                keys: vec![title.clone(), name],
                candidate: Arc::new(Candidate::new(title, score, i as i64)),
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.candidate
            .score
            .total_cmp(&a.candidate.score)
            .then_with(|| b.candidate.query.cmp(&a.candidate.query))
    });
    Corpus::from_entries(entries)
}

/// Prefixes of synthetic names at several depths, for lookup benches.
pub fn synthetic_lookups() -> Vec<String> {
    let mut lookups = Vec::new();
    for (i, syllable) in SYLLABLES.iter().enumerate() {
        lookups.push(syllable.to_string());
        lookups.push(format!("{syllable}{}", SYLLABLES[(i + 5) % SYLLABLES.len()]));
    }
    lookups.push("kalomi".to_string());
    lookups
}

fn synthetic_name(seed: usize) -> String {
    let mut state = (seed as u64).wrapping_mul(2_654_435_761).wrapping_add(97);
    let syllables = 3 + (state % 3) as usize;
    let mut name = String::with_capacity(syllables * 2);
    for _ in 0..syllables {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        name.push_str(SYLLABLES[((state >> 33) % SYLLABLES.len() as u64) as usize]);
    }
    name
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Test utilities and fixtures for Kilo.
//!
//! This module provides reusable strategies, payloads and fixtures for the
//! property-based and integration-style tests in this crate.

use crate::data_structures::path_value_trie::{ranks_ahead, Value};
use crate::error::{ErrorContext, ErrorReporter};
use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Maximum key length for generated test data.
const MAX_KEY_LENGTH: usize = 6;

/// A minimal payload for trie tests.
#[derive(Debug, Clone, PartialEq)]
pub struct TestValue {
    /// Query text
    pub q: String,
    /// Score
    pub score: f32,
}

impl Value for TestValue {
    fn query(&self) -> &str {
        &self.q
    }

    fn score(&self) -> f32 {
        self.score
    }
}

/// Create a shared test payload.
pub fn value(q: &str, score: f32) -> Arc<TestValue> {
    Arc::new(TestValue {
        q: q.to_string(),
        score,
    })
}

/// Generate keys over a small alphabet so generated keys share prefixes.
///
/// The alphabet mixes ASCII and multi-byte code points.
pub fn key_strategy() -> BoxedStrategy<String> {
    let symbol = prop::sample::select(vec!['a', 'b', 'c', 'é', '王']);
    proptest::collection::vec(symbol, 1..=MAX_KEY_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate scores on a coarse grid, so no two distinct scores fall within
/// the comparator's epsilon of each other.
pub fn score_strategy() -> BoxedStrategy<f32> {
    (0u8..16).prop_map(|step| f32::from(step) * 0.25).boxed()
}

/// Generate scores a few units in the last place above `1.0`.
///
/// Neighbouring values compare equal under the comparator's epsilon while
/// values further apart do not, so equality chains are intransitive.
pub fn jittered_score_strategy() -> BoxedStrategy<f32> {
    (0u32..40)
        .prop_map(|ulps| f32::from_bits(1.0f32.to_bits() + ulps))
        .boxed()
}

/// Generate `(key, payload)` insertions drawing query texts from a small pool,
/// so the same query text recurs with different scores.
pub fn insertion_strategy(max_insertions: usize) -> BoxedStrategy<Vec<(String, Arc<TestValue>)>> {
    insertions_with_scores(score_strategy(), max_insertions)
}

/// Like [`insertion_strategy`], with [`jittered_score_strategy`] scores.
pub fn jittered_insertion_strategy(
    max_insertions: usize,
) -> BoxedStrategy<Vec<(String, Arc<TestValue>)>> {
    insertions_with_scores(jittered_score_strategy(), max_insertions)
}

fn insertions_with_scores(
    scores: BoxedStrategy<f32>,
    max_insertions: usize,
) -> BoxedStrategy<Vec<(String, Arc<TestValue>)>> {
    let insertion = (key_strategy(), 0u8..12, scores)
        .prop_map(|(key, q, score)| (key, value(&format!("q{q}"), score)));
    proptest::collection::vec(insertion, 0..max_insertions).boxed()
}

/// Reference model of a node's list: the first copy of a query text wins,
/// then append, insertion-sort the whole list and keep the top `max_len`.
///
/// The insertion sort only swaps adjacent entries, so it stays well defined
/// when epsilon-equal scores make the order intransitive.
pub fn model_list(offers: &[Arc<TestValue>], max_len: usize) -> Vec<(String, f32)> {
    let mut list: Vec<Arc<TestValue>> = Vec::new();
    for offer in offers {
        if list.iter().any(|v| v.q == offer.q) {
            continue;
        }
        if list.len() >= max_len {
            match list.last() {
                Some(last) if ranks_ahead(offer.as_ref(), last.as_ref()) => {}
                _ => continue,
            }
        }
        list.push(Arc::clone(offer));
        for i in 1..list.len() {
            let mut j = i;
            while j > 0 && ranks_ahead(list[j].as_ref(), list[j - 1].as_ref()) {
                list.swap(j, j - 1);
                j -= 1;
            }
        }
        list.truncate(max_len);
    }
    list.iter().map(|v| (v.q.clone(), v.score)).collect()
}

/// Project a result list onto `(query, score)` pairs.
pub fn ranked<V: Value>(values: &[Arc<V>]) -> Vec<(String, f32)> {
    values
        .iter()
        .map(|v| (v.query().to_string(), v.score()))
        .collect()
}

/// Error reporter that records what it receives.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reported_count: AtomicUsize,
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reports received.
    pub fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }

    /// Rendered reports, in arrival order.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(context.to_string());
        }
    }
}

/// Test fixture for tests requiring files on disk or environment overrides.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        std::env::set_var(&key, value.into());
        self.env_vars.push(key);
    }

    /// Write a file named `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}

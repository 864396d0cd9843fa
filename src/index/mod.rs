//! Parallel index construction.
//!
//! Builds one [`PathValueTrie`] per key encoding from a loaded [`Corpus`] and
//! assembles them into a [`TrieGroup`]. Each trie is filled by its own worker
//! thread; workers share only the read-only corpus, so no synchronization is
//! needed until they are joined.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crate::config::IndexConfig;
use crate::corpus::{Candidate, Corpus, KeyEncoder};
use crate::data_structures::path_value_trie::PathValueTrie;
use crate::data_structures::trie_group::{TrieGroup, TrieGroupError};
use crate::error::{ErrorContext, ErrorReporter, KiloError, KiloResult, TracingErrorReporter};

/// Counters for one trie built by [`IndexBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieBuildStats {
    /// Name of the encoder the trie was built with
    pub encoder: String,

    /// Successful insertions
    pub inserted: usize,

    /// Keys with no representation in this encoding
    pub skipped: usize,

    /// Rejected insertions, each reported through the error reporter
    pub failed: usize,

    /// Nodes in the finished trie
    pub nodes: usize,
}

/// A built index: the queryable group plus per-trie counters in group order.
#[derive(Debug)]
pub struct BuiltIndex {
    /// Merged view over all tries
    pub group: TrieGroup<Candidate>,

    /// One entry per trie
    pub stats: Vec<TrieBuildStats>,
}

/// Builds a [`TrieGroup`] over several key encodings of a corpus.
#[derive(Debug)]
pub struct IndexBuilder {
    max_node_len: usize,
    max_results_len: usize,
    encoders: Vec<Box<dyn KeyEncoder>>,
    reporter: Arc<dyn ErrorReporter>,
}

impl IndexBuilder {
    /// Creates a builder from index configuration.
    pub fn new(config: &IndexConfig) -> Self {
        Self::with_encoders(
            config.max_node_len,
            config.max_results_len,
            config.encoders.iter().map(|kind| kind.encoder()).collect(),
        )
    }

    /// Creates a builder with explicit encoders, one trie per encoder.
    pub fn with_encoders(
        max_node_len: usize,
        max_results_len: usize,
        encoders: Vec<Box<dyn KeyEncoder>>,
    ) -> Self {
        Self {
            max_node_len,
            max_results_len,
            encoders,
            reporter: Arc::new(TracingErrorReporter),
        }
    }

    /// Replaces the reporter receiving rejected insertions.
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Builds every trie in parallel and assembles the group.
    ///
    /// # Returns
    ///
    /// * `Ok(BuiltIndex)` - The group and per-trie counters.
    /// * `Err(KiloError)` - No encoders are configured, a worker could not be
    ///   spawned, or a worker panicked.
    pub fn build(&self, corpus: &Corpus) -> KiloResult<BuiltIndex> {
        if self.encoders.is_empty() {
            return Err(TrieGroupError::NoTries.into());
        }

        let started = Instant::now();
        let built = thread::scope(|scope| -> KiloResult<Vec<_>> {
            let mut handles = Vec::with_capacity(self.encoders.len());
            for encoder in &self.encoders {
                let encoder: &dyn KeyEncoder = encoder.as_ref();
                let handle = thread::Builder::new()
                    .name(format!("kilo-build-{}", encoder.name()))
                    .spawn_scoped(scope, move || self.build_trie(encoder, corpus))?;
                handles.push((encoder.name(), handle));
            }

            handles
                .into_iter()
                .map(|(name, handle)| {
                    handle.join().map_err(|_| {
                        KiloError::Custom(format!("index worker for encoder '{name}' panicked"))
                    })
                })
                .collect()
        })?;

        let (tries, stats): (Vec<_>, Vec<_>) = built
            .into_iter()
            .map(|(trie, stats)| (Arc::new(trie), stats))
            .unzip();

        for s in &stats {
            tracing::info!(
                encoder = %s.encoder,
                inserted = s.inserted,
                skipped = s.skipped,
                failed = s.failed,
                nodes = s.nodes,
                "trie built"
            );
        }
        tracing::info!(
            tries = tries.len(),
            candidates = corpus.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "index built"
        );

        let group = TrieGroup::new(tries, self.max_results_len)?;
        Ok(BuiltIndex { group, stats })
    }

    /// Fills one trie with every encoded key of the corpus, in corpus order.
    fn build_trie(
        &self,
        encoder: &dyn KeyEncoder,
        corpus: &Corpus,
    ) -> (PathValueTrie<Candidate>, TrieBuildStats) {
        let mut trie = PathValueTrie::new(self.max_node_len);
        let mut stats = TrieBuildStats {
            encoder: encoder.name().to_string(),
            ..TrieBuildStats::default()
        };

        for entry in corpus.entries() {
            for key in &entry.keys {
                let encoded = encoder.encode(key);
                if encoded.is_empty() {
                    stats.skipped += 1;
                    continue;
                }
                match trie.put(&encoded, Arc::clone(&entry.candidate)) {
                    Ok(()) => stats.inserted += 1,
                    Err(e) => {
                        stats.failed += 1;
                        self.reporter.report(
                            ErrorContext::new(e, "index_builder").with_details(format!(
                                "encoder={}, key={encoded:?}, score={}",
                                encoder.name(),
                                entry.candidate.score
                            )),
                        );
                    }
                }
            }
        }

        stats.nodes = trie.node_count();
        (trie, stats)
    }
}

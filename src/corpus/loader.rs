//! Corpus loader.
//!
//! Reads records of the form `index_key SEP candidate_query SEP json` and
//! collapses them into one entry per candidate query, each carrying every
//! index key the candidate should be reachable from.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

use super::candidate::Candidate;
use crate::config::CorpusConfig;
use crate::data_structures::path_value_trie::score_cmp;
use crate::error::corpus::CorpusError;

/// One candidate and the surface keys it is indexed under.
#[derive(Debug, Clone)]
pub struct CorpusEntry {
    /// Surface index keys, in input order
    pub keys: Vec<String>,

    /// Shared candidate payload
    pub candidate: Arc<Candidate>,
}

/// Counters describing one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines consumed from the input
    pub lines_read: usize,

    /// Lines that produced a record
    pub records_accepted: usize,

    /// Lines skipped as malformed
    pub lines_skipped: usize,

    /// Candidates that reached the per-candidate key cap
    pub capped_candidates: usize,

    /// Keys dropped by the per-candidate key cap
    pub dropped_keys: usize,

    /// Whether input was left unread because of the line cap
    pub truncated: bool,
}

/// Candidates ordered best first, ready to be inserted into tries.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    stats: LoadStats,
}

impl Corpus {
    /// Wraps entries produced by another ingestion path.
    ///
    /// The given order is the insertion order used by builders, so callers
    /// should supply entries best first.
    pub fn from_entries(entries: Vec<CorpusEntry>) -> Self {
        let records = entries.iter().map(|e| e.keys.len()).sum();
        Self {
            entries,
            stats: LoadStats {
                records_accepted: records,
                ..LoadStats::default()
            },
        }
    }

    /// Entries ordered by descending score, then descending query text.
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Load counters.
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Number of distinct candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no candidate was loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A candidate being accumulated while reading.
struct Pending {
    keys: Vec<String>,
    candidate: Candidate,
    capped: bool,
}

/// Reads corpus files into a [`Corpus`].
#[derive(Debug, Clone, Default)]
pub struct CorpusLoader {
    config: CorpusConfig,
}

impl CorpusLoader {
    /// Creates a loader.
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    /// Loads the corpus file at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(Corpus)` - The collapsed, ordered candidates.
    /// * `Err(CorpusError)` - The file is missing or could not be read.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Corpus, CorpusError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CorpusError::FileNotFound(path.to_path_buf()));
        }
        let corpus = self.load_reader(BufReader::new(File::open(path)?))?;
        tracing::info!(
            path = %path.display(),
            candidates = corpus.len(),
            lines = corpus.stats.lines_read,
            skipped = corpus.stats.lines_skipped,
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Loads a corpus from any buffered reader.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<Corpus, CorpusError> {
        let mut stats = LoadStats::default();
        let mut slots: HashMap<String, usize, FnvBuildHasher> = HashMap::default();
        let mut pending: Vec<Pending> = Vec::new();

        for line in reader.lines() {
            if stats.lines_read >= self.config.max_input_lines {
                stats.truncated = true;
                break;
            }
            let line = line?;
            stats.lines_read += 1;

            let Some((key, candidate)) = self.parse_line(&line) else {
                stats.lines_skipped += 1;
                continue;
            };
            stats.records_accepted += 1;

            let Some(slot) = slots.get(candidate.query.as_str()).copied() else {
                slots.insert(candidate.query.clone(), pending.len());
                pending.push(Pending {
                    keys: vec![key.to_string()],
                    candidate,
                    capped: false,
                });
                continue;
            };

            let existing = &mut pending[slot];
            if score_cmp(candidate.score, existing.candidate.score).is_gt() {
                existing.candidate = candidate;
            }
            if existing.keys.len() >= self.config.max_indexes_per_candidate {
                if !existing.capped {
                    existing.capped = true;
                    stats.capped_candidates += 1;
                    tracing::debug!(
                        query = %existing.candidate.query,
                        cap = self.config.max_indexes_per_candidate,
                        "candidate reached index key cap"
                    );
                }
                stats.dropped_keys += 1;
                continue;
            }
            existing.keys.push(key.to_string());
        }

        if stats.truncated {
            tracing::warn!(
                max_input_lines = self.config.max_input_lines,
                "corpus input truncated at line cap"
            );
        }
        if stats.capped_candidates > 0 {
            tracing::warn!(
                candidates = stats.capped_candidates,
                dropped_keys = stats.dropped_keys,
                cap = self.config.max_indexes_per_candidate,
                "candidates exceeded the index key cap; extra keys ignored"
            );
        }

        // Stable, so candidates of identical rank keep input order. Exact
        // score order here, not the epsilon rank: sort_by needs a total order,
        // and this only decides insertion order, which the tries re-rank.
        pending.sort_by(|a, b| {
            b.candidate
                .score
                .total_cmp(&a.candidate.score)
                .then_with(|| b.candidate.query.cmp(&a.candidate.query))
        });

        let entries = pending
            .into_iter()
            .map(|p| CorpusEntry {
                keys: p.keys,
                candidate: Arc::new(p.candidate),
            })
            .collect();

        Ok(Corpus { entries, stats })
    }

    /// Splits one record; `None` when it is malformed.
    fn parse_line<'a>(&self, line: &'a str) -> Option<(&'a str, Candidate)> {
        let mut fields = line.split(self.config.field_separator.as_str());
        let key = fields.next()?;
        let query = fields.next()?;
        let attributes = fields.next()?;
        if key.is_empty() || query.is_empty() {
            return None;
        }
        match Candidate::from_attributes(query, attributes) {
            Ok(candidate) => Some((key, candidate)),
            Err(e) => {
                tracing::debug!(error = %e, query, "skipping record with invalid attributes");
                None
            }
        }
    }
}

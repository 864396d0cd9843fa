// Copyright (c) 2025 Kilo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie Group Implementation
//!
//! Merges lookups across several [`PathValueTrie`]s built over different
//! encodings of the same corpus (surface form, full pinyin, pinyin initials).
//! Candidates reached through more than one encoding converge on a single
//! entry: the best-ranked copy of each query text wins.

mod error;

use std::sync::Arc;

use fnv::FnvBuildHasher;
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

use crate::data_structures::path_value_trie::{ranks_ahead, PathValueTrie, RankedList, Value};
pub use error::TrieGroupError;

/// Result type for trie group operations
pub type TrieGroupResult<T> = Result<T, TrieGroupError>;

/// A fixed, non-empty set of tries answering merged, ranked lookups.
///
/// Member tries are shared and read-only; a group is `Sync` whenever its
/// payload type is.
#[derive(Debug)]
pub struct TrieGroup<V> {
    /// Member tries, queried in order
    tries: Vec<Arc<PathValueTrie<V>>>,

    /// Maximum number of merged results
    max_results_len: usize,
}

impl<V: Value> TrieGroup<V> {
    /// Creates a group over `tries`.
    ///
    /// # Returns
    ///
    /// * `Ok(TrieGroup)` - The assembled group.
    /// * `Err(TrieGroupError::NoTries)` - `tries` is empty.
    pub fn new(tries: Vec<Arc<PathValueTrie<V>>>, max_results_len: usize) -> TrieGroupResult<Self> {
        if tries.is_empty() {
            return Err(TrieGroupError::NoTries);
        }
        Ok(Self {
            tries,
            max_results_len,
        })
    }

    /// Looks `key` up in every member trie and merges the answers.
    ///
    /// Each query text appears once, represented by its best-ranked copy. The
    /// result is best first and holds at most `max_results_len` entries.
    pub fn get<K>(&self, key: K) -> Vec<Arc<V>>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        let mut best: HashMap<&str, &Arc<V>, FnvBuildHasher> = HashMap::default();

        for trie in &self.tries {
            for value in trie.values_at(key) {
                match best.entry(value.query()) {
                    Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                    Entry::Occupied(mut slot) => {
                        if ranks_ahead(value.as_ref(), slot.get().as_ref()) {
                            slot.insert(value);
                        }
                    }
                }
            }
        }

        let candidates = best.len();
        let mut merged = RankedList::new(self.max_results_len);
        for value in best.into_values() {
            merged.offer(value);
        }

        tracing::debug!(
            key,
            tries = self.tries.len(),
            candidates,
            returned = merged.len(),
            "merged lookup"
        );
        merged.into_vec()
    }

    /// Member tries in query order.
    pub fn tries(&self) -> &[Arc<PathValueTrie<V>>] {
        &self.tries
    }

    /// Number of member tries.
    pub fn len(&self) -> usize {
        self.tries.len()
    }

    /// Always `false`; groups are never empty.
    pub fn is_empty(&self) -> bool {
        self.tries.is_empty()
    }

    /// Maximum number of merged results.
    pub fn max_results_len(&self) -> usize {
        self.max_results_len
    }
}

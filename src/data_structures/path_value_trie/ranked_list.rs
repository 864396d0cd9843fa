// Copyright (c) 2025 Kilo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Capacity-bounded, always-sorted list of shared payload handles.

use std::sync::Arc;

use super::value::{ranks_ahead, Value};

/// Initial backing storage reserved for a fresh list.
const INITIAL_CAPACITY: usize = 4;

/// An approximate top-K list kept best-first.
///
/// Invariants:
/// * at most `capacity` entries,
/// * every adjacent pair ordered by [`rank_order`](super::rank_order),
/// * no two entries share a query text.
#[derive(Debug, Clone)]
pub struct RankedList<V> {
    entries: Vec<Arc<V>>,
    capacity: usize,
}

impl<V: Value> RankedList<V> {
    /// Creates an empty list that retains at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(INITIAL_CAPACITY.min(capacity)),
            capacity,
        }
    }

    /// Offers a candidate to the list.
    ///
    /// Returns `true` if the candidate was retained. Candidates are dropped
    /// silently when an entry with the same query text is already present
    /// (the first one stays, whatever its score) or when the list is full
    /// and the candidate does not rank strictly ahead of the last entry.
    pub fn offer(&mut self, value: &Arc<V>) -> bool {
        if self.capacity == 0 {
            return false;
        }

        let query = value.query();
        if self.entries.iter().any(|existing| existing.query() == query) {
            return false;
        }

        let len = self.entries.len();
        if len >= self.capacity && !ranks_ahead(value.as_ref(), self.entries[len - 1].as_ref()) {
            return false;
        }

        self.grow();

        // Sift the newcomer left from the tail. Neighbours of the stop point
        // stay ordered even where epsilon-equal scores chain intransitively.
        self.entries.push(Arc::clone(value));
        let mut at = self.entries.len() - 1;
        while at > 0 && ranks_ahead(self.entries[at].as_ref(), self.entries[at - 1].as_ref()) {
            self.entries.swap(at, at - 1);
            at -= 1;
        }
        self.entries.truncate(self.capacity);

        true
    }

    /// Doubles the backing storage when full, never beyond `capacity + 1`.
    fn grow(&mut self) {
        let len = self.entries.len();
        if len < self.entries.capacity() {
            return;
        }
        let target = (self.entries.capacity() * 2)
            .max(1)
            .min(self.capacity + 1);
        if target > len {
            self.entries.reserve_exact(target - len);
        }
    }

    /// The retained entries, best first.
    pub fn as_slice(&self) -> &[Arc<V>] {
        &self.entries
    }

    /// Consumes the list, returning the entries best first.
    pub fn into_vec(self) -> Vec<Arc<V>> {
        self.entries
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list retains nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current size of the backing storage.
    #[cfg(test)]
    pub(crate) fn allocated(&self) -> usize {
        self.entries.capacity()
    }
}

//! Path Value Trie Implementation
//!
//! A prefix-retaining trie: every node along an inserted key's path keeps a
//! bounded, ranked list of payloads, not only the node where the key ends.
//! Storing "pubg" therefore populates the "p", "pu", "pub" and "pubg" nodes,
//! and a lookup for any of those prefixes answers "top K candidates starting
//! with this prefix" in time proportional to the prefix length.
//!
//! The price is recall: each node keeps at most `max_len` candidates, so weak
//! candidates sharing a popular prefix are forgotten at that prefix.
//!
//! # Concurrency
//!
//! There is no internal locking. [`PathValueTrie::put`] takes `&mut self`, so a
//! trie has a single writer while it is being built. Once built, a trie is
//! `Sync` whenever its payload type is, and any number of threads may call
//! [`PathValueTrie::get`] on it concurrently.

mod error;
mod node;
mod ranked_list;
mod value;

use std::sync::Arc;

pub use error::PathValueTrieError;
pub use ranked_list::RankedList;
pub use value::{rank_order, ranks_ahead, score_cmp, Value, SCORE_EPSILON};
use node::TrieNode;

/// Result type for path value trie operations
pub type PathValueTrieResult<T> = Result<T, PathValueTrieError>;

/// A trie that retains ranked payloads at every node of every inserted path.
///
/// Payloads are shared through [`Arc`]: the same payload is referenced by all
/// prefix nodes of its key and may also live in other tries.
#[derive(Debug)]
pub struct PathValueTrie<V> {
    /// The root node; it never stores values
    root: TrieNode<V>,

    /// Maximum number of payloads retained per node
    max_len: usize,

    /// Number of nodes created below the root
    node_count: usize,
}

impl<V: Value> PathValueTrie<V> {
    /// Creates an empty trie retaining at most `max_len` payloads per node.
    ///
    /// A `max_len` of zero yields a trie whose lookups are always empty.
    pub fn new(max_len: usize) -> Self {
        Self {
            root: TrieNode::new('\0', max_len),
            max_len,
            node_count: 0,
        }
    }

    /// Inserts `value` under `key` and every prefix of `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - Key bytes; must be valid UTF-8. Traversal is per code point.
    /// * `value` - Shared payload handle.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The request was well formed. Whether the payload survived at
    ///   a given node depends on the dedup and capacity rules and is not
    ///   reported.
    /// * `Err(PathValueTrieError)` - The key is not UTF-8 or the payload's query
    ///   text is empty. Nothing was modified.
    pub fn put<K>(&mut self, key: K, value: Arc<V>) -> PathValueTrieResult<()>
    where
        K: AsRef<[u8]>,
    {
        let key = std::str::from_utf8(key.as_ref())?;
        if value.query().is_empty() {
            return Err(PathValueTrieError::EmptyQuery);
        }

        let max_len = self.max_len;
        let mut created = 0;
        let mut retained = 0;
        let mut node = &mut self.root;
        for symbol in key.chars() {
            let (child, is_new) = node.child_or_insert(symbol, max_len);
            if is_new {
                created += 1;
            }
            if child.values.offer(&value) {
                retained += 1;
            }
            node = child;
        }
        self.node_count += created;

        tracing::trace!(
            key,
            query = value.query(),
            score = value.score(),
            created,
            retained,
            "put"
        );
        Ok(())
    }

    /// Returns a copy of the ranked payload list stored at `key`.
    ///
    /// The result is best first and empty when no inserted key starts with
    /// `key`. Handles are cloned, payloads are not.
    pub fn get<K>(&self, key: K) -> Vec<Arc<V>>
    where
        K: AsRef<str>,
    {
        self.values_at(key.as_ref()).to_vec()
    }

    /// Borrows the ranked payload list stored at `key` without copying it.
    pub fn values_at(&self, key: &str) -> &[Arc<V>] {
        let mut node = &self.root;
        for symbol in key.chars() {
            match node.child(symbol) {
                Some(child) => node = child,
                None => return &[],
            }
        }
        node.values.as_slice()
    }

    /// Whether any key starting with `prefix` was inserted.
    pub fn contains_prefix<K>(&self, prefix: K) -> bool
    where
        K: AsRef<str>,
    {
        let mut node = &self.root;
        for symbol in prefix.as_ref().chars() {
            match node.child(symbol) {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }

    /// Maximum number of payloads retained per node.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

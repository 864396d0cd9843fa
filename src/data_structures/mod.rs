//! Data structures for Kilo.
//!
//! - [`PathValueTrie`] retains a bounded, ranked list of payloads at every
//!   node along each inserted key, so a prefix lookup is a single walk
//! - [`TrieGroup`] merges lookups over several tries into one ranked list

pub mod path_value_trie;
pub mod trie_group;

// Re-export common data structures
pub use path_value_trie::{PathValueTrie, PathValueTrieError, PathValueTrieResult, Value};
pub use trie_group::{TrieGroup, TrieGroupError, TrieGroupResult};

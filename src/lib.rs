//! Kilo Library
//!
//! Prefix completion over ranked candidates. The library contains the core
//! data structures, corpus ingestion, parallel index construction and the
//! layered configuration used by the `kilo` binary. It can also be used as a
//! dependency by other projects that bring their own payload type.
//!
//! # Architecture
//!
//! - [`data_structures::PathValueTrie`] stores the best payloads for every
//!   prefix of every inserted key
//! - [`data_structures::TrieGroup`] merges lookups across several tries
//! - [`corpus`] reads candidate files and derives per-trie keys
//! - [`index`] builds one trie per key encoding in parallel
//!
//! ```
//! use std::sync::Arc;
//! use kilo_lib::corpus::Candidate;
//! use kilo_lib::data_structures::{PathValueTrie, TrieGroup, Value};
//!
//! let mut trie = PathValueTrie::new(3);
//! trie.put("ab", Arc::new(Candidate::new("ab", 0.5, 1))).unwrap();
//! trie.put("ac", Arc::new(Candidate::new("ac", 0.9, 2))).unwrap();
//!
//! let group = TrieGroup::new(vec![Arc::new(trie)], 10).unwrap();
//! let results = group.get("a");
//! let queries: Vec<&str> = results.iter().map(|c| c.query()).collect();
//! assert_eq!(queries, vec!["ac", "ab"]);
//! ```

// Re-export public modules
pub mod config;
pub mod corpus;
pub mod data_structures;
pub mod error;
pub mod index;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for Kilo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

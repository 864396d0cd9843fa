//! Error types for the path value trie.
//!
//! Only malformed requests are errors. Candidates that lose to the
//! per-node dedup or capacity rules are dropped silently.

use std::str::Utf8Error;

/// Errors that can occur in path value trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PathValueTrieError {
    /// The key bytes are not valid UTF-8.
    #[error("Key is not valid UTF-8: {0}")]
    InvalidKey(#[from] Utf8Error),

    /// The payload carries an empty query text.
    #[error("Payload query text must not be empty")]
    EmptyQuery,
}

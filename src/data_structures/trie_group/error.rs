//! Error types for trie groups.

/// Errors that can occur when assembling a trie group.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieGroupError {
    /// A group needs at least one member trie.
    #[error("Trie group requires at least one trie")]
    NoTries,
}

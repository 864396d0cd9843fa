//! Corpus ingestion.
//!
//! This module turns raw corpus files into the `(key, payload)` pairs tries
//! are built from:
//! - [`Candidate`] is the payload type, implementing the trie `Value` contract
//! - [`CorpusLoader`] reads and collapses records into a best-first [`Corpus`]
//! - [`KeyEncoder`] implementations derive per-trie keys from surface keys

mod candidate;
mod encoder;
mod loader;

pub use candidate::Candidate;
pub use encoder::{
    EncoderKind, ExactEncoder, InitialsEncoder, KeyEncoder, LowercaseEncoder, PinyinEncoder,
    PinyinInitialsEncoder,
};
pub use loader::{Corpus, CorpusEntry, CorpusLoader, LoadStats};

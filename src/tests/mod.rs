//! Test modules for Kilo.
//!
//! Crate-level suites that span more than one module:
//! - property-based tests for the trie and the group merge
//! - configuration loading and validation tests
//! - error type and reporting tests
//!
//! Unit tests live next to the code they exercise.

pub mod test_utils;

pub use test_utils::{
    insertion_strategy, jittered_insertion_strategy, jittered_score_strategy, key_strategy,
    model_list, ranked, score_strategy, value,
    RecordingReporter, TestFixture, TestValue,
};

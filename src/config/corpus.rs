//! Corpus configuration module.
//!
//! This module defines how corpus files are read: record layout and the
//! limits applied while collapsing records into candidates.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Corpus ingestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorpusConfig {
    /// Maximum number of lines read from a corpus file
    pub max_input_lines: usize,

    /// Maximum number of index keys kept per candidate
    pub max_indexes_per_candidate: usize,

    /// Separator between the index key, candidate query and JSON attributes
    pub field_separator: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            max_input_lines: 500_000,
            max_indexes_per_candidate: 200,
            field_separator: "\u{1}".to_string(),
        }
    }
}

impl Validate for CorpusConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_input_lines == 0 {
            return Err(ConfigError::ValidationError(
                "max_input_lines must be greater than 0".to_string(),
            ));
        }

        if self.max_indexes_per_candidate == 0 {
            return Err(ConfigError::ValidationError(
                "max_indexes_per_candidate must be greater than 0".to_string(),
            ));
        }

        if self.field_separator.is_empty() || self.field_separator.contains('\n') {
            return Err(ConfigError::ValidationError(
                "field_separator must be non-empty and must not contain a newline".to_string(),
            ));
        }

        Ok(())
    }
}

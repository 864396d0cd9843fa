//! Index configuration module.
//!
//! This module defines the capacity bounds of the tries and the set of key
//! encodings an index is built over.

use super::{ConfigResult, Validate};
use crate::corpus::EncoderKind;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Index configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexConfig {
    /// Maximum number of candidates retained per trie node
    pub max_node_len: usize,

    /// Maximum number of results returned by a merged lookup
    pub max_results_len: usize,

    /// Key encodings to build one trie each for, in query order
    pub encoders: Vec<EncoderKind>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_node_len: 200,
            max_results_len: 200,
            encoders: vec![
                EncoderKind::Exact,
                EncoderKind::Pinyin,
                EncoderKind::PinyinInitials,
            ],
        }
    }
}

impl Validate for IndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_node_len == 0 {
            return Err(ConfigError::ValidationError(
                "max_node_len must be greater than 0".to_string(),
            ));
        }

        if self.max_results_len == 0 {
            return Err(ConfigError::ValidationError(
                "max_results_len must be greater than 0".to_string(),
            ));
        }

        if self.encoders.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one encoder must be configured".to_string(),
            ));
        }

        for (i, encoder) in self.encoders.iter().enumerate() {
            if self.encoders[..i].contains(encoder) {
                return Err(ConfigError::ValidationError(format!(
                    "encoder {encoder:?} is configured more than once"
                )));
            }
        }

        Ok(())
    }
}

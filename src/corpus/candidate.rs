//! Candidate payload produced by corpus ingestion.

use serde::{Deserialize, Serialize};

use crate::data_structures::path_value_trie::Value;

/// A suggestion candidate: the query text offered to users plus its ranking
/// attributes.
///
/// Attributes are read from the JSON column of a corpus record. The query text
/// comes from the candidate column, never from the JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Candidate {
    /// Query text suggested to the user
    #[serde(skip)]
    pub query: String,

    /// Ranking score; higher is better
    #[serde(default, alias = "Score")]
    pub score: f32,

    /// Identifier of the item the candidate points at
    #[serde(default, alias = "game_id", alias = "GameId")]
    pub item_id: i64,
}

impl Candidate {
    /// Creates a candidate.
    pub fn new<Q: Into<String>>(query: Q, score: f32, item_id: i64) -> Self {
        Self {
            query: query.into(),
            score,
            item_id,
        }
    }

    /// Parses JSON attributes and attaches `query`.
    pub fn from_attributes<Q: Into<String>>(query: Q, attributes: &str) -> serde_json::Result<Self> {
        let mut candidate: Candidate = serde_json::from_str(attributes)?;
        candidate.query = query.into();
        Ok(candidate)
    }
}

impl Value for Candidate {
    fn query(&self) -> &str {
        &self.query
    }

    fn score(&self) -> f32 {
        self.score
    }
}

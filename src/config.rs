//! Ranker configuration: defaults, JSON loading and validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};

/// Number of recommendations shown on a product page.
pub const DEFAULT_TOP_K: usize = 4;

/// Candidate pools at least this large are scored on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Which stop words the analyzer removes.
///
/// In JSON: `"english"`, `"none"` or `{"custom": ["word", ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StopWords {
    #[default]
    English,
    None,
    Custom(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub stop_words: StopWords,
    /// Shortest term kept, in chars
    pub min_term_len: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWords::English,
            min_term_len: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Default number of hits returned by `Recommender`
    pub top_k: usize,
    /// Minimum candidate count before scoring goes parallel
    pub parallel_threshold: usize,
    pub analyzer: AnalyzerConfig,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl RankerConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(RankError::InvalidConfig("top_k must be at least 1".to_string()));
        }
        if self.analyzer.min_term_len == 0 {
            return Err(RankError::InvalidConfig(
                "analyzer.min_term_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

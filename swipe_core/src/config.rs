//! `config`: TOML settings for the predictor, history and session.
//!
//! Every field has a default, so an empty file (or no file) is valid.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    engine::DEFAULT_MAX_RESULTS,
    error::SwipeResult,
    history::DEFAULT_HISTORY_CAPACITY,
    predictor::PredictionMode,
    translator::DEFAULT_SIMILARITY_THRESHOLD,
};

pub const DEFAULT_CACHE_CAPACITY: u64 = 256;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub prediction: PredictionConfig,
    pub history: HistoryConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Suggestions shown per query.
    pub max_results: usize,
    /// Keys must score strictly above this to contribute words.
    pub similarity_threshold: f64,
    /// Starting prediction mode.
    pub mode: PredictionMode,
    /// Cached local results; 0 disables the cache.
    pub cache_capacity: u64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            mode: PredictionMode::Local,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Messages kept, newest first.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Keep capturing after a word is selected.
    pub continuous: bool,
    /// Refresh suggestions after every accepted key, not only when the gesture ends.
    pub live_predictions: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            continuous: true,
            live_predictions: true,
        }
    }
}

impl SwipeConfig {
    pub fn from_toml(s: &str) -> SwipeResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SwipeResult<Self> {
        let s = fs::read_to_string(path)?;
        Self::from_toml(&s)
    }
}

//! `predictor`: the prediction facade called by input handling code.
//!
//! - `Local`: ask the engine directly (results cached per sequence + count)
//! - `Remote`: ask a `RemotePredictor`; on any error, log it and answer locally
//!
//! The service is called on every new key and once more when the gesture
//! ends. It does no debouncing; callers should coalesce bursts (roughly
//! 100-300 ms) since each uncached call rescans the whole dictionary.

use std::{collections::HashSet, fmt};

use moka::sync::Cache;
use serde::{Deserialize, Serialize};

use crate::{
    dictionary::PatternDictionary,
    engine::Engine,
    error::{SwipeError, SwipeResult},
    sequence::SwipeSequence,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionMode {
    /// Dictionary heuristic only
    #[default]
    Local,
    /// External service first, local heuristic on failure
    Remote,
}

impl PredictionMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Local => Self::Remote,
            Self::Remote => Self::Local,
        }
    }
}

impl fmt::Display for PredictionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Remote => f.write_str("remote"),
        }
    }
}

/// External word predictor (for example a hosted language model).
pub trait RemotePredictor: Send + Sync {
    fn predict(&self, sequence: &str, max_results: usize) -> SwipeResult<Vec<String>>;
}

/// Placeholder remote: no service is wired up, so every call fails and the local path answers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredRemote;

impl RemotePredictor for UnconfiguredRemote {
    fn predict(&self, _sequence: &str, _max_results: usize) -> SwipeResult<Vec<String>> {
        Err(SwipeError::Remote {
            reason: "no remote predictor configured".to_string(),
        })
    }
}

pub struct PredictionService<D> {
    engine: Engine<D>,
    remote: Box<dyn RemotePredictor>,
    /// `None` when caching is disabled (capacity 0)
    cache: Option<Cache<(String, usize), Vec<String>>>,
}

impl<D> PredictionService<D>
where
    D: PatternDictionary,
{
    /// Service with the unconfigured remote and a local cache of `cache_capacity` entries.
    pub fn new(engine: Engine<D>, cache_capacity: u64) -> Self {
        let cache = (cache_capacity > 0).then(|| Cache::builder().max_capacity(cache_capacity).build());
        Self {
            engine,
            remote: Box::new(UnconfiguredRemote),
            cache,
        }
    }

    pub fn with_remote(mut self, remote: impl RemotePredictor + 'static) -> Self {
        self.remote = Box::new(remote);
        self
    }

    pub fn engine(&self) -> &Engine<D> {
        &self.engine
    }

    /// Suggestions for an in-progress or finished swipe. Never fails.
    pub fn predict(&self, sequence: &str, max_results: usize, mode: PredictionMode) -> Vec<String> {
        if sequence.trim().is_empty() || max_results == 0 {
            tracing::debug!(max_results, "skipping prediction for empty request");
            return Vec::new();
        }
        match mode {
            PredictionMode::Local => self.predict_local(sequence, max_results),
            PredictionMode::Remote => match self.remote.predict(sequence, max_results) {
                Ok(words) => {
                    let words = clean_remote_words(words, max_results);
                    if words.is_empty() {
                        tracing::warn!(%sequence, "remote prediction returned no usable words, using local dictionary");
                        return self.predict_local(sequence, max_results);
                    }
                    words
                }
                Err(e) => {
                    tracing::warn!(%sequence, error = %e, "remote prediction failed, using local dictionary");
                    self.predict_local(sequence, max_results)
                }
            },
        }
    }

    pub fn predict_sequence(
        &self,
        sequence: &SwipeSequence,
        max_results: usize,
        mode: PredictionMode,
    ) -> Vec<String> {
        self.predict(&sequence.as_pattern(), max_results, mode)
    }

    fn predict_local(&self, sequence: &str, max_results: usize) -> Vec<String> {
        let Some(cache) = &self.cache else {
            return self.engine.find_best_matches(sequence, max_results);
        };
        let key = (sequence.trim().to_uppercase(), max_results);
        if let Some(hit) = cache.get(&key) {
            tracing::debug!(%sequence, max_results, "prediction cache hit");
            return hit;
        }
        let words = self.engine.find_best_matches(sequence, max_results);
        cache.insert(key, words.clone());
        words
    }

    /// Number of cached local results (0 when caching is disabled).
    pub fn cached_entries(&self) -> u64 {
        self.cache.as_ref().map_or(0, |cache| {
            cache.run_pending_tasks();
            cache.entry_count()
        })
    }

    /// Drop every cached result.
    pub fn invalidate_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }
}

/// Trimmed, non-blank, first occurrence only, at most `max_results`.
fn clean_remote_words(words: Vec<String>, max_results: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty() && seen.insert(w.clone()))
        .take(max_results)
        .collect()
}

use serde::{Deserialize, Serialize};

use crate::{context::CaptureMethod, predictor::PredictionMode};

/// One dictionary row: a pattern key and its words in relevance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    /// Uppercase key (letter, digraph, prefix or phrase such as `"I AM"`)
    pub key: String,
    /// Candidate words; earlier words are more relevant
    pub words: Vec<String>,
}

impl PatternEntry {
    pub fn new<K, I, W>(key: K, words: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            key: key.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

/// Where a suggested word came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    /// The pattern is itself a dictionary key
    Exact,
    /// A key scored above the similarity threshold
    Fuzzy,
    /// Padded from the single-letter entry of the first key
    LetterFallback,
    /// Padded from the generic high-frequency list
    CommonFallback,
}

/// A scored word, produced fresh for every query.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The suggested word or phrase
    pub word: String,
    /// Similarity of the key it came from, in [0, 1]
    pub score: f64,
    pub source: CandidateSource,
    /// Dictionary key that produced the word (None for the common list)
    pub key: Option<String>,
}

/// Read-only snapshot handed to the UI layer.
///
/// The UI never touches `Context` directly; it renders this and sends
/// `InputEvent`s back.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Keys visited so far, e.g. `"HLP"`
    pub sequence: String,
    /// Current suggestions, best first
    pub suggestions: Vec<String>,
    /// Words selected so far and not yet said
    pub composed_text: String,
    pub capturing: bool,
    pub capture_method: CaptureMethod,
    pub mode: PredictionMode,
    pub continuous: bool,
    /// Recent messages, newest first
    pub history: Vec<String>,
}

//! `Context`: the only state shared by the processor chain.
//!
//! Rules:
//! - `sequence`: keys visited by the current gesture (not yet turned into a word)
//! - `suggestions`: latest prediction for `sequence`
//! - `composed_text`: selected words waiting to be said
//! - `history`: messages already said, newest first
use std::fmt;

use crate::{
    config::SwipeConfig,
    engine::DEFAULT_MAX_RESULTS,
    history::MessageHistory,
    key_event::Action,
    model::UiState,
    predictor::PredictionMode,
    processor::PredictorFacade,
    sequence::SwipeSequence,
};

/// How the keys of the current gesture are being picked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptureMethod {
    #[default]
    None,
    Hover,
    Touch,
    Dwell,
}

impl fmt::Display for CaptureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Hover => "hover",
            Self::Touch => "touch",
            Self::Dwell => "dwell",
        };
        f.write_str(s)
    }
}

/// Session context: everything processors read and write.
#[derive(Debug, Clone)]
pub struct Context {
    /// Keys of the current gesture
    pub sequence: SwipeSequence,
    /// Whether keys are currently being captured
    pub capturing: bool,
    pub capture_method: CaptureMethod,
    /// Suggestions for `sequence`, best first
    pub suggestions: Vec<String>,
    /// Selected words, space separated
    pub composed_text: String,
    pub history: MessageHistory,
    pub mode: PredictionMode,
    /// Keep capturing after a selection
    pub continuous: bool,
    /// Predict after every key instead of only at gesture end
    pub live_predictions: bool,
    /// Suggestions requested per prediction
    pub max_results: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(&SwipeConfig::default())
    }
}

impl Context {
    pub fn from_config(config: &SwipeConfig) -> Self {
        let max_results = if config.prediction.max_results == 0 {
            DEFAULT_MAX_RESULTS
        } else {
            config.prediction.max_results
        };
        Self {
            sequence: SwipeSequence::new(),
            capturing: false,
            capture_method: CaptureMethod::None,
            suggestions: Vec::new(),
            composed_text: String::new(),
            history: MessageHistory::with_capacity(config.history.capacity),
            mode: config.prediction.mode,
            continuous: config.session.continuous,
            live_predictions: config.session.live_predictions,
            max_results,
        }
    }

    /// Forget the current gesture (sequence and its suggestions).
    pub fn reset_sequence(&mut self) {
        self.sequence.clear();
        self.suggestions.clear();
    }

    pub fn start_capture(&mut self, method: CaptureMethod) {
        self.capturing = true;
        self.capture_method = method;
        self.reset_sequence();
    }

    /// End the gesture and produce the final suggestions.
    pub fn stop_capture(&mut self, predictor: &dyn PredictorFacade) -> Vec<Action> {
        self.capturing = false;
        tracing::debug!(sequence = %self.sequence, "gesture finished");
        if self.sequence.is_empty() {
            return Vec::new();
        }
        self.refresh_suggestions(predictor)
    }

    /// Add a visited key; adjacent repeats and keys outside a capture are ignored.
    pub fn push_key(&mut self, predictor: &dyn PredictorFacade, key: char) -> Vec<Action> {
        if !self.capturing {
            return Vec::new();
        }
        match self.sequence.push(key) {
            Ok(true) if self.live_predictions => self.refresh_suggestions(predictor),
            Ok(_) => Vec::new(),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring key");
                Vec::new()
            }
        }
    }

    pub fn refresh_suggestions(&mut self, predictor: &dyn PredictorFacade) -> Vec<Action> {
        self.suggestions = predictor.predict(&self.sequence.as_pattern(), self.max_results, self.mode);
        vec![Action::Suggest(self.suggestions.clone())]
    }

    /// Append suggestion `index` to the composed text and start a fresh gesture.
    pub fn select_suggestion(&mut self, index: usize) -> Vec<Action> {
        let Some(word) = self.suggestions.get(index).cloned() else {
            return Vec::new();
        };
        if !self.composed_text.is_empty() {
            self.composed_text.push(' ');
        }
        self.composed_text.push_str(&word);
        self.reset_sequence();
        if !self.continuous {
            self.capturing = false;
        }
        Vec::new()
    }

    /// "Say this": commit the composed text and remember it.
    pub fn say(&mut self) -> Vec<Action> {
        let text = self.composed_text.trim().to_string();
        self.composed_text.clear();
        if text.is_empty() {
            return Vec::new();
        }
        self.history.add(&text);
        vec![Action::Commit(text)]
    }

    pub fn delete_all(&mut self) {
        self.composed_text.clear();
    }

    /// Replace the composed text with history item `index`.
    pub fn reuse_history(&mut self, index: usize) {
        if let Some(phrase) = self.history.get(index) {
            self.composed_text = phrase.to_string();
        }
    }

    /// Read-only snapshot for the UI layer.
    pub fn ui_state(&self) -> UiState {
        UiState {
            sequence: self.sequence.as_pattern(),
            suggestions: self.suggestions.clone(),
            composed_text: self.composed_text.clone(),
            capturing: self.capturing,
            capture_method: self.capture_method,
            mode: self.mode,
            continuous: self.continuous,
            history: self.history.iter().map(str::to_string).collect(),
        }
    }
}

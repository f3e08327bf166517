//! `swipe_core`: pure prediction logic for the swipe keyboard (no terminal or file UI).
//!
//! Layers:
//! - **prediction**: sequence -> similarity -> translator -> filter -> fallback -> ranked words
//! - **service**: `PredictionService` picks local/remote and caches local results
//! - **session**: engine -> processor -> context -> output (`UiState` + `Action`)
//!
//! Dictionaries are provided by the caller through `PatternDictionary`; the
//! built-in table lives in `swipe_dict`.
pub mod config;
pub mod context;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod filter;
pub mod history;
pub mod key_event;
pub mod model;
pub mod predictor;
pub mod processor;
pub mod sequence;
pub mod session;
pub mod similarity;
pub mod translator;

pub use error::{SwipeError, SwipeResult};

//! Error type shared by the workspace.

/// Errors raised while building dictionaries, loading config or talking to a remote predictor.
///
/// Prediction itself never fails: an unusable input yields an empty or
/// fallback-filled list instead.
#[derive(Debug, thiserror::Error)]
pub enum SwipeError {
    #[error("invalid key {0:?}: only ASCII letters can be swiped")]
    InvalidKey(char),

    #[error("malformed dictionary entry on line {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("remote prediction failed: {reason}")]
    Remote { reason: String },
}

pub type SwipeResult<T> = Result<T, SwipeError>;

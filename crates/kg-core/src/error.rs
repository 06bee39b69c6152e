//! Unified error types for the normalizer.

/// Main error type for normalization components.
#[derive(Debug, thiserror::Error)]
pub enum NormError {
    /// Numeral magnitude beyond the supported bound.
    #[error("value {value} is out of the supported numeral range")]
    OutOfRange { value: i64 },

    /// A digit string could not be parsed into a number.
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// Trigger pattern failed to compile or to match.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for Results with NormError.
pub type NormResult<T> = Result<T, NormError>;

impl NormError {
    /// Create an invalid number error with message.
    pub fn invalid_number(msg: impl Into<String>) -> Self {
        Self::InvalidNumber(msg.into())
    }

    /// Create a pattern error with message.
    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::Pattern(msg.into())
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

}

impl From<serde_json::Error> for NormError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

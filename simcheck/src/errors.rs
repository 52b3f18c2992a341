//! Error definitions.
use std::result;

use thiserror::Error;

/// A specialized Result type for this library.
pub type Result<T, E = SimcheckError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimcheckError {
    /// Contains [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Contains [`ValidationError`].
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl SimcheckError {
    pub(crate) fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(ConfigError { msg: msg.into() })
    }
}

/// Error used when a parameter such as the n-gram size is out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ConfigError: {msg}")]
pub struct ConfigError {
    msg: String,
}

impl ConfigError {
    /// Gets the message describing the rejected parameter.
    pub fn msg(&self) -> &str {
        &self.msg
    }
}

/// Error used when an input text violates the length policy.
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The text is empty after trimming.
    #[error("ValidationError: text must not be empty")]
    Empty,
    /// The text is shorter than the minimum length.
    #[error("ValidationError: text is too short ({len} < {min} characters)")]
    TooShort {
        /// Length of the rejected text.
        len: usize,
        /// Minimum accepted length.
        min: usize,
    },
    /// The text is longer than the maximum length.
    #[error("ValidationError: text is too long ({len} > {max} characters)")]
    TooLong {
        /// Length of the rejected text.
        len: usize,
        /// Maximum accepted length.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_display() {
        let e = SimcheckError::config("n-gram size must be in 1..=10, got 0");
        assert_eq!(
            e.to_string(),
            "ConfigError: n-gram size must be in 1..=10, got 0"
        );
    }

    #[test]
    fn test_validation_display() {
        let e = SimcheckError::from(ValidationError::TooShort { len: 3, min: 10 });
        assert_eq!(
            e.to_string(),
            "ValidationError: text is too short (3 < 10 characters)"
        );
        assert!(matches!(
            e,
            SimcheckError::Validation(ValidationError::TooShort { .. })
        ));
    }
}

//! Runtime configuration of a check run.
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SimcheckError, ValidationError};

/// Smallest accepted n-gram size.
pub const MIN_NGRAM_SIZE: usize = 1;
/// Largest accepted n-gram size.
pub const MAX_NGRAM_SIZE: usize = 10;

/// Checks that an n-gram size is in `1..=10`.
pub fn validate_ngram_size(n: usize) -> Result<()> {
    if !(MIN_NGRAM_SIZE..=MAX_NGRAM_SIZE).contains(&n) {
        return Err(SimcheckError::config(format!(
            "n-gram size must be in {MIN_NGRAM_SIZE}..={MAX_NGRAM_SIZE}, got {n}"
        )));
    }
    Ok(())
}

/// Parameters of ranking, analytics, and input validation.
///
/// Missing fields take their default values when deserialized.
///
/// # Examples
///
/// ```
/// use simcheck::CheckConfig;
///
/// let config = CheckConfig::from_json(r#"{"ngram_size": 2, "top_k": 3}"#).unwrap();
/// assert_eq!(config.ngram_size, 2);
/// assert_eq!(config.cache_capacity, 1000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckConfig {
    /// Window size of word n-grams (must be in `1..=10`).
    pub ngram_size: usize,
    /// Number of matches kept in a ranking (must be more than 0).
    pub top_k: usize,
    /// Maximum number of entries in the comparison cache (must be more than 0).
    pub cache_capacity: usize,
    /// Maximum length of a document chain built by the greedy walk.
    pub max_depth: usize,
    /// Minimum number of characters in a submission.
    pub min_length: usize,
    /// Maximum number of characters in a submission.
    pub max_length: usize,
    /// Similarity threshold applied by callers to the list of matches, in `[0,1]`.
    pub threshold: f64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            ngram_size: 3,
            top_k: 5,
            cache_capacity: 1000,
            max_depth: 5,
            min_length: 10,
            max_length: 100_000,
            threshold: 0.,
        }
    }
}

impl CheckConfig {
    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SimcheckError::config(format!("invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that all parameters are consistent.
    pub fn validate(&self) -> Result<()> {
        validate_ngram_size(self.ngram_size)?;
        if self.top_k == 0 {
            return Err(SimcheckError::config("top_k must not be 0"));
        }
        if self.cache_capacity == 0 {
            return Err(SimcheckError::config("cache_capacity must not be 0"));
        }
        if self.max_length == 0 || self.min_length > self.max_length {
            return Err(SimcheckError::config(format!(
                "length bounds are inconsistent: min_length={}, max_length={}",
                self.min_length, self.max_length
            )));
        }
        if !(0. ..=1.).contains(&self.threshold) {
            return Err(SimcheckError::config(format!(
                "threshold must be in [0,1], got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Checks an input text against the length policy.
    pub fn validate_text(&self, text: &str) -> Result<(), ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::Empty);
        }
        let len = text.chars().count();
        if len < self.min_length {
            return Err(ValidationError::TooShort {
                len,
                min: self.min_length,
            });
        }
        if len > self.max_length {
            return Err(ValidationError::TooLong {
                len,
                max: self.max_length,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ngram_size_bounds() {
        assert!(validate_ngram_size(0).is_err());
        assert!(validate_ngram_size(1).is_ok());
        assert!(validate_ngram_size(10).is_ok());
        assert!(validate_ngram_size(11).is_err());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(CheckConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config = CheckConfig::from_json(r#"{"ngram_size": 4, "threshold": 0.25}"#).unwrap();
        assert_eq!(config.ngram_size, 4);
        assert_eq!(config.threshold, 0.25);
        assert_eq!(config.top_k, 5);

        assert!(matches!(
            CheckConfig::from_json(r#"{"ngram_size": 12}"#),
            Err(SimcheckError::Config(_))
        ));
        assert!(matches!(
            CheckConfig::from_json("{"),
            Err(SimcheckError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_fields() {
        let config = CheckConfig {
            min_length: 20,
            max_length: 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = CheckConfig {
            top_k: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = CheckConfig {
            threshold: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_text() {
        let config = CheckConfig {
            min_length: 5,
            max_length: 8,
            ..Default::default()
        };
        assert_eq!(config.validate_text("  \n "), Err(ValidationError::Empty));
        assert_eq!(
            config.validate_text("abc"),
            Err(ValidationError::TooShort { len: 3, min: 5 })
        );
        assert_eq!(
            config.validate_text("abcdefghi"),
            Err(ValidationError::TooLong { len: 9, max: 8 })
        );
        assert_eq!(config.validate_text("абвгд"), Ok(()));
    }
}

//! Error types raised by the scoring core.

use thiserror::Error;

/// Errors surfaced while correcting or scoring a result.
///
/// Unrecognized penalty codes are not errors; they score as no penalty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// A field the requested formula needs is absent on the result.
    #[error("result for boat '{entry}' is missing required attribute '{attribute}'")]
    MissingAttribute {
        entry: String,
        attribute: &'static str,
    },

    /// A time field could not be read as a time of day or an `HH:MM:SS` duration.
    #[error("invalid time '{value}'")]
    InvalidTime { value: String },
}

impl ScoringError {
    pub(crate) fn missing(entry: &str, attribute: &'static str) -> Self {
        ScoringError::MissingAttribute {
            entry: entry.to_string(),
            attribute,
        }
    }

    pub(crate) fn invalid_time(value: &str) -> Self {
        ScoringError::InvalidTime {
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attribute_names_the_result() {
        let err = ScoringError::missing("USA 1234", "rating");
        assert_eq!(
            err.to_string(),
            "result for boat 'USA 1234' is missing required attribute 'rating'"
        );
    }

    #[test]
    fn test_invalid_time_names_the_value() {
        let err = ScoringError::invalid_time("25:99");
        assert_eq!(err.to_string(), "invalid time '25:99'");
    }
}

//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Text exceeds the permitted length for synthesis
    #[error("Text too long: {len} characters exceeds maximum of {max}")]
    TextTooLong {
        /// Length of the provided text
        len: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Empty input where content is required
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Unknown or unsupported timezone identifier
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_too_long_error_message() {
        let err = DomainError::TextTooLong { len: 1200, max: 1000 };
        assert_eq!(
            err.to_string(),
            "Text too long: 1200 characters exceeds maximum of 1000"
        );
    }

    #[test]
    fn empty_input_error_message() {
        let err = DomainError::EmptyInput("text".to_string());
        assert_eq!(err.to_string(), "Empty input: text");
    }

    #[test]
    fn invalid_timezone_error_message() {
        let err = DomainError::InvalidTimezone("Mars/Olympus".to_string());
        assert_eq!(err.to_string(), "Invalid timezone: Mars/Olympus");
    }
}

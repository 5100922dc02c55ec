//! Transformation error types.
//!
//! Every tool catches its own failures and returns a `TransformError`;
//! nothing escapes a transformation as a panic. The enum mirrors the four
//! failure kinds the tools distinguish, and `Display` is the exact text
//! shown to the caller.

use thiserror::Error;

/// A specialized Result type for transformations.
pub type TransformResult<T> = std::result::Result<T, TransformError>;

/// Errors a transformation can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The input does not parse under the tool's grammar (malformed JSON,
    /// XML, CSV, Morse, Base64, percent escapes, ...).
    #[error("{message}")]
    InvalidSyntax {
        message: String,
        /// Byte offset of the first failure, when the parser knows it.
        position: Option<usize>,
    },

    /// The input parses but a value is outside the accepted range
    /// (ASCII code above 127, card number outside 13-19 digits, ...).
    #[error("{0}")]
    OutOfRange(String),

    /// The input is well-formed but has a shape the tool does not handle
    /// (non-array top-level JSON for JSON to CSV, ...).
    #[error("{0}")]
    UnsupportedInput(String),

    /// An underlying library failed unexpectedly.
    #[error("Internal failure: {0}")]
    InternalFailure(String),
}

impl TransformError {
    /// Create an invalid-syntax error without position information.
    pub fn invalid_syntax(message: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            message: message.into(),
            position: None,
        }
    }

    /// Create an invalid-syntax error anchored at a byte offset.
    pub fn invalid_syntax_at(message: impl Into<String>, position: usize) -> Self {
        Self::InvalidSyntax {
            message: message.into(),
            position: Some(position),
        }
    }

    /// Create an out-of-range error.
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange(message.into())
    }

    /// Create an unsupported-input error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedInput(message.into())
    }

    /// Create an internal-failure error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalFailure(message.into())
    }

    /// Stable tag for structured output and telemetry.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSyntax { .. } => "invalid_syntax",
            Self::OutOfRange(_) => "out_of_range",
            Self::UnsupportedInput(_) => "unsupported_input",
            Self::InternalFailure(_) => "internal_failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_verbatim_message() {
        let err = TransformError::invalid_syntax("Unexpected '<' at start of value");
        assert_eq!(err.to_string(), "Unexpected '<' at start of value");

        let err = TransformError::out_of_range("Code 300 is outside 0-127");
        assert_eq!(err.to_string(), "Code 300 is outside 0-127");
    }

    #[test]
    fn test_position_is_carried() {
        let err = TransformError::invalid_syntax_at("Unclosed tag", 42);
        match err {
            TransformError::InvalidSyntax { position, .. } => {
                assert_eq!(position, Some(42));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(TransformError::invalid_syntax("x").kind(), "invalid_syntax");
        assert_eq!(TransformError::out_of_range("x").kind(), "out_of_range");
        assert_eq!(TransformError::unsupported("x").kind(), "unsupported_input");
        assert_eq!(TransformError::internal("x").kind(), "internal_failure");
    }
}

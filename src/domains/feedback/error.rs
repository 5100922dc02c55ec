//! Feedback-specific error types.

use thiserror::Error;

/// Errors that can occur while validating or relaying feedback.
///
/// Delivery errors never reach the caller: `FeedbackService::submit`
/// catches them and falls back to local logging. Validation errors do.
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// A required field is empty.
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// The email address does not match the basic shape local@domain.tld.
    #[error("Email address is not valid")]
    InvalidEmail,

    /// The relay endpoint could not be reached or rejected the message.
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

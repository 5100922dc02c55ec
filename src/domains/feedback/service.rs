//! Feedback relay service.
//!
//! Validates `{name, email, message}` and forwards it to the configured
//! mail-relay endpoint over HTTP. Delivery failure falls back to local
//! logging - no retry, no queueing. The HTTP call is blocking and must run
//! on its own OS thread when invoked from async context.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::FeedbackError;
use crate::core::config::FeedbackConfig;
use crate::domains::telemetry;
use crate::domains::tools::definitions::validate::structural::is_email_shaped;

/// Timeout for a single relay attempt.
const RELAY_TIMEOUT: Duration = Duration::from_secs(10);

/// A feedback message from a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What happened to a submitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The relay endpoint accepted the message.
    Delivered,
    /// Delivery failed; the message was written to the local log instead.
    LoggedLocally,
}

/// Service forwarding feedback to an external mail relay.
pub struct FeedbackService {
    config: FeedbackConfig,
}

impl FeedbackService {
    /// Create a new feedback service.
    pub fn new(config: FeedbackConfig) -> Self {
        Self { config }
    }

    /// Check the message shape: non-empty fields, email-shaped address.
    pub fn validate(message: &FeedbackMessage) -> Result<(), FeedbackError> {
        if message.name.trim().is_empty() {
            return Err(FeedbackError::EmptyField("name"));
        }
        if message.email.trim().is_empty() {
            return Err(FeedbackError::EmptyField("email"));
        }
        if message.message.trim().is_empty() {
            return Err(FeedbackError::EmptyField("message"));
        }
        if !is_email_shaped(message.email.trim()) {
            return Err(FeedbackError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and submit a message. Validation failures are returned;
    /// delivery failures are logged and reported as `LoggedLocally`.
    pub fn submit(&self, message: &FeedbackMessage) -> Result<DeliveryOutcome, FeedbackError> {
        Self::validate(message)?;

        match self.deliver(message) {
            Ok(()) => {
                info!("Feedback relayed for '{}'", message.name);
                telemetry::feedback_submitted(true);
                Ok(DeliveryOutcome::Delivered)
            }
            Err(e) => {
                warn!("Feedback delivery failed, keeping a local copy: {}", e);
                info!(
                    name = %message.name,
                    email = %message.email,
                    message = %message.message,
                    "Feedback (local fallback)"
                );
                telemetry::feedback_submitted(false);
                Ok(DeliveryOutcome::LoggedLocally)
            }
        }
    }

    fn deliver(&self, message: &FeedbackMessage) -> Result<(), FeedbackError> {
        let Some(endpoint) = self.config.endpoint.as_deref() else {
            return Err(FeedbackError::Delivery(
                "no relay endpoint configured".to_string(),
            ));
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(RELAY_TIMEOUT)
            .build()
            .map_err(|e| FeedbackError::Delivery(e.to_string()))?;

        let mut request = client.post(endpoint).json(message);
        if let Some(api_key) = self.config.api_key.as_deref() {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .map_err(|e| FeedbackError::Delivery(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(FeedbackError::Delivery(format!(
                "relay returned HTTP {}",
                response.status()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, body: &str) -> FeedbackMessage {
        FeedbackMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let msg = message("Ada", "ada@example.com", "Great tools!");
        assert!(FeedbackService::validate(&msg).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let result = FeedbackService::validate(&message("", "a@b.co", "hi"));
        assert!(matches!(result, Err(FeedbackError::EmptyField("name"))));

        let result = FeedbackService::validate(&message("Ada", "a@b.co", "   "));
        assert!(matches!(result, Err(FeedbackError::EmptyField("message"))));
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let result = FeedbackService::validate(&message("Ada", "not-an-email", "hi"));
        assert!(matches!(result, Err(FeedbackError::InvalidEmail)));
    }

    #[test]
    fn test_submit_without_endpoint_falls_back_to_logging() {
        let service = FeedbackService::new(FeedbackConfig::default());
        let outcome = service
            .submit(&message("Ada", "ada@example.com", "hello"))
            .unwrap();
        assert_eq!(outcome, DeliveryOutcome::LoggedLocally);
    }

    #[test]
    fn test_submit_still_validates_first() {
        let service = FeedbackService::new(FeedbackConfig::default());
        let result = service.submit(&message("Ada", "bad-email", "hello"));
        assert!(matches!(result, Err(FeedbackError::InvalidEmail)));
    }
}

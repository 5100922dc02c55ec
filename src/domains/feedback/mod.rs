//! Feedback domain module.
//!
//! The relay boundary: validate a `{name, email, message}` payload and
//! forward it to an external mail endpoint, logging locally when delivery
//! fails.

mod error;
mod service;

pub use error::FeedbackError;
pub use service::{DeliveryOutcome, FeedbackMessage, FeedbackService};

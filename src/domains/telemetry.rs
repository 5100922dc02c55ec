//! Telemetry - fire-and-forget usage events.
//!
//! Events are emitted as `tracing` records under the `telemetry` target so
//! operators can route them with an env-filter directive (for example
//! `telemetry=info`). Nothing in the server observes or awaits them, and a
//! dropped subscriber loses them silently - that is the contract.

use tracing::info;

/// Target all telemetry events are emitted under.
pub const TARGET: &str = "telemetry";

/// A tool was invoked.
pub fn tool_invoked(slug: &str) {
    info!(target: TARGET, tool = slug, event = "tool_invoked");
}

/// A catalog search ran.
pub fn search_performed(query: &str, hits: usize) {
    info!(target: TARGET, query, hits, event = "search_performed");
}

/// A category listing was read.
pub fn category_viewed(slug: &str) {
    info!(target: TARGET, category = slug, event = "category_viewed");
}

/// A feedback message was relayed (or fell back to local logging).
pub fn feedback_submitted(delivered: bool) {
    info!(target: TARGET, delivered, event = "feedback_submitted");
}

#[cfg(test)]
mod tests {
    use super::*;

    // The emitters must never panic regardless of subscriber state.
    #[test]
    fn test_emitters_are_infallible() {
        tool_invoked("json_formatter");
        search_performed("json", 2);
        category_viewed("converters");
        feedback_submitted(false);
    }
}

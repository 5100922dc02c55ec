//! Send feedback tool definition.
//!
//! Service endpoint over the feedback relay. The relay uses a blocking
//! HTTP client, so the call runs on a dedicated OS thread to keep it off
//! the async runtime.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::config::Config;
use crate::domains::feedback::{DeliveryOutcome, FeedbackMessage, FeedbackService};
use crate::domains::tools::definitions::common::{error_result, success_result};

/// Parameters for the send feedback tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SendFeedbackParams {
    /// Sender name.
    #[schemars(description = "Your name")]
    pub name: String,

    /// Sender email address.
    #[schemars(description = "Your email address")]
    pub email: String,

    /// The feedback text.
    #[schemars(description = "Feedback message")]
    pub message: String,
}

impl From<&SendFeedbackParams> for FeedbackMessage {
    fn from(params: &SendFeedbackParams) -> Self {
        Self {
            name: params.name.clone(),
            email: params.email.clone(),
            message: params.message.clone(),
        }
    }
}

/// Send feedback tool.
pub struct SendFeedbackTool;

impl SendFeedbackTool {
    pub const NAME: &'static str = "send_feedback";

    pub const DESCRIPTION: &'static str = "Send feedback to the maintainers. Requires name, email, and a message; falls back to server-side logging when the relay is unreachable.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &SendFeedbackParams, config: &Config) -> CallToolResult {
        let service = FeedbackService::new(config.feedback.clone());
        match service.submit(&FeedbackMessage::from(params)) {
            Ok(DeliveryOutcome::Delivered) => {
                success_result("Thanks! Your feedback was sent.".to_string())
            }
            Ok(DeliveryOutcome::LoggedLocally) => success_result(
                "Thanks! The relay was unreachable, so your feedback was recorded locally."
                    .to_string(),
            ),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: SendFeedbackParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;

        // The relay client is blocking; give it its own thread so it cannot
        // stall the async runtime.
        let handle = std::thread::spawn(move || Self::execute(&params, &config));
        let result = handle
            .join()
            .map_err(|_| "Thread panicked while sending feedback".to_string())?;

        Ok(super::common::http_response(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SendFeedbackParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: SendFeedbackParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // Blocking HTTP client; run on a separate OS thread.
                let handle = std::thread::spawn(move || Self::execute(&params, &config));
                let result = handle.join().map_err(|_| {
                    McpError::internal_error("Thread panicked".to_string(), None)
                })?;

                Ok(result)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_is_an_error_result() {
        let params = SendFeedbackParams {
            name: "Ada".to_string(),
            email: "nope".to_string(),
            message: "hi".to_string(),
        };
        let result = SendFeedbackTool::execute(&params, &Config::default());
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_no_endpoint_falls_back_without_error() {
        let params = SendFeedbackParams {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "love the tools".to_string(),
        };
        // Default config has no relay endpoint; the tool should still
        // succeed via the local-logging fallback.
        let result = SendFeedbackTool::execute(&params, &Config::default());
        assert!(!result.is_error.unwrap_or(true));
    }
}

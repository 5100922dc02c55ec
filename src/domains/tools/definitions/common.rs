//! Common utilities shared across tool definitions.
//!
//! Every tool funnels its pure `transform` result through these helpers so
//! the MCP layer renders success output and error messages the same way
//! everywhere: the message text is carried verbatim, and `is_error` marks
//! failures.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use crate::domains::tools::TransformError;

/// Create an error result carrying the message verbatim.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a success result with a text summary plus structured content.
pub fn structured_result<T: Serialize>(summary: String, data: &T) -> CallToolResult {
    match serde_json::to_value(data) {
        Ok(structured) => CallToolResult {
            content: vec![Content::text(summary)],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => {
            warn!("Failed to serialize structured content: {}", e);
            CallToolResult::success(vec![Content::text(summary)])
        }
    }
}

/// Render a transformation outcome: `Ok` becomes the output text, `Err`
/// becomes an error result with the diagnostic carried verbatim.
pub fn transform_result(outcome: Result<String, TransformError>) -> CallToolResult {
    match outcome {
        Ok(output) => success_result(output),
        Err(e) => {
            warn!(kind = e.kind(), "Transformation failed");
            error_result(&e.to_string())
        }
    }
}

/// Clamp a batch count to the tool's allowed range (1..=max).
pub fn clamp_count(count: usize, max: usize) -> usize {
    count.clamp(1, max)
}

/// Default batch count for generator tools.
pub fn default_count() -> usize {
    1
}

/// Serialize a `CallToolResult` into the JSON shape the HTTP transport
/// returns, including `structuredContent` when present.
#[cfg(feature = "http")]
pub fn http_response(result: CallToolResult) -> serde_json::Value {
    let mut response = serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    });

    if let Some(structured) = result.structured_content {
        if let Some(obj) = response.as_object_mut() {
            obj.insert("structuredContent".to_string(), structured);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_result_is_marked() {
        let result = error_result("bad input");
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_transform_result_ok() {
        let result = transform_result(Ok("output".to_string()));
        assert!(!result.is_error.unwrap_or(true));
    }

    #[test]
    fn test_transform_result_err_carries_message() {
        let result = transform_result(Err(TransformError::invalid_syntax("Broken at line 3")));
        assert!(result.is_error.unwrap_or(false));
        let content = &result.content[0];
        if let rmcp::model::RawContent::Text(text) = &content.raw {
            assert_eq!(text.text, "Broken at line 3");
        } else {
            panic!("expected text content");
        }
    }

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(0, 100), 1);
        assert_eq!(clamp_count(5, 100), 5);
        assert_eq!(clamp_count(500, 100), 100);
    }
}

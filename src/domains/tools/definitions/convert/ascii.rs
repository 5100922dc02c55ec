//! ASCII code tool definition.
//!
//! Text to space-separated decimal codes and back. Decoding is batch-style:
//! bad tokens (non-numeric, or outside 0-127) are collected into an error
//! list while the valid prefix around them still decodes, so the caller
//! gets both the partial text and every diagnostic.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::telemetry;
use crate::domains::tools::definitions::common::{structured_result, transform_result};
use crate::domains::tools::{TransformError, TransformResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AsciiMode {
    #[default]
    TextToCodes,
    CodesToText,
}

/// Parameters for the ASCII tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AsciiParams {
    /// Text to encode, or whitespace-separated decimal codes to decode.
    #[schemars(description = "Input text or decimal codes")]
    pub input: String,

    #[schemars(description = "'text_to_codes' or 'codes_to_text' (default: text_to_codes)")]
    #[serde(default)]
    pub mode: AsciiMode,
}

/// Structured output for a partial decode.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct AsciiDecodeReport {
    /// Text decoded from the valid codes, in order.
    pub text: String,
    /// One diagnostic per rejected token, in input order.
    pub errors: Vec<String>,
}

/// ASCII converter tool.
pub struct AsciiTool;

impl AsciiTool {
    pub const NAME: &'static str = "ascii_codec";

    pub const DESCRIPTION: &'static str = "Convert text to decimal ASCII codes, or decode codes back to text. Decoding reports every invalid code alongside the partially decoded result.";

    /// Encode text as space-separated decimal codes. Any character outside
    /// the ASCII range fails the whole conversion.
    pub fn encode_text(input: &str) -> TransformResult<String> {
        let mut codes = Vec::with_capacity(input.len());
        for c in input.chars() {
            let code = c as u32;
            if code > 127 {
                return Err(TransformError::out_of_range(format!(
                    "Character '{c}' (U+{code:04X}) is outside the ASCII range 0-127"
                )));
            }
            codes.push(code.to_string());
        }
        Ok(codes.join(" "))
    }

    /// Decode whitespace- or comma-separated decimal codes, collecting a
    /// diagnostic for every bad token instead of stopping at the first.
    pub fn decode_codes(input: &str) -> AsciiDecodeReport {
        let mut text = String::new();
        let mut errors = Vec::new();

        for token in input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            match token.parse::<u32>() {
                Ok(code) if code <= 127 => {
                    // Every value in 0-127 is a valid char.
                    if let Some(c) = char::from_u32(code) {
                        text.push(c);
                    }
                }
                Ok(code) => errors.push(format!("Code {code} is outside the ASCII range 0-127")),
                Err(_) => errors.push(format!("'{token}' is not a decimal code")),
            }
        }

        AsciiDecodeReport { text, errors }
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &AsciiParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        match params.mode {
            AsciiMode::TextToCodes => transform_result(Self::encode_text(&params.input)),
            AsciiMode::CodesToText => {
                let report = Self::decode_codes(&params.input);
                let summary = if report.errors.is_empty() {
                    report.text.clone()
                } else {
                    format!(
                        "{} ({} invalid code(s) skipped)",
                        report.text,
                        report.errors.len()
                    )
                };
                structured_result(summary, &report)
            }
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: AsciiParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AsciiParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: AsciiParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_text() {
        assert_eq!(AsciiTool::encode_text("Hi!").unwrap(), "72 105 33");
    }

    #[test]
    fn test_encode_non_ascii_is_out_of_range() {
        let result = AsciiTool::encode_text("café");
        assert!(matches!(result, Err(TransformError::OutOfRange(_))));
    }

    #[test]
    fn test_decode_codes() {
        let report = AsciiTool::decode_codes("72 105 33");
        assert_eq!(report.text, "Hi!");
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_decode_accepts_commas() {
        let report = AsciiTool::decode_codes("72,105, 33");
        assert_eq!(report.text, "Hi!");
    }

    #[test]
    fn test_decode_partial_with_error_list() {
        let report = AsciiTool::decode_codes("72 300 105 x 33");
        assert_eq!(report.text, "Hi!");
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("300"));
        assert!(report.errors[1].contains("'x'"));
    }

    #[test]
    fn test_round_trip() {
        let codes = AsciiTool::encode_text("plain ascii 123").unwrap();
        let report = AsciiTool::decode_codes(&codes);
        assert_eq!(report.text, "plain ascii 123");
    }
}

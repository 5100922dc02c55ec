//! Structural syntax validator tool definition.
//!
//! JSON, URL, and email inputs are checked against their grammars by
//! delegating to the canonical parser for each format - `serde_json`, the
//! `url` crate - and the parser's own diagnostic is surfaced on failure.
//! Email has no canonical parser, so a fixed basic-shape regex stands in.

use std::sync::OnceLock;

use futures::FutureExt;
use regex::Regex;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::telemetry;
use crate::domains::tools::definitions::common::structured_result;

/// Grammars the validator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxFormat {
    Json,
    Url,
    Email,
}

impl SyntaxFormat {
    fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Url => "url",
            Self::Email => "email",
        }
    }
}

/// Parameters for the syntax validator tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SyntaxValidatorParams {
    /// The text to check.
    #[schemars(description = "Input to validate")]
    pub input: String,

    /// Which grammar to check against.
    #[schemars(description = "Format to validate: 'json', 'url', or 'email'")]
    pub format: SyntaxFormat,
}

/// Structured output for a validation.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SyntaxReport {
    pub valid: bool,
    pub format: String,
    /// The native parser diagnostic when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

/// Basic email shape: one '@', non-empty local part, dotted domain.
pub fn is_email_shaped(input: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    re.is_match(input)
}

/// Syntax validator tool.
pub struct SyntaxValidatorTool;

impl SyntaxValidatorTool {
    pub const NAME: &'static str = "syntax_validator";

    pub const DESCRIPTION: &'static str = "Check whether input is well-formed JSON, a valid absolute URL, or an email-shaped address. Invalid inputs come back with the parser's diagnostic.";

    /// Run the check. Invalid input is a *result*, not an error - the tool
    /// always produces a report.
    pub fn check(input: &str, format: SyntaxFormat) -> SyntaxReport {
        let diagnostic = match format {
            SyntaxFormat::Json => serde_json::from_str::<serde_json::Value>(input)
                .err()
                .map(|e| e.to_string()),
            SyntaxFormat::Url => url::Url::parse(input.trim()).err().map(|e| e.to_string()),
            SyntaxFormat::Email => {
                if is_email_shaped(input.trim()) {
                    None
                } else {
                    Some("Input does not match the shape local@domain.tld".to_string())
                }
            }
        };

        SyntaxReport {
            valid: diagnostic.is_none(),
            format: format.as_str().to_string(),
            diagnostic,
        }
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &SyntaxValidatorParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        let report = Self::check(&params.input, params.format);
        let summary = match &report.diagnostic {
            None => format!("Valid {}", report.format),
            Some(diagnostic) => format!("Invalid {}: {}", report.format, diagnostic),
        };
        structured_result(summary, &report)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: SyntaxValidatorParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SyntaxValidatorParams>(),
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
                let params: SyntaxValidatorParams =
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
    fn test_valid_json() {
        let report = SyntaxValidatorTool::check(r#"{"a": [1, 2]}"#, SyntaxFormat::Json);
        assert!(report.valid);
        assert!(report.diagnostic.is_none());
    }

    #[test]
    fn test_invalid_json_carries_native_diagnostic() {
        let report = SyntaxValidatorTool::check("{bad}", SyntaxFormat::Json);
        assert!(!report.valid);
        let diagnostic = report.diagnostic.unwrap();
        assert!(diagnostic.contains("line"), "diagnostic was: {diagnostic}");
    }

    #[test]
    fn test_valid_url() {
        let report =
            SyntaxValidatorTool::check("https://example.com/path?q=1", SyntaxFormat::Url);
        assert!(report.valid);
    }

    #[test]
    fn test_relative_url_is_invalid() {
        let report = SyntaxValidatorTool::check("/just/a/path", SyntaxFormat::Url);
        assert!(!report.valid);
        assert!(report.diagnostic.is_some());
    }

    #[test]
    fn test_email_shapes() {
        assert!(SyntaxValidatorTool::check("ada@example.com", SyntaxFormat::Email).valid);
        assert!(!SyntaxValidatorTool::check("ada@example", SyntaxFormat::Email).valid);
        assert!(!SyntaxValidatorTool::check("not-an-email", SyntaxFormat::Email).valid);
        assert!(!SyntaxValidatorTool::check("a b@example.com", SyntaxFormat::Email).valid);
    }
}

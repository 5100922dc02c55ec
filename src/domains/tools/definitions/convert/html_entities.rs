//! HTML entity tool definition.
//!
//! Thin wrapper over the `html-escape` crate; both directions are total
//! functions (unknown entities are left as written), so this tool never
//! reports a syntax error.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::telemetry;
use crate::domains::tools::definitions::common::success_result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HtmlEntityMode {
    #[default]
    Escape,
    Unescape,
}

/// Parameters for the HTML entity tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HtmlEntityParams {
    /// Text to escape, or markup text to unescape.
    #[schemars(description = "Input text")]
    pub input: String,

    #[schemars(description = "'escape' or 'unescape' (default: escape)")]
    #[serde(default)]
    pub mode: HtmlEntityMode,
}

/// HTML entity escape/unescape tool.
pub struct HtmlEntityTool;

impl HtmlEntityTool {
    pub const NAME: &'static str = "html_entity_codec";

    pub const DESCRIPTION: &'static str =
        "Escape text for safe embedding in HTML, or unescape entity references back to plain text.";

    pub fn transform(input: &str, mode: HtmlEntityMode) -> String {
        match mode {
            HtmlEntityMode::Escape => html_escape::encode_text(input).into_owned(),
            HtmlEntityMode::Unescape => html_escape::decode_html_entities(input).into_owned(),
        }
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &HtmlEntityParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        success_result(Self::transform(&params.input, params.mode))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: HtmlEntityParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<HtmlEntityParams>(),
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
                let params: HtmlEntityParams =
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
    fn test_escape() {
        let output = HtmlEntityTool::transform("<a href=\"x\">5 & 6</a>", HtmlEntityMode::Escape);
        assert_eq!(output, "&lt;a href=\"x\"&gt;5 &amp; 6&lt;/a&gt;");
    }

    #[test]
    fn test_unescape() {
        let output =
            HtmlEntityTool::transform("&lt;b&gt;bold&lt;/b&gt; &amp; more", HtmlEntityMode::Unescape);
        assert_eq!(output, "<b>bold</b> & more");
    }

    #[test]
    fn test_unescape_numeric_references() {
        let output = HtmlEntityTool::transform("caf&#233;", HtmlEntityMode::Unescape);
        assert_eq!(output, "café");
    }

    #[test]
    fn test_round_trip() {
        let original = "if a < b && b > c { \"done\" }";
        let escaped = HtmlEntityTool::transform(original, HtmlEntityMode::Escape);
        let unescaped = HtmlEntityTool::transform(&escaped, HtmlEntityMode::Unescape);
        assert_eq!(unescaped, original);
    }
}

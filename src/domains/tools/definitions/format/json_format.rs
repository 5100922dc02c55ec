//! JSON formatter tool definition.
//!
//! Parsing delegates to `serde_json` for ground truth; the tool only
//! controls layout. Formatting is idempotent, and minify(format(t)) parses
//! back to the same value.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize as _};
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domains::telemetry;
use crate::domains::tools::definitions::common::transform_result;
use crate::domains::tools::{TransformError, TransformResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum JsonLayout {
    #[default]
    Format,
    Minify,
}

/// Indentation width for formatted output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IndentWidth {
    #[default]
    Two,
    Four,
}

impl IndentWidth {
    fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Two => b"  ",
            Self::Four => b"    ",
        }
    }
}

/// Parameters for the JSON formatter tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JsonFormatParams {
    /// The JSON text to reformat.
    #[schemars(description = "JSON text")]
    pub input: String,

    #[schemars(description = "'format' (pretty-print) or 'minify' (default: format)")]
    #[serde(default)]
    pub layout: JsonLayout,

    #[schemars(description = "Indent width for formatting: 'two' or 'four' (default: two)")]
    #[serde(default)]
    pub indent: IndentWidth,
}

/// JSON formatter/minifier tool.
pub struct JsonFormatTool;

impl JsonFormatTool {
    pub const NAME: &'static str = "json_formatter";

    pub const DESCRIPTION: &'static str =
        "Pretty-print JSON with two- or four-space indentation, or minify it to a single line. Malformed input surfaces the parser's own diagnostic.";

    pub fn transform(input: &str, layout: JsonLayout, indent: IndentWidth) -> TransformResult<String> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| TransformError::invalid_syntax(e.to_string()))?;

        match layout {
            JsonLayout::Minify => {
                serde_json::to_string(&value).map_err(|e| TransformError::internal(e.to_string()))
            }
            JsonLayout::Format => {
                let mut out = Vec::new();
                let formatter = PrettyFormatter::with_indent(indent.as_bytes());
                let mut serializer = Serializer::with_formatter(&mut out, formatter);
                value
                    .serialize(&mut serializer)
                    .map_err(|e| TransformError::internal(e.to_string()))?;
                String::from_utf8(out).map_err(|e| TransformError::internal(e.to_string()))
            }
        }
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &JsonFormatParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        transform_result(Self::transform(&params.input, params.layout, params.indent))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: JsonFormatParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<JsonFormatParams>(),
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
                let params: JsonFormatParams =
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

    const SAMPLE: &str = r#"{"b": [1, 2, {"c": null}], "a": "text"}"#;

    #[test]
    fn test_format_is_idempotent() {
        let once =
            JsonFormatTool::transform(SAMPLE, JsonLayout::Format, IndentWidth::Two).unwrap();
        let twice =
            JsonFormatTool::transform(&once, JsonLayout::Format, IndentWidth::Two).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_minify_of_format_preserves_value() {
        let formatted =
            JsonFormatTool::transform(SAMPLE, JsonLayout::Format, IndentWidth::Four).unwrap();
        let minified =
            JsonFormatTool::transform(&formatted, JsonLayout::Minify, IndentWidth::Two).unwrap();

        let original: Value = serde_json::from_str(SAMPLE).unwrap();
        let round_tripped: Value = serde_json::from_str(&minified).unwrap();
        assert_eq!(original, round_tripped);
        assert!(!minified.contains('\n'));
    }

    #[test]
    fn test_indent_width() {
        let two = JsonFormatTool::transform(r#"{"a":1}"#, JsonLayout::Format, IndentWidth::Two)
            .unwrap();
        let four = JsonFormatTool::transform(r#"{"a":1}"#, JsonLayout::Format, IndentWidth::Four)
            .unwrap();
        assert!(two.contains("\n  \"a\""));
        assert!(four.contains("\n    \"a\""));
    }

    #[test]
    fn test_malformed_input_surfaces_parser_diagnostic() {
        let err = JsonFormatTool::transform("{\"a\": }", JsonLayout::Format, IndentWidth::Two)
            .unwrap_err();
        match err {
            TransformError::InvalidSyntax { message, .. } => {
                assert!(message.contains("line"), "diagnostic was: {message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

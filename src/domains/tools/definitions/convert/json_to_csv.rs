//! JSON to CSV tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::delimited::{Delimiter, serialize_delimited};
use crate::domains::telemetry;
use crate::domains::tools::definitions::common::transform_result;
use crate::domains::tools::{TransformError, TransformResult};

/// Parameters for the JSON to CSV tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JsonToCsvParams {
    /// JSON text; the top level must be an array of objects.
    #[schemars(description = "JSON array of objects to serialize")]
    pub input: String,

    /// Field delimiter for the output.
    #[schemars(description = "Field delimiter: 'comma', 'semicolon', 'tab', or 'pipe'")]
    #[serde(default)]
    pub delimiter: Delimiter,
}

/// JSON to CSV tool.
pub struct JsonToCsvTool;

impl JsonToCsvTool {
    pub const NAME: &'static str = "json_to_csv";

    pub const DESCRIPTION: &'static str = "Serialize a JSON array of objects into delimited text. The header row is the union of all record keys in first-seen order; fields containing the delimiter, quotes, or line breaks are quoted.";

    /// Pure transformation: JSON text in, delimited text out.
    ///
    /// The top level must be an array and every element must be an object;
    /// anything else is rejected as unsupported input rather than a syntax
    /// error, since the text itself is valid JSON.
    pub fn transform(input: &str, delimiter: Delimiter) -> TransformResult<String> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| TransformError::invalid_syntax(e.to_string()))?;

        let Value::Array(items) = value else {
            return Err(TransformError::unsupported(
                "Top-level JSON must be an array of objects",
            ));
        };

        let mut records: Vec<Map<String, Value>> = Vec::with_capacity(items.len());
        for (position, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(record) => records.push(record),
                other => {
                    return Err(TransformError::unsupported(format!(
                        "Element {position} is not an object (found {})",
                        value_kind(&other)
                    )));
                }
            }
        }

        Ok(serialize_delimited(&records, delimiter))
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &JsonToCsvParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        transform_result(Self::transform(&params.input, params.delimiter))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: JsonToCsvParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<JsonToCsvParams>(),
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
                let params: JsonToCsvParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_basic() {
        let input = r#"[{"name":"Ada","age":36},{"name":"Grace","age":45}]"#;
        let output = JsonToCsvTool::transform(input, Delimiter::Comma).unwrap();
        assert_eq!(output, "name,age\nAda,36\nGrace,45");
    }

    #[test]
    fn test_non_array_top_level_is_unsupported() {
        let result = JsonToCsvTool::transform(r#"{"name":"Ada"}"#, Delimiter::Comma);
        assert!(matches!(
            result,
            Err(TransformError::UnsupportedInput(_))
        ));
    }

    #[test]
    fn test_non_object_element_is_unsupported() {
        let result = JsonToCsvTool::transform(r#"[{"a":1}, 2]"#, Delimiter::Comma);
        match result {
            Err(TransformError::UnsupportedInput(msg)) => {
                assert!(msg.contains("Element 1"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_surfaces_native_diagnostic() {
        let result = JsonToCsvTool::transform("[{", Delimiter::Comma);
        assert!(matches!(
            result,
            Err(TransformError::InvalidSyntax { .. })
        ));
    }
}

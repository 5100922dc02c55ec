//! CSV to JSON tool definition.
//!
//! Parses delimited text (quote-aware, per the shared scanner) into an
//! array of records and renders it as pretty-printed JSON.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::delimited::{Delimiter, parse_delimited};
use crate::domains::telemetry;
use crate::domains::tools::definitions::common::transform_result;
use crate::domains::tools::{TransformError, TransformResult};

/// Parameters for the CSV to JSON tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CsvToJsonParams {
    /// The delimited text to parse.
    #[schemars(description = "Delimited text to parse")]
    pub input: String,

    /// Field delimiter.
    #[schemars(description = "Field delimiter: 'comma', 'semicolon', 'tab', or 'pipe'")]
    #[serde(default)]
    pub delimiter: Delimiter,

    /// Whether the first row carries column names.
    #[schemars(description = "Treat the first row as headers (default: true)")]
    #[serde(default = "default_has_header")]
    pub has_header: bool,
}

fn default_has_header() -> bool {
    true
}

/// CSV to JSON tool.
pub struct CsvToJsonTool;

impl CsvToJsonTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "csv_to_json";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Parse delimited text (CSV, TSV, semicolon- or pipe-separated) into a JSON array of records. Quoted fields may contain the delimiter, newlines, and doubled quotes. Numeric fields are coerced to numbers.";

    /// Pure transformation: delimited text in, JSON text out.
    pub fn transform(
        input: &str,
        delimiter: Delimiter,
        has_header: bool,
    ) -> TransformResult<String> {
        let records = parse_delimited(input, delimiter, has_header)?;
        serde_json::to_string_pretty(&records).map_err(|e| TransformError::internal(e.to_string()))
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &CsvToJsonParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        transform_result(Self::transform(
            &params.input,
            params.delimiter,
            params.has_header,
        ))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: CsvToJsonParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CsvToJsonParams>(),
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
                let params: CsvToJsonParams =
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
    use serde_json::Value;

    #[test]
    fn test_transform_basic() {
        let output =
            CsvToJsonTool::transform("name,age\nAda,36", Delimiter::Comma, true).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["name"], "Ada");
        assert_eq!(value[0]["age"], 36);
    }

    #[test]
    fn test_params_defaults() {
        let json = r#"{"input": "a,b\n1,2"}"#;
        let params: CsvToJsonParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.delimiter, Delimiter::Comma);
        assert!(params.has_header);
    }

    #[test]
    fn test_execute_reports_scan_errors() {
        let params = CsvToJsonParams {
            input: "a\n\"open".to_string(),
            delimiter: Delimiter::Comma,
            has_header: true,
        };
        let result = CsvToJsonTool::execute(&params);
        assert!(result.is_error.unwrap_or(false));
    }
}

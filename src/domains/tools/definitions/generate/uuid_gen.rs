//! UUID generator tool definition.
//!
//! Randomized tool: output is v4 (fully random) UUIDs, one per line.
//! Determinism is neither guaranteed nor required.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use uuid::Uuid;

use crate::domains::telemetry;
use crate::domains::tools::definitions::common::{clamp_count, default_count, success_result};

/// Most UUIDs returned per call.
const MAX_COUNT: usize = 100;

/// Parameters for the UUID generator tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UuidGeneratorParams {
    /// How many UUIDs to generate (1-100).
    #[schemars(description = "Number of UUIDs to generate (default: 1, max: 100)")]
    #[serde(default = "default_count")]
    pub count: usize,

    /// Render without hyphens.
    #[schemars(description = "Omit hyphens from the output (default: false)")]
    #[serde(default)]
    pub compact: bool,
}

/// UUID generator tool.
pub struct UuidGeneratorTool;

impl UuidGeneratorTool {
    pub const NAME: &'static str = "uuid_generator";

    pub const DESCRIPTION: &'static str =
        "Generate one or more random version 4 UUIDs, optionally without hyphens.";

    pub fn generate(count: usize, compact: bool) -> String {
        let count = clamp_count(count, MAX_COUNT);
        (0..count)
            .map(|_| {
                let id = Uuid::new_v4();
                if compact {
                    id.simple().to_string()
                } else {
                    id.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &UuidGeneratorParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        success_result(Self::generate(params.count, params.compact))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: UuidGeneratorParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UuidGeneratorParams>(),
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
                let params: UuidGeneratorParams =
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
    fn test_generates_requested_count() {
        let output = UuidGeneratorTool::generate(5, false);
        let ids: Vec<_> = output.lines().collect();
        assert_eq!(ids.len(), 5);
        for id in ids {
            assert!(Uuid::parse_str(id).is_ok());
        }
    }

    #[test]
    fn test_compact_form_has_no_hyphens() {
        let output = UuidGeneratorTool::generate(1, true);
        assert_eq!(output.len(), 32);
        assert!(!output.contains('-'));
    }

    #[test]
    fn test_count_clamped() {
        assert_eq!(UuidGeneratorTool::generate(0, false).lines().count(), 1);
        assert_eq!(
            UuidGeneratorTool::generate(10_000, false).lines().count(),
            MAX_COUNT
        );
    }

    #[test]
    fn test_version_is_v4() {
        let output = UuidGeneratorTool::generate(1, false);
        let id = Uuid::parse_str(&output).unwrap();
        assert_eq!(id.get_version_num(), 4);
    }
}

//! Color generator tool definition.
//!
//! Randomized tool: hex colors or two-stop CSS linear gradients.

use futures::FutureExt;
use rand::Rng;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::telemetry;
use crate::domains::tools::definitions::common::{clamp_count, default_count, success_result};

/// Most colors or gradients returned per call.
const MAX_COUNT: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ColorStyle {
    #[default]
    Hex,
    Gradient,
}

/// Parameters for the color generator tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ColorGeneratorParams {
    /// How many colors or gradients to generate (1-50).
    #[schemars(description = "Number of colors to generate (default: 1, max: 50)")]
    #[serde(default = "default_count")]
    pub count: usize,

    #[schemars(description = "'hex' for plain colors or 'gradient' for CSS gradients (default: hex)")]
    #[serde(default)]
    pub style: ColorStyle,
}

/// Color generator tool.
pub struct ColorGeneratorTool;

impl ColorGeneratorTool {
    pub const NAME: &'static str = "color_generator";

    pub const DESCRIPTION: &'static str =
        "Generate random hex colors, or random two-stop CSS linear gradients.";

    fn random_hex(rng: &mut impl Rng) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            rng.random::<u8>(),
            rng.random::<u8>(),
            rng.random::<u8>()
        )
    }

    pub fn generate(count: usize, style: ColorStyle) -> String {
        let count = clamp_count(count, MAX_COUNT);
        let mut rng = rand::rng();

        (0..count)
            .map(|_| match style {
                ColorStyle::Hex => Self::random_hex(&mut rng),
                ColorStyle::Gradient => {
                    let angle: u16 = rng.random_range(0..360);
                    format!(
                        "linear-gradient({}deg, {}, {})",
                        angle,
                        Self::random_hex(&mut rng),
                        Self::random_hex(&mut rng)
                    )
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &ColorGeneratorParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        success_result(Self::generate(params.count, params.style))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: ColorGeneratorParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ColorGeneratorParams>(),
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
                let params: ColorGeneratorParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

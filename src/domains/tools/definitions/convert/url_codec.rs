//! URL percent-encoding tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::telemetry;
use crate::domains::tools::definitions::common::transform_result;
use crate::domains::tools::{TransformError, TransformResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UrlCodecMode {
    #[default]
    Encode,
    Decode,
}

/// Parameters for the URL codec tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UrlCodecParams {
    /// Text to percent-encode, or an encoded string to decode.
    #[schemars(description = "Input text")]
    pub input: String,

    #[schemars(description = "'encode' or 'decode' (default: encode)")]
    #[serde(default)]
    pub mode: UrlCodecMode,
}

/// URL encoder/decoder tool.
pub struct UrlCodecTool;

impl UrlCodecTool {
    pub const NAME: &'static str = "url_codec";

    pub const DESCRIPTION: &'static str =
        "Percent-encode text for use in URLs, or decode percent-escaped sequences back to text.";

    pub fn transform(input: &str, mode: UrlCodecMode) -> TransformResult<String> {
        match mode {
            UrlCodecMode::Encode => Ok(urlencoding::encode(input).into_owned()),
            UrlCodecMode::Decode => {
                check_escapes(input)?;
                urlencoding::decode(input)
                    .map(|decoded| decoded.into_owned())
                    .map_err(|e| {
                        TransformError::invalid_syntax(format!("Decoded bytes are not text: {e}"))
                    })
            }
        }
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &UrlCodecParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        transform_result(Self::transform(&params.input, params.mode))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: UrlCodecParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UrlCodecParams>(),
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
                let params: UrlCodecParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

/// The decoder passes malformed escapes through untouched, so reject them
/// up front: every '%' must be followed by two hex digits.
fn check_escapes(input: &str) -> TransformResult<()> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(TransformError::invalid_syntax_at(
                    format!("Malformed percent escape at byte {i}"),
                    i,
                ));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        let output =
            UrlCodecTool::transform("hello world & more", UrlCodecMode::Encode).unwrap();
        assert_eq!(output, "hello%20world%20%26%20more");
    }

    #[test]
    fn test_decode() {
        let output =
            UrlCodecTool::transform("hello%20world%20%26%20more", UrlCodecMode::Decode).unwrap();
        assert_eq!(output, "hello world & more");
    }

    #[test]
    fn test_decode_bad_escape_is_syntax_error() {
        let result = UrlCodecTool::transform("%zz", UrlCodecMode::Decode);
        assert!(matches!(
            result,
            Err(TransformError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_round_trip() {
        let original = "a=1&b=two words&c=100%";
        let encoded = UrlCodecTool::transform(original, UrlCodecMode::Encode).unwrap();
        let decoded = UrlCodecTool::transform(&encoded, UrlCodecMode::Decode).unwrap();
        assert_eq!(decoded, original);
    }
}

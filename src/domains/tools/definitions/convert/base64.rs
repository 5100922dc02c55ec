//! Base64 encode/decode tool definition.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
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

/// Direction of the transcoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Base64Mode {
    #[default]
    Encode,
    Decode,
}

/// Parameters for the Base64 tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Base64Params {
    /// Text to encode, or Base64 to decode.
    #[schemars(description = "Input text (plain text for encode, Base64 for decode)")]
    pub input: String,

    /// Direction of the conversion.
    #[schemars(description = "'encode' or 'decode' (default: encode)")]
    #[serde(default)]
    pub mode: Base64Mode,

    /// Use the URL-safe alphabet (`-`/`_` instead of `+`/`/`).
    #[schemars(description = "Use the URL-safe alphabet (default: false)")]
    #[serde(default)]
    pub url_safe: bool,
}

/// Base64 encoder/decoder tool.
pub struct Base64Tool;

impl Base64Tool {
    pub const NAME: &'static str = "base64_codec";

    pub const DESCRIPTION: &'static str = "Encode text to Base64 or decode Base64 back to text, with standard or URL-safe alphabets.";

    /// Pure transformation.
    pub fn transform(input: &str, mode: Base64Mode, url_safe: bool) -> TransformResult<String> {
        match mode {
            Base64Mode::Encode => Ok(if url_safe {
                URL_SAFE.encode(input.as_bytes())
            } else {
                STANDARD.encode(input.as_bytes())
            }),
            Base64Mode::Decode => {
                let trimmed = input.trim();
                let bytes = if url_safe {
                    URL_SAFE.decode(trimmed)
                } else {
                    STANDARD.decode(trimmed)
                }
                .map_err(|e| TransformError::invalid_syntax(format!("Invalid Base64: {e}")))?;

                String::from_utf8(bytes).map_err(|_| {
                    TransformError::unsupported("Decoded bytes are not valid UTF-8 text")
                })
            }
        }
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &Base64Params) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        transform_result(Self::transform(&params.input, params.mode, params.url_safe))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: Base64Params =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Base64Params>(),
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
                let params: Base64Params =
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
    fn test_encode_decode_round_trip() {
        let encoded = Base64Tool::transform("hello world", Base64Mode::Encode, false).unwrap();
        assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
        let decoded = Base64Tool::transform(&encoded, Base64Mode::Decode, false).unwrap();
        assert_eq!(decoded, "hello world");
    }

    #[test]
    fn test_url_safe_alphabet() {
        // 0xfb 0xff encodes to '+/' standard, '-_' url-safe; use text that
        // exercises the differing characters.
        let encoded = Base64Tool::transform("??>", Base64Mode::Encode, true).unwrap();
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn test_decode_invalid_is_syntax_error() {
        let result = Base64Tool::transform("not base64!!!", Base64Mode::Decode, false);
        assert!(matches!(
            result,
            Err(TransformError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_decode_non_utf8_is_unsupported() {
        // 0xff 0xfe is valid Base64 payload but not valid UTF-8.
        let result = Base64Tool::transform("//4=", Base64Mode::Decode, false);
        assert!(matches!(
            result,
            Err(TransformError::UnsupportedInput(_))
        ));
    }

    #[test]
    fn test_params_defaults() {
        let params: Base64Params = serde_json::from_str(r#"{"input": "hi"}"#).unwrap();
        assert_eq!(params.mode, Base64Mode::Encode);
        assert!(!params.url_safe);
    }
}

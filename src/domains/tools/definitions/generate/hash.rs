//! Hash generator tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domains::telemetry;
use crate::domains::tools::definitions::common::structured_result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    #[default]
    Sha256,
}

impl HashAlgorithm {
    fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
        }
    }
}

/// Parameters for the hash generator tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HashGeneratorParams {
    /// Text to digest.
    #[schemars(description = "Text to digest")]
    pub input: String,

    #[schemars(description = "'md5' or 'sha256' (default: sha256)")]
    #[serde(default)]
    pub algorithm: HashAlgorithm,
}

/// Structured output for a digest.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct HashReport {
    pub algorithm: String,
    pub digest: String,
}

/// Hash generator tool.
pub struct HashGeneratorTool;

impl HashGeneratorTool {
    pub const NAME: &'static str = "hash_generator";

    pub const DESCRIPTION: &'static str =
        "Compute the MD5 or SHA-256 hex digest of the input text.";

    pub fn digest(input: &str, algorithm: HashAlgorithm) -> HashReport {
        let digest = match algorithm {
            HashAlgorithm::Md5 => format!("{:x}", md5::compute(input.as_bytes())),
            HashAlgorithm::Sha256 => {
                let hash = Sha256::digest(input.as_bytes());
                hash.iter().fold(String::with_capacity(64), |mut out, b| {
                    use std::fmt::Write as _;
                    let _ = write!(out, "{b:02x}");
                    out
                })
            }
        };

        HashReport {
            algorithm: algorithm.as_str().to_string(),
            digest,
        }
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &HashGeneratorParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        let report = Self::digest(&params.input, params.algorithm);
        structured_result(report.digest.clone(), &report)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: HashGeneratorParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<HashGeneratorParams>(),
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
                let params: HashGeneratorParams =
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
    fn test_md5_known_vector() {
        let report = HashGeneratorTool::digest("hello", HashAlgorithm::Md5);
        assert_eq!(report.digest, "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_sha256_known_vector() {
        let report = HashGeneratorTool::digest("hello", HashAlgorithm::Sha256);
        assert_eq!(
            report.digest,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_empty_input_sha256() {
        let report = HashGeneratorTool::digest("", HashAlgorithm::Sha256);
        assert_eq!(
            report.digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_is_deterministic() {
        let a = HashGeneratorTool::digest("same input", HashAlgorithm::Sha256);
        let b = HashGeneratorTool::digest("same input", HashAlgorithm::Sha256);
        assert_eq!(a.digest, b.digest);
    }
}

//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The list of all routable tool names
//! - HTTP dispatch for tool calls (when the http feature is enabled)
//!
//! Every catalog slug must resolve to a registered tool; the two service
//! endpoints (`catalog_search`, `send_feedback`) are registered here but
//! intentionally absent from the catalog.

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;
use crate::domains::catalog::CatalogIndex;

use super::definitions::{
    AsciiTool, Base64Tool, CardValidatorTool, CaseConverterTool, CatalogSearchTool,
    ColorGeneratorTool, CsvToJsonTool, HashGeneratorTool, HtmlEntityTool, JsonFormatTool,
    JsonToCsvTool, MorseTool, PasswordStrengthTool, SendFeedbackTool, SyntaxValidatorTool,
    TextCounterTool, TextDiffTool, UrlCodecTool, UuidGeneratorTool, XmlToJsonTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    config: Arc<Config>,
    catalog: Arc<CatalogIndex>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>, catalog: Arc<CatalogIndex>) -> Self {
        Self { config, catalog }
    }

    /// Get all routable tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            CatalogSearchTool::NAME,
            CsvToJsonTool::NAME,
            JsonToCsvTool::NAME,
            XmlToJsonTool::NAME,
            Base64Tool::NAME,
            UrlCodecTool::NAME,
            HtmlEntityTool::NAME,
            MorseTool::NAME,
            AsciiTool::NAME,
            JsonFormatTool::NAME,
            CardValidatorTool::NAME,
            SyntaxValidatorTool::NAME,
            PasswordStrengthTool::NAME,
            TextCounterTool::NAME,
            TextDiffTool::NAME,
            CaseConverterTool::NAME,
            UuidGeneratorTool::NAME,
            ColorGeneratorTool::NAME,
            HashGeneratorTool::NAME,
            SendFeedbackTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for tool metadata. Both HTTP and
    /// STDIO/TCP transports publish this list.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            CatalogSearchTool::to_tool(),
            CsvToJsonTool::to_tool(),
            JsonToCsvTool::to_tool(),
            XmlToJsonTool::to_tool(),
            Base64Tool::to_tool(),
            UrlCodecTool::to_tool(),
            HtmlEntityTool::to_tool(),
            MorseTool::to_tool(),
            AsciiTool::to_tool(),
            JsonFormatTool::to_tool(),
            CardValidatorTool::to_tool(),
            SyntaxValidatorTool::to_tool(),
            PasswordStrengthTool::to_tool(),
            TextCounterTool::to_tool(),
            TextDiffTool::to_tool(),
            CaseConverterTool::to_tool(),
            UuidGeneratorTool::to_tool(),
            ColorGeneratorTool::to_tool(),
            HashGeneratorTool::to_tool(),
            SendFeedbackTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            CatalogSearchTool::NAME => CatalogSearchTool::http_handler(
                arguments,
                self.catalog.clone(),
                self.config.catalog.search_limit,
            ),
            CsvToJsonTool::NAME => CsvToJsonTool::http_handler(arguments),
            JsonToCsvTool::NAME => JsonToCsvTool::http_handler(arguments),
            XmlToJsonTool::NAME => XmlToJsonTool::http_handler(arguments),
            Base64Tool::NAME => Base64Tool::http_handler(arguments),
            UrlCodecTool::NAME => UrlCodecTool::http_handler(arguments),
            HtmlEntityTool::NAME => HtmlEntityTool::http_handler(arguments),
            MorseTool::NAME => MorseTool::http_handler(arguments),
            AsciiTool::NAME => AsciiTool::http_handler(arguments),
            JsonFormatTool::NAME => JsonFormatTool::http_handler(arguments),
            CardValidatorTool::NAME => CardValidatorTool::http_handler(arguments),
            SyntaxValidatorTool::NAME => SyntaxValidatorTool::http_handler(arguments),
            PasswordStrengthTool::NAME => PasswordStrengthTool::http_handler(arguments),
            TextCounterTool::NAME => TextCounterTool::http_handler(arguments),
            TextDiffTool::NAME => TextDiffTool::http_handler(arguments),
            CaseConverterTool::NAME => CaseConverterTool::http_handler(arguments),
            UuidGeneratorTool::NAME => UuidGeneratorTool::http_handler(arguments),
            ColorGeneratorTool::NAME => ColorGeneratorTool::http_handler(arguments),
            HashGeneratorTool::NAME => HashGeneratorTool::http_handler(arguments),
            SendFeedbackTool::NAME => {
                SendFeedbackTool::http_handler(arguments, self.config.clone())
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}

//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! Each tool knows how to create its own route; this module only strings
//! them together for the STDIO/TCP transports.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;
use crate::domains::catalog::CatalogIndex;

use super::definitions::{
    AsciiTool, Base64Tool, CardValidatorTool, CaseConverterTool, CatalogSearchTool,
    ColorGeneratorTool, CsvToJsonTool, HashGeneratorTool, HtmlEntityTool, JsonFormatTool,
    JsonToCsvTool, MorseTool, PasswordStrengthTool, SendFeedbackTool, SyntaxValidatorTool,
    TextCounterTool, TextDiffTool, UrlCodecTool, UuidGeneratorTool, XmlToJsonTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>, catalog: Arc<CatalogIndex>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let search_limit = config.catalog.search_limit;

    ToolRouter::new()
        .with_route(CatalogSearchTool::create_route(catalog, search_limit))
        .with_route(CsvToJsonTool::create_route())
        .with_route(JsonToCsvTool::create_route())
        .with_route(XmlToJsonTool::create_route())
        .with_route(Base64Tool::create_route())
        .with_route(UrlCodecTool::create_route())
        .with_route(HtmlEntityTool::create_route())
        .with_route(MorseTool::create_route())
        .with_route(AsciiTool::create_route())
        .with_route(JsonFormatTool::create_route())
        .with_route(CardValidatorTool::create_route())
        .with_route(SyntaxValidatorTool::create_route())
        .with_route(PasswordStrengthTool::create_route())
        .with_route(TextCounterTool::create_route())
        .with_route(TextDiffTool::create_route())
        .with_route(CaseConverterTool::create_route())
        .with_route(UuidGeneratorTool::create_route())
        .with_route(ColorGeneratorTool::create_route())
        .with_route(HashGeneratorTool::create_route())
        .with_route(SendFeedbackTool::create_route(config))
}

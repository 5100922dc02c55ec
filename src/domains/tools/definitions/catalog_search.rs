//! Catalog search tool definition.
//!
//! Exposes the catalog's substring search to clients. This is a service
//! endpoint of the shell rather than a transformation tool, so it is
//! routed but does not appear in the catalog itself.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::catalog::{CatalogIndex, SearchEngine};
use crate::domains::telemetry;
use crate::domains::tools::definitions::common::structured_result;

/// Parameters for the catalog search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CatalogSearchParams {
    /// Free-text query matched against tool names and descriptions.
    #[schemars(description = "Search query")]
    pub query: String,
}

/// One search hit.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CatalogSearchHit {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub popular: bool,
}

/// Structured output for a search.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CatalogSearchResult {
    pub query: String,
    pub hits: Vec<CatalogSearchHit>,
    pub total: usize,
}

/// Catalog search tool.
pub struct CatalogSearchTool;

impl CatalogSearchTool {
    pub const NAME: &'static str = "catalog_search";

    pub const DESCRIPTION: &'static str = "Search the tool catalog by name or description. Case-insensitive substring match; results keep catalog order and are capped.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(
        params: &CatalogSearchParams,
        catalog: Arc<CatalogIndex>,
        limit: usize,
    ) -> CallToolResult {
        let engine = SearchEngine::new(catalog, limit);
        let hits: Vec<CatalogSearchHit> = engine
            .search(&params.query)
            .into_iter()
            .map(|tool| CatalogSearchHit {
                slug: tool.slug.to_string(),
                name: tool.name.to_string(),
                category: tool.category.to_string(),
                popular: tool.popular,
            })
            .collect();

        telemetry::search_performed(&params.query, hits.len());

        let summary = match hits.len() {
            0 => format!("No tools match '{}'", params.query.trim()),
            n => format!("{n} tool(s) match '{}'", params.query.trim()),
        };
        let total = hits.len();
        structured_result(
            summary,
            &CatalogSearchResult {
                query: params.query.clone(),
                hits,
                total,
            },
        )
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<CatalogIndex>,
        limit: usize,
    ) -> Result<serde_json::Value, String> {
        let params: CatalogSearchParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::common::http_response(Self::execute(
            &params, catalog, limit,
        )))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CatalogSearchParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(catalog: Arc<CatalogIndex>, limit: usize) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let catalog = catalog.clone();
            async move {
                let params: CatalogSearchParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, catalog, limit))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn catalog() -> Arc<CatalogIndex> {
        Arc::new(CatalogIndex::builtin().unwrap())
    }

    #[test]
    fn test_search_returns_hits() {
        let params = CatalogSearchParams {
            query: "json".to_string(),
        };
        let result = CatalogSearchTool::execute(&params, catalog(), 8);
        assert!(!result.is_error.unwrap_or(true));

        let structured = result.structured_content.unwrap();
        let hits = structured["hits"].as_array().unwrap();
        assert!(!hits.is_empty());
        assert!(hits.iter().any(|h| h["slug"] == "json_formatter"));
    }

    #[test]
    fn test_empty_query_yields_no_hits() {
        let params = CatalogSearchParams {
            query: "   ".to_string(),
        };
        let result = CatalogSearchTool::execute(&params, catalog(), 8);
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["total"], 0);
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.starts_with("No tools match"));
        }
    }

    #[test]
    fn test_limit_caps_hits() {
        let params = CatalogSearchParams {
            query: "text".to_string(),
        };
        let result = CatalogSearchTool::execute(&params, catalog(), 2);
        let structured = result.structured_content.unwrap();
        assert!(structured["hits"].as_array().unwrap().len() <= 2);
    }
}

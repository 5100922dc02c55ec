//! Resource service implementation.
//!
//! Read-only views over the shared `CatalogIndex`: the full tool and
//! category listings, plus per-slug lookups through URI templates. Unknown
//! slugs surface as `NotFound`, mirroring the index's `None`/empty
//! contract.

use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use serde::Serialize;
use tracing::info;

use super::error::ResourceError;
use super::registry::{
    CATEGORIES_URI, CATEGORY_PREFIX, TOOL_PREFIX, TOOLS_URI, get_all_resource_templates,
    get_all_resources,
};
use crate::domains::catalog::CatalogIndex;
use crate::domains::telemetry;

/// Service answering resource listings and reads from the catalog.
pub struct ResourceService {
    catalog: Arc<CatalogIndex>,
    resources: Vec<Resource>,
    templates: Vec<ResourceTemplate>,
}

impl ResourceService {
    /// Create a new ResourceService over the shared catalog.
    pub fn new(catalog: Arc<CatalogIndex>) -> Self {
        info!("Initializing ResourceService");
        Self {
            catalog,
            resources: get_all_resources(),
            templates: get_all_resource_templates(),
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources.clone()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if uri == TOOLS_URI {
            return json_result(uri, &self.catalog.all_tools());
        }
        if uri == CATEGORIES_URI {
            return json_result(uri, &self.catalog.all_categories());
        }
        if let Some(slug) = uri.strip_prefix(TOOL_PREFIX) {
            let tool = self
                .catalog
                .by_slug(slug)
                .ok_or_else(|| ResourceError::not_found(uri))?;
            return json_result(uri, tool);
        }
        if let Some(slug) = uri.strip_prefix(CATEGORY_PREFIX) {
            // An existing category with no tools is still a hit; only a
            // slug absent from the category table is NotFound.
            if !self
                .catalog
                .all_categories()
                .iter()
                .any(|category| category.slug == slug)
            {
                return Err(ResourceError::not_found(uri));
            }
            telemetry::category_viewed(slug);
            return json_result(uri, &self.catalog.by_category(slug));
        }

        Err(ResourceError::not_found(uri))
    }
}

fn json_result<T: Serialize>(uri: &str, data: &T) -> Result<ReadResourceResult, ResourceError> {
    let text = serde_json::to_string_pretty(data)
        .map_err(|e| ResourceError::internal(e.to_string()))?;
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(text, uri)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ResourceService {
        ResourceService::new(Arc::new(CatalogIndex::builtin().unwrap()))
    }

    #[tokio::test]
    async fn test_listings_are_published() {
        let service = service();
        assert_eq!(service.list_resources().await.len(), 2);
        assert_eq!(service.list_resource_templates().await.len(), 2);
    }

    #[tokio::test]
    async fn test_read_full_tool_listing() {
        let service = service();
        let result = service.read_resource(TOOLS_URI).await.unwrap();
        let ResourceContents::TextResourceContents { text, .. } = &result.contents[0] else {
            panic!("expected text contents");
        };
        let value: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 18);
    }

    #[tokio::test]
    async fn test_read_tool_by_slug() {
        let service = service();
        let result = service
            .read_resource("catalog://tool/json_formatter")
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_read_category_listing() {
        let service = service();
        let result = service.read_resource("catalog://category/text").await.unwrap();
        let ResourceContents::TextResourceContents { text, .. } = &result.contents[0] else {
            panic!("expected text contents");
        };
        let value: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_uris_are_not_found() {
        let service = service();
        assert!(service.read_resource("catalog://tool/nope").await.is_err());
        assert!(
            service
                .read_resource("catalog://category/nope")
                .await
                .is_err()
        );
        assert!(service.read_resource("file:///etc/passwd").await.is_err());
    }
}

//! Resource Registry - the catalog views exposed as MCP resources.
//!
//! Static URIs cover the whole catalog; URI templates cover per-slug
//! lookups. The service resolves both against the shared `CatalogIndex`.

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, Resource, ResourceTemplate};

/// URI listing every tool descriptor.
pub const TOOLS_URI: &str = "catalog://tools";

/// URI listing every category descriptor.
pub const CATEGORIES_URI: &str = "catalog://categories";

/// URI prefix for a single tool by slug.
pub const TOOL_PREFIX: &str = "catalog://tool/";

/// URI prefix for a category's tools by category slug.
pub const CATEGORY_PREFIX: &str = "catalog://category/";

fn resource(uri: &str, name: &str, description: &str) -> Resource {
    let mut raw = RawResource::new(uri, name);
    raw.description = Some(description.to_string());
    raw.mime_type = Some("application/json".to_string());
    raw.no_annotation()
}

/// Get all statically listed resources.
pub fn get_all_resources() -> Vec<Resource> {
    vec![
        resource(
            TOOLS_URI,
            "Tool Catalog",
            "Every tool descriptor: slug, name, description, category, icon tag, popularity",
        ),
        resource(
            CATEGORIES_URI,
            "Tool Categories",
            "Every category descriptor: slug, name, description, icon and theme tags",
        ),
    ]
}

/// Get all registered resource templates.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: "catalog://tool/{slug}".to_string(),
            name: "Tool Descriptor".to_string(),
            title: Some("Look up a tool by slug".to_string()),
            description: Some("A single tool descriptor addressed by its slug".to_string()),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation(),
        RawResourceTemplate {
            uri_template: "catalog://category/{slug}".to_string(),
            name: "Category Listing".to_string(),
            title: Some("List a category's tools".to_string()),
            description: Some(
                "The tools belonging to a category, in catalog order".to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 2);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.raw.uri.as_str())
            .collect();
        assert!(uris.contains(&TOOLS_URI));
        assert!(uris.contains(&CATEGORIES_URI));
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 2);

        let uri_templates: Vec<_> = templates
            .iter()
            .map(|t| t.raw.uri_template.as_str())
            .collect();
        assert!(uri_templates.contains(&"catalog://tool/{slug}"));
        assert!(uri_templates.contains(&"catalog://category/{slug}"));
    }
}

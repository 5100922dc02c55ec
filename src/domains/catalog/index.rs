//! Catalog Index - lookup structures built once over the descriptor table.
//!
//! The index validates the catalog invariants at construction (every tool's
//! category back-reference resolves, slugs are unique) and is read-only for
//! the rest of the process lifetime. Slug lookup is O(1); category grouping
//! is computed eagerly and cached in catalog order.

use std::collections::HashMap;

use tracing::info;

use super::descriptor::{Catalog, CategoryDescriptor, ToolDescriptor};
use super::error::CatalogError;

/// Read-only lookup structures over the catalog table.
pub struct CatalogIndex {
    catalog: Catalog,
    by_slug: HashMap<&'static str, usize>,
    by_category: HashMap<&'static str, Vec<usize>>,
}

impl CatalogIndex {
    /// Build the index over a catalog table.
    ///
    /// Fails if a tool references a category that does not exist or if any
    /// slug is duplicated.
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        let mut category_slugs: HashMap<&'static str, ()> = HashMap::new();
        for category in &catalog.categories {
            if category_slugs.insert(category.slug, ()).is_some() {
                return Err(CatalogError::DuplicateCategorySlug(
                    category.slug.to_string(),
                ));
            }
        }

        let mut by_slug = HashMap::with_capacity(catalog.tools.len());
        let mut by_category: HashMap<&'static str, Vec<usize>> = HashMap::new();

        for (position, tool) in catalog.tools.iter().enumerate() {
            if !category_slugs.contains_key(tool.category) {
                return Err(CatalogError::UnknownCategory {
                    tool: tool.slug.to_string(),
                    category: tool.category.to_string(),
                });
            }
            if by_slug.insert(tool.slug, position).is_some() {
                return Err(CatalogError::DuplicateSlug(tool.slug.to_string()));
            }
            by_category.entry(tool.category).or_default().push(position);
        }

        info!(
            tools = catalog.tools.len(),
            categories = catalog.categories.len(),
            "Catalog index built"
        );

        Ok(Self {
            catalog,
            by_slug,
            by_category,
        })
    }

    /// Build the index over the built-in catalog table.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(Catalog::builtin())
    }

    /// Look up a tool by slug. Unknown slugs yield `None`, never an error.
    pub fn by_slug(&self, slug: &str) -> Option<&ToolDescriptor> {
        self.by_slug
            .get(slug)
            .map(|&position| &self.catalog.tools[position])
    }

    /// Tools belonging to a category, in catalog (insertion) order.
    /// Unknown category slugs yield an empty vec.
    pub fn by_category(&self, category_slug: &str) -> Vec<&ToolDescriptor> {
        self.by_category
            .get(category_slug)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&position| &self.catalog.tools[position])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All categories, in catalog order.
    pub fn all_categories(&self) -> &[CategoryDescriptor] {
        &self.catalog.categories
    }

    /// All tools, in catalog order.
    pub fn all_tools(&self) -> &[ToolDescriptor] {
        &self.catalog.tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> CatalogIndex {
        CatalogIndex::builtin().unwrap()
    }

    #[test]
    fn test_builtin_catalog_builds() {
        let index = index();
        assert_eq!(index.all_categories().len(), 5);
        assert_eq!(index.all_tools().len(), 18);
    }

    #[test]
    fn test_by_slug_known() {
        let index = index();
        let tool = index.by_slug("json_formatter").unwrap();
        assert_eq!(tool.name, "JSON Formatter");
        assert_eq!(tool.category, "formatters");
    }

    #[test]
    fn test_by_slug_unknown_is_none() {
        let index = index();
        assert!(index.by_slug("no_such_tool").is_none());
        assert!(index.by_slug("").is_none());
    }

    #[test]
    fn test_by_category_preserves_catalog_order() {
        let index = index();
        let text_tools: Vec<_> = index.by_category("text").iter().map(|t| t.slug).collect();
        assert_eq!(text_tools, vec!["text_counter", "text_diff", "case_converter"]);
    }

    #[test]
    fn test_by_category_unknown_is_empty() {
        let index = index();
        assert!(index.by_category("no_such_category").is_empty());
    }

    #[test]
    fn test_unknown_category_reference_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.tools.push(ToolDescriptor {
            id: 99,
            name: "Orphan",
            description: "A tool without a home",
            category: "missing",
            icon_tag: "ghost",
            slug: "orphan_tool",
            popular: false,
        });

        let result = CatalogIndex::new(catalog);
        assert!(matches!(
            result,
            Err(CatalogError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut catalog = Catalog::builtin();
        let duplicate = catalog.tools[0].clone();
        catalog.tools.push(duplicate);

        let result = CatalogIndex::new(catalog);
        assert!(matches!(result, Err(CatalogError::DuplicateSlug(_))));
    }
}

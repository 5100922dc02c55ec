//! Search Engine - ranks catalog entries against a free-text query.
//!
//! This is intentionally plain substring search: the query and each tool's
//! name and description are case-folded, and a tool matches when the folded
//! query is a substring of either field. Results keep catalog order and are
//! capped at a fixed limit. Known limitation, not a bug - there is no fuzzy
//! matching or relevance scoring.

use std::sync::Arc;

use super::descriptor::ToolDescriptor;
use super::index::CatalogIndex;

/// Substring search over the catalog.
pub struct SearchEngine {
    catalog: Arc<CatalogIndex>,
    limit: usize,
}

impl SearchEngine {
    /// Default cap on the number of results.
    pub const DEFAULT_LIMIT: usize = 8;

    /// Create a search engine over a shared catalog index.
    pub fn new(catalog: Arc<CatalogIndex>, limit: usize) -> Self {
        Self {
            catalog,
            limit: limit.max(1),
        }
    }

    /// Create a search engine with the default result cap.
    pub fn with_default_limit(catalog: Arc<CatalogIndex>) -> Self {
        Self::new(catalog, Self::DEFAULT_LIMIT)
    }

    /// Search the catalog. Empty or whitespace-only queries return an empty
    /// vec rather than the full catalog.
    pub fn search(&self, query: &str) -> Vec<&ToolDescriptor> {
        let folded = query.trim().to_lowercase();
        if folded.is_empty() {
            return Vec::new();
        }

        self.catalog
            .all_tools()
            .iter()
            .filter(|tool| {
                tool.name.to_lowercase().contains(&folded)
                    || tool.description.to_lowercase().contains(&folded)
            })
            .take(self.limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SearchEngine {
        let catalog = Arc::new(CatalogIndex::builtin().unwrap());
        SearchEngine::with_default_limit(catalog)
    }

    #[test]
    fn test_search_matches_name_substring() {
        let engine = engine();
        let hits: Vec<_> = engine.search("json").iter().map(|t| t.slug).collect();
        assert!(hits.contains(&"json_formatter"));
        assert!(hits.contains(&"csv_to_json"));
        assert!(!hits.contains(&"base64_codec"));
    }

    #[test]
    fn test_search_is_case_folded() {
        let engine = engine();
        assert_eq!(engine.search("JSON").len(), engine.search("json").len());
        assert!(!engine.search("MORSE").is_empty());
    }

    #[test]
    fn test_search_matches_description() {
        let engine = engine();
        // "Luhn" appears only in the card validator's description.
        let hits: Vec<_> = engine.search("luhn").iter().map(|t| t.slug).collect();
        assert_eq!(hits, vec!["card_validator"]);
    }

    #[test]
    fn test_empty_query_returns_empty() {
        let engine = engine();
        assert!(engine.search("").is_empty());
        assert!(engine.search("   \t\n").is_empty());
    }

    #[test]
    fn test_results_capped_and_in_catalog_order() {
        let catalog = Arc::new(CatalogIndex::builtin().unwrap());
        let engine = SearchEngine::new(catalog.clone(), 2);
        // Matches many converter descriptions; the cap keeps the first two
        // in catalog order.
        let hits = engine.search("text");
        assert_eq!(hits.len(), 2);
        let all_ids: Vec<_> = hits.iter().map(|t| t.id).collect();
        let mut sorted = all_ids.clone();
        sorted.sort_unstable();
        assert_eq!(all_ids, sorted);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let engine = engine();
        assert!(engine.search("zzzzzz-no-such-tool").is_empty());
    }
}

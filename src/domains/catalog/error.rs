//! Catalog-specific error types.

use thiserror::Error;

/// Errors raised while building the catalog index.
///
/// Lookups on a built index never fail; absence is modeled with `Option`
/// and empty slices. These errors only surface at construction time, when
/// the static table violates an invariant.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A tool references a category slug that does not exist.
    #[error("tool '{tool}' references unknown category '{category}'")]
    UnknownCategory { tool: String, category: String },

    /// Two tools share the same slug.
    #[error("duplicate tool slug '{0}'")]
    DuplicateSlug(String),

    /// Two categories share the same slug.
    #[error("duplicate category slug '{0}'")]
    DuplicateCategorySlug(String),
}

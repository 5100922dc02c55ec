//! Catalog descriptors - immutable records describing every tool and category.
//!
//! The catalog is a static table assembled once at startup and never mutated
//! afterwards. Tool identity is the `slug`, which doubles as the MCP tool
//! name. Icon and theme tags are plain strings mapped by clients; the server
//! never interprets them.

use serde::Serialize;

/// A category of tools. Owns zero or more tools through their non-owning
/// `category` back-reference.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDescriptor {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub slug: &'static str,
    pub icon_tag: &'static str,
    pub theme_tag: &'static str,
}

/// A single tool in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Slug of the owning category.
    pub category: &'static str,
    pub icon_tag: &'static str,
    pub slug: &'static str,
    pub popular: bool,
}

/// The full static table: categories plus tools in catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub categories: Vec<CategoryDescriptor>,
    pub tools: Vec<ToolDescriptor>,
}

const fn category(
    id: u32,
    name: &'static str,
    description: &'static str,
    slug: &'static str,
    icon_tag: &'static str,
    theme_tag: &'static str,
) -> CategoryDescriptor {
    CategoryDescriptor {
        id,
        name,
        description,
        slug,
        icon_tag,
        theme_tag,
    }
}

const fn tool(
    id: u32,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    icon_tag: &'static str,
    slug: &'static str,
    popular: bool,
) -> ToolDescriptor {
    ToolDescriptor {
        id,
        name,
        description,
        category,
        icon_tag,
        slug,
        popular,
    }
}

impl Catalog {
    /// The built-in catalog table.
    ///
    /// Catalog order here is the order used for category grouping and for
    /// search ranking ties, so keep new entries grouped by category.
    pub fn builtin() -> Self {
        let categories = vec![
            category(
                1,
                "Converters",
                "Convert between data formats and text encodings",
                "converters",
                "repeat",
                "blue",
            ),
            category(
                2,
                "Formatters",
                "Pretty-print and minify structured text",
                "formatters",
                "braces",
                "purple",
            ),
            category(
                3,
                "Validators",
                "Check inputs against grammars and checksums",
                "validators",
                "shield-check",
                "green",
            ),
            category(
                4,
                "Text Analysis",
                "Counters, diffing, and case conversion",
                "text",
                "type",
                "amber",
            ),
            category(
                5,
                "Generators",
                "Produce identifiers, colors, and digests",
                "generators",
                "sparkles",
                "rose",
            ),
        ];

        let tools = vec![
            tool(
                1,
                "CSV to JSON",
                "Parse delimited text (with quoted fields) into an array of records",
                "converters",
                "table",
                "csv_to_json",
                true,
            ),
            tool(
                2,
                "JSON to CSV",
                "Serialize an array of JSON records into delimited text",
                "converters",
                "table",
                "json_to_csv",
                false,
            ),
            tool(
                3,
                "XML to JSON",
                "Map single-root XML markup onto a JSON object tree",
                "converters",
                "file-code",
                "xml_to_json",
                false,
            ),
            tool(
                4,
                "Base64 Encoder/Decoder",
                "Encode text to Base64 or decode it back, standard or URL-safe",
                "converters",
                "binary",
                "base64_codec",
                true,
            ),
            tool(
                5,
                "URL Encoder/Decoder",
                "Percent-encode text for URLs or decode escaped sequences",
                "converters",
                "link",
                "url_codec",
                false,
            ),
            tool(
                6,
                "HTML Entities",
                "Escape text for HTML or unescape entity references",
                "converters",
                "code",
                "html_entity_codec",
                false,
            ),
            tool(
                7,
                "Morse Code",
                "Translate text to Morse code and back",
                "converters",
                "radio",
                "morse_codec",
                false,
            ),
            tool(
                8,
                "ASCII Converter",
                "Turn text into decimal ASCII codes and decode codes back to text",
                "converters",
                "hash",
                "ascii_codec",
                false,
            ),
            tool(
                9,
                "JSON Formatter",
                "Pretty-print or minify JSON with configurable indentation",
                "formatters",
                "braces",
                "json_formatter",
                true,
            ),
            tool(
                10,
                "Credit Card Validator",
                "Validate card numbers with the Luhn checksum and detect the card type",
                "validators",
                "credit-card",
                "card_validator",
                false,
            ),
            tool(
                11,
                "Syntax Validator",
                "Check JSON, URL, or email inputs against their grammars",
                "validators",
                "check-circle",
                "syntax_validator",
                false,
            ),
            tool(
                12,
                "Password Strength",
                "Score password strength and list the failed criteria",
                "validators",
                "lock",
                "password_strength",
                true,
            ),
            tool(
                13,
                "Text Counter",
                "Count characters, words, sentences, paragraphs, lines, and reading time",
                "text",
                "align-left",
                "text_counter",
                true,
            ),
            tool(
                14,
                "Text Diff",
                "Compare two texts line by line and annotate the differences",
                "text",
                "git-compare",
                "text_diff",
                false,
            ),
            tool(
                15,
                "Case Converter",
                "Convert text between upper, lower, title, sentence, camel, pascal, snake, and kebab case",
                "text",
                "case-sensitive",
                "case_converter",
                false,
            ),
            tool(
                16,
                "UUID Generator",
                "Generate random version 4 UUIDs",
                "generators",
                "fingerprint",
                "uuid_generator",
                true,
            ),
            tool(
                17,
                "Color Generator",
                "Generate random hex colors and CSS gradients",
                "generators",
                "palette",
                "color_generator",
                false,
            ),
            tool(
                18,
                "Hash Generator",
                "Compute MD5 and SHA-256 digests of text",
                "generators",
                "key",
                "hash_generator",
                false,
            ),
        ];

        Self { categories, tools }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_nonempty() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.categories.len(), 5);
        assert_eq!(catalog.tools.len(), 18);
    }

    #[test]
    fn test_builtin_slugs_are_unique() {
        let catalog = Catalog::builtin();
        let mut slugs: Vec<_> = catalog.tools.iter().map(|t| t.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), catalog.tools.len());
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<_> = catalog.tools.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.tools.len());
    }
}

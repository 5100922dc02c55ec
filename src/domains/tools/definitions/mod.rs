//! Tool definitions module.
//!
//! One file per tool, grouped by catalog category. Each tool defines its
//! params struct, a pure core function, `execute()`, `http_handler()`,
//! `to_tool()`, and `create_route()`.

pub mod catalog_search;
pub mod common;
pub mod convert;
pub mod feedback;
pub mod format;
pub mod generate;
pub mod text;
pub mod validate;

pub use catalog_search::CatalogSearchTool;
pub use convert::{
    AsciiTool, Base64Tool, CsvToJsonTool, HtmlEntityTool, JsonToCsvTool, MorseTool, UrlCodecTool,
    XmlToJsonTool,
};
pub use feedback::SendFeedbackTool;
pub use format::JsonFormatTool;
pub use generate::{ColorGeneratorTool, HashGeneratorTool, UuidGeneratorTool};
pub use text::{CaseConverterTool, TextCounterTool, TextDiffTool};
pub use validate::{CardValidatorTool, PasswordStrengthTool, SyntaxValidatorTool};

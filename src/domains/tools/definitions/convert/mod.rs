//! Format converter tool definitions.

pub mod ascii;
pub mod base64;
pub mod csv_to_json;
pub mod delimited;
pub mod html_entities;
pub mod json_to_csv;
pub mod morse;
pub mod url_codec;
pub mod xml_to_json;

pub use ascii::AsciiTool;
pub use base64::Base64Tool;
pub use csv_to_json::CsvToJsonTool;
pub use html_entities::HtmlEntityTool;
pub use json_to_csv::JsonToCsvTool;
pub use morse::MorseTool;
pub use url_codec::UrlCodecTool;
pub use xml_to_json::XmlToJsonTool;

//! Formatter tool definitions.

pub mod json_format;

pub use json_format::JsonFormatTool;

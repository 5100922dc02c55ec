//! XML to JSON tool definition.
//!
//! A minimal single-root markup parser feeding the tree-to-object mapping:
//! attributes land under `@attributes`, text-only leaves collapse to their
//! text, children are grouped by tag name (a group of one stays a single
//! value unless always-array mode is on), and text trailing child elements
//! is kept under `#text`. The parser covers the subset the tool needs -
//! elements, attributes, text, entity references, comments - and rejects
//! everything else with the position of the first failure. Mapping back
//! from objects to markup is deliberately not offered.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domains::telemetry;
use crate::domains::tools::definitions::common::transform_result;
use crate::domains::tools::{TransformError, TransformResult};

/// Parameters for the XML to JSON tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct XmlToJsonParams {
    /// The markup to convert.
    #[schemars(description = "XML text with a single root element")]
    pub input: String,

    /// Keep attributes under an `@attributes` map.
    #[schemars(description = "Preserve attributes under '@attributes' (default: true)")]
    #[serde(default = "default_preserve_attributes")]
    pub preserve_attributes: bool,

    /// Always wrap child groups in arrays, even groups of one.
    #[schemars(description = "Always emit child groups as arrays (default: false)")]
    #[serde(default)]
    pub always_array: bool,
}

fn default_preserve_attributes() -> bool {
    true
}

// ============================================================================
// Parsed tree
// ============================================================================

#[derive(Debug)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

#[derive(Debug)]
enum XmlNode {
    Element(Element),
    Text(String),
}

// ============================================================================
// Parser
// ============================================================================

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_whitespace()) {
            self.bump();
        }
    }

    fn fail(&self, message: impl Into<String>) -> TransformError {
        TransformError::invalid_syntax_at(
            format!("{} (at byte {})", message.into(), self.pos),
            self.pos,
        )
    }

    /// Parse a full document: optional prolog and comments, one root
    /// element, optional trailing comments and whitespace.
    fn parse_document(&mut self) -> TransformResult<Element> {
        self.skip_misc()?;
        if self.peek() != Some('<') {
            return Err(self.fail("Expected '<' to open the root element"));
        }
        let root = self.parse_element()?;
        self.skip_misc()?;
        if self.pos != self.input.len() {
            return Err(self.fail("Extra content after the document element"));
        }
        Ok(root)
    }

    /// Skip whitespace, comments, XML declarations, and DOCTYPE.
    fn skip_misc(&mut self) -> TransformResult<()> {
        loop {
            self.skip_whitespace();
            if self.rest().starts_with("<!--") {
                self.skip_comment()?;
            } else if self.rest().starts_with("<?") {
                match self.rest().find("?>") {
                    Some(offset) => self.pos += offset + 2,
                    None => return Err(self.fail("Unterminated processing instruction")),
                }
            } else if self.rest().starts_with("<!DOCTYPE") {
                match self.rest().find('>') {
                    Some(offset) => self.pos += offset + 1,
                    None => return Err(self.fail("Unterminated DOCTYPE declaration")),
                }
            } else {
                return Ok(());
            }
        }
    }

    fn skip_comment(&mut self) -> TransformResult<()> {
        debug_assert!(self.rest().starts_with("<!--"));
        match self.rest().find("-->") {
            Some(offset) => {
                self.pos += offset + 3;
                Ok(())
            }
            None => Err(self.fail("Unterminated comment")),
        }
    }

    fn parse_name(&mut self) -> TransformResult<String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '.'))
        {
            self.bump();
        }
        if self.pos == start {
            return Err(self.fail("Expected a name"));
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn parse_element(&mut self) -> TransformResult<Element> {
        let open_pos = self.pos;
        if !self.eat("<") {
            return Err(self.fail("Expected '<'"));
        }
        let name = self.parse_name()?;
        let attributes = self.parse_attributes()?;

        if self.eat("/>") {
            return Ok(Element {
                name,
                attributes,
                children: Vec::new(),
            });
        }
        if !self.eat(">") {
            return Err(self.fail(format!("Malformed start tag '<{name}'")));
        }

        let children = self.parse_children(&name, open_pos)?;
        Ok(Element {
            name,
            attributes,
            children,
        })
    }

    fn parse_attributes(&mut self) -> TransformResult<Vec<(String, String)>> {
        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('>') | Some('/') | None => return Ok(attributes),
                _ => {}
            }
            let name = self.parse_name()?;
            self.skip_whitespace();
            if !self.eat("=") {
                return Err(self.fail(format!("Attribute '{name}' is missing '='")));
            }
            self.skip_whitespace();
            let quote = match self.bump() {
                Some(q @ ('"' | '\'')) => q,
                _ => return Err(self.fail(format!("Attribute '{name}' value must be quoted"))),
            };
            let start = self.pos;
            while self.peek().is_some_and(|c| c != quote) {
                self.bump();
            }
            if self.peek().is_none() {
                return Err(self.fail(format!("Unterminated value for attribute '{name}'")));
            }
            let raw = &self.input[start..self.pos];
            self.bump(); // closing quote
            attributes.push((name, decode_entities(raw, start)?));
        }
    }

    fn parse_children(&mut self, parent: &str, open_pos: usize) -> TransformResult<Vec<XmlNode>> {
        let mut children = Vec::new();
        loop {
            if self.rest().is_empty() {
                self.pos = open_pos;
                return Err(self.fail(format!("Element '{parent}' is never closed")));
            }
            if self.rest().starts_with("</") {
                self.pos += 2;
                let close_pos = self.pos;
                let name = self.parse_name()?;
                self.skip_whitespace();
                if !self.eat(">") {
                    return Err(self.fail(format!("Malformed end tag '</{name}'")));
                }
                if name != parent {
                    self.pos = close_pos;
                    return Err(self.fail(format!(
                        "Mismatched end tag: expected '</{parent}>', found '</{name}>'"
                    )));
                }
                return Ok(children);
            }
            if self.rest().starts_with("<!--") {
                self.skip_comment()?;
                continue;
            }
            if self.peek() == Some('<') {
                children.push(XmlNode::Element(self.parse_element()?));
                continue;
            }
            let start = self.pos;
            while self.peek().is_some_and(|c| c != '<') {
                self.bump();
            }
            let text = decode_entities(&self.input[start..self.pos], start)?;
            if !text.trim().is_empty() {
                children.push(XmlNode::Text(text.trim().to_string()));
            }
        }
    }
}

/// Decode the five standard entity references plus numeric character
/// references. A bare or unterminated '&' is a syntax error.
fn decode_entities(raw: &str, offset: usize) -> TransformResult<String> {
    if !raw.contains('&') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '&' {
            out.push(c);
            continue;
        }
        let rest = &raw[i..];
        let Some(end) = rest.find(';') else {
            return Err(TransformError::invalid_syntax_at(
                format!("Unterminated entity reference (at byte {})", offset + i),
                offset + i,
            ));
        };
        let entity = &rest[1..end];
        let decoded = match entity {
            "lt" => '<',
            "gt" => '>',
            "amp" => '&',
            "quot" => '"',
            "apos" => '\'',
            numeric if numeric.starts_with('#') => parse_char_ref(numeric, offset + i)?,
            unknown => {
                return Err(TransformError::invalid_syntax_at(
                    format!("Unknown entity '&{unknown};' (at byte {})", offset + i),
                    offset + i,
                ));
            }
        };
        out.push(decoded);
        // Skip the entity body and the terminating ';'.
        for _ in 0..end {
            chars.next();
        }
    }
    Ok(out)
}

fn parse_char_ref(body: &str, position: usize) -> TransformResult<char> {
    let digits = &body[1..];
    let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        u32::from_str_radix(hex, 16)
    } else {
        digits.parse::<u32>()
    };
    code.ok()
        .and_then(char::from_u32)
        .ok_or_else(|| {
            TransformError::invalid_syntax_at(
                format!("Invalid character reference '&{body};' (at byte {position})"),
                position,
            )
        })
}

// ============================================================================
// Tree to object mapping
// ============================================================================

fn element_to_value(element: &Element, preserve_attributes: bool, always_array: bool) -> Value {
    let attributes: Option<Map<String, Value>> = if preserve_attributes
        && !element.attributes.is_empty()
    {
        Some(
            element
                .attributes
                .iter()
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect(),
        )
    } else {
        None
    };

    let mut text_parts: Vec<&str> = Vec::new();
    let mut grouped: Vec<(&str, Vec<&Element>)> = Vec::new();
    for child in &element.children {
        match child {
            XmlNode::Text(text) => text_parts.push(text),
            XmlNode::Element(child_element) => {
                match grouped
                    .iter_mut()
                    .find(|(name, _)| *name == child_element.name)
                {
                    Some((_, group)) => group.push(child_element),
                    None => grouped.push((&child_element.name, vec![child_element])),
                }
            }
        }
    }
    let text = text_parts.join(" ");

    // Text-only leaf: collapse to the text itself unless attributes force
    // an object wrapper.
    if grouped.is_empty() {
        return match attributes {
            None => Value::String(text),
            Some(attrs) => {
                let mut map = Map::new();
                map.insert("@attributes".to_string(), Value::Object(attrs));
                if !text.is_empty() {
                    map.insert("#text".to_string(), Value::String(text));
                }
                Value::Object(map)
            }
        };
    }

    let mut map = Map::new();
    if let Some(attrs) = attributes {
        map.insert("@attributes".to_string(), Value::Object(attrs));
    }
    for (name, group) in grouped {
        let converted: Vec<Value> = group
            .iter()
            .map(|child| element_to_value(child, preserve_attributes, always_array))
            .collect();
        let value = if converted.len() == 1 && !always_array {
            converted.into_iter().next().unwrap_or(Value::Null)
        } else {
            Value::Array(converted)
        };
        map.insert(name.to_string(), value);
    }
    if !text.is_empty() {
        map.insert("#text".to_string(), Value::String(text));
    }
    Value::Object(map)
}

// ============================================================================
// Tool Definition
// ============================================================================

/// XML to JSON tool.
pub struct XmlToJsonTool;

impl XmlToJsonTool {
    pub const NAME: &'static str = "xml_to_json";

    pub const DESCRIPTION: &'static str = "Convert single-root XML markup into a JSON object tree. Attributes are kept under '@attributes', text-only elements collapse to strings, and repeated child tags become arrays.";

    /// Pure transformation: markup in, JSON text out.
    pub fn transform(
        input: &str,
        preserve_attributes: bool,
        always_array: bool,
    ) -> TransformResult<String> {
        if input.trim().is_empty() {
            return Err(TransformError::invalid_syntax("Input is empty"));
        }
        let root = Parser::new(input).parse_document()?;
        let value = element_to_value(&root, preserve_attributes, always_array);

        let mut document = Map::new();
        document.insert(root.name.clone(), value);
        serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|e| TransformError::internal(e.to_string()))
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &XmlToJsonParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        transform_result(Self::transform(
            &params.input,
            params.preserve_attributes,
            params.always_array,
        ))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: XmlToJsonParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<XmlToJsonParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: XmlToJsonParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(input: &str) -> Value {
        let output = XmlToJsonTool::transform(input, true, false).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_text_leaf_collapses_to_string() {
        let value = convert("<greeting>hello</greeting>");
        assert_eq!(value, json!({ "greeting": "hello" }));
    }

    #[test]
    fn test_attributes_nest_under_at_attributes() {
        let value = convert(r#"<user id="7" role="admin">Ada</user>"#);
        assert_eq!(
            value,
            json!({
                "user": {
                    "@attributes": { "id": "7", "role": "admin" },
                    "#text": "Ada"
                }
            })
        );
    }

    #[test]
    fn test_attributes_dropped_when_disabled() {
        let output = XmlToJsonTool::transform(r#"<user id="7">Ada</user>"#, false, false).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value, json!({ "user": "Ada" }));
    }

    #[test]
    fn test_single_child_group_stays_scalar() {
        let value = convert("<root><item>one</item></root>");
        assert_eq!(value, json!({ "root": { "item": "one" } }));
    }

    #[test]
    fn test_repeated_children_become_array() {
        let value = convert("<root><item>one</item><item>two</item></root>");
        assert_eq!(value, json!({ "root": { "item": ["one", "two"] } }));
    }

    #[test]
    fn test_always_array_wraps_single_child() {
        let output =
            XmlToJsonTool::transform("<root><item>one</item></root>", true, true).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value, json!({ "root": { "item": ["one"] } }));
    }

    #[test]
    fn test_trailing_text_preserved_under_hash_text() {
        let value = convert("<p><b>bold</b> tail</p>");
        assert_eq!(value, json!({ "p": { "b": "bold", "#text": "tail" } }));
    }

    #[test]
    fn test_self_closing_and_entities() {
        let value = convert(r#"<root><br/><msg>a &lt; b &amp; c</msg></root>"#);
        assert_eq!(
            value,
            json!({ "root": { "br": "", "msg": "a < b & c" } })
        );
    }

    #[test]
    fn test_prolog_and_comments_skipped() {
        let value = convert("<?xml version=\"1.0\"?><!-- note --><root>ok</root>");
        assert_eq!(value, json!({ "root": "ok" }));
    }

    #[test]
    fn test_mismatched_end_tag_names_failure() {
        let err = XmlToJsonTool::transform("<a><b>x</c></a>", true, false).unwrap_err();
        match err {
            TransformError::InvalidSyntax { message, position } => {
                assert!(message.contains("Mismatched end tag"));
                assert!(position.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unclosed_element_reports_open_position() {
        let err = XmlToJsonTool::transform("<a><b></b>", true, false).unwrap_err();
        assert!(matches!(err, TransformError::InvalidSyntax { .. }));
        assert!(err.to_string().contains("never closed"));
    }

    #[test]
    fn test_extra_content_after_root_rejected() {
        let err = XmlToJsonTool::transform("<a>x</a><b/>", true, false).unwrap_err();
        assert!(err.to_string().contains("Extra content"));
    }
}

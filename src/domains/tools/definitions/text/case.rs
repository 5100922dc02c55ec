//! Case converter tool definition.
//!
//! Eight independent pure conversions over the same input. Word splitting
//! for the programmatic cases (camel, pascal, snake, kebab) treats any run
//! of non-alphanumeric characters as a separator.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::telemetry;
use crate::domains::tools::definitions::common::success_result;

/// Target case for the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CaseTarget {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
}

pub fn upper_case(input: &str) -> String {
    input.to_uppercase()
}

pub fn lower_case(input: &str) -> String {
    input.to_lowercase()
}

/// Capitalize the first letter of every whitespace-separated word,
/// lowercasing the rest; original spacing is preserved.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Lowercase everything, then capitalize the first letter of each
/// sentence (after '.', '!', or '?').
pub fn sentence_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_sentence_start = true;
    for c in input.chars() {
        if matches!(c, '.' | '!' | '?') {
            at_sentence_start = true;
            out.push(c);
        } else if c.is_alphabetic() && at_sentence_start {
            out.extend(c.to_uppercase());
            at_sentence_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn words(input: &str) -> Vec<String> {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn camel_case(input: &str) -> String {
    let words = words(input);
    let mut parts = words.iter();
    let mut out = parts.next().cloned().unwrap_or_default();
    for word in parts {
        out.push_str(&capitalize(word));
    }
    out
}

pub fn pascal_case(input: &str) -> String {
    words(input).iter().map(|w| capitalize(w)).collect()
}

pub fn snake_case(input: &str) -> String {
    words(input).join("_")
}

pub fn kebab_case(input: &str) -> String {
    words(input).join("-")
}

/// Parameters for the case converter tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CaseConverterParams {
    /// Text to convert.
    #[schemars(description = "Text to convert")]
    pub input: String,

    /// Target case.
    #[schemars(
        description = "Target case: 'upper', 'lower', 'title', 'sentence', 'camel', 'pascal', 'snake', or 'kebab'"
    )]
    pub target: CaseTarget,
}

/// Case converter tool.
pub struct CaseConverterTool;

impl CaseConverterTool {
    pub const NAME: &'static str = "case_converter";

    pub const DESCRIPTION: &'static str = "Convert text to upper, lower, title, sentence, camel, pascal, snake, or kebab case.";

    pub fn transform(input: &str, target: CaseTarget) -> String {
        match target {
            CaseTarget::Upper => upper_case(input),
            CaseTarget::Lower => lower_case(input),
            CaseTarget::Title => title_case(input),
            CaseTarget::Sentence => sentence_case(input),
            CaseTarget::Camel => camel_case(input),
            CaseTarget::Pascal => pascal_case(input),
            CaseTarget::Snake => snake_case(input),
            CaseTarget::Kebab => kebab_case(input),
        }
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &CaseConverterParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        success_result(Self::transform(&params.input, params.target))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: CaseConverterParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CaseConverterParams>(),
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
                let params: CaseConverterParams =
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

    #[test]
    fn test_programmatic_cases() {
        assert_eq!(camel_case("hello world"), "helloWorld");
        assert_eq!(pascal_case("hello world"), "HelloWorld");
        assert_eq!(snake_case("hello world"), "hello_world");
        assert_eq!(kebab_case("hello world"), "hello-world");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("MIXED case INPUT"), "Mixed Case Input");
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(
            sentence_case("first thing. SECOND thing! third?"),
            "First thing. Second thing! Third?"
        );
    }

    #[test]
    fn test_upper_lower() {
        assert_eq!(upper_case("abc Def"), "ABC DEF");
        assert_eq!(lower_case("ABC dEF"), "abc def");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(snake_case("already_snake case--mix"), "already_snake_case_mix");
        assert_eq!(kebab_case("  spaced   out  "), "spaced-out");
        assert_eq!(camel_case("from-kebab-case"), "fromKebabCase");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(camel_case(""), "");
        assert_eq!(snake_case(""), "");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_conversions_are_independent() {
        // Each target works directly on the raw input, not on another
        // conversion's output.
        let input = "One TWO three";
        assert_eq!(
            CaseConverterTool::transform(input, CaseTarget::Snake),
            "one_two_three"
        );
        assert_eq!(
            CaseConverterTool::transform(input, CaseTarget::Upper),
            "ONE TWO THREE"
        );
    }
}

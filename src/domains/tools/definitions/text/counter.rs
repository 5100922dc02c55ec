//! Text counter tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::telemetry;
use crate::domains::tools::definitions::common::structured_result;

/// Words per minute used for the reading-time estimate.
const READING_WPM: usize = 200;

/// Parameters for the text counter tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TextCounterParams {
    /// The text to analyze.
    #[schemars(description = "Text to analyze")]
    pub input: String,
}

/// Structured output with every counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct TextCountReport {
    pub characters: usize,
    pub characters_without_whitespace: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,
    /// ceil(words / 200) minutes.
    pub reading_time_minutes: usize,
}

/// Text counter tool.
pub struct TextCounterTool;

impl TextCounterTool {
    pub const NAME: &'static str = "text_counter";

    pub const DESCRIPTION: &'static str = "Count characters (with and without whitespace), words, sentences, paragraphs, and lines, plus an estimated reading time at 200 words per minute.";

    /// Compute every counter over the input.
    pub fn analyze(text: &str) -> TextCountReport {
        let characters = text.chars().count();
        let characters_without_whitespace =
            text.chars().filter(|c| !c.is_whitespace()).count();

        let words = text.split_whitespace().count();

        // Runs of terminators collapse because empty segments are dropped.
        let sentences = text
            .split(['.', '!', '?'])
            .filter(|segment| !segment.trim().is_empty())
            .count();

        let mut paragraphs = 0;
        let mut in_paragraph = false;
        for line in text.lines() {
            if line.trim().is_empty() {
                in_paragraph = false;
            } else if !in_paragraph {
                paragraphs += 1;
                in_paragraph = true;
            }
        }

        // Raw newline split: empty input still counts as one line.
        let lines = text.split('\n').count();

        let reading_time_minutes = words.div_ceil(READING_WPM);

        TextCountReport {
            characters,
            characters_without_whitespace,
            words,
            sentences,
            paragraphs,
            lines,
            reading_time_minutes,
        }
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &TextCounterParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        let report = Self::analyze(&params.input);
        let summary = format!(
            "{} words, {} characters, {} sentence(s), ~{} min read",
            report.words, report.characters, report.sentences, report.reading_time_minutes
        );
        structured_result(summary, &report)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: TextCounterParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TextCounterParams>(),
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
                let params: TextCounterParams =
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
    fn test_counts_over_mixed_punctuation() {
        let report = TextCounterTool::analyze("One two. Three four! Five six?");
        assert_eq!(report.sentences, 3);
        assert_eq!(report.words, 6);
        assert_eq!(report.reading_time_minutes, 1);
    }

    #[test]
    fn test_characters_with_and_without_whitespace() {
        let report = TextCounterTool::analyze("a b\tc");
        assert_eq!(report.characters, 5);
        assert_eq!(report.characters_without_whitespace, 3);
    }

    #[test]
    fn test_paragraphs_split_on_blank_line_runs() {
        let report = TextCounterTool::analyze("first para\nstill first\n\n\nsecond\n\nthird");
        assert_eq!(report.paragraphs, 3);
    }

    #[test]
    fn test_lines_raw_split() {
        assert_eq!(TextCounterTool::analyze("a\nb\nc").lines, 3);
        assert_eq!(TextCounterTool::analyze("a\nb\n").lines, 3);
        assert_eq!(TextCounterTool::analyze("").lines, 1);
    }

    #[test]
    fn test_empty_input() {
        let report = TextCounterTool::analyze("");
        assert_eq!(report.words, 0);
        assert_eq!(report.sentences, 0);
        assert_eq!(report.paragraphs, 0);
        assert_eq!(report.reading_time_minutes, 0);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = "word ".repeat(201);
        let report = TextCounterTool::analyze(&text);
        assert_eq!(report.words, 201);
        assert_eq!(report.reading_time_minutes, 2);
    }

    #[test]
    fn test_terminator_runs_collapse() {
        let report = TextCounterTool::analyze("Really?! Yes... sure.");
        assert_eq!(report.sentences, 3);
    }
}

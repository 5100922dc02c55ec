//! Text diff tool definition.
//!
//! A positional line diff: the two inputs are compared index by index,
//! with the shorter side padded by empty lines. A replaced line emits a
//! deletion then an insertion. There is no LCS realignment, so a line
//! inserted mid-block shifts everything below it - kept that way on
//! purpose; it matches what the tool has always shown.

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

/// Parameters for the text diff tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TextDiffParams {
    /// Original text.
    #[schemars(description = "Original text")]
    pub left: String,

    /// Modified text.
    #[schemars(description = "Modified text")]
    pub right: String,
}

/// How a diff line relates the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiffTag {
    Unchanged,
    Removed,
    Added,
}

/// One annotated output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DiffLine {
    /// 1-based index of the compared pair.
    pub line: usize,
    pub tag: DiffTag,
    pub text: String,
}

/// Structured output for a diff.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct DiffReport {
    pub lines: Vec<DiffLine>,
    /// Number of positions that differ.
    pub changed: usize,
}

/// Text diff tool.
pub struct TextDiffTool;

impl TextDiffTool {
    pub const NAME: &'static str = "text_diff";

    pub const DESCRIPTION: &'static str = "Compare two texts line by line (positional, no realignment) and annotate each line as unchanged, removed, or added.";

    /// Compute the positional diff.
    pub fn diff(left: &str, right: &str) -> DiffReport {
        let left_lines: Vec<&str> = left.split('\n').collect();
        let right_lines: Vec<&str> = right.split('\n').collect();
        let length = left_lines.len().max(right_lines.len());

        let mut lines = Vec::new();
        let mut changed = 0;
        for i in 0..length {
            let l = left_lines.get(i).copied().unwrap_or("");
            let r = right_lines.get(i).copied().unwrap_or("");
            let line = i + 1;

            if l == r {
                lines.push(DiffLine {
                    line,
                    tag: DiffTag::Unchanged,
                    text: l.to_string(),
                });
                continue;
            }

            changed += 1;
            if !l.is_empty() {
                lines.push(DiffLine {
                    line,
                    tag: DiffTag::Removed,
                    text: l.to_string(),
                });
            }
            if !r.is_empty() {
                lines.push(DiffLine {
                    line,
                    tag: DiffTag::Added,
                    text: r.to_string(),
                });
            }
        }

        DiffReport { lines, changed }
    }

    /// Render the diff in classic prefixed form.
    pub fn render(report: &DiffReport) -> String {
        report
            .lines
            .iter()
            .map(|line| {
                let prefix = match line.tag {
                    DiffTag::Unchanged => "  ",
                    DiffTag::Removed => "- ",
                    DiffTag::Added => "+ ",
                };
                format!("{prefix}{}", line.text)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &TextDiffParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        let report = Self::diff(&params.left, &params.right);
        let summary = if report.changed == 0 {
            "No differences".to_string()
        } else {
            format!("{} line(s) differ\n{}", report.changed, Self::render(&report))
        };
        structured_result(summary, &report)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: TextDiffParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TextDiffParams>(),
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
                let params: TextDiffParams =
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
    fn test_replacement_emits_removed_then_added() {
        let report = TextDiffTool::diff("a\nb\nc", "a\nx\nc");
        let tags: Vec<_> = report.lines.iter().map(|l| (l.line, l.tag)).collect();
        assert_eq!(
            tags,
            vec![
                (1, DiffTag::Unchanged),
                (2, DiffTag::Removed),
                (2, DiffTag::Added),
                (3, DiffTag::Unchanged),
            ]
        );
        assert_eq!(report.lines[1].text, "b");
        assert_eq!(report.lines[2].text, "x");
        assert_eq!(report.changed, 1);
    }

    #[test]
    fn test_identical_inputs() {
        let report = TextDiffTool::diff("a\nb", "a\nb");
        assert_eq!(report.changed, 0);
        assert!(report.lines.iter().all(|l| l.tag == DiffTag::Unchanged));
    }

    #[test]
    fn test_pure_insertion_when_left_exhausted() {
        let report = TextDiffTool::diff("a", "a\nb\nc");
        let added: Vec<_> = report
            .lines
            .iter()
            .filter(|l| l.tag == DiffTag::Added)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(added, vec!["b", "c"]);
        assert_eq!(report.changed, 2);
    }

    #[test]
    fn test_pure_deletion_when_right_exhausted() {
        let report = TextDiffTool::diff("a\nb", "a");
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[1].tag, DiffTag::Removed);
        assert_eq!(report.lines[1].text, "b");
    }

    #[test]
    fn test_positional_semantics_shift_everything() {
        // Inserting at the top misaligns the rest; that is the documented
        // behavior of a positional diff.
        let report = TextDiffTool::diff("a\nb", "new\na\nb");
        assert!(report.changed >= 2);
    }

    #[test]
    fn test_render_prefixes() {
        let report = TextDiffTool::diff("a\nb", "a\nx");
        assert_eq!(TextDiffTool::render(&report), "  a\n- b\n+ x");
    }
}

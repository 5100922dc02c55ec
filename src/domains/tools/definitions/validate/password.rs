//! Password strength tool definition.
//!
//! Additive scoring over independent predicates. Feedback collects the
//! reason for every failed predicate, in the order the predicates are
//! declared, so the list reads as a to-do list for the user.

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

/// Parameters for the password strength tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PasswordStrengthParams {
    /// The password to score. It is never logged.
    #[schemars(description = "Password to score")]
    pub input: String,
}

/// Structured output for a strength check.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct PasswordStrengthReport {
    /// Additive score, 0-100.
    pub score: u32,
    /// Band label: Very Weak, Weak, Fair, Good, or Strong.
    pub label: String,
    /// One entry per failed criterion, in declaration order.
    pub feedback: Vec<String>,
}

struct Predicate {
    points: u32,
    feedback: &'static str,
    check: fn(&str) -> bool,
}

const PREDICATES: &[Predicate] = &[
    Predicate {
        points: 20,
        feedback: "Use at least 8 characters",
        check: |p| p.chars().count() >= 8,
    },
    Predicate {
        points: 10,
        feedback: "Use 12 or more characters",
        check: |p| p.chars().count() >= 12,
    },
    Predicate {
        points: 15,
        feedback: "Add lowercase letters",
        check: |p| p.chars().any(|c| c.is_lowercase()),
    },
    Predicate {
        points: 15,
        feedback: "Add uppercase letters",
        check: |p| p.chars().any(|c| c.is_uppercase()),
    },
    Predicate {
        points: 15,
        feedback: "Add digits",
        check: |p| p.chars().any(|c| c.is_ascii_digit()),
    },
    Predicate {
        points: 15,
        feedback: "Add symbols",
        check: |p| p.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
    },
    Predicate {
        points: 10,
        feedback: "Avoid repeated patterns like 'abab'",
        check: |p| !has_repeated_pair(p),
    },
];

/// True when a character pair repeats immediately ("abab", "1212").
fn has_repeated_pair(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(4)
        .any(|w| w[0] == w[2] && w[1] == w[3])
}

fn band_label(score: u32) -> &'static str {
    match score {
        0..30 => "Very Weak",
        30..50 => "Weak",
        50..70 => "Fair",
        70..85 => "Good",
        _ => "Strong",
    }
}

/// Password strength tool.
pub struct PasswordStrengthTool;

impl PasswordStrengthTool {
    pub const NAME: &'static str = "password_strength";

    pub const DESCRIPTION: &'static str = "Score a password from 0 to 100 across length, character classes, and repetition, with a strength label and the list of failed criteria.";

    /// Score the password against every predicate.
    pub fn score(password: &str) -> PasswordStrengthReport {
        let mut score = 0;
        let mut feedback = Vec::new();

        for predicate in PREDICATES {
            if (predicate.check)(password) {
                score += predicate.points;
            } else {
                feedback.push(predicate.feedback.to_string());
            }
        }

        PasswordStrengthReport {
            score,
            label: band_label(score).to_string(),
            feedback,
        }
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &PasswordStrengthParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        let report = Self::score(&params.input);
        let summary = format!("{} ({}/100)", report.label, report.score);
        structured_result(summary, &report)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: PasswordStrengthParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PasswordStrengthParams>(),
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
                let params: PasswordStrengthParams =
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
    fn test_full_score() {
        let report = PasswordStrengthTool::score("aB3$xYz9Qw#2");
        assert_eq!(report.score, 100);
        assert_eq!(report.label, "Strong");
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn test_short_lowercase_only() {
        let report = PasswordStrengthTool::score("abc");
        // lowercase (15) + no repeated pair (10).
        assert_eq!(report.score, 25);
        assert_eq!(report.label, "Very Weak");
    }

    #[test]
    fn test_feedback_in_declaration_order() {
        let report = PasswordStrengthTool::score("abc");
        assert_eq!(
            report.feedback,
            vec![
                "Use at least 8 characters",
                "Use 12 or more characters",
                "Add uppercase letters",
                "Add digits",
                "Add symbols",
            ]
        );
    }

    #[test]
    fn test_repeated_pair_detected() {
        assert!(has_repeated_pair("xxabab"));
        assert!(has_repeated_pair("12121"));
        assert!(!has_repeated_pair("abcdefgh"));
        assert!(!has_repeated_pair("aabb"));
    }

    #[test]
    fn test_repeated_pair_costs_points() {
        let clean = PasswordStrengthTool::score("aB3$xYz9Qw#2").score;
        let repeated = PasswordStrengthTool::score("aB3$abab9Qw#").score;
        assert_eq!(clean - repeated, 10);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(band_label(0), "Very Weak");
        assert_eq!(band_label(29), "Very Weak");
        assert_eq!(band_label(30), "Weak");
        assert_eq!(band_label(50), "Fair");
        assert_eq!(band_label(70), "Good");
        assert_eq!(band_label(85), "Strong");
        assert_eq!(band_label(100), "Strong");
    }
}

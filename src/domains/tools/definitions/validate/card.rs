//! Credit card validator tool definition.
//!
//! Luhn mod-10 checksum plus card-type detection over a fixed table of
//! numeric prefixes, first match wins.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::telemetry;
use crate::domains::tools::definitions::common::{error_result, structured_result};
use crate::domains::tools::{TransformError, TransformResult};

/// Parameters for the card validator tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CardValidatorParams {
    /// The card number; spaces and hyphens are ignored.
    #[schemars(description = "Card number to validate")]
    pub input: String,
}

/// Structured output for a card validation.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CardValidationReport {
    /// Whether the Luhn checksum holds.
    pub valid: bool,
    /// Detected card network, or "Unknown".
    pub card_type: String,
    /// Number of digits checked.
    pub digit_count: usize,
}

/// Card networks the prefix table distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Diners,
    Jcb,
    Unknown,
}

impl CardType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Diners => "Diners Club",
            Self::Jcb => "JCB",
            Self::Unknown => "Unknown",
        }
    }
}

/// Luhn mod-10 checksum: right to left, double every second digit,
/// subtract 9 when the doubled value exceeds 9, sum everything.
pub fn luhn_valid(digits: &[u32]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

fn prefix_num(digits: &str, len: usize) -> Option<u32> {
    digits.get(..len)?.parse().ok()
}

/// Detect the card network from the leading digits, first match wins.
pub fn detect_type(digits: &str) -> CardType {
    let p2 = prefix_num(digits, 2);
    let p3 = prefix_num(digits, 3);
    let p4 = prefix_num(digits, 4);

    if digits.starts_with('4') {
        return CardType::Visa;
    }
    if p2.is_some_and(|p| (51..=55).contains(&p)) || p4.is_some_and(|p| (2221..=2720).contains(&p))
    {
        return CardType::Mastercard;
    }
    if p2 == Some(34) || p2 == Some(37) {
        return CardType::Amex;
    }
    if digits.starts_with("6011")
        || p4.is_some_and(|p| (6221..=6229).contains(&p))
        || p3.is_some_and(|p| (644..=649).contains(&p))
        || p2 == Some(65)
    {
        return CardType::Discover;
    }
    if p3.is_some_and(|p| (300..=305).contains(&p)) || p2 == Some(36) || p2 == Some(38) {
        return CardType::Diners;
    }
    if p2 == Some(35) || digits.starts_with("2131") || digits.starts_with("1800") {
        return CardType::Jcb;
    }
    CardType::Unknown
}

/// Credit card validator tool.
pub struct CardValidatorTool;

impl CardValidatorTool {
    pub const NAME: &'static str = "card_validator";

    pub const DESCRIPTION: &'static str = "Validate a credit card number with the Luhn checksum and detect the card network (Visa, Mastercard, American Express, Discover, Diners Club, JCB).";

    /// Validate a card number. Separator characters (space, hyphen) are
    /// stripped before checking.
    pub fn validate(input: &str) -> TransformResult<CardValidationReport> {
        let cleaned: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
            return Err(TransformError::invalid_syntax(
                "Card number may only contain digits, spaces, and hyphens",
            ));
        }
        if !(13..=19).contains(&cleaned.len()) {
            return Err(TransformError::out_of_range(format!(
                "Card number must be 13-19 digits, got {}",
                cleaned.len()
            )));
        }

        let digits: Vec<u32> = cleaned
            .chars()
            .filter_map(|c| c.to_digit(10))
            .collect();

        Ok(CardValidationReport {
            valid: luhn_valid(&digits),
            card_type: detect_type(&cleaned).as_str().to_string(),
            digit_count: cleaned.len(),
        })
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &CardValidatorParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        match Self::validate(&params.input) {
            Ok(report) => {
                let verdict = if report.valid { "valid" } else { "invalid" };
                let summary = format!("{} ({} checksum)", report.card_type, verdict);
                structured_result(summary, &report)
            }
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: CardValidatorParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CardValidatorParams>(),
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
                let params: CardValidatorParams =
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
    fn test_known_valid_visa() {
        let report = CardValidatorTool::validate("4532015112830366").unwrap();
        assert!(report.valid);
        assert_eq!(report.card_type, "Visa");
    }

    #[test]
    fn test_checksum_failure() {
        let report = CardValidatorTool::validate("4532015112830367").unwrap();
        assert!(!report.valid);
        // Type detection is independent of the checksum.
        assert_eq!(report.card_type, "Visa");
    }

    #[test]
    fn test_separators_are_stripped() {
        let report = CardValidatorTool::validate("4532 0151-1283 0366").unwrap();
        assert!(report.valid);
        assert_eq!(report.digit_count, 16);
    }

    #[test]
    fn test_length_out_of_range() {
        let result = CardValidatorTool::validate("45320151");
        assert!(matches!(result, Err(TransformError::OutOfRange(_))));
    }

    #[test]
    fn test_non_digit_is_syntax_error() {
        let result = CardValidatorTool::validate("4532a15112830366");
        assert!(matches!(
            result,
            Err(TransformError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_type_detection_table() {
        assert_eq!(detect_type("4111111111111111"), CardType::Visa);
        assert_eq!(detect_type("5105105105105100"), CardType::Mastercard);
        assert_eq!(detect_type("2221000000000009"), CardType::Mastercard);
        assert_eq!(detect_type("371449635398431"), CardType::Amex);
        assert_eq!(detect_type("6011111111111117"), CardType::Discover);
        assert_eq!(detect_type("6500000000000002"), CardType::Discover);
        assert_eq!(detect_type("30569309025904"), CardType::Diners);
        assert_eq!(detect_type("3530111333300000"), CardType::Jcb);
        assert_eq!(detect_type("9999999999999"), CardType::Unknown);
    }

    #[test]
    fn test_luhn_direct() {
        // 79927398713 is the classic Luhn example.
        let digits: Vec<u32> = "79927398713".chars().filter_map(|c| c.to_digit(10)).collect();
        assert!(luhn_valid(&digits));
        let digits: Vec<u32> = "79927398710".chars().filter_map(|c| c.to_digit(10)).collect();
        assert!(!luhn_valid(&digits));
    }
}

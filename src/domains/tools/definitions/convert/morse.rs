//! Morse code tool definition.
//!
//! Fixed table covering A-Z, 0-9, and common punctuation. Encoded letters
//! are separated by single spaces and words by ` / `.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::telemetry;
use crate::domains::tools::definitions::common::transform_result;
use crate::domains::tools::{TransformError, TransformResult};

const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

fn to_morse(c: char) -> Option<&'static str> {
    let upper = c.to_ascii_uppercase();
    MORSE_TABLE
        .iter()
        .find(|(letter, _)| *letter == upper)
        .map(|(_, code)| *code)
}

fn from_morse(code: &str) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|(_, entry)| *entry == code)
        .map(|(letter, _)| *letter)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MorseMode {
    #[default]
    Encode,
    Decode,
}

/// Parameters for the Morse code tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MorseParams {
    /// Plain text to encode, or dots-and-dashes to decode.
    #[schemars(description = "Input text")]
    pub input: String,

    #[schemars(description = "'encode' or 'decode' (default: encode)")]
    #[serde(default)]
    pub mode: MorseMode,
}

/// Morse code tool.
pub struct MorseTool;

impl MorseTool {
    pub const NAME: &'static str = "morse_codec";

    pub const DESCRIPTION: &'static str = "Translate text to Morse code (letters separated by spaces, words by '/') or decode Morse back to text.";

    pub fn transform(input: &str, mode: MorseMode) -> TransformResult<String> {
        match mode {
            MorseMode::Encode => Self::encode(input),
            MorseMode::Decode => Self::decode(input),
        }
    }

    fn encode(input: &str) -> TransformResult<String> {
        let mut codes: Vec<&str> = Vec::new();
        for word in input.split_whitespace() {
            if !codes.is_empty() {
                codes.push("/");
            }
            for c in word.chars() {
                match to_morse(c) {
                    Some(code) => codes.push(code),
                    None => {
                        return Err(TransformError::invalid_syntax(format!(
                            "Character '{c}' has no Morse encoding"
                        )));
                    }
                }
            }
        }
        Ok(codes.join(" "))
    }

    fn decode(input: &str) -> TransformResult<String> {
        let mut output = String::new();
        for token in input.split_whitespace() {
            if token == "/" {
                output.push(' ');
                continue;
            }
            match from_morse(token) {
                Some(letter) => output.push(letter),
                None => {
                    return Err(TransformError::invalid_syntax(format!(
                        "Unknown Morse sequence '{token}'"
                    )));
                }
            }
        }
        Ok(output)
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &MorseParams) -> CallToolResult {
        telemetry::tool_invoked(Self::NAME);
        transform_result(Self::transform(&params.input, params.mode))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params: MorseParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        Ok(super::super::common::http_response(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<MorseParams>(),
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
                let params: MorseParams =
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
    fn test_encode_sos() {
        let output = MorseTool::transform("SOS", MorseMode::Encode).unwrap();
        assert_eq!(output, "... --- ...");
    }

    #[test]
    fn test_encode_words_and_case_folding() {
        let output = MorseTool::transform("hello world", MorseMode::Encode).unwrap();
        assert_eq!(output, ".... . .-.. .-.. --- / .-- --- .-. .-.. -..");
    }

    #[test]
    fn test_decode() {
        let output =
            MorseTool::transform(".... .. / - .... . .-. .", MorseMode::Decode).unwrap();
        assert_eq!(output, "HI THERE");
    }

    #[test]
    fn test_round_trip_alphanumeric() {
        let encoded = MorseTool::transform("RUST 2024", MorseMode::Encode).unwrap();
        let decoded = MorseTool::transform(&encoded, MorseMode::Decode).unwrap();
        assert_eq!(decoded, "RUST 2024");
    }

    #[test]
    fn test_unknown_character_is_syntax_error() {
        let result = MorseTool::transform("héllo", MorseMode::Encode);
        assert!(matches!(
            result,
            Err(TransformError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_unknown_sequence_is_syntax_error() {
        let result = MorseTool::transform(".-.-.-.-.-", MorseMode::Decode);
        assert!(matches!(
            result,
            Err(TransformError::InvalidSyntax { .. })
        ));
    }
}

//! Quote-aware delimited-text scanning shared by the CSV tools.
//!
//! The scanner follows RFC-4180-style quoting without claiming full
//! standards compliance: a field wrapped in `"..."` may contain the
//! delimiter, embedded newlines, and doubled quotes (`""` unescapes to
//! `"`). Scalar fields that parse fully as numbers are coerced to JSON
//! numbers; everything else stays text.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Number, Value};

use crate::domains::tools::{TransformError, TransformResult};

/// Field delimiters accepted by the delimited-text tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
    Tab,
    Pipe,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
            Self::Tab => '\t',
            Self::Pipe => '|',
        }
    }
}

/// Parse delimited text into a sequence of records.
///
/// With `has_header == false`, synthetic names `column_1..column_n` are
/// assigned from the first row's field count. Empty lines are skipped.
pub fn parse_delimited(
    text: &str,
    delimiter: Delimiter,
    has_header: bool,
) -> TransformResult<Vec<Map<String, Value>>> {
    let mut rows = scan_rows(text, delimiter.as_char())?.into_iter();

    let Some(first) = rows.next() else {
        return Ok(Vec::new());
    };

    let mut records = Vec::new();
    let headers: Vec<String> = if has_header {
        first
    } else {
        let headers: Vec<String> = (1..=first.len()).map(|i| format!("column_{i}")).collect();
        records.push(build_record(&headers, first));
        headers
    };

    for row in rows {
        records.push(build_record(&headers, row));
    }

    Ok(records)
}

fn build_record(headers: &[String], fields: Vec<String>) -> Map<String, Value> {
    let mut record = Map::new();
    for (header, field) in headers.iter().zip(fields) {
        record.insert(header.clone(), coerce_scalar(field));
    }
    record
}

/// Coerce a scalar field to a JSON number when it parses fully as one.
fn coerce_scalar(field: String) -> Value {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Value::String(field);
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::Number(Number::from(int));
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        // Rejects inf/NaN spellings, which must stay text.
        if let Some(number) = Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    Value::String(field)
}

/// Split raw text into rows of fields, honoring quoting state.
fn scan_rows(text: &str, delimiter: char) -> TransformResult<Vec<Vec<String>>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                push_row(&mut rows, &mut row, &mut field);
            }
            '\n' => push_row(&mut rows, &mut row, &mut field),
            c if c == delimiter => row.push(std::mem::take(&mut field)),
            other => field.push(other),
        }
    }

    if in_quotes {
        return Err(TransformError::invalid_syntax(
            "Unterminated quoted field at end of input",
        ));
    }
    push_row(&mut rows, &mut row, &mut field);

    Ok(rows)
}

fn push_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, field: &mut String) {
    // A lone empty field on an otherwise empty line is a blank line; skip it.
    if row.is_empty() && field.is_empty() {
        return;
    }
    row.push(std::mem::take(field));
    rows.push(std::mem::take(row));
}

/// Serialize records back into delimited text.
///
/// The header row is the union of all record keys in first-seen order; a
/// field is quoted (doubling internal quotes) iff it contains the
/// delimiter, a quote character, or a line break. Absent keys render as
/// empty fields.
pub fn serialize_delimited(records: &[Map<String, Value>], delimiter: Delimiter) -> String {
    let delim = delimiter.as_char();

    let mut headers: Vec<&str> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| quote_field(h, delim))
            .collect::<Vec<_>>()
            .join(&delim.to_string()),
    );

    for record in records {
        let line = headers
            .iter()
            .map(|header| {
                record
                    .get(*header)
                    .map(render_scalar)
                    .unwrap_or_default()
            })
            .map(|field| quote_field(&field, delim))
            .collect::<Vec<_>>()
            .join(&delim.to_string());
        lines.push(line);
    }

    lines.join("\n")
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Nested structures flatten to compact JSON text.
        other => other.to_string(),
    }
}

fn quote_field(field: &str, delimiter: char) -> String {
    if field.contains(delimiter) || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_parse_with_header() {
        let records = parse_delimited("name,age\nAda,36\nGrace,45", Delimiter::Comma, true).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], json!("Ada"));
        assert_eq!(records[0]["age"], json!(36));
    }

    #[test]
    fn test_parse_without_header_synthesizes_columns() {
        let records = parse_delimited("Ada,36\nGrace,45", Delimiter::Comma, false).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["column_1"], json!("Ada"));
        assert_eq!(records[1]["column_2"], json!(45));
    }

    #[test]
    fn test_quoted_field_with_delimiter_and_newline() {
        let text = "name,notes\nAda,\"likes commas, and\nnewlines\"";
        let records = parse_delimited(text, Delimiter::Comma, true).unwrap();
        assert_eq!(records[0]["notes"], json!("likes commas, and\nnewlines"));
    }

    #[test]
    fn test_doubled_quote_unescapes() {
        let records = parse_delimited("q\n\"say \"\"hi\"\"\"", Delimiter::Comma, true).unwrap();
        assert_eq!(records[0]["q"], json!("say \"hi\""));
    }

    #[test]
    fn test_empty_lines_skipped() {
        let records =
            parse_delimited("name\n\nAda\n\n\nGrace\n", Delimiter::Comma, true).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_numeric_coercion_bounds() {
        let records =
            parse_delimited("a,b,c,d\n1,2.5,1e3,not4", Delimiter::Comma, true).unwrap();
        assert_eq!(records[0]["a"], json!(1));
        assert_eq!(records[0]["b"], json!(2.5));
        assert_eq!(records[0]["c"], json!(1000.0));
        assert_eq!(records[0]["d"], json!("not4"));
    }

    #[test]
    fn test_inf_stays_text() {
        let records = parse_delimited("a\ninf", Delimiter::Comma, true).unwrap();
        assert_eq!(records[0]["a"], json!("inf"));
    }

    #[test]
    fn test_unterminated_quote_is_invalid_syntax() {
        let result = parse_delimited("a\n\"open", Delimiter::Comma, true);
        assert!(matches!(
            result,
            Err(TransformError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_alternate_delimiters() {
        let records = parse_delimited("a;b\n1;2", Delimiter::Semicolon, true).unwrap();
        assert_eq!(records[0]["b"], json!(2));
        let records = parse_delimited("a|b\nx|y", Delimiter::Pipe, true).unwrap();
        assert_eq!(records[0]["a"], json!("x"));
    }

    #[test]
    fn test_serialize_union_header_first_seen_order() {
        let records = vec![
            record(&[("name", json!("Ada")), ("age", json!(36))]),
            record(&[("name", json!("Grace")), ("title", json!("RADM"))]),
        ];
        let text = serialize_delimited(&records, Delimiter::Comma);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("name,age,title"));
        assert_eq!(lines.next(), Some("Ada,36,"));
        assert_eq!(lines.next(), Some("Grace,,RADM"));
    }

    #[test]
    fn test_serialize_quotes_only_when_needed() {
        let records = vec![record(&[
            ("plain", json!("abc")),
            ("comma", json!("a,b")),
            ("quote", json!("say \"hi\"")),
        ])];
        let text = serialize_delimited(&records, Delimiter::Comma);
        let data_line = text.lines().nth(1).unwrap();
        assert_eq!(data_line, "abc,\"a,b\",\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_round_trip_clean_records() {
        // No delimiter/quote/newline in any field, so parse(serialize(R)) == R.
        let records = vec![
            record(&[("name", json!("Ada")), ("age", json!(36))]),
            record(&[("name", json!("Grace")), ("age", json!(45))]),
        ];
        let text = serialize_delimited(&records, Delimiter::Comma);
        let reparsed = parse_delimited(&text, Delimiter::Comma, true).unwrap();
        assert_eq!(reparsed, records);
    }
}

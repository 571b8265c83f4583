//! Pulls the structured selection list out of free-text model output.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{ParseError, SelectionRejection};

/// First fenced code block, language tag optional.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:json|JSON)?[ \t]*\r?\n?([\s\S]*?)\s*```").expect("valid regex")
});

/// Object keys under which a wrapped selection list is accepted.
const LIST_KEYS: [&str; 3] = ["recommendations", "restaurants", "selections"];

/// Key carrying the 1-based candidate ordinal.
const ORDINAL_KEY: &str = "number";

/// One entry of the model's answer. Only the ordinal and the narrative are
/// read; any echoed venue facts are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub ordinal: i64,
    pub highlights: Option<Vec<String>>,
    pub atmosphere: Option<String>,
    pub reason: Option<String>,
}

/// Returns the body of the first fenced block, or the whole reply trimmed
/// when there is none.
#[must_use]
pub fn structured_block(reply: &str) -> &str {
    FENCED_BLOCK
        .captures(reply)
        .and_then(|cap| cap.get(1))
        .map_or_else(|| reply.trim(), |m| m.as_str().trim())
}

/// Parses the reply into its raw list of entries.
///
/// # Errors
///
/// [`ParseError::NotJson`] when the block is not JSON, and
/// [`ParseError::NotASelectionList`] when it is JSON of the wrong shape.
pub fn selection_entries(reply: &str) -> Result<Vec<Value>, ParseError> {
    let value: Value = serde_json::from_str(structured_block(reply)).map_err(ParseError::NotJson)?;

    match value {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut map) => LIST_KEYS
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(entries)) => Some(entries),
                _ => None,
            })
            .ok_or(ParseError::NotASelectionList { found: "an object" }),
        other => Err(ParseError::NotASelectionList {
            found: json_kind(&other),
        }),
    }
}

/// Reads one entry. `position` is 1-based and only used in rejections.
///
/// # Errors
///
/// Returns the [`SelectionRejection`] describing why the entry is unusable.
pub fn read_selection(position: usize, entry: &Value) -> Result<ModelSelection, SelectionRejection> {
    let Value::Object(map) = entry else {
        return Err(SelectionRejection::NotAnObject { position });
    };

    let ordinal = match map.get(ORDINAL_KEY) {
        None | Some(Value::Null) => return Err(SelectionRejection::MissingOrdinal { position }),
        Some(raw) => parse_ordinal(raw).ok_or_else(|| SelectionRejection::NonNumericOrdinal {
            position,
            raw: raw_text(raw),
        })?,
    };

    Ok(ModelSelection {
        ordinal,
        highlights: map.get("highlights").and_then(string_list),
        atmosphere: map.get("atmosphere").and_then(non_blank_string),
        reason: map.get("reason").and_then(non_blank_string),
    })
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn parse_ordinal(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 1e15)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().trim_start_matches('#').parse().ok(),
        _ => None,
    }
}

fn raw_text(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Accepts a list of strings (blank items dropped) or a single string.
fn string_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        Value::String(_) => non_blank_string(value).map(|s| vec![s]),
        _ => None,
    }
}

fn non_blank_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

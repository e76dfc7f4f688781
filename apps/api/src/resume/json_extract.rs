//! Pulls the JSON object out of a free-text completion.
//!
//! Models sometimes wrap the object in prose or code fences despite being told
//! not to. The scan is simple: the first `{` and the last `}` are
//! taken as outer delimiters and everything between them is parsed strictly.
//! Braces are not balance-counted, so braces inside string values are fine,
//! but two separate objects (or a stray `}` in trailing prose) produce a
//! slice that fails to parse or covers the wrong span.

use thiserror::Error;

use crate::resume::models::ResumeRecord;

#[derive(Debug, Error)]
pub enum JsonExtractError {
    #[error("no JSON object found in completion")]
    NoObject,

    #[error("invalid JSON: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Returns the `[first '{', last '}']` slice of `raw`, if both exist in order.
fn outer_brace_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Best-effort extraction of a JSON object from model output.
///
/// The slice always starts with `{`, so a successful parse is an object.
pub fn extract_json(raw: &str) -> Result<ResumeRecord, JsonExtractError> {
    let slice = outer_brace_span(raw).ok_or(JsonExtractError::NoObject)?;
    Ok(serde_json::from_str::<ResumeRecord>(slice)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_extract_json_strips_surrounding_prose() {
        let record = extract_json("Here is the data: {\"name\": \"Jane\"} Thanks!").unwrap();
        assert_eq!(Value::Object(record), json!({"name": "Jane"}));
    }

    #[test]
    fn test_extract_json_pure_object() {
        let record = extract_json(r#"{"name": null, "skills": ["Go"]}"#).unwrap();
        assert!(record["name"].is_null());
        assert_eq!(record["skills"], json!(["Go"]));
    }

    #[test]
    fn test_extract_json_code_fenced() {
        let raw = "```json\n{\"email\": \"jane@x.com\"}\n```";
        let record = extract_json(raw).unwrap();
        assert_eq!(record["email"], "jane@x.com");
    }

    #[test]
    fn test_extract_json_nested_braces_in_strings() {
        let raw = r#"Sure: {"description": "Wrote {templated} configs", "education": [{"degree": "BSc"}]}"#;
        let record = extract_json(raw).unwrap();
        assert_eq!(record["description"], "Wrote {templated} configs");
        assert_eq!(record["education"][0]["degree"], "BSc");
    }

    #[test]
    fn test_extract_json_no_brace_is_error() {
        let err = extract_json("I could not find any resume data.").unwrap_err();
        assert!(matches!(err, JsonExtractError::NoObject));
    }

    #[test]
    fn test_extract_json_closing_before_opening_is_error() {
        let err = extract_json("} nothing here {").unwrap_err();
        assert!(matches!(err, JsonExtractError::NoObject));
    }

    #[test]
    fn test_extract_json_malformed_is_error() {
        let err = extract_json("{\"name\": \"Jane\",}").unwrap_err();
        assert!(matches!(err, JsonExtractError::Invalid(_)));
    }

    #[test]
    fn test_extract_json_two_objects_spans_both_and_fails() {
        let err = extract_json(r#"{"a": 1} and also {"b": 2}"#).unwrap_err();
        assert!(matches!(err, JsonExtractError::Invalid(_)));
    }

    #[test]
    fn test_extract_json_preserves_key_order() {
        let record = extract_json(r#"{"name": "Jane", "email": "j@x.com", "phone": null}"#).unwrap();
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "email", "phone"]);
    }
}

//! Field normalization applied to every record the model returns.
//!
//! Two rules, neither of which can fail:
//! 1. `skills` is deduplicated case-insensitively, keeping the first spelling.
//! 2. Website-like aliases collapse into a single `website` key.

use std::collections::HashSet;

use serde_json::Value;

use crate::resume::models::ResumeRecord;

/// Alias keys for the candidate's website, in priority order.
pub const WEBSITE_ALIASES: [&str; 8] = [
    "website",
    "portfolio",
    "linkedin",
    "Website",
    "Portfolio",
    "LinkedIn",
    "personal_website",
    "webpage",
];

pub const CANONICAL_WEBSITE: &str = "website";

/// Cleans a record in place and hands it back.
pub fn normalize(mut record: ResumeRecord) -> ResumeRecord {
    dedup_skills(&mut record);
    canonicalize_website(&mut record);
    record
}

/// Drops non-string, empty and repeated skills. Comparison is on the
/// trimmed, lowercased text; the kept entry is the trimmed first occurrence.
fn dedup_skills(record: &mut ResumeRecord) {
    let Some(Value::Array(skills)) = record.get_mut("skills") else {
        return;
    };

    let mut seen = HashSet::new();
    let unique: Vec<Value> = skills
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .map(|s| Value::String(s.to_string()))
        .collect();

    *skills = unique;
}

/// Moves the first present alias into `website`.
///
/// Only the first alias found is consulted. When its value is not a non-empty
/// string the record is left untouched, even if a later alias has a value.
fn canonicalize_website(record: &mut ResumeRecord) {
    let Some(first) = WEBSITE_ALIASES.iter().find(|k| record.contains_key(**k)) else {
        return;
    };

    let value = match record.get(*first) {
        Some(Value::String(s)) if !s.is_empty() => s.trim().to_string(),
        _ => return,
    };

    for alias in WEBSITE_ALIASES {
        record.shift_remove(alias);
    }
    record.insert(CANONICAL_WEBSITE.to_string(), Value::String(value));
}

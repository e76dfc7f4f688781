use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ErrorBody;

/// Loosely typed record as returned by the model.
///
/// Kept as an ordered JSON object rather than a struct: the model chooses the
/// key names (`website` vs `LinkedIn` vs `portfolio`) and normalization works
/// on whatever it sent.
pub type ResumeRecord = Map<String, Value>;

/// A single PDF received in a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedResume {
    pub filename: String,
    pub bytes: Bytes,
}

/// Headline fields shown next to a parsed record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResumeSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

impl ResumeSummary {
    pub fn from_record(record: &ResumeRecord) -> Self {
        let skills = record
            .get("skills")
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(|s| s.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: record.get("name").cloned(),
            email: record.get("email").cloned(),
            skills,
        }
    }
}

/// Result of running one uploaded document through the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    /// 1-based position in the upload batch.
    pub index: usize,
    pub filename: String,
    #[serde(flatten)]
    pub result: DocumentResult,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentResult {
    Parsed {
        download_name: String,
        summary: ResumeSummary,
        data: ResumeRecord,
    },
    Failed {
        error: ErrorBody,
    },
}

impl DocumentOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self.result, DocumentResult::Parsed { .. })
    }
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub documents: Vec<DocumentOutcome>,
}

/// Request body for `POST /api/v1/resumes/export`.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default = "default_index")]
    pub index: usize,
    pub data: ResumeRecord,
}

fn default_index() -> usize {
    1
}

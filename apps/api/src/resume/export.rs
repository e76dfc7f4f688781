//! Download naming and serialization for parsed records.

use chrono::{DateTime, Local};

use crate::resume::models::ResumeRecord;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `resume_data_<index>_<YYYYMMDD_HHMMSS>.json`
pub fn download_filename(index: usize, at: DateTime<Local>) -> String {
    format!("resume_data_{}_{}.json", index, at.format(TIMESTAMP_FORMAT))
}

/// Pretty-printed JSON, two-space indent.
pub fn to_pretty_json(record: &ResumeRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_download_filename_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(download_filename(1, at), "resume_data_1_20240307_090502.json");
        assert_eq!(download_filename(12, at), "resume_data_12_20240307_090502.json");
    }

    #[test]
    fn test_pretty_json_two_space_indent() {
        let record = json!({"name": "Jane", "skills": ["Go"]})
            .as_object()
            .cloned()
            .unwrap();
        let out = to_pretty_json(&record).unwrap();
        assert_eq!(
            out,
            "{\n  \"name\": \"Jane\",\n  \"skills\": [\n    \"Go\"\n  ]\n}"
        );
    }
}

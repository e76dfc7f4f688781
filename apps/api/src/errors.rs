use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::resume::json_extract::JsonExtractError;
use crate::resume::text_extractor::TextExtractionError;

/// Application-level error type.
///
/// Handlers return `Result<T, AppError>`; the batch pipeline turns the same
/// errors into per-document `failed` outcomes via [`AppError::to_body`].
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Text extraction failed: {0}")]
    Extraction(#[from] TextExtractionError),

    #[error("Upstream completion failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("Could not parse completion: {0}")]
    Parse(#[from] JsonExtractError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Wire shape of an error, shared by HTTP responses and batch outcomes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::Extraction(_) => "EXTRACTION_ERROR",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Parse(_) => "PARSE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Extraction(_) | AppError::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal errors are logged, not echoed.
    pub fn to_body(&self) -> ErrorBody {
        let message = match self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
            other => other.to_string(),
        };
        ErrorBody {
            code: self.code(),
            message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.to_body();

        (status, Json(json!({ "error": body }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_maps_to_service_unavailable() {
        let err = AppError::Config("GROQ_API_KEY not found".to_string());
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_parse_error_body_carries_message() {
        let err = AppError::Parse(JsonExtractError::NoObject);
        let body = err.to_body();
        assert_eq!(body.code, "PARSE_ERROR");
        assert!(body.message.contains("no JSON object"));
    }

    #[test]
    fn test_payload_too_large_status() {
        let err = AppError::PayloadTooLarge("upload exceeds MAX_UPLOAD_MB".to_string());
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.code(), "PAYLOAD_TOO_LARGE");
    }

    #[test]
    fn test_internal_error_message_is_redacted() {
        let err = AppError::Internal(anyhow::anyhow!("secret path /tmp/x"));
        let body = err.to_body();
        assert!(!body.message.contains("/tmp/x"));
    }
}

//! Axum route handlers for the Resume API.

use anyhow::Context;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Local;
use tracing::info;

use crate::errors::AppError;
use crate::resume::export::{download_filename, to_pretty_json};
use crate::resume::models::{BatchResponse, ExportRequest, UploadedResume};
use crate::resume::pipeline::process_batch;
use crate::state::AppState;

const MISSING_KEY_MESSAGE: &str = "GROQ_API_KEY not found in environment variables";

/// POST /api/v1/resumes/parse
///
/// Multipart upload of one or more PDFs. Every file part is processed in
/// order; each gets its own `parsed` or `failed` outcome in the response.
pub async fn handle_parse(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<BatchResponse>, AppError> {
    let completion = state
        .completion
        .clone()
        .ok_or_else(|| AppError::Config(MISSING_KEY_MESSAGE.to_string()))?;

    let uploads = read_uploads(&mut multipart).await?;
    if uploads.is_empty() {
        return Err(AppError::Validation("no PDF files were uploaded".to_string()));
    }
    info!("Received {} file(s)", uploads.len());

    let documents = process_batch(uploads, completion.as_ref()).await;
    let parsed = documents.iter().filter(|d| d.is_parsed()).count();
    info!("Parsed {parsed}/{} resume(s)", documents.len());

    Ok(Json(BatchResponse { documents }))
}

/// POST /api/v1/resumes/export
///
/// Returns a record as a downloadable `resume_data_<index>_<timestamp>.json`.
pub async fn handle_export(
    Json(request): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.index == 0 {
        return Err(AppError::Validation("index is 1-based".to_string()));
    }

    let filename = download_filename(request.index, Local::now());
    let body = to_pretty_json(&request.data).context("Failed to serialize resume record")?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

/// Collects every file part of the form. Plain text fields are ignored.
async fn read_uploads(multipart: &mut Multipart) -> Result<Vec<UploadedResume>, AppError> {
    let mut uploads = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(multipart_error)?;

        uploads.push(UploadedResume { filename, bytes });
    }

    Ok(uploads)
}

/// Separates the body limit being hit from a malformed form.
fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("upload exceeds the MAX_UPLOAD_MB limit".to_string())
    } else {
        AppError::Validation(e.body_text())
    }
}

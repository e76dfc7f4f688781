//! Resume pipeline — runs uploaded PDFs through extraction and normalization.
//!
//! Flow per document: temp file → extract_text → build_user_prompt →
//! completion → extract_json → normalize.
//!
//! Documents in a batch are processed one after another. A failure is
//! recorded on that document's outcome and the batch moves on; nothing is
//! retried and no partial record is kept.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use chrono::Local;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm_client::CompletionService;
use crate::resume::export::download_filename;
use crate::resume::json_extract::extract_json;
use crate::resume::models::{
    DocumentOutcome, DocumentResult, ResumeRecord, ResumeSummary, UploadedResume,
};
use crate::resume::normalize::normalize;
use crate::resume::prompts::{build_user_prompt, RESUME_EXTRACT_SYSTEM};
use crate::resume::text_extractor::extract_text;

const PDF_MAGIC: &[u8] = b"%PDF";

/// Extracts, completes, parses and normalizes a single PDF on disk.
pub async fn process_resume(
    pdf_path: &Path,
    completion: &dyn CompletionService,
) -> Result<ResumeRecord, AppError> {
    // PDF parsing is CPU-bound and synchronous.
    let path = pdf_path.to_path_buf();
    let text = tokio::task::spawn_blocking(move || extract_text(&path))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in text extraction: {e}"))
        })??;

    if text.trim().is_empty() {
        // Scanned PDFs land here. The model will most likely return nothing
        // parseable and the document fails at the JSON step.
        warn!("No extractable text in {}", pdf_path.display());
    }

    let prompt = build_user_prompt(&text);
    let output = completion.complete(RESUME_EXTRACT_SYSTEM, &prompt).await?;
    debug!("Completion length: {} chars", output.len());

    let record = extract_json(&output)?;
    Ok(normalize(record))
}

/// Processes every upload in order and reports one outcome per document.
pub async fn process_batch(
    uploads: Vec<UploadedResume>,
    completion: &dyn CompletionService,
) -> Vec<DocumentOutcome> {
    process_batch_in(uploads, completion, &std::env::temp_dir()).await
}

/// [`process_batch`] with the temp files written under `temp_dir`.
pub async fn process_batch_in(
    uploads: Vec<UploadedResume>,
    completion: &dyn CompletionService,
    temp_dir: &Path,
) -> Vec<DocumentOutcome> {
    let mut outcomes = Vec::with_capacity(uploads.len());

    for (i, upload) in uploads.into_iter().enumerate() {
        let index = i + 1;
        info!("Processing resume {index}: {}", upload.filename);

        let result = match process_upload(&upload, completion, temp_dir).await {
            Ok(record) => DocumentResult::Parsed {
                download_name: download_filename(index, Local::now()),
                summary: ResumeSummary::from_record(&record),
                data: record,
            },
            Err(e) => {
                warn!("Failed to process {}: {e}", upload.filename);
                DocumentResult::Failed { error: e.to_body() }
            }
        };

        outcomes.push(DocumentOutcome {
            index,
            filename: upload.filename,
            result,
        });
    }

    outcomes
}

async fn process_upload(
    upload: &UploadedResume,
    completion: &dyn CompletionService,
    temp_dir: &Path,
) -> Result<ResumeRecord, AppError> {
    ensure_pdf(upload)?;

    let temp = write_temp_pdf(upload, temp_dir)?;
    let result = process_resume(temp.path(), completion).await;

    // Removal failure is not the caller's problem.
    if let Err(e) = temp.close() {
        debug!("Could not remove temp file for {}: {e}", upload.filename);
    }

    result
}

/// Accepts uploads that either carry a `.pdf` name or start with the PDF header.
fn ensure_pdf(upload: &UploadedResume) -> Result<(), AppError> {
    let named_pdf = Path::new(&upload.filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if named_pdf || upload.bytes.starts_with(PDF_MAGIC) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "'{}' is not a PDF file",
            upload.filename
        )))
    }
}

fn write_temp_pdf(upload: &UploadedResume, dir: &Path) -> Result<NamedTempFile, AppError> {
    let mut temp = tempfile::Builder::new()
        .prefix("resume_")
        .suffix(".pdf")
        .tempfile_in(dir)
        .context("Failed to create temp file for upload")?;

    temp.write_all(&upload.bytes)
        .and_then(|_| temp.flush())
        .context("Failed to write upload to temp file")?;

    Ok(temp)
}

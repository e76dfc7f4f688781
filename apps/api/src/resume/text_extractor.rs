//! PDF text extraction.
//!
//! Page texts are concatenated in document order with nothing inserted
//! between them. No column reconstruction, no OCR: an image-only PDF comes
//! back as empty (or partial) text.
//!
//! `pdf_extract` can panic on malformed input instead of returning an error,
//! so every call goes through `catch_unwind`. These functions block; async
//! callers run them on `spawn_blocking`.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TextExtractionError {
    #[error("could not read PDF: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse PDF: {0}")]
    Pdf(String),

    #[error("PDF parser panicked (malformed document)")]
    Panicked,
}

/// Loads the PDF at `path` and returns its text.
pub fn extract_text(path: &Path) -> Result<String, TextExtractionError> {
    let bytes = std::fs::read(path)?;
    extract_text_from_mem(&bytes)
}

/// Same as [`extract_text`] for a PDF already in memory.
pub fn extract_text_from_mem(bytes: &[u8]) -> Result<String, TextExtractionError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    let pages = match result {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => return Err(TextExtractionError::Pdf(e.to_string())),
        Err(_) => return Err(TextExtractionError::Panicked),
    };

    debug!("Extracted text from {} page(s)", pages.len());
    Ok(pages.concat())
}

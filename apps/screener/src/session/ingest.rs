//! Uploaded bytes to plain resume text.
//!
//! PDFs are read page by page; blank pages are skipped and the rest joined
//! with a single space. Anything else is decoded as UTF-8 (lossy).

use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    PlainText,
}

/// Decides the upload format from the declared content type, the file name,
/// or the `%PDF` magic bytes, whichever says PDF first.
pub fn detect_format(content_type: Option<&str>, file_name: Option<&str>, data: &[u8]) -> ResumeFormat {
    let declared_pdf = content_type.is_some_and(|ct| ct.eq_ignore_ascii_case("application/pdf"));
    let named_pdf = file_name.is_some_and(|name| name.to_lowercase().ends_with(".pdf"));

    if declared_pdf || named_pdf || data.starts_with(PDF_MAGIC) {
        ResumeFormat::Pdf
    } else {
        ResumeFormat::PlainText
    }
}

/// Joins per-page text, dropping pages with no visible text.
pub fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads uploaded resume bytes into text.
pub async fn read_resume(format: ResumeFormat, data: Bytes) -> Result<String, AppError> {
    match format {
        ResumeFormat::PlainText => Ok(String::from_utf8_lossy(&data).into_owned()),
        ResumeFormat::Pdf => {
            // pdf-extract is CPU-bound and may panic on malformed files
            let pages = tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_from_mem_by_pages(&data)
            })
            .await
            .map_err(|e| {
                warn!("PDF extraction aborted: {e}");
                AppError::UnprocessableEntity("The PDF could not be read".to_string())
            })?
            .map_err(|e| AppError::UnprocessableEntity(format!("PDF extraction error: {e}")))?;

            debug!("Extracted {} PDF pages", pages.len());
            Ok(join_pages(pages))
        }
    }
}

//! PDF text extraction for uploaded files.

use tracing::warn;

use crate::errors::AppError;

/// Extracts plain text from an uploaded PDF, rejecting documents that yield
/// no text at all (scanned images, empty files).
pub fn extract_text(data: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(data).map_err(|e| {
        warn!("PDF text extraction failed: {e}");
        AppError::UnprocessableEntity("Failed to read the uploaded PDF".to_string())
    })?;

    if text.trim().is_empty() {
        return Err(AppError::NoTextExtracted);
    }

    Ok(text)
}

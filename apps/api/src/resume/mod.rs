//! Resume text extraction.
//!
//! Pages are flattened to one string in page order. Unreadable or image-only
//! PDFs yield an empty string rather than an error; start validation then
//! reports the resume as missing.

use bytes::Bytes;
use tracing::warn;

use crate::interview::conversation::ValidationError;

#[cfg(test)]
pub mod testing;

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Rejects uploads that are plainly not PDFs. Browsers sometimes send
/// `application/octet-stream`, so a `.pdf` file name is also accepted.
pub fn ensure_pdf(
    file_name: Option<&str>,
    content_type: Option<&str>,
) -> Result<(), ValidationError> {
    let type_ok = content_type
        .map(|ct| ct.eq_ignore_ascii_case(PDF_CONTENT_TYPE))
        .unwrap_or(false);
    let name_ok = file_name
        .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);

    if type_ok || name_ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidUpload(
            "The resume must be uploaded as a PDF".to_string(),
        ))
    }
}

/// Extracts plain text from PDF bytes on the blocking pool. The text is
/// passed on exactly as extracted, layout whitespace included.
pub async fn extract_resume_text(bytes: Bytes) -> String {
    let size = bytes.len();
    let result =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

    match result {
        Ok(Ok(text)) => accept_extracted(text, size),
        Ok(Err(e)) => {
            warn!("Failed to extract text from resume PDF ({size} bytes): {e}");
            String::new()
        }
        Err(e) => {
            warn!("Resume PDF extraction aborted ({size} bytes): {e}");
            String::new()
        }
    }
}

fn accept_extracted(text: String, size: usize) -> String {
    if text.trim().is_empty() {
        warn!("Resume PDF ({size} bytes) contained no extractable text");
    }
    text
}

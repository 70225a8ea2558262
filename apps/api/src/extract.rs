//! PDF text extraction, wrapped so callers always get a definite outcome.
//!
//! Extraction is delegated entirely to `pdf-extract`; there is no custom
//! parsing or layout inference here, and no OCR. A PDF whose pages yield
//! only whitespace is reported as `NoText` — the policy for scanned or
//! image-only documents.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("The PDF appears to be scanned or has no extractable text.")]
    NoText,

    #[error("Error extracting text from PDF: {0}")]
    Extraction(String),
}

/// Extracts the text of all pages of the PDF at `path`, page text in page
/// order. Never panics; library failures come back as
/// [`ExtractError::Extraction`].
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let text =
        pdf_extract::extract_text(path).map_err(|e| ExtractError::Extraction(e.to_string()))?;
    ensure_extractable(text)
}

/// Rejects empty or whitespace-only extraction results.
fn ensure_extractable(text: String) -> Result<String, ExtractError> {
    if text.trim().is_empty() {
        Err(ExtractError::NoText)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_text_is_rejected() {
        assert!(matches!(
            ensure_extractable("  \n\n \t ".to_string()),
            Err(ExtractError::NoText)
        ));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(
            ensure_extractable(String::new()),
            Err(ExtractError::NoText)
        ));
    }

    #[test]
    fn real_text_passes_through_unchanged() {
        let text = "Jane Doe\n\nSenior Engineer".to_string();
        assert_eq!(ensure_extractable(text.clone()).unwrap(), text);
    }

    #[test]
    fn missing_file_is_an_error_value_not_a_panic() {
        let err = extract_text(Path::new("/definitely/not/here.pdf")).unwrap_err();
        assert!(matches!(err, ExtractError::Extraction(_)));
    }

    #[test]
    fn non_pdf_input_is_an_error_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_a_resume.pdf");
        std::fs::write(&path, b"plain text pretending to be a PDF").unwrap();
        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Extraction(_)));
    }
}

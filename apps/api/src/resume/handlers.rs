//! Axum route handlers for the resume web app.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::info;

use crate::errors::AppError;
use crate::resume::{analyze_resume, html};
use crate::state::ResumeState;

/// GET /
pub async fn home() -> Html<&'static str> {
    Html(html::UPLOAD_PAGE)
}

/// POST /analyze/
///
/// Accepts exactly one uploaded PDF in the multipart field `resume`. The
/// upload is written into a per-request temp dir that is removed when this
/// handler returns, whatever the outcome. An unextractable upload renders
/// the extraction error into the results page instead of failing the
/// request with a generic fault.
pub async fn analyze_upload(
    State(state): State<ResumeState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {e}")))?
    {
        if field.name() == Some("resume") {
            let filename = field
                .file_name()
                .unwrap_or("resume.pdf")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, bytes.to_vec()));
        }
    }

    let (filename, bytes) = upload
        .ok_or_else(|| AppError::BadRequest("Missing 'resume' file field.".to_string()))?;

    // TempDir is dropped (and the directory removed) on every return path.
    let temp_dir = tempfile::tempdir()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create temp dir: {e}")))?;
    let pdf_path = temp_dir.path().join(sanitize_filename(&filename));
    std::fs::write(&pdf_path, &bytes)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to store upload: {e}")))?;

    info!("Analyzing uploaded resume {filename} ({} bytes)", bytes.len());

    match analyze_resume(&state.llm, &pdf_path).await {
        Ok(analysis) => Ok(Html(html::results_page(&analysis)).into_response()),
        Err(AppError::Extraction(e)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(html::results_page(&format!("Error: {e}"))),
        )
            .into_response()),
        Err(other) => Err(other),
    }
}

/// Keeps only the final path component of a client-supplied filename.
fn sanitize_filename(filename: &str) -> String {
    std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume.pdf")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_directory_components() {
        assert_eq!(sanitize_filename("../../etc/passwd.pdf"), "passwd.pdf");
        assert_eq!(sanitize_filename("resume.pdf"), "resume.pdf");
    }

    #[test]
    fn sanitize_falls_back_for_empty_names() {
        assert_eq!(sanitize_filename(""), "resume.pdf");
        assert_eq!(sanitize_filename(".."), "resume.pdf");
    }
}

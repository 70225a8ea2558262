//! Resume analysis: extract text from a PDF, send it to the completion
//! service with a fixed analysis prompt, return the analysis text. Used by
//! both the web app and the `resume-analyzer` CLI.

pub mod handlers;
pub mod html;
pub mod prompts;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::llm_client::CompletionClient;
use crate::state::ResumeState;

pub fn router(state: ResumeState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/analyze/", post(handlers::analyze_upload))
        .with_state(state)
}

/// Extraction happens first; if the PDF yields no text, no completion call
/// is made and the extraction error comes back to the caller.
pub async fn analyze_resume(llm: &CompletionClient, pdf_path: &Path) -> Result<String, AppError> {
    let resume_text = extract_text(pdf_path)?;
    let analysis = llm
        .complete(&prompts::resume_analysis_prompt(&resume_text))
        .await?;
    Ok(analysis)
}

/// The CLI output path: `<input-stem>_analysis.txt` in the working
/// directory, overwriting any previous run.
pub fn analysis_output_path(pdf_path: &Path) -> std::path::PathBuf {
    let stem = pdf_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    std::path::PathBuf::from(format!("{stem}_analysis.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_uses_input_stem_only() {
        assert_eq!(
            analysis_output_path(Path::new("/tmp/uploads/jane_doe.pdf")),
            std::path::PathBuf::from("jane_doe_analysis.txt")
        );
    }

    #[test]
    fn output_path_handles_missing_stem() {
        assert_eq!(
            analysis_output_path(Path::new("..")),
            std::path::PathBuf::from("resume_analysis.txt")
        );
    }
}

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::extract::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Both web apps render HTML, so failures surface as a small HTML error page
/// rather than a JSON envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Completion service error: {0}")]
    Llm(#[from] LlmError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Llm(e) => {
                tracing::error!("Completion service error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The text generation service could not complete the request.".to_string(),
                )
            }
            AppError::Extraction(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A storage error occurred.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        (status, Html(error_page(&message))).into_response()
    }
}

/// Minimal HTML wrapper for user-facing error text.
fn error_page(message: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
<head><title>Error</title></head>
<body>
    <h1>Something went wrong</h1>
    <p>{message}</p>
    <p><a href="/">&larr; Back</a></p>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_embeds_message() {
        let page = error_page("The PDF appears to be scanned or has no extractable text.");
        assert!(page.contains("no extractable text"));
        assert!(page.contains("<a href=\"/\">"));
    }

    #[test]
    fn llm_errors_map_to_bad_gateway() {
        let err = AppError::Llm(LlmError::EmptyResponse);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn extraction_errors_map_to_unprocessable() {
        let err = AppError::Extraction(ExtractError::NoText);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

use sqlx::PgPool;

use crate::llm_client::CompletionClient;

/// Shared state for the poem web app, injected into route handlers via
/// Axum extractors. Built once in `main`; there is no other shared
/// mutable state across requests.
#[derive(Clone)]
pub struct PoemState {
    pub db: PgPool,
    pub llm: CompletionClient,
    /// Flat-file poem log, appended alongside the database insert.
    pub log_path: std::path::PathBuf,
}

/// Shared state for the resume web app. No persistence; uploads live in
/// a per-request temp dir and are gone when the handler returns.
#[derive(Clone)]
pub struct ResumeState {
    pub llm: CompletionClient,
}

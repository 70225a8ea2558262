//! Axum route handlers for the poem web app.

use axum::{
    extract::State,
    response::Html,
    Form,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::poems::files::append_poem_log;
use crate::poems::html;
use crate::poems::prompts::poem_prompt;
use crate::poems::store::{insert_poem, list_poems};
use crate::state::PoemState;

#[derive(Debug, Deserialize)]
pub struct NameForm {
    pub name: String,
}

/// GET /
pub async fn home() -> Html<&'static str> {
    Html(html::HOME_PAGE)
}

/// POST /
///
/// received → prompted → completed → persisted → rendered. A completion
/// failure aborts before anything is persisted. The two persistence writes
/// (log append, then row insert) are independent best-effort writes with
/// no atomicity across them; a failed log append is logged and does not
/// block the insert.
pub async fn generate(
    State(state): State<PoemState>,
    Form(form): Form<NameForm>,
) -> Result<Html<String>, AppError> {
    let name = form.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("Please enter a name.".to_string()));
    }

    let poem = state.llm.complete(&poem_prompt(&name)).await?;
    let now = Utc::now();

    if let Err(e) = append_poem_log(&state.log_path, &name, &poem, now) {
        warn!("Poem log append failed: {e:#}");
    }
    insert_poem(&state.db, &name, &poem, now).await?;

    info!("Generated and stored poem for {name}");
    Ok(Html(html::poem_page(&name, &poem)))
}

/// GET /history
pub async fn history(State(state): State<PoemState>) -> Result<Html<String>, AppError> {
    let records = list_poems(&state.db).await?;
    Ok(Html(html::history_page(&records)))
}

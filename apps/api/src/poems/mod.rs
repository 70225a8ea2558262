//! Poem generation: the web app (form → poem → log + database → HTML) and
//! the batch CLI flow (names file → one poem file per name).

pub mod files;
pub mod handlers;
pub mod html;
pub mod prompts;
pub mod store;

use std::path::Path;

use anyhow::{anyhow, Result};
use axum::{routing::get, Router};
use chrono::Utc;

use crate::llm_client::CompletionClient;
use crate::state::PoemState;

pub fn router(state: PoemState) -> Router {
    Router::new()
        .route("/", get(handlers::home).post(handlers::generate))
        .route("/history", get(handlers::history))
        .with_state(state)
}

/// Generates one poem and writes it to `<out_dir>/<lower(name)>_poem.txt`.
pub async fn generate_poem_for_name(
    llm: &CompletionClient,
    out_dir: &Path,
    name: &str,
) -> Result<String> {
    let poem = llm.complete(&prompts::poem_prompt(name)).await?;
    let path = files::write_poem_file(out_dir, name, &poem, Utc::now())?;
    println!("Generated poem for {name} and saved to {}", path.display());
    Ok(poem)
}

/// Batch flow: reads the names file and runs the single-name flow for each
/// name in order, strictly sequentially. Aborts on the first failure and
/// reports it; earlier names' files are left in place.
pub async fn process_names_file(
    llm: &CompletionClient,
    names_path: &Path,
    out_dir: &Path,
) -> Result<usize> {
    let names = files::read_names(names_path)?;
    println!("Found {} names in {}", names.len(), names_path.display());

    for name in &names {
        generate_poem_for_name(llm, out_dir, name)
            .await
            .map_err(|e| anyhow!("Error processing file: {e:#}"))?;
    }

    println!("Successfully generated {} poems!", names.len());
    Ok(names.len())
}

//! Musebox: LLM-backed poem generation and résumé analysis.
//!
//! Four binaries share this library: two axum web apps (`poem-web`,
//! `resume-web`) and two CLIs (`batch-poems`, `resume-analyzer`). Text
//! generation is delegated to a hosted completion service and PDF text
//! extraction to `pdf-extract`; everything here is orchestration.

pub mod config;
pub mod db;
pub mod errors;
pub mod extract;
pub mod llm_client;
pub mod poems;
pub mod resume;
pub mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging for a binary. `RUST_LOG` wins when set;
/// otherwise the configured default level applies crate-wide.
pub fn init_tracing(rust_log: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), rust_log))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

//! Resume web app: upload a PDF résumé, get back an HTML page with the
//! model's analysis. Stateless; uploads never outlive their request.

use std::net::SocketAddr;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use musebox::config::Config;
use musebox::llm_client::{CompletionClient, DEFAULT_MODEL};
use musebox::resume;
use musebox::state::ResumeState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    musebox::init_tracing(&config.rust_log);

    info!("Starting resume web app v{}", env!("CARGO_PKG_VERSION"));

    let llm = CompletionClient::new(config.openai_api_key.clone());
    info!("Completion client initialized (model: {DEFAULT_MODEL})");

    let app = resume::router(ResumeState { llm })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

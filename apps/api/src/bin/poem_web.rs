//! Poem web app: a name form on `/`, generated poems persisted to both a
//! flat log file and Postgres, and a `/history` view of everything stored.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use musebox::config::Config;
use musebox::db::connect;
use musebox::llm_client::{CompletionClient, DEFAULT_MODEL};
use musebox::poems;
use musebox::state::PoemState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    musebox::init_tracing(&config.rust_log);

    info!("Starting poem web app v{}", env!("CARGO_PKG_VERSION"));

    let db = connect(config.require_database_url()?).await?;

    let llm = CompletionClient::new(config.openai_api_key.clone());
    info!("Completion client initialized (model: {DEFAULT_MODEL})");

    let state = PoemState {
        db,
        llm,
        log_path: PathBuf::from("poems.txt"),
    };

    let app = poems::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

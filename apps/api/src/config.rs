use anyhow::{Context, Result};

/// Application configuration loaded once at startup and injected into
/// whichever binary needs it. No globals; clients are built in `main`
/// and passed down (see `state.rs`).
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    /// Postgres connection string. Only the poem web app persists anything,
    /// so this is optional everywhere else.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            database_url: std::env::var("DATABASE_URL").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The database URL, required at poem web app startup.
    pub fn require_database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .context("Required environment variable 'DATABASE_URL' is not set")
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Connects to PostgreSQL and bootstraps the poems table.
/// The poem store is append-only: rows are inserted and scanned, never
/// updated or deleted, so the schema is a single flat table.
pub async fn connect(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS poems (
            id         UUID PRIMARY KEY,
            name       TEXT NOT NULL,
            poem       TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

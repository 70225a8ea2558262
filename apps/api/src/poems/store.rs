//! Database persistence for generated poems.
//!
//! The `poems` table is append-only: one insert per successful generation,
//! one full scan sorted by recency for the history page. No updates, no
//! deletes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PoemRecord {
    pub id: Uuid,
    pub name: String,
    pub poem: String,
    pub created_at: DateTime<Utc>,
}

pub async fn insert_poem(
    pool: &PgPool,
    name: &str,
    poem: &str,
    created_at: DateTime<Utc>,
) -> Result<PoemRecord, sqlx::Error> {
    let record = PoemRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        poem: poem.to_string(),
        created_at,
    };

    sqlx::query("INSERT INTO poems (id, name, poem, created_at) VALUES ($1, $2, $3, $4)")
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.poem)
        .bind(record.created_at)
        .execute(pool)
        .await?;

    Ok(record)
}

/// All stored poems, newest first.
pub async fn list_poems(pool: &PgPool) -> Result<Vec<PoemRecord>, sqlx::Error> {
    sqlx::query_as("SELECT id, name, poem, created_at FROM poems ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

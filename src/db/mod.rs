// Database access layer (SQLite via sqlx).

use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// One persisted click counter. `clicks` is at least 1 once the row exists.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GameClick {
    pub game_id: String,
    pub clicks: i64,
}

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        let db = Self { pool };
        db.run_migrations().await?;
        Ok(db)
    }

    async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS game_clicks (
                game_id TEXT PRIMARY KEY,
                clicks INTEGER NOT NULL DEFAULT 0
            )
        "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Record one click for `game_id`, creating the row on first use.
    ///
    /// A single upsert statement, so concurrent clicks on the same id never
    /// lose an increment.
    pub async fn record_click(&self, game_id: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO game_clicks (game_id, clicks) VALUES (?, 1)
            ON CONFLICT(game_id) DO UPDATE SET clicks = clicks + 1
        "#,
        )
        .bind(game_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// All counters, most-clicked first. Ties order by id ascending.
    pub async fn all_counters(&self) -> Result<Vec<GameClick>, sqlx::Error> {
        let rows = sqlx::query_as::<_, GameClick>(
            "SELECT game_id, clicks FROM game_clicks ORDER BY clicks DESC, game_id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

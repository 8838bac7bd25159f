use anyhow::Result;
use sqlx::{Sqlite, SqlitePool, migrate::MigrateDatabase, sqlite::SqlitePoolOptions};
use std::path::Path;
use tokio::fs;
use tracing::info;

pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure the directory exists
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let db_url = format!("sqlite://{}", db_path.display());

    // Create database if it doesn't exist
    if !Sqlite::database_exists(&db_url).await? {
        info!(path = %db_path.display(), "creating session database");
        Sqlite::create_database(&db_url).await?;
    }

    // Create connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

pub async fn init_test_database() -> Result<SqlitePool> {
    // Use in-memory database for tests
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_test_database() {
        let pool = init_test_database().await.unwrap();

        let tables = sqlx::query_scalar::<_, String>(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='kv_entries'",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(tables, vec!["kv_entries".to_string()]);
    }
}

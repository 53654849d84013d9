//! Database connection pool
//!
//! The site runs against a single embedded SQLite database file. The pool is
//! opened explicitly at startup, handed to the stores, and closed explicitly
//! on shutdown.

use anyhow::{Context, Result};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// SQLite connection pool wrapper with an explicit open/close lifecycle.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a connection pool for the given database path or URL.
    ///
    /// The parent directory is created if missing, and the database file is
    /// created on first connect.
    pub async fn connect(url: &str) -> Result<Self> {
        // Ensure the database directory exists for file-based SQLite
        if !url.starts_with(":memory:") && !url.starts_with("sqlite::memory:") {
            let path = if url.starts_with("sqlite:") {
                url.trim_start_matches("sqlite:")
            } else {
                url
            };

            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create database directory: {:?}", parent)
                    })?;
                }
            }
        }

        // Build the connection URL with create mode for file-based databases
        let connection_url = if url.starts_with("sqlite:") {
            if url.contains('?') {
                url.to_string()
            } else {
                format!("{}?mode=rwc", url)
            }
        } else if url == ":memory:" {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite:{}?mode=rwc", url)
        };

        // An in-memory database exists per connection; cap the pool at one
        // so every query sees the same schema.
        let max_connections = if connection_url.contains(":memory:") { 1 } else { 20 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&connection_url)
            .await
            .with_context(|| format!("Failed to connect to SQLite database: {}", url))?;

        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
            .await
            .context("Failed to enable foreign keys")?;

        Ok(Self { pool })
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check if the database connection is healthy
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("Database ping failed")?;
        Ok(())
    }

    /// Close the connection pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Create an in-memory database pool for testing
pub async fn connect_test_pool() -> Result<SqlitePool> {
    let db = Database::connect(":memory:").await?;
    Ok(db.pool().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_pool_creation() {
        let db = Database::connect(":memory:").await.expect("Failed to connect");
        db.ping().await.expect("Ping should succeed");
    }

    #[tokio::test]
    async fn test_file_pool_creation() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");

        let db = Database::connect(&db_path.to_string_lossy())
            .await
            .expect("Failed to connect");
        db.ping().await.expect("Ping should succeed");

        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_nested_directory_creation() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("nested").join("dir").join("test.db");

        let db = Database::connect(&db_path.to_string_lossy())
            .await
            .expect("Failed to connect");
        db.ping().await.expect("Ping should succeed");

        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_pool_close() {
        let db = Database::connect(":memory:").await.expect("Failed to connect");
        db.close().await;
    }
}

//! Database migrations
//!
//! Code-based migrations for the site's SQLite schema. All migrations are
//! embedded as SQL strings so the binary carries its own schema; applied
//! versions are tracked in a `_migrations` table.
//!
//! # Usage
//!
//! ```ignore
//! let db = Database::connect(&config.database.url).await?;
//! migrations::run_migrations(db.pool()).await?;
//! ```

use anyhow::{Context, Result};
use sqlx::{Row, SqlitePool};

/// A database migration
#[derive(Debug, Clone)]
pub struct Migration {
    /// Migration version number (must be unique and sequential)
    pub version: i32,
    /// Human-readable migration name
    pub name: &'static str,
    /// SQL statements to apply
    pub up: &'static str,
}

/// All migrations for the site, in order.
pub const MIGRATIONS: &[Migration] = &[
    // Migration 1: Create users table.
    // Email uniqueness is enforced here; the registration pre-check alone
    // cannot hold under concurrent inserts.
    Migration {
        version: 1,
        name: "create_users",
        up: r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email VARCHAR(100) NOT NULL UNIQUE,
                password VARCHAR(30) NOT NULL,
                name VARCHAR(100) NOT NULL,
                date_joined TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            );
            CREATE INDEX IF NOT EXISTS idx_users_email ON users(email);
        "#,
    },
    // Migration 2: Create articles table
    Migration {
        version: 2,
        name: "create_articles",
        up: r#"
            CREATE TABLE IF NOT EXISTS articles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title VARCHAR(200) NOT NULL,
                subtitle VARCHAR(500) NOT NULL,
                content TEXT NOT NULL,
                category VARCHAR(50) NOT NULL,
                author VARCHAR(100) NOT NULL DEFAULT 'Climate Team',
                date_created TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            );
            CREATE INDEX IF NOT EXISTS idx_articles_category ON articles(category);
            CREATE INDEX IF NOT EXISTS idx_articles_date_created ON articles(date_created);
        "#,
    },
];

/// Run all pending migrations.
///
/// Returns the number of migrations applied.
pub async fn run_migrations(pool: &SqlitePool) -> Result<usize> {
    create_migrations_table(pool).await?;

    let applied = applied_versions(pool).await?;

    let mut count = 0;

    for migration in MIGRATIONS {
        if !applied.contains(&migration.version) {
            tracing::info!(
                "Applying migration {}: {}",
                migration.version,
                migration.name
            );
            apply_migration(pool, migration)
                .await
                .with_context(|| format!("Failed to apply migration: {}", migration.name))?;
            count += 1;
        }
    }

    if count > 0 {
        tracing::info!("Applied {} migration(s)", count);
    } else {
        tracing::debug!("No pending migrations");
    }

    Ok(count)
}

async fn create_migrations_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS _migrations (
            version INTEGER PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            applied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create migrations table")?;

    Ok(())
}

async fn applied_versions(pool: &SqlitePool) -> Result<Vec<i32>> {
    let rows = sqlx::query("SELECT version FROM _migrations ORDER BY version")
        .fetch_all(pool)
        .await
        .context("Failed to read applied migrations")?;

    Ok(rows.iter().map(|row| row.get::<i32, _>("version")).collect())
}

async fn apply_migration(pool: &SqlitePool, migration: &Migration) -> Result<()> {
    // SQLite executes one statement per call; split on semicolons.
    for statement in migration.up.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to execute statement: {}", statement))?;
    }

    sqlx::query("INSERT INTO _migrations (version, name) VALUES (?, ?)")
        .bind(migration.version)
        .bind(migration.name)
        .execute(pool)
        .await
        .context("Failed to record migration")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_test_pool;

    #[tokio::test]
    async fn test_migrations_apply_on_fresh_database() {
        let pool = connect_test_pool().await.expect("Failed to create test pool");

        let count = run_migrations(&pool).await.expect("Failed to run migrations");
        assert_eq!(count, MIGRATIONS.len());

        // Both tables exist and are queryable
        sqlx::query("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .expect("users table should exist");
        sqlx::query("SELECT COUNT(*) FROM articles")
            .fetch_one(&pool)
            .await
            .expect("articles table should exist");
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = connect_test_pool().await.expect("Failed to create test pool");

        let first = run_migrations(&pool).await.expect("Failed to run migrations");
        let second = run_migrations(&pool).await.expect("Failed to re-run migrations");

        assert_eq!(first, MIGRATIONS.len());
        assert_eq!(second, 0);
    }

    #[tokio::test]
    async fn test_email_unique_constraint_enforced() {
        let pool = connect_test_pool().await.expect("Failed to create test pool");
        run_migrations(&pool).await.expect("Failed to run migrations");

        sqlx::query("INSERT INTO users (email, password, name) VALUES (?, ?, ?)")
            .bind("dup@example.com")
            .bind("secret")
            .bind("First")
            .execute(&pool)
            .await
            .expect("First insert should succeed");

        let result = sqlx::query("INSERT INTO users (email, password, name) VALUES (?, ?, ?)")
            .bind("dup@example.com")
            .bind("other")
            .bind("Second")
            .execute(&pool)
            .await;

        assert!(result.is_err(), "Duplicate email should violate UNIQUE");
    }
}

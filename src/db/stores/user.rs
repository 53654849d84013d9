//! User store
//!
//! Database operations for users.
//!
//! This module provides:
//! - `UserStore` trait defining the interface for user data access
//! - `SqlxUserStore` implementing the trait over the SQLite pool
//!
//! The `UNIQUE` constraint on email is the authoritative uniqueness guard;
//! callers use [`is_unique_violation`] to tell a duplicate-email insert apart
//! from other database failures.

use crate::models::{NewUser, User};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

/// User store trait
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with a unique violation on duplicate email.
    async fn insert(&self, new_user: &NewUser) -> Result<User>;

    /// Get user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// List every user in storage order
    async fn list_all(&self) -> Result<Vec<User>>;

    /// Count total users
    async fn count(&self) -> Result<i64>;
}

/// SQLx-based user store implementation
pub struct SqlxUserStore {
    pool: SqlitePool,
}

impl SqlxUserStore {
    /// Create a new SQLx user store
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a boxed store for use with dependency injection
    pub fn boxed(pool: SqlitePool) -> Arc<dyn UserStore> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl UserStore for SqlxUserStore {
    async fn insert(&self, new_user: &NewUser) -> Result<User> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO users (email, password, name, date_joined)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&new_user.email)
        .bind(&new_user.password)
        .bind(&new_user.name)
        .bind(now)
        .execute(&self.pool)
        .await
        .context("Failed to insert user")?;

        let id = result.last_insert_rowid();

        Ok(User {
            id,
            email: new_user.email.clone(),
            password: new_user.password.clone(),
            name: new_user.name.clone(),
            date_joined: now,
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password, name, date_joined
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to get user by email")?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, email, password, name, date_joined
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list users")?;

        rows.iter().map(row_to_user).collect()
    }

    async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM users")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count users")?;

        Ok(row.get("count"))
    }
}

fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User> {
    Ok(User {
        id: row.get("id"),
        email: row.get("email"),
        password: row.get("password"),
        name: row.get("name"),
        date_joined: row.get("date_joined"),
    })
}

/// Check whether an error from a store operation is a unique-constraint
/// violation (e.g. a racing duplicate-email insert).
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

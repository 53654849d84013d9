//! Article store
//!
//! Database operations for articles.
//!
//! This module provides:
//! - `ArticleStore` trait defining the interface for article data access
//! - `SqlxArticleStore` implementing the trait over the SQLite pool
//!
//! Every listing shares one ordering: `date_created DESC, id DESC`, so rows
//! inserted in the same instant come back newest-insert first.

use crate::models::{Article, CategoryFilter, CreateArticleInput, DEFAULT_AUTHOR};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

/// Article store trait
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Insert a new article, applying defaults for omitted author/timestamp
    async fn insert(&self, input: &CreateArticleInput) -> Result<Article>;

    /// Get article by ID
    async fn get_by_id(&self, id: i64) -> Result<Option<Article>>;

    /// List up to `limit` articles, newest first
    async fn list_recent(&self, limit: i64) -> Result<Vec<Article>>;

    /// List articles matching the category filter, newest first
    async fn list_by_category(&self, filter: &CategoryFilter) -> Result<Vec<Article>>;

    /// List up to `limit` articles sharing `category`, excluding one id
    async fn list_related(&self, category: &str, exclude_id: i64, limit: i64)
        -> Result<Vec<Article>>;

    /// Count all articles
    async fn count(&self) -> Result<i64>;
}

/// SQLx-based article store implementation
pub struct SqlxArticleStore {
    pool: SqlitePool,
}

impl SqlxArticleStore {
    /// Create a new SQLx article store
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a boxed store for use with dependency injection
    pub fn boxed(pool: SqlitePool) -> Arc<dyn ArticleStore> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl ArticleStore for SqlxArticleStore {
    async fn insert(&self, input: &CreateArticleInput) -> Result<Article> {
        let author = input
            .author
            .clone()
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());
        let date_created = input.date_created.unwrap_or_else(Utc::now);

        let result = sqlx::query(
            r#"
            INSERT INTO articles (title, subtitle, content, category, author, date_created)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(&input.subtitle)
        .bind(&input.content)
        .bind(&input.category)
        .bind(&author)
        .bind(date_created)
        .execute(&self.pool)
        .await
        .context("Failed to insert article")?;

        let id = result.last_insert_rowid();

        Ok(Article {
            id,
            title: input.title.clone(),
            subtitle: input.subtitle.clone(),
            content: input.content.clone(),
            category: input.category.clone(),
            author,
            date_created,
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Article>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, subtitle, content, category, author, date_created
            FROM articles
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to get article by ID")?;

        match row {
            Some(row) => Ok(Some(row_to_article(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Article>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, subtitle, content, category, author, date_created
            FROM articles
            ORDER BY date_created DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list recent articles")?;

        rows.iter().map(row_to_article).collect()
    }

    async fn list_by_category(&self, filter: &CategoryFilter) -> Result<Vec<Article>> {
        let rows = match filter {
            CategoryFilter::All => {
                sqlx::query(
                    r#"
                    SELECT id, title, subtitle, content, category, author, date_created
                    FROM articles
                    ORDER BY date_created DESC, id DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
            CategoryFilter::Named(category) => {
                sqlx::query(
                    r#"
                    SELECT id, title, subtitle, content, category, author, date_created
                    FROM articles
                    WHERE category = ?
                    ORDER BY date_created DESC, id DESC
                    "#,
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await
            }
        }
        .context("Failed to list articles by category")?;

        rows.iter().map(row_to_article).collect()
    }

    async fn list_related(
        &self,
        category: &str,
        exclude_id: i64,
        limit: i64,
    ) -> Result<Vec<Article>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, subtitle, content, category, author, date_created
            FROM articles
            WHERE category = ? AND id != ?
            ORDER BY date_created DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(category)
        .bind(exclude_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list related articles")?;

        rows.iter().map(row_to_article).collect()
    }

    async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM articles")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count articles")?;

        Ok(row.get("count"))
    }
}

fn row_to_article(row: &sqlx::sqlite::SqliteRow) -> Result<Article> {
    Ok(Article {
        id: row.get("id"),
        title: row.get("title"),
        subtitle: row.get("subtitle"),
        content: row.get("content"),
        category: row.get("category"),
        author: row.get("author"),
        date_created: row.get("date_created"),
    })
}

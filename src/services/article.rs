//! Article service
//!
//! Read and write operations over the article store, shaped for the pages
//! the site serves.

use crate::db::stores::ArticleStore;
use crate::models::{Article, CategoryFilter, CreateArticleInput};
use anyhow::Result;
use std::sync::Arc;

/// Number of articles featured on the front page
const FEATURED_LIMIT: i64 = 3;

/// Number of related articles shown on a detail page
const RELATED_LIMIT: i64 = 3;

/// An article together with others in the same category
#[derive(Debug, Clone)]
pub struct ArticleDetail {
    pub article: Article,
    pub related: Vec<Article>,
}

/// Article service
pub struct ArticleService {
    store: Arc<dyn ArticleStore>,
}

impl ArticleService {
    /// Create a new article service
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    /// The most recent articles featured on the front page
    pub async fn front_page(&self) -> Result<Vec<Article>> {
        self.store.list_recent(FEATURED_LIMIT).await
    }

    /// All articles matching the category filter, newest first
    pub async fn list(&self, filter: &CategoryFilter) -> Result<Vec<Article>> {
        self.store.list_by_category(filter).await
    }

    /// One article plus up to three others sharing its category.
    ///
    /// Returns `None` when no article has the given id.
    pub async fn detail(&self, id: i64) -> Result<Option<ArticleDetail>> {
        let article = match self.store.get_by_id(id).await? {
            Some(article) => article,
            None => return Ok(None),
        };

        let related = self
            .store
            .list_related(&article.category, article.id, RELATED_LIMIT)
            .await?;

        Ok(Some(ArticleDetail { article, related }))
    }

    /// Every article, newest first (the admin listing)
    pub async fn list_all(&self) -> Result<Vec<Article>> {
        self.store.list_by_category(&CategoryFilter::All).await
    }

    /// Insert a new article and return the stored row
    pub async fn create(&self, input: CreateArticleInput) -> Result<Article> {
        self.store.insert(&input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::stores::SqlxArticleStore;
    use crate::db::{connect_test_pool, migrations};
    use chrono::{Duration, Utc};

    async fn setup_service() -> ArticleService {
        let pool = connect_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        ArticleService::new(SqlxArticleStore::boxed(pool))
    }

    fn test_input(title: &str, category: &str) -> CreateArticleInput {
        CreateArticleInput::new(
            title.to_string(),
            format!("Subtitle for {}", title),
            format!("Content for {}", title),
            category.to_string(),
        )
    }

    #[tokio::test]
    async fn test_front_page_caps_at_three() {
        let service = setup_service().await;

        let base = Utc::now();
        for i in 1..=5 {
            let mut input = test_input(&format!("Article {}", i), "Science");
            input.date_created = Some(base + Duration::seconds(i));
            service.create(input).await.expect("Failed to create");
        }

        let featured = service.front_page().await.expect("Failed to list");

        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].title, "Article 5");
    }

    #[tokio::test]
    async fn test_front_page_on_empty_store() {
        let service = setup_service().await;

        let featured = service.front_page().await.expect("Failed to list");

        assert!(featured.is_empty());
    }

    #[tokio::test]
    async fn test_detail_includes_related_from_same_category() {
        let service = setup_service().await;

        let a = service.create(test_input("A", "Solutions")).await.unwrap();
        let b = service.create(test_input("B", "Solutions")).await.unwrap();
        service.create(test_input("C", "Science")).await.unwrap();

        let detail = service
            .detail(a.id)
            .await
            .expect("Failed to fetch detail")
            .expect("Article should exist");

        assert_eq!(detail.article.id, a.id);
        assert_eq!(detail.related.len(), 1);
        assert_eq!(detail.related[0].id, b.id);
    }

    #[tokio::test]
    async fn test_detail_unknown_id_is_none() {
        let service = setup_service().await;

        let detail = service.detail(404).await.expect("Failed to fetch detail");

        assert!(detail.is_none());
    }

    #[tokio::test]
    async fn test_created_article_is_immediately_retrievable() {
        let service = setup_service().await;

        let created = service
            .create(test_input("Fresh", "Impact").with_author("Someone".to_string()))
            .await
            .expect("Failed to create");

        let detail = service
            .detail(created.id)
            .await
            .expect("Failed to fetch detail")
            .expect("Article should exist");

        assert_eq!(detail.article.title, "Fresh");
        assert_eq!(detail.article.author, "Someone");
    }

    #[tokio::test]
    async fn test_list_all_is_newest_first() {
        let service = setup_service().await;

        let base = Utc::now();
        for i in 1..=3 {
            let mut input = test_input(&format!("Article {}", i), "Science");
            input.date_created = Some(base + Duration::seconds(i));
            service.create(input).await.expect("Failed to create");
        }

        let all = service.list_all().await.expect("Failed to list");

        assert_eq!(all.len(), 3);
        assert_eq!(all[0].title, "Article 3");
        assert_eq!(all[2].title, "Article 1");
    }
}

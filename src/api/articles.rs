//! Public article endpoints
//!
//! - GET / - front page with the three most recent articles
//! - GET /articles - listing, optionally filtered by category
//! - GET /article/{id} - detail page with related articles

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::api::common::{ApiError, AppState};
use crate::api::responses::{ArticleDetailPage, ArticleListPage, FrontPage};
use crate::models::CategoryFilter;

/// Query parameters for the article listing
#[derive(Debug, Deserialize)]
pub struct ListArticlesQuery {
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "all".to_string()
}

/// GET / - front page
pub async fn front_page(State(state): State<AppState>) -> Result<Json<FrontPage>, ApiError> {
    let articles = state
        .articles
        .front_page()
        .await
        .map_err(|e| ApiError::internal_error(e.to_string()))?;

    Ok(Json(FrontPage {
        articles: articles.into_iter().map(Into::into).collect(),
    }))
}

/// GET /articles - article listing, filtered by category
///
/// The query value is echoed back as `current_category` so the view can mark
/// the active filter.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ListArticlesQuery>,
) -> Result<Json<ArticleListPage>, ApiError> {
    let filter = CategoryFilter::parse(&query.category);

    let articles = state
        .articles
        .list(&filter)
        .await
        .map_err(|e| ApiError::internal_error(e.to_string()))?;

    Ok(Json(ArticleListPage {
        articles: articles.into_iter().map(Into::into).collect(),
        current_category: query.category,
    }))
}

/// GET /article/{id} - article detail with up to three related articles
pub async fn article_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArticleDetailPage>, ApiError> {
    let detail = state
        .articles
        .detail(id)
        .await
        .map_err(|e| ApiError::internal_error(e.to_string()))?
        .ok_or_else(|| ApiError::not_found(format!("Article not found: {}", id)))?;

    Ok(Json(ArticleDetailPage {
        article: detail.article.into(),
        related: detail.related.into_iter().map(Into::into).collect(),
    }))
}

//! Admin endpoints
//!
//! - GET /admin - every article, newest first
//! - GET/POST /create_article - the article creation form and its action
//!
//! None of these verify the caller. Login only redirects here; an
//! unauthenticated request is served the same way.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;

use crate::api::common::{ApiError, AppState};
use crate::api::responses::{AdminPage, StaticPage};
use crate::models::CreateArticleInput;

/// Form fields for creating an article
#[derive(Debug, Deserialize)]
pub struct CreateArticleForm {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub category: String,
    pub author: String,
}

/// GET /admin - full article listing, newest first
pub async fn admin_page(State(state): State<AppState>) -> Result<Json<AdminPage>, ApiError> {
    let articles = state
        .articles
        .list_all()
        .await
        .map_err(|e| ApiError::internal_error(e.to_string()))?;

    Ok(Json(AdminPage {
        articles: articles.into_iter().map(Into::into).collect(),
    }))
}

/// GET /create_article - blank creation form payload
pub async fn create_article_page() -> Json<StaticPage> {
    Json(StaticPage::new("create_article", "Create Article"))
}

/// POST /create_article - insert an article and return to the admin listing
///
/// All fields come straight from the form; no emptiness check is applied.
pub async fn create_article(
    State(state): State<AppState>,
    Form(form): Form<CreateArticleForm>,
) -> Result<Response, ApiError> {
    let input = CreateArticleInput::new(form.title, form.subtitle, form.content, form.category)
        .with_author(form.author);

    state
        .articles
        .create(input)
        .await
        .map_err(|e| ApiError::internal_error(e.to_string()))?;

    Ok(Redirect::to("/admin").into_response())
}

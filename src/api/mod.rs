//! API layer - HTTP handlers and routing
//!
//! One explicit routing table maps every (path, method) pair to its handler.
//! Handlers return page-data payloads for an external view layer, or
//! redirects for the form actions.

pub mod admin;
pub mod articles;
pub mod auth;
pub mod common;
pub mod responses;
pub mod site;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub use common::{ApiError, AppState};

/// Build the site router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(articles::front_page))
        .route("/articles", get(articles::list_articles))
        .route("/article/{id}", get(articles::article_detail))
        .route("/about", get(site::about))
        .route("/contact", get(site::contact))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/admin", get(admin::admin_page))
        .route(
            "/create_article",
            get(admin::create_article_page).post(admin::create_article),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

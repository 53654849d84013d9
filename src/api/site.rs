//! Static site pages
//!
//! About and contact carry no data from the store; the payload only names
//! the page for the view layer.

use axum::Json;

use crate::api::responses::StaticPage;

/// GET /about
pub async fn about() -> Json<StaticPage> {
    Json(StaticPage::new("about", "About"))
}

/// GET /contact
pub async fn contact() -> Json<StaticPage> {
    Json(StaticPage::new("contact", "Contact"))
}

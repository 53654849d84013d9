//! Page payload types
//!
//! Every handler answers with one of these payloads; an external view layer
//! turns them into HTML. Timestamps are serialized as RFC 3339 strings.

use serde::{Deserialize, Serialize};

/// An article as it appears in any payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub category: String,
    pub author: String,
    pub date_created: String,
}

impl From<crate::models::Article> for ArticleResponse {
    fn from(article: crate::models::Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            subtitle: article.subtitle,
            content: article.content,
            category: article.category,
            author: article.author,
            date_created: article.date_created.to_rfc3339(),
        }
    }
}

/// Front page: the featured articles
#[derive(Debug, Serialize, Deserialize)]
pub struct FrontPage {
    pub articles: Vec<ArticleResponse>,
}

/// Article listing page, with the filter echoed back
#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleListPage {
    pub articles: Vec<ArticleResponse>,
    pub current_category: String,
}

/// Article detail page with related articles
#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleDetailPage {
    pub article: ArticleResponse,
    pub related: Vec<ArticleResponse>,
}

/// Admin listing page
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminPage {
    pub articles: Vec<ArticleResponse>,
}

/// Login/registration page, optionally carrying a user-facing error message
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthPage {
    pub fn empty() -> Self {
        Self { error: None }
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

/// Static page payload (about, contact, blank forms)
#[derive(Debug, Serialize, Deserialize)]
pub struct StaticPage {
    pub page: String,
    pub title: String,
}

impl StaticPage {
    pub fn new(page: &str, title: &str) -> Self {
        Self {
            page: page.to_string(),
            title: title.to_string(),
        }
    }
}

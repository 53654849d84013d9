//! Article model
//!
//! This module provides:
//! - `Article` entity representing a published piece of site content
//! - `CreateArticleInput` for inserts, with defaults for omitted fields
//! - `CategoryFilter` for listing queries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author name applied when an article is created without one.
pub const DEFAULT_AUTHOR: &str = "Climate Team";

/// Article entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier
    pub id: i64,
    /// Article title
    pub title: String,
    /// Longer one-line summary shown under the title
    pub subtitle: String,
    /// Long-form body text
    pub content: String,
    /// Free-text category tag ("Science", "Solutions", "Impact", ...)
    pub category: String,
    /// Author byline
    pub author: String,
    /// Creation timestamp
    pub date_created: DateTime<Utc>,
}

/// Input for creating a new article
///
/// `author` and `date_created` are optional; the store fills in
/// [`DEFAULT_AUTHOR`] and the current time when they are omitted. No other
/// validation is applied - empty strings are accepted as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArticleInput {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub category: String,
    /// Author byline (optional)
    pub author: Option<String>,
    /// Creation timestamp (optional)
    pub date_created: Option<DateTime<Utc>>,
}

impl CreateArticleInput {
    /// Create a new input with the required fields
    pub fn new(title: String, subtitle: String, content: String, category: String) -> Self {
        Self {
            title,
            subtitle,
            content,
            category,
            author: None,
            date_created: None,
        }
    }

    /// Set the author byline
    pub fn with_author(mut self, author: String) -> Self {
        self.author = Some(author);
        self
    }
}

/// Category filter for listing queries.
///
/// The literal string `all` is the list-everything sentinel; any other value
/// is matched against the category column exactly and case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every article
    All,
    /// Articles whose category equals the given string
    Named(String),
}

impl CategoryFilter {
    /// Parse a query parameter value into a filter
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_parse_sentinel() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
    }

    #[test]
    fn test_category_filter_parse_named() {
        assert_eq!(
            CategoryFilter::parse("Science"),
            CategoryFilter::Named("Science".to_string())
        );
    }

    #[test]
    fn test_category_filter_sentinel_is_case_sensitive() {
        // Only the exact lowercase sentinel lists everything; "All" is a
        // category name like any other.
        assert_eq!(
            CategoryFilter::parse("All"),
            CategoryFilter::Named("All".to_string())
        );
    }

    #[test]
    fn test_create_input_builder() {
        let input = CreateArticleInput::new(
            "Title".to_string(),
            "Subtitle".to_string(),
            "Content".to_string(),
            "Science".to_string(),
        )
        .with_author("Someone".to_string());

        assert_eq!(input.author.as_deref(), Some("Someone"));
        assert!(input.date_created.is_none());
    }
}

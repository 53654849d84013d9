//! Data models
//!
//! Entity and input types shared by the stores, services, and API layer.

pub mod article;
pub mod user;

pub use article::{Article, CategoryFilter, CreateArticleInput, DEFAULT_AUTHOR};
pub use user::{NewUser, User};

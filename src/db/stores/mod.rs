//! Stores
//!
//! Data access for the two entity types. Each store is a trait with a
//! SQLx-backed implementation, so services depend on the interface rather
//! than the pool.

pub mod article;
pub mod user;

pub use article::{ArticleStore, SqlxArticleStore};
pub use user::{is_unique_violation, SqlxUserStore, UserStore};

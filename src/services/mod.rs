//! Services layer
//!
//! Domain operations sitting between the HTTP handlers and the stores.

pub mod article;
pub mod user;

pub use article::{ArticleDetail, ArticleService};
pub use user::{UserService, UserServiceError};

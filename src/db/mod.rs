//! Database layer
//!
//! A single embedded SQLite database backs the whole site. This module
//! provides the connection pool, code-based schema migrations, the two
//! stores (articles, users), and the startup seed dataset.

pub mod migrations;
pub mod pool;
pub mod seed;
pub mod stores;

pub use pool::{connect_test_pool, Database};

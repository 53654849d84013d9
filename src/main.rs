//! climatepress - a small climate-change content site

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use climatepress::{
    api::{self, AppState},
    config::Config,
    db::{
        migrations, seed,
        stores::{SqlxArticleStore, SqlxUserStore},
        Database,
    },
    services::{ArticleService, UserService},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "climatepress=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting climatepress...");

    // Load configuration
    let config = Config::load_with_env(Path::new("config.yml"))?;
    tracing::info!("Configuration loaded");

    // Initialize database
    let db = Database::connect(&config.database.url).await?;
    tracing::info!("Database connected: {}", config.database.url);

    // Run migrations
    migrations::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations completed");

    // Create stores
    let article_store = SqlxArticleStore::boxed(db.pool().clone());
    let user_store = SqlxUserStore::boxed(db.pool().clone());

    // Seed starter content on first run
    seed::populate_initial_articles(article_store.as_ref()).await?;

    // Initialize services and application state
    let article_service = Arc::new(ArticleService::new(article_store));
    let user_service = Arc::new(UserService::new(user_store));
    let state = AppState::new(article_service, user_service);

    // Build router
    let app = api::build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Explicit teardown: the pool closes after the server drains
    db.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

//! Click Fit Backend
//!
//! A single-process REST backend serving the Click Fit marketing site,
//! multipart image uploads to local disk, and a PostgreSQL user passthrough.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod storage;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Click Fit Backend");
    tracing::info!("Upload directory: {:?}", config.upload_dir);
    tracing::info!("Public directory: {:?}", config.public_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Create the upload directory if it doesn't exist
    storage::ensure_upload_dir(&config.upload_dir).await?;

    // The pool is lazy; a missing database only affects the /api routes
    let pool = db::connect(&config);
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // User passthrough routes
    let api_routes = Router::new()
        .route("/addUser", post(api::add_user))
        .route("/users", get(api::list_users));

    // Static front-end; ServeDir resolves "/" to index.html
    let static_site = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route("/upload", post(api::upload_images))
        .route("/images", get(api::list_images))
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .fallback_service(static_site)
        .layer(DefaultBodyLimit::max(storage::MAX_REQUEST_BODY))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

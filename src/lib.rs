//! Contest Archive - academic contest records over HTTP
//!
//! This library provides a small REST backend for contest metadata: class
//! level, year, name, URL and a list of solution links.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Validation and not-found mapping
//! - **Db**: Query building and the storage collaborator (Postgres or in-memory)
//! - **Models**: Domain models and record shapes

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use axum::{Router, middleware::from_fn};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the application router with all layers applied
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config().server.max_request_body_bytes;

    Router::new()
        .merge(handlers::routes(state.clone()))
        .layer(from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

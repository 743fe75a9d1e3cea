//! API layer - HTTP handlers and routing
//!
//! This module contains all HTTP API endpoints of jotpad:
//! - Category API endpoints (`/api/categories`)
//! - Article API endpoints (`/api/posts`)

pub mod categories;
pub mod common;
pub mod middleware;
pub mod posts;


use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::db::create_store;

pub use middleware::{ApiError, AppState};

/// Build application state from configuration
pub fn build_state(config: &Config) -> AppState {
    AppState::new(create_store(&config.content), config.content.clone())
}

/// Build the API router
pub fn build_api_router() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/posts", posts::router())
}

/// Build the complete router with middleware
pub fn build_router(state: AppState, cors_origin: &str) -> Router {
    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    match cors_origin.parse::<HeaderValue>() {
        Ok(origin) => cors = cors.allow_origin(origin),
        Err(e) => tracing::warn!(origin = cors_origin, error = %e, "invalid CORS origin, cross-origin requests disabled"),
    }

    Router::new()
        .nest("/api", build_api_router())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}

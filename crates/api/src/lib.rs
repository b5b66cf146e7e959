//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for sessions, uploads, filters, and the dashboard
//! - In-process session storage
//! - Response types consumed by the display layer

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use dashmap::DashMap;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use niaga_core::session::SessionContext;
use niaga_shared::types::SessionId;
use niaga_shared::AppConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Live sessions keyed by session id.
    pub sessions: Arc<DashMap<SessionId, SessionContext>>,
    /// Application configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Creates empty state over the given configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            config: Arc::new(config),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.upload.max_upload_bytes;

    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /check`           - Redirect lookup for the extension (public)
//! - `GET  /health`          - Health check (public)
//! - `POST /register`        - Register/update a mapping (key-gated)
//! - `POST /bulk_register`   - Batch register (key-gated)
//! - `GET  /mappings`        - List mappings (key-gated)
//! - `DELETE /unregister`    - Remove a mapping (key-gated)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Origins from `ALLOW_ORIGINS`
//! - **Authentication** - Static `x-api-key` header on mutating routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{check_handler, health_handler};
use crate::api::middleware::{auth, cors, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allow_origins` - CORS origin configuration (`*` or comma-separated list)
pub fn app_router(state: AppState, allow_origins: &str) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/check", post(check_handler))
        .route("/health", get(health_handler))
        .merge(protected)
        .with_state(state)
        .layer(cors::layer(allow_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

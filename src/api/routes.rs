//! Key-gated route configuration.
//!
//! All routes here mutate or expose the mapping table and require the
//! `x-api-key` header when an API key is configured; see
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    bulk_register_handler, mappings_handler, register_handler, unregister_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Routes protected by the static API key.
///
/// # Endpoints
///
/// - `POST   /register`       - Register or update a mapping
/// - `POST   /bulk_register`  - Register or update several mappings
/// - `GET    /mappings`       - List the full mapping table
/// - `DELETE /unregister`     - Remove a mapping (`?domain=...`)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/bulk_register", post(bulk_register_handler))
        .route("/mappings", get(mappings_handler))
        .route("/unregister", delete(unregister_handler))
}

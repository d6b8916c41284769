//! Handler for the mapping removal endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::unregister::{UnregisterQuery, UnregisterResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::normalize_domain::normalize_domain;

/// Removes a mapping.
///
/// # Endpoint
///
/// `DELETE /unregister?domain=example.com` (key-gated)
///
/// # Response
///
/// ```json
/// { "ok": true, "domain": "example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 if the domain is empty or whitespace.
/// Returns 404 if no mapping existed for the canonical domain — removal of
/// a never-registered key changes nothing, and that is reported rather than
/// silently succeeding.
pub async fn unregister_handler(
    Query(query): Query<UnregisterQuery>,
    State(state): State<AppState>,
) -> Result<Json<UnregisterResponse>, AppError> {
    let removed = state.mapping_service.unregister(&query.domain).await?;

    let canonical = normalize_domain(&query.domain);

    if !removed {
        return Err(AppError::not_found(
            "mapping not found",
            json!({ "domain": canonical }),
        ));
    }

    Ok(Json(UnregisterResponse {
        ok: true,
        domain: canonical,
    }))
}

//! Handler for the mapping list endpoint.

use axum::{Json, extract::State};

use crate::api::dto::mapping::{MappingItem, MappingListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns every mapping, ordered by canonical domain.
///
/// # Endpoint
///
/// `GET /mappings` (key-gated)
///
/// # Response
///
/// ```json
/// {
///   "mapping": [
///     { "domain": "a.com", "redirect": "https://x" },
///     { "domain": "b.com", "redirect": null }
///   ]
/// }
/// ```
///
/// No pagination; the full table is returned on each call.
pub async fn mappings_handler(
    State(state): State<AppState>,
) -> Result<Json<MappingListResponse>, AppError> {
    let mappings = state.mapping_service.list_mappings().await?;

    Ok(Json(MappingListResponse {
        mapping: mappings.into_iter().map(MappingItem::from).collect(),
    }))
}

//! Handler for the extension lookup endpoint.

use axum::{Json, extract::State};

use crate::api::dto::check::{CheckRequest, CheckResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the configured redirect for a domain, or `null`.
///
/// # Endpoint
///
/// `POST /check`
///
/// # Request Body
///
/// ```json
/// { "domain": "instagram.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "redirect": "https://my-private/instagram" }
/// ```
///
/// or `{ "redirect": null }` when the domain has no redirect. A domain that
/// was never registered and one registered with an explicitly empty redirect
/// both answer `null`.
///
/// # Errors
///
/// Returns 400 Bad Request if the domain is empty or whitespace.
pub async fn check_handler(
    State(state): State<AppState>,
    Json(payload): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    let redirect = state.mapping_service.get_redirect(&payload.domain).await?;

    Ok(Json(CheckResponse { redirect }))
}

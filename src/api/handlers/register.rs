//! Handlers for mapping registration endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::register::{
    BatchSummary, BulkRegisterResponse, BulkRegisterResultItem, RegisterRequest, RegisterResponse,
};
use crate::domain::entities::Mapping;
use crate::error::AppError;
use crate::state::AppState;

/// Registers or updates a single domain mapping.
///
/// # Endpoint
///
/// `POST /register` (key-gated)
///
/// # Request Body
///
/// ```json
/// { "domain": "instagram.com", "redirect": "https://my-private/instagram" }
/// ```
///
/// Registering an already-mapped domain replaces its redirect in place.
/// A `null` redirect stores an explicit "no redirect configured".
///
/// # Response
///
/// ```json
/// { "ok": true, "domain": "instagram.com", "redirect": "https://my-private/instagram" }
/// ```
///
/// The echoed domain is the canonical form actually stored.
///
/// # Errors
///
/// Returns 400 if the domain is empty or the redirect is not a well-formed
/// absolute http/https URL.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    payload.validate()?;

    let mapping = state
        .mapping_service
        .register(&payload.domain, payload.redirect)
        .await?;

    Ok(Json(RegisterResponse {
        ok: true,
        domain: mapping.domain,
        redirect: mapping.redirect,
    }))
}

/// Registers or updates several mappings in one request.
///
/// # Endpoint
///
/// `POST /bulk_register` (key-gated)
///
/// # Batch Processing
///
/// Items are processed independently as repeated upserts. If one fails,
/// the others still apply; each result carries either the stored mapping or
/// error information.
///
/// # Request Body
///
/// ```json
/// [
///   { "domain": "instagram.com", "redirect": "https://my-private/instagram" },
///   { "domain": "twitter.com", "redirect": null }
/// ]
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 2, "successful": 2, "failed": 0 },
///   "items": [
///     { "domain": "instagram.com", "redirect": "https://my-private/instagram" },
///     { "domain": "twitter.com", "redirect": null }
///   ]
/// }
/// ```
pub async fn bulk_register_handler(
    State(state): State<AppState>,
    Json(items): Json<Vec<RegisterRequest>>,
) -> Result<Json<BulkRegisterResponse>, AppError> {
    let total = items.len();
    let mut results = Vec::with_capacity(total);
    let mut successful = 0;
    let mut failed = 0;

    for item in items {
        let raw_domain = item.domain.clone();

        match process_single_registration(&state, item).await {
            Ok(mapping) => {
                successful += 1;
                results.push(BulkRegisterResultItem::Success {
                    domain: mapping.domain,
                    redirect: mapping.redirect,
                });
            }
            Err(err) => {
                failed += 1;
                results.push(BulkRegisterResultItem::Error {
                    domain: raw_domain,
                    error: err.to_error_info(),
                });
            }
        }
    }

    Ok(Json(BulkRegisterResponse {
        summary: BatchSummary {
            total,
            successful,
            failed,
        },
        items: results,
    }))
}

/// Validates and applies a single item of the batch.
async fn process_single_registration(
    state: &AppState,
    item: RegisterRequest,
) -> Result<Mapping, AppError> {
    item.validate()?;

    state
        .mapping_service
        .register(&item.domain, item.redirect)
        .await
}

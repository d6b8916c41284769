//! Static API key authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Authenticates mutating requests against the configured API key.
///
/// # Header Format
///
/// ```text
/// x-api-key: <key>
/// ```
///
/// When no `API_KEY` is configured, every request passes — the deployment is
/// explicitly open. When a key is configured, the header must be present and
/// match exactly.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - The `x-api-key` header is missing
/// - The header value does not match the configured key
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/register", post(register_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = st.api_key.as_deref() {
        let provided = req
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        if provided != Some(expected) {
            return Err(AppError::unauthorized(
                "Invalid or missing API key",
                json!({ "reason": "x-api-key header is missing or does not match" }),
            ));
        }
    }

    Ok(next.run(req).await)
}

//! CORS configuration for the extension and admin tooling.

use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

use super::auth::API_KEY_HEADER;

/// Builds the CORS layer from the configured origin list.
///
/// `*` allows any origin without credentials (a wildcard origin cannot be
/// combined with `Access-Control-Allow-Credentials`). Any other value is
/// treated as a comma-separated list of explicit origins, served with
/// credentials allowed; entries that fail to parse as header values are
/// skipped with a warning.
pub fn layer(allow_origins: &str) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];

    if allow_origins.trim() == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allow_origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Skipping invalid CORS origin: {o}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(API_KEY_HEADER),
        ])
        .allow_credentials(true)
}

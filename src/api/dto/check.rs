//! DTOs for the extension lookup endpoint.

use serde::{Deserialize, Serialize};

/// Lookup request sent by the extension on navigation.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub domain: String,
}

/// Lookup result.
///
/// `redirect` is serialized as an explicit `null` when no redirect is
/// configured — the extension relies on the field always being present.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub redirect: Option<String>,
}

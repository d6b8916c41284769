//! DTOs for the mapping removal endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters for `DELETE /unregister`.
#[derive(Debug, Deserialize)]
pub struct UnregisterQuery {
    /// Domain to remove, e.g. `example.com`.
    pub domain: String,
}

/// Confirmation of a removal, echoing the canonical domain form.
#[derive(Debug, Serialize)]
pub struct UnregisterResponse {
    pub ok: bool,
    pub domain: String,
}

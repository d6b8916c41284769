//! DTOs for registration endpoints.

use crate::error::ErrorInfo;
use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

/// Checks that a redirect URL is a well-formed absolute http/https URL.
fn validate_redirect_url(value: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(value).map_err(|_| ValidationError::new("invalid_url"))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::new("scheme_not_allowed")),
    }
}

/// Request to register or update a single mapping.
///
/// A `null` (or omitted) redirect stores an explicit "no redirect" for the
/// domain; it does not remove the mapping.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub domain: String,

    /// Target URL, validated as absolute http/https when present.
    #[validate(custom(function = validate_redirect_url))]
    pub redirect: Option<String>,
}

/// Confirmation of a registration, echoing the canonical domain form.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub ok: bool,
    pub domain: String,
    pub redirect: Option<String>,
}

/// Response containing batch registration results.
#[derive(Debug, Serialize)]
pub struct BulkRegisterResponse {
    pub summary: BatchSummary,
    pub items: Vec<BulkRegisterResultItem>,
}

/// Individual result for a mapping in the batch.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BulkRegisterResultItem {
    Success {
        domain: String,
        redirect: Option<String>,
    },
    Error {
        domain: String,
        error: ErrorInfo,
    },
}

/// Summary statistics for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

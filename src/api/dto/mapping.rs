//! DTOs for the mapping list endpoint.

use serde::Serialize;

use crate::domain::entities::Mapping;

/// Individual mapping information.
#[derive(Debug, Serialize)]
pub struct MappingItem {
    pub domain: String,
    pub redirect: Option<String>,
}

impl From<Mapping> for MappingItem {
    fn from(m: Mapping) -> Self {
        Self {
            domain: m.domain,
            redirect: m.redirect,
        }
    }
}

/// Response containing the full mapping table.
///
/// The field is named `mapping` (singular) because that is the wire format
/// the extension's admin tooling already consumes.
#[derive(Debug, Serialize)]
pub struct MappingListResponse {
    pub mapping: Vec<MappingItem>,
}

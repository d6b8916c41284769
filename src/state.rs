//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::MappingService;
use crate::infrastructure::persistence::SqliteMappingRepository;

/// State shared across the router.
///
/// The API key is carried here for the auth middleware only; the mapping
/// service itself never sees the secret.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService<SqliteMappingRepository>>,
    /// Static API key gating mutating routes. `None` leaves them open.
    pub api_key: Option<String>,
}

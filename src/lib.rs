//! # Domain Redirector
//!
//! Backend for the Custom Domain Redirector browser extension, built with
//! Axum and SQLite. Maps a normalized domain name to an optional redirect
//! URL; the extension asks `/check` on navigation and redirects when a URL
//! comes back.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Normalization and mapping-store logic
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Canonical domain normalization applied on every read and write
//! - Atomic insert-or-update per domain (last writer wins)
//! - Optional static API key gating all mutating routes
//! - Configurable CORS for the extension origin
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: where the SQLite file lives (created on first start)
//! export DB_PATH="/data/mappings.db"
//!
//! # Optional: require x-api-key on register/unregister/mappings
//! export API_KEY="change-me"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::MappingService;
    pub use crate::domain::entities::Mapping;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::normalize_domain::normalize_domain;
}

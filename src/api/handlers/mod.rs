//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod check;
pub mod health;
pub mod mappings;
pub mod register;
pub mod unregister;

pub use check::check_handler;
pub use health::health_handler;
pub use mappings::mappings_handler;
pub use register::{bulk_register_handler, register_handler};
pub use unregister::unregister_handler;

//! Domain layer containing the core business model.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on infrastructure or presentation
//! concerns; repository traits defined here are implemented by
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;

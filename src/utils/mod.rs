//! Utility functions shared across the application.
//!
//! - [`normalize_domain`] - Domain canonicalization

pub mod normalize_domain;

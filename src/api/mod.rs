//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into mapping-store operations and
//! formats responses for the extension and admin tooling.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, CORS, and tracing middleware
//! - [`routes`] - Route configuration for key-gated endpoints

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

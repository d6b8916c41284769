//! Data Transfer Objects for the HTTP API.

pub mod check;
pub mod health;
pub mod mapping;
pub mod register;
pub mod unregister;

//! Repository trait for domain-redirect mappings.

use crate::domain::entities::Mapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface over the single `mappings` table.
///
/// All keys passed to these methods are expected to be *canonical* domains;
/// normalization happens one layer up, in
/// [`crate::application::services::MappingService`]. Each method maps to a
/// single statement against durable storage — there are no multi-operation
/// transactions, and concurrent writers to the same key resolve as
/// last-write-wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Ensures the backing schema exists. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if storage cannot be reached or the
    /// schema cannot be created.
    async fn initialize(&self) -> Result<(), AppError>;

    /// Point lookup by canonical domain.
    ///
    /// Returns `None` when no row exists. A row whose redirect is NULL is
    /// returned as `Some(Mapping { redirect: None, .. })` — the distinction
    /// is collapsed only at the service's lookup contract.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get(&self, domain: &str) -> Result<Option<Mapping>, AppError>;

    /// Inserts a mapping, or replaces its redirect if the key already exists.
    ///
    /// Implemented as a single atomic conditional write, never as
    /// read-check-then-write, so concurrent callers on the same key cannot
    /// race into a duplicate row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert<'a>(&self, domain: &str, redirect: Option<&'a str>) -> Result<(), AppError>;

    /// Deletes the mapping for a canonical domain.
    ///
    /// Returns `true` if a row was removed, `false` if none existed.
    /// Deleting a missing key is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, domain: &str) -> Result<bool, AppError>;

    /// Returns every mapping, ordered by domain ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Mapping>, AppError>;
}

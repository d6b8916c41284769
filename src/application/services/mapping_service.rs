//! Mapping management service.
//!
//! Owns the normalization-before-access rule: every raw domain entering any
//! operation is canonicalized first, and empty canonical keys are rejected
//! before they can reach storage.

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::normalize_domain::normalize_domain;
use serde_json::json;
use std::sync::Arc;

/// Service for managing domain-redirect mappings.
///
/// Guarantees held at this layer:
///
/// - stored keys are always the normalized domain form, never raw input
/// - at most one mapping per canonical domain (repository upsert)
/// - the lookup contract collapses "never registered" and "registered with
///   no redirect" into the same `None` — the extension only cares about
///   "redirect or none"
pub struct MappingService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> MappingService<R> {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Normalizes a raw domain and rejects inputs that normalize to nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the canonical form is empty.
    fn canonical_key(&self, raw: &str) -> Result<String, AppError> {
        let key = normalize_domain(raw);
        if key.is_empty() {
            return Err(AppError::bad_request(
                "missing domain",
                json!({ "domain": raw }),
            ));
        }
        Ok(key)
    }

    /// Looks up the configured redirect for a domain.
    ///
    /// Returns `None` both when the domain was never registered and when it
    /// was registered with an explicitly empty redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the domain normalizes to empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_redirect(&self, raw_domain: &str) -> Result<Option<String>, AppError> {
        let key = self.canonical_key(raw_domain)?;
        Ok(self.repository.get(&key).await?.and_then(|m| m.redirect))
    }

    /// Registers or updates a mapping, returning its stored canonical form.
    ///
    /// Subsequent registrations for the same canonical domain replace the
    /// redirect in place; `None` stores an explicit NULL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the domain normalizes to empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn register(
        &self,
        raw_domain: &str,
        redirect: Option<String>,
    ) -> Result<Mapping, AppError> {
        let key = self.canonical_key(raw_domain)?;
        self.repository.upsert(&key, redirect.as_deref()).await?;
        Ok(Mapping::new(key, redirect))
    }

    /// Removes a mapping.
    ///
    /// Returns `false` when no mapping existed for the canonical domain;
    /// the HTTP layer translates that into 404.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the domain normalizes to empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn unregister(&self, raw_domain: &str) -> Result<bool, AppError> {
        let key = self.canonical_key(raw_domain)?;
        self.repository.delete(&key).await
    }

    /// Lists all mappings, ordered by canonical domain.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_mappings(&self) -> Result<Vec<Mapping>, AppError> {
        self.repository.list().await
    }
}

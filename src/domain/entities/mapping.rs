//! Mapping entity: one redirect rule per canonical domain.

/// A persisted (domain, redirect) pair.
///
/// `domain` is always the canonical form produced by
/// [`crate::utils::normalize_domain::normalize_domain`], never the raw input.
/// `redirect` is optional: a mapping may exist with no redirect configured,
/// which readers of the public lookup contract cannot distinguish from the
/// mapping being absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub domain: String,
    pub redirect: Option<String>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(domain: String, redirect: Option<String>) -> Self {
        Self { domain, redirect }
    }
}

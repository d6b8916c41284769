//! Domain canonicalization.
//!
//! Every domain that enters the system — whether on a lookup from the
//! extension or a registration from the admin tooling — is reduced to the
//! same canonical key before it touches storage. A user may paste
//! `HTTPS://www.Example.com/some/path`; the extension sends the bare host it
//! sees in the address bar. Both must resolve to `example.com`.

/// Reduces a raw domain string to its canonical lookup key.
///
/// Applied transformations, in order:
///
/// 1. Trim surrounding whitespace
/// 2. Lowercase
/// 3. Strip one leading `http://`, else one leading `https://`
/// 4. Strip a leading `www.`
/// 5. Drop everything from the first `/` (path, query, fragment)
///
/// The function is total and idempotent: it never fails on any input, and
/// none of the stripped prefixes can reappear after stripping. Empty or
/// whitespace-only input yields the empty string; callers must reject empty
/// keys before hitting the store.
///
/// # Examples
///
/// ```
/// use domain_redirector::utils::normalize_domain::normalize_domain;
///
/// assert_eq!(normalize_domain("HTTP://WWW.Example.com/path"), "example.com");
/// assert_eq!(normalize_domain("  instagram.com  "), "instagram.com");
/// ```
pub fn normalize_domain(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let stripped = lowered
        .strip_prefix("http://")
        .or_else(|| lowered.strip_prefix("https://"))
        .unwrap_or(&lowered);

    let stripped = stripped.strip_prefix("www.").unwrap_or(stripped);

    stripped.split('/').next().unwrap_or_default().to_string()
}

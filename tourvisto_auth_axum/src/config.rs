//! Central configuration for the tourvisto_auth_axum crate

use std::sync::LazyLock;

/// Name of the cookie carrying the identity provider session secret
/// Default: "a_session"
pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("TOURVISTO_SESSION_COOKIE").unwrap_or_else(|_| "a_session".to_string())
});

/// Page size used when a listing request has no `limit`
pub(crate) const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Largest page a listing request may ask for
pub(crate) const MAX_PAGE_LIMIT: u32 = 100;

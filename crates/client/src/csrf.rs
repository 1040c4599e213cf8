//! CSRF token read once from the page and attached to every mutation.

use storefront_core::{DomainError, DomainResult};

/// Header carrying the token on JSON requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Body field carrying the token on form-encoded requests.
pub const CSRF_FIELD: &str = "csrf_token";

#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(token: impl Into<String>) -> DomainResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(DomainError::validation("CSRF token is missing from the page"));
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("CsrfToken(<redacted>)")
    }
}

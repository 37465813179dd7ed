//! Bearer token newtype.

use serde::{Deserialize, Serialize};

/// An opaque bearer credential issued by the backend on login.
///
/// The token is a secret: `Debug` redacts the value, and there is
/// deliberately no `Display` implementation, so the credential cannot
/// wander into logs or error messages by accident. Screens that build
/// `Authorization` headers read the raw value via
/// [`as_str`](Self::as_str).
///
/// # Example
///
/// ```
/// use touchline_auth::AuthToken;
///
/// let token = AuthToken::new("eyJhbGciOi...");
/// assert_eq!(token.as_str(), "eyJhbGciOi...");
/// assert_eq!(format!("{token:?}"), "AuthToken(***)");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw bearer string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw bearer value for request headers.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the token carries no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

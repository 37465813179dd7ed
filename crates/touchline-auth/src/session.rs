//! Session types (identity + credential).

use crate::AuthToken;
use serde::{Deserialize, Serialize};
use touchline_types::{Role, UserRecord};

/// An authenticated identity paired with its bearer credential.
///
/// A Session represents a logged-in user:
///
/// - **Who**: the [`UserRecord`] delivered by the backend
/// - **Proof**: the [`AuthToken`] sent with every API call
///
/// # Both-or-Neither
///
/// The platform invariant is that user and token exist together or
/// not at all. That invariant is structural here: a `Session` always
/// holds both fields, and absence is expressed as `Option<Session>`
/// at the call sites. There is no half-session to construct.
///
/// # Immutability
///
/// Sessions are immutable value types. A re-login produces a new
/// session rather than mutating the old one, which keeps transitions
/// easy to audit and the type safe to clone into screens.
///
/// # Why No Default?
///
/// **DO NOT implement `Default` for Session.**
///
/// A session requires a real identity and a real credential. There is
/// no sensible default for either. Always construct with
/// [`Session::new`].
///
/// # Example
///
/// ```
/// use touchline_auth::{AuthToken, Session};
/// use touchline_types::{Role, UserRecord};
///
/// let user = UserRecord::new(1, "admin", Role::FifaAdmin);
/// let session = Session::new(user, AuthToken::new("tok-1"));
///
/// assert_eq!(session.role(), Role::FifaAdmin);
/// assert_eq!(session.user().username, "admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated identity.
    user: UserRecord,
    /// The bearer credential proving it.
    token: AuthToken,
}

impl Session {
    /// Creates a session from a login or registration response.
    #[must_use]
    pub fn new(user: UserRecord, token: AuthToken) -> Self {
        Self { user, token }
    }

    /// Returns the authenticated user.
    #[must_use]
    pub fn user(&self) -> &UserRecord {
        &self.user
    }

    /// Returns the bearer credential.
    #[must_use]
    pub fn token(&self) -> &AuthToken {
        &self.token
    }

    /// Returns the user's role, the input to every access decision.
    #[must_use]
    pub fn role(&self) -> Role {
        self.user.role
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.user.username, self.user.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        let user = UserRecord::new(9, "l.hansen", Role::Coach);
        Session::new(user, AuthToken::new("tok-9"))
    }

    #[test]
    fn accessors_return_constituents() {
        let session = sample_session();
        assert_eq!(session.user().id, 9);
        assert_eq!(session.token().as_str(), "tok-9");
        assert_eq!(session.role(), Role::Coach);
    }

    #[test]
    fn display_shows_identity_not_token() {
        let session = sample_session();
        let rendered = format!("{session}");
        assert_eq!(rendered, "l.hansen@COACH");
        assert!(!rendered.contains("tok-9"));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let session = sample_session();
        assert!(!format!("{session:?}").contains("tok-9"));
    }

    #[test]
    fn serde_roundtrip() {
        let session = sample_session();
        let json = serde_json::to_string(&session).expect("serialize");
        let parsed: Session = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, session);
    }

    #[test]
    fn clone_preserves_all_fields() {
        let session = sample_session();
        let cloned = session.clone();
        assert_eq!(cloned, session);
    }
}

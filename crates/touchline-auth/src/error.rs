//! Access denial error type.

use thiserror::Error;
use touchline_types::{Role, ViewId};

/// A role/view combination the policy does not permit.
///
/// The router treats denials as silent no-ops; this type exists for
/// callers (shells, audit sinks) that want the decision as a value.
///
/// # Example
///
/// ```
/// use touchline_auth::AccessDenied;
/// use touchline_types::{Role, ViewId};
///
/// let err = AccessDenied { role: Role::Player, view: ViewId::Users };
/// assert!(err.to_string().contains("PLAYER"));
/// assert!(err.to_string().contains("users"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("access denied: role {role} may not enter view '{view}'")]
pub struct AccessDenied {
    /// The role that requested access.
    pub role: Role,
    /// The view that was requested.
    pub view: ViewId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_role_and_view() {
        let err = AccessDenied {
            role: Role::Guest,
            view: ViewId::Security,
        };
        assert_eq!(
            err.to_string(),
            "access denied: role GUEST may not enter view 'security'"
        );
    }
}

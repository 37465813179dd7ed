//! View access policy.
//!
//! Defines [`AccessPolicy`] — the abstract decision point for "may
//! this role enter this view" — and [`RoleAccess`], the static table
//! implementation that is the single source of truth for all eight
//! roles.
//!
//! # Architecture
//!
//! ```text
//! AccessPolicy trait (THIS MODULE)   <- abstract, no runtime deps
//!          │
//!          └── RoleAccess            <- static role → view table
//! ```
//!
//! The router consults the policy before committing any navigation;
//! screens never re-derive authorization on their own.

use crate::AccessDenied;
use touchline_types::{Role, ViewId};

/// Abstract policy for role-based view access.
///
/// Implementations must be pure and total: no side effects, no
/// panics, a plain `bool` for every role/view combination. The
/// default view is always reachable — implementations that forget
/// this break the router's fallback invariant, so the provided
/// [`check`](Self::check) helper and all call sites treat
/// [`ViewId::DEFAULT`] as universally allowed.
///
/// # Example
///
/// ```
/// use touchline_auth::AccessPolicy;
/// use touchline_types::{Role, ViewId};
///
/// struct HomeOnly;
///
/// impl AccessPolicy for HomeOnly {
///     fn is_allowed(&self, _role: Role, view: ViewId) -> bool {
///         view == ViewId::DEFAULT
///     }
/// }
///
/// let policy = HomeOnly;
/// assert!(policy.is_allowed(Role::Guest, ViewId::Home));
/// assert!(!policy.is_allowed(Role::Guest, ViewId::Users));
/// assert!(policy.check(Role::Guest, ViewId::Users).is_err());
/// ```
pub trait AccessPolicy {
    /// Returns `true` if `role` may enter `view`.
    fn is_allowed(&self, role: Role, view: ViewId) -> bool;

    /// Checks access, returning a typed denial for callers that want
    /// an error value instead of a `bool`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] naming the role and view when the
    /// combination is not allowed.
    fn check(&self, role: Role, view: ViewId) -> Result<(), AccessDenied> {
        if self.is_allowed(role, view) {
            Ok(())
        } else {
            Err(AccessDenied { role, view })
        }
    }
}

/// The platform's static role → permitted-views table.
///
/// Written as an exhaustive `match` over [`Role`] so the compiler
/// proves every role has an entry; there is no absent-key path and
/// therefore no silent fallback behavior to reason about. The table
/// is immutable and loaded at compile time.
///
/// # Table
///
/// Every role reaches `home`, `settings` and `profile`. Beyond that:
///
/// | Role | Additional views |
/// |------|------------------|
/// | `FifaAdmin` | dashboard teams players matches tournaments venues officials users analytics security reports |
/// | `TeamManager` | dashboard teams players matches tactics analytics security reports |
/// | `Coach` | dashboard players matches tactics reports |
/// | `Player` | dashboard matches stats |
/// | `TournamentDirector` | dashboard tournaments matches venues reports analytics security |
/// | `MatchOfficial` | dashboard matches reports |
/// | `MediaRepresentative` | dashboard matches teams press |
/// | `Guest` | matches teams |
///
/// `Guest` has no dashboard; only `FifaAdmin` administers users and
/// officials; `notifications` appears in no set (the shell mounts
/// that screen directly rather than navigating to it).
///
/// # Example
///
/// ```
/// use touchline_auth::{AccessPolicy, RoleAccess};
/// use touchline_types::{Role, ViewId};
///
/// let policy = RoleAccess;
///
/// assert!(policy.is_allowed(Role::FifaAdmin, ViewId::Security));
/// assert!(!policy.is_allowed(Role::Player, ViewId::Users));
///
/// // The default view is always reachable
/// assert!(policy.is_allowed(Role::Guest, ViewId::Home));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleAccess;

impl RoleAccess {
    /// Returns the permitted views for `role`.
    ///
    /// The slice always contains [`ViewId::DEFAULT`].
    #[must_use]
    pub fn allowed_views(role: Role) -> &'static [ViewId] {
        match role {
            Role::FifaAdmin => &[
                ViewId::Dashboard,
                ViewId::Teams,
                ViewId::Players,
                ViewId::Matches,
                ViewId::Tournaments,
                ViewId::Venues,
                ViewId::Officials,
                ViewId::Users,
                ViewId::Analytics,
                ViewId::Security,
                ViewId::Profile,
                ViewId::Home,
                ViewId::Settings,
                ViewId::Reports,
            ],
            Role::TeamManager => &[
                ViewId::Dashboard,
                ViewId::Teams,
                ViewId::Players,
                ViewId::Matches,
                ViewId::Tactics,
                ViewId::Analytics,
                ViewId::Security,
                ViewId::Profile,
                ViewId::Home,
                ViewId::Settings,
                ViewId::Reports,
            ],
            Role::Coach => &[
                ViewId::Dashboard,
                ViewId::Players,
                ViewId::Matches,
                ViewId::Tactics,
                ViewId::Profile,
                ViewId::Home,
                ViewId::Settings,
                ViewId::Reports,
            ],
            Role::Player => &[
                ViewId::Dashboard,
                ViewId::Matches,
                ViewId::Stats,
                ViewId::Profile,
                ViewId::Home,
                ViewId::Settings,
            ],
            Role::TournamentDirector => &[
                ViewId::Dashboard,
                ViewId::Tournaments,
                ViewId::Matches,
                ViewId::Venues,
                ViewId::Reports,
                ViewId::Analytics,
                ViewId::Security,
                ViewId::Profile,
                ViewId::Home,
                ViewId::Settings,
            ],
            Role::MatchOfficial => &[
                ViewId::Dashboard,
                ViewId::Matches,
                ViewId::Reports,
                ViewId::Profile,
                ViewId::Home,
                ViewId::Settings,
            ],
            Role::MediaRepresentative => &[
                ViewId::Dashboard,
                ViewId::Matches,
                ViewId::Teams,
                ViewId::Press,
                ViewId::Profile,
                ViewId::Home,
                ViewId::Settings,
            ],
            Role::Guest => &[
                ViewId::Home,
                ViewId::Matches,
                ViewId::Teams,
                ViewId::Profile,
                ViewId::Settings,
            ],
        }
    }
}

impl AccessPolicy for RoleAccess {
    fn is_allowed(&self, role: Role, view: ViewId) -> bool {
        view == ViewId::DEFAULT || Self::allowed_views(role).contains(&view)
    }
}

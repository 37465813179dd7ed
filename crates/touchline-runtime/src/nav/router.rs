//! Navigation state machine.
//!
//! The [`Router`] owns the client's navigation state: whether a user
//! is logged in, which view is active, and the back/forward history.
//! Every navigation request is checked against the
//! [`AccessPolicy`](touchline_auth::AccessPolicy) before it commits.
//!
//! # State Machine
//!
//! ```text
//!              login(user, token)
//!  Anonymous ───────────────────────► Authenticated { current_view }
//!      ▲                                   │        │
//!      │            logout()               │        │ navigate(view)
//!      └───────────────────────────────────┘        │ back() / forward()
//!                                                   ▼
//!                                          (same state, view updated)
//! ```
//!
//! # Fail-Closed Navigation
//!
//! A navigation the policy denies is a **no-op**, not an error: the
//! current view is retained, the request is discarded, and the only
//! trace is a `warn`-level audit log. Unauthorized requests are
//! expected (menus may render more than a role can enter) and must
//! never crash or surface errors.

use crate::nav::History;
use crate::session::{SessionStore, StorageError};
use touchline_auth::{AccessPolicy, AuthToken, Session};
use touchline_types::{UserRecord, ViewId};

/// The router's observable state.
#[derive(Debug, Clone)]
pub enum RouterState {
    /// No session; only the login/registration surface is shown.
    Anonymous,
    /// Live session with an active view.
    Authenticated {
        /// The authenticated identity and credential.
        session: Session,
        /// The view the user last committed a navigation to.
        current_view: ViewId,
    },
}

/// Outcome of a [`Router::navigate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The view is now active and recorded in history.
    Committed(ViewId),
    /// The request was discarded; the current view is unchanged.
    Denied(ViewId),
}

impl Navigation {
    /// Returns `true` if the navigation committed.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    /// Returns `true` if the navigation was discarded.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }

    /// Returns the requested view, whatever the outcome.
    #[must_use]
    pub fn requested(&self) -> ViewId {
        match self {
            Self::Committed(view) | Self::Denied(view) => *view,
        }
    }
}

/// Outcome of a [`Router::login`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginOutcome {
    /// `true` exactly once per client: the one-time welcome has not
    /// been shown before. The shell uses this to greet the user
    /// instead of reading storage through a side channel.
    pub first_login: bool,
}

/// Single-page navigation controller.
///
/// Owned by the shell's UI loop; all transitions are synchronous and
/// processed in the order the triggering events arrive.
///
/// # Example
///
/// ```
/// use touchline_auth::{AuthToken, RoleAccess};
/// use touchline_runtime::nav::Router;
/// use touchline_runtime::session::MemoryStore;
/// use touchline_types::{Role, UserRecord, ViewId};
///
/// let mut router = Router::start(RoleAccess, MemoryStore::new()).unwrap();
/// assert!(!router.is_authenticated());
///
/// let user = UserRecord::new(1, "admin", Role::FifaAdmin);
/// router.login(user, AuthToken::new("tok-1")).unwrap();
///
/// let nav = router.navigate(ViewId::Security);
/// assert!(nav.is_committed());
/// assert_eq!(router.current_view(), Some(ViewId::Security));
/// ```
#[derive(Debug)]
pub struct Router<P, S> {
    policy: P,
    store: S,
    state: RouterState,
    history: History,
}

impl<P: AccessPolicy, S: SessionStore> Router<P, S> {
    /// Creates a router, restoring any persisted session.
    ///
    /// With a valid persisted session the router starts
    /// `Authenticated`, resuming the saved view (or the default when
    /// none was saved). Otherwise it starts `Anonymous`. Corrupt
    /// persisted state counts as no session.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] only for environmental storage
    /// failures; absent or corrupt state is not an error.
    pub fn start(policy: P, store: S) -> Result<Self, StorageError> {
        let mut history = History::new();

        let state = match store.restore()? {
            Some(session) => {
                let view = store.last_view()?.unwrap_or(ViewId::DEFAULT);
                history.push(view);
                tracing::debug!(session = %session, view = %view, "resumed persisted session");
                RouterState::Authenticated {
                    session,
                    current_view: view,
                }
            }
            None => RouterState::Anonymous,
        };

        Ok(Self {
            policy,
            store,
            state,
            history,
        })
    }

    /// Enters the authenticated state with a fresh session.
    ///
    /// The session is persisted, the view resets to the default, and
    /// history restarts from it. Logging in over an existing session
    /// replaces it. The returned [`LoginOutcome`] tells the shell
    /// whether to show the one-time welcome.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the session cannot be persisted.
    pub fn login(
        &mut self,
        user: UserRecord,
        token: AuthToken,
    ) -> Result<LoginOutcome, StorageError> {
        let session = Session::new(user, token);
        self.store.establish(&session)?;

        let first_login = !self.store.welcome_seen()?;
        if first_login {
            self.store.mark_welcome_seen()?;
        }
        self.store.save_view(ViewId::DEFAULT)?;

        tracing::debug!(session = %session, first_login, "session established");

        self.history.clear();
        self.history.push(ViewId::DEFAULT);
        self.state = RouterState::Authenticated {
            session,
            current_view: ViewId::DEFAULT,
        };

        Ok(LoginOutcome { first_login })
    }

    /// Requests a navigation to `view`.
    ///
    /// In `Anonymous` state every request is denied. Otherwise the
    /// access policy decides: allowed requests update the current
    /// view, push exactly one history entry, and save the resume
    /// hint; denied requests change nothing (fail closed).
    ///
    /// Failing to persist the resume hint does not fail the
    /// navigation — the hint is best-effort and the in-memory state
    /// has already moved.
    pub fn navigate(&mut self, view: ViewId) -> Navigation {
        let RouterState::Authenticated {
            session,
            current_view,
        } = &mut self.state
        else {
            tracing::warn!(view = %view, "navigation denied: no session");
            return Navigation::Denied(view);
        };

        let role = session.role();
        if !self.policy.is_allowed(role, view) {
            tracing::warn!(role = %role, view = %view, "navigation denied by access policy");
            return Navigation::Denied(view);
        }

        *current_view = view;
        self.history.push(view);
        if let Err(e) = self.store.save_view(view) {
            tracing::warn!(error = %e, view = %view, "failed to save resume hint");
        }

        tracing::debug!(role = %role, view = %view, "navigation committed");
        Navigation::Committed(view)
    }

    /// Traverses one history entry back, returning the restored view.
    ///
    /// Historical entries passed the policy when they were pushed and
    /// are **not** re-checked here; the render-time
    /// [`effective_view`](Self::effective_view) guard covers the case
    /// of a role change since then.
    pub fn back(&mut self) -> Option<ViewId> {
        let entry = self.history.back()?;
        self.restore_entry(entry.view)
    }

    /// Traverses one history entry forward, returning the restored view.
    pub fn forward(&mut self) -> Option<ViewId> {
        let entry = self.history.forward()?;
        self.restore_entry(entry.view)
    }

    fn restore_entry(&mut self, view: ViewId) -> Option<ViewId> {
        let RouterState::Authenticated { current_view, .. } = &mut self.state else {
            return None;
        };

        *current_view = view;
        if let Err(e) = self.store.save_view(view) {
            tracing::warn!(error = %e, view = %view, "failed to save resume hint");
        }
        tracing::debug!(view = %view, "restored view from history");
        Some(view)
    }

    /// Ends the session: clears persisted identity, resets to
    /// `Anonymous` and drops the history.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisted state cannot be removed.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.store.clear()?;
        self.state = RouterState::Anonymous;
        self.history.clear();
        tracing::debug!("session cleared");
        Ok(())
    }

    /// Returns the active view, or `None` when anonymous.
    #[must_use]
    pub fn current_view(&self) -> Option<ViewId> {
        match &self.state {
            RouterState::Authenticated { current_view, .. } => Some(*current_view),
            RouterState::Anonymous => None,
        }
    }

    /// Returns the view that should actually render.
    ///
    /// Re-applies the access policy to the current view and
    /// substitutes the default when it no longer passes — the
    /// invariant that the rendered view is always permitted holds
    /// even for views restored from history or from a previous run.
    /// Router state is not mutated.
    #[must_use]
    pub fn effective_view(&self) -> Option<ViewId> {
        match &self.state {
            RouterState::Authenticated {
                session,
                current_view,
            } => {
                if self.policy.is_allowed(session.role(), *current_view) {
                    Some(*current_view)
                } else {
                    Some(ViewId::DEFAULT)
                }
            }
            RouterState::Anonymous => None,
        }
    }

    /// Returns the live session, or `None` when anonymous.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            RouterState::Authenticated { session, .. } => Some(session),
            RouterState::Anonymous => None,
        }
    }

    /// Returns `true` when a session is live.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, RouterState::Authenticated { .. })
    }

    /// Returns the observable state.
    #[must_use]
    pub fn state(&self) -> &RouterState {
        &self.state
    }

    /// Returns the navigation history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use touchline_auth::RoleAccess;
    use touchline_types::Role;

    fn admin_user() -> UserRecord {
        UserRecord::new(1, "admin", Role::FifaAdmin)
    }

    fn player_user() -> UserRecord {
        UserRecord::new(2, "p.santos", Role::Player)
    }

    fn fresh_router() -> Router<RoleAccess, MemoryStore> {
        Router::start(RoleAccess, MemoryStore::new()).expect("start should succeed")
    }

    #[test]
    fn cold_start_is_anonymous() {
        let router = fresh_router();
        assert!(!router.is_authenticated());
        assert!(router.current_view().is_none());
        assert!(router.effective_view().is_none());
        assert!(router.session().is_none());
    }

    #[test]
    fn login_enters_default_view() {
        let mut router = fresh_router();
        router
            .login(admin_user(), AuthToken::new("tok"))
            .expect("login should succeed");

        assert!(router.is_authenticated());
        assert_eq!(router.current_view(), Some(ViewId::Home));
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn first_login_reports_welcome_once() {
        let mut router = fresh_router();

        let outcome = router.login(admin_user(), AuthToken::new("tok")).unwrap();
        assert!(outcome.first_login);

        router.logout().unwrap();
        let outcome = router.login(admin_user(), AuthToken::new("tok2")).unwrap();
        assert!(!outcome.first_login);
    }

    #[test]
    fn allowed_navigation_commits() {
        let mut router = fresh_router();
        router.login(admin_user(), AuthToken::new("tok")).unwrap();

        let nav = router.navigate(ViewId::Security);
        assert_eq!(nav, Navigation::Committed(ViewId::Security));
        assert_eq!(router.current_view(), Some(ViewId::Security));
    }

    #[test]
    fn denied_navigation_is_a_noop() {
        let mut router = fresh_router();
        router.login(player_user(), AuthToken::new("tok")).unwrap();
        router.navigate(ViewId::Matches);

        let nav = router.navigate(ViewId::Users);
        assert_eq!(nav, Navigation::Denied(ViewId::Users));
        // Current view retained from before the denied request
        assert_eq!(router.current_view(), Some(ViewId::Matches));
        // No history entry for the denied request
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn navigation_while_anonymous_is_denied() {
        let mut router = fresh_router();
        let nav = router.navigate(ViewId::Matches);
        assert!(nav.is_denied());
        assert!(router.current_view().is_none());
    }

    #[test]
    fn repeated_navigation_is_idempotent_in_state() {
        let mut router = fresh_router();
        router.login(admin_user(), AuthToken::new("tok")).unwrap();

        router.navigate(ViewId::Teams);
        router.navigate(ViewId::Teams);

        assert_eq!(router.current_view(), Some(ViewId::Teams));
        // One entry per call: login seed + two commits
        assert_eq!(router.history().len(), 3);
    }

    #[test]
    fn back_restores_prior_view_without_policy_check() {
        let mut router = fresh_router();
        router.login(admin_user(), AuthToken::new("tok")).unwrap();
        router.navigate(ViewId::Teams);
        router.navigate(ViewId::Players);

        assert_eq!(router.back(), Some(ViewId::Teams));
        assert_eq!(router.current_view(), Some(ViewId::Teams));

        assert_eq!(router.forward(), Some(ViewId::Players));
        assert_eq!(router.current_view(), Some(ViewId::Players));
    }

    #[test]
    fn back_at_oldest_entry_is_none() {
        let mut router = fresh_router();
        router.login(admin_user(), AuthToken::new("tok")).unwrap();

        assert!(router.back().is_none());
        assert_eq!(router.current_view(), Some(ViewId::Home));
    }

    #[test]
    fn navigate_after_back_truncates_forward_stack() {
        let mut router = fresh_router();
        router.login(admin_user(), AuthToken::new("tok")).unwrap();
        router.navigate(ViewId::Teams);
        router.navigate(ViewId::Players);

        router.back();
        router.navigate(ViewId::Venues);

        assert!(router.forward().is_none());
        assert_eq!(router.current_view(), Some(ViewId::Venues));
    }

    #[test]
    fn logout_returns_to_anonymous() {
        let mut router = fresh_router();
        router.login(admin_user(), AuthToken::new("tok")).unwrap();
        router.navigate(ViewId::Dashboard);

        router.logout().expect("logout should succeed");

        assert!(!router.is_authenticated());
        assert!(router.current_view().is_none());
        assert!(router.history().is_empty());
    }

    #[test]
    fn resume_from_persisted_session_and_view() {
        let session = Session::new(admin_user(), AuthToken::new("tok"));
        let store = MemoryStore::seeded(session, Some(ViewId::Matches));

        let router = Router::start(RoleAccess, store).expect("start should succeed");

        assert!(router.is_authenticated());
        assert_eq!(router.current_view(), Some(ViewId::Matches));
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn resume_without_saved_view_defaults_to_home() {
        let session = Session::new(admin_user(), AuthToken::new("tok"));
        let store = MemoryStore::seeded(session, None);

        let router = Router::start(RoleAccess, store).expect("start should succeed");
        assert_eq!(router.current_view(), Some(ViewId::Home));
    }

    #[test]
    fn effective_view_substitutes_default_for_disallowed_state() {
        // A player resuming a saved view their role cannot enter:
        // the raw state keeps it, the rendered view falls back.
        let session = Session::new(player_user(), AuthToken::new("tok"));
        let store = MemoryStore::seeded(session, Some(ViewId::Users));

        let router = Router::start(RoleAccess, store).expect("start should succeed");

        assert_eq!(router.current_view(), Some(ViewId::Users));
        assert_eq!(router.effective_view(), Some(ViewId::Home));
    }

    #[test]
    fn effective_view_passes_allowed_state_through() {
        let mut router = fresh_router();
        router.login(admin_user(), AuthToken::new("tok")).unwrap();
        router.navigate(ViewId::Analytics);

        assert_eq!(router.effective_view(), Some(ViewId::Analytics));
    }

    #[test]
    fn relogin_replaces_session_and_resets_view() {
        let mut router = fresh_router();
        router.login(admin_user(), AuthToken::new("tok")).unwrap();
        router.navigate(ViewId::Users);

        router.login(player_user(), AuthToken::new("tok2")).unwrap();

        assert_eq!(router.current_view(), Some(ViewId::Home));
        assert_eq!(router.session().map(Session::role), Some(Role::Player));
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn denied_navigation_leaves_persisted_hint_alone() {
        let store = MemoryStore::new();
        let mut router = Router::start(RoleAccess, store).unwrap();
        router.login(player_user(), AuthToken::new("tok")).unwrap();
        router.navigate(ViewId::Stats);

        router.navigate(ViewId::Venues);

        // The denied request must not leak into the resume hint
        assert_eq!(router.current_view(), Some(ViewId::Stats));
    }
}

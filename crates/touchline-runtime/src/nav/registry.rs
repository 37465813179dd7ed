//! View registry — central dispatch from view identifiers to screens.
//!
//! Screens are external collaborators: they own their data fetching,
//! form state and validation. The registry's only job is to answer
//! "which screen renders this view", with the home screen as the
//! fallback for unregistered views.

use std::collections::HashMap;
use touchline_auth::{AuthToken, Session};
use touchline_types::{UserRecord, ViewId};

/// What a screen receives when it becomes active.
///
/// A snapshot of the identity and credential, cloned out of the live
/// session so the screen can hold it across its own async work
/// without borrowing the router.
#[derive(Debug, Clone)]
pub struct ScreenContext {
    /// The authenticated user.
    pub user: UserRecord,
    /// The bearer credential for the screen's own API calls.
    pub token: AuthToken,
}

impl ScreenContext {
    /// Builds a context from the live session.
    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        Self {
            user: session.user().clone(),
            token: session.token().clone(),
        }
    }
}

/// A screen component.
///
/// Implementations live outside this crate. The contract is minimal:
/// a screen names the view it renders and is notified when it becomes
/// the active screen.
pub trait Screen {
    /// The view this screen renders.
    fn view(&self) -> ViewId;

    /// Called when the router's effective view selects this screen.
    ///
    /// The default implementation does nothing; screens that fetch on
    /// entry override it.
    fn on_enter(&mut self, _ctx: &ScreenContext) {}
}

/// Central registry mapping each [`ViewId`] to its screen.
///
/// # Fallback
///
/// [`resolve`](Self::resolve) falls back to the screen registered for
/// [`ViewId::DEFAULT`] when the requested view has no registration,
/// mirroring the navigation-level rule that the default view is the
/// universal destination. If not even the default screen is
/// registered, resolution yields `None` and the shell renders its
/// own empty state.
///
/// # Example
///
/// ```
/// use touchline_runtime::nav::{Screen, ScreenContext, ViewRegistry};
/// use touchline_types::ViewId;
///
/// struct HomeScreen;
///
/// impl Screen for HomeScreen {
///     fn view(&self) -> ViewId {
///         ViewId::Home
///     }
/// }
///
/// let mut registry = ViewRegistry::new();
/// registry.register(Box::new(HomeScreen));
///
/// assert!(registry.contains(ViewId::Home));
/// // Unregistered views fall back to the home screen
/// let screen = registry.resolve(ViewId::Press).unwrap();
/// assert_eq!(screen.view(), ViewId::Home);
/// ```
#[derive(Default)]
pub struct ViewRegistry {
    screens: HashMap<ViewId, Box<dyn Screen>>,
}

impl ViewRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a screen under the view it names.
    ///
    /// Registering a second screen for the same view replaces the
    /// first; the replacement is logged.
    pub fn register(&mut self, screen: Box<dyn Screen>) {
        let view = screen.view();
        if self.screens.insert(view, screen).is_some() {
            tracing::debug!(view = %view, "replaced registered screen");
        }
    }

    /// Returns the screen registered for `view`, without fallback.
    #[must_use]
    pub fn get(&self, view: ViewId) -> Option<&dyn Screen> {
        self.screens.get(&view).map(|screen| &**screen)
    }

    /// Returns the screen for `view`, falling back to the default
    /// view's screen when unregistered.
    #[must_use]
    pub fn resolve(&self, view: ViewId) -> Option<&dyn Screen> {
        self.get(view).or_else(|| self.get(ViewId::DEFAULT))
    }

    /// Mutable variant of [`resolve`](Self::resolve), for driving
    /// [`Screen::on_enter`].
    pub fn resolve_mut(&mut self, view: ViewId) -> Option<&mut Box<dyn Screen>> {
        let key = if self.screens.contains_key(&view) {
            view
        } else {
            ViewId::DEFAULT
        };
        self.screens.get_mut(&key)
    }

    /// Returns `true` if a screen is registered for `view`.
    #[must_use]
    pub fn contains(&self, view: ViewId) -> bool {
        self.screens.contains_key(&view)
    }

    /// Returns the number of registered screens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Returns `true` if no screen is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

impl std::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut views: Vec<&'static str> = self.screens.keys().map(ViewId::as_str).collect();
        views.sort_unstable();
        f.debug_struct("ViewRegistry").field("views", &views).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchline_auth::AuthToken;
    use touchline_types::Role;

    struct StubScreen {
        id: ViewId,
        entered: usize,
    }

    impl StubScreen {
        fn boxed(id: ViewId) -> Box<Self> {
            Box::new(Self { id, entered: 0 })
        }
    }

    impl Screen for StubScreen {
        fn view(&self) -> ViewId {
            self.id
        }

        fn on_enter(&mut self, _ctx: &ScreenContext) {
            self.entered += 1;
        }
    }

    fn sample_ctx() -> ScreenContext {
        let session = Session::new(
            UserRecord::new(8, "e.walsh", Role::MatchOfficial),
            AuthToken::new("tok-8"),
        );
        ScreenContext::for_session(&session)
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = ViewRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve(ViewId::Home).is_none());
    }

    #[test]
    fn registered_screen_is_found() {
        let mut registry = ViewRegistry::new();
        registry.register(StubScreen::boxed(ViewId::Matches));

        assert!(registry.contains(ViewId::Matches));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(ViewId::Matches).map(Screen::view),
            Some(ViewId::Matches)
        );
    }

    #[test]
    fn unregistered_view_falls_back_to_default_screen() {
        let mut registry = ViewRegistry::new();
        registry.register(StubScreen::boxed(ViewId::Home));

        let screen = registry.resolve(ViewId::Tactics).expect("fallback");
        assert_eq!(screen.view(), ViewId::Home);
    }

    #[test]
    fn get_does_not_fall_back() {
        let mut registry = ViewRegistry::new();
        registry.register(StubScreen::boxed(ViewId::Home));

        assert!(registry.get(ViewId::Tactics).is_none());
    }

    #[test]
    fn re_registration_replaces() {
        let mut registry = ViewRegistry::new();
        registry.register(StubScreen::boxed(ViewId::Teams));
        registry.register(StubScreen::boxed(ViewId::Teams));

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn resolve_mut_drives_on_enter() {
        let mut registry = ViewRegistry::new();
        registry.register(StubScreen::boxed(ViewId::Home));

        let ctx = sample_ctx();
        // Direct hit
        registry
            .resolve_mut(ViewId::Home)
            .expect("home screen")
            .on_enter(&ctx);
        // Fallback hit
        registry
            .resolve_mut(ViewId::Press)
            .expect("fallback screen")
            .on_enter(&ctx);

        let screen = registry.resolve(ViewId::Home).expect("home screen");
        assert_eq!(screen.view(), ViewId::Home);
    }

    #[test]
    fn context_snapshot_carries_identity_and_token() {
        let ctx = sample_ctx();
        assert_eq!(ctx.user.username, "e.walsh");
        assert_eq!(ctx.token.as_str(), "tok-8");
    }

    #[test]
    fn debug_lists_registered_views() {
        let mut registry = ViewRegistry::new();
        registry.register(StubScreen::boxed(ViewId::Home));
        registry.register(StubScreen::boxed(ViewId::Matches));

        let rendered = format!("{registry:?}");
        assert!(rendered.contains("home"));
        assert!(rendered.contains("matches"));
    }
}

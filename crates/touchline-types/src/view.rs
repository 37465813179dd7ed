//! View identifier types.
//!
//! A [`ViewId`] names one navigable screen of the console. The set is
//! closed: navigation targets are enum variants, not free strings, so
//! a typo is a compile error (or a parse error at the wire boundary)
//! instead of a silent fall-through to the default view.

use crate::error::ViewParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier for a navigable screen.
///
/// # String Form
///
/// Each view has a lowercase string form (`as_str`, `FromStr`, serde)
/// matching the identifiers used in saved navigation state:
/// `"home"`, `"dashboard"`, `"teams"`, and so on.
///
/// # Default View
///
/// [`ViewId::DEFAULT`] (`Home`) is the universal fallback: every role
/// may reach it, denied navigations leave it reachable, and restored
/// state that no longer passes the access policy resolves to it.
///
/// # Example
///
/// ```
/// use touchline_types::ViewId;
///
/// let view: ViewId = "matches".parse().unwrap();
/// assert_eq!(view, ViewId::Matches);
/// assert_eq!(view.as_str(), "matches");
/// assert_eq!(ViewId::DEFAULT, ViewId::Home);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    /// Landing page; always reachable.
    Home,
    /// Role-specific dashboard.
    Dashboard,
    /// Team administration.
    Teams,
    /// Player administration.
    Players,
    /// Match scheduling and results.
    Matches,
    /// Tournament administration.
    Tournaments,
    /// Venue administration.
    Venues,
    /// Match-official administration.
    Officials,
    /// Platform user administration.
    Users,
    /// Analytics dashboard.
    Analytics,
    /// Security dashboard.
    Security,
    /// Own-profile editor.
    Profile,
    /// Notification center.
    Notifications,
    /// Account settings.
    Settings,
    /// Player statistics (own stats for players).
    Stats,
    /// Tactical analysis board.
    Tactics,
    /// Match reports.
    Reports,
    /// Press conference listings.
    Press,
}

impl ViewId {
    /// The fallback destination every role may reach.
    pub const DEFAULT: ViewId = ViewId::Home;

    /// Every view, in declaration order. Useful for table-driven tests.
    pub const ALL: [ViewId; 18] = [
        ViewId::Home,
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
        ViewId::Notifications,
        ViewId::Settings,
        ViewId::Stats,
        ViewId::Tactics,
        ViewId::Reports,
        ViewId::Press,
    ];

    /// Returns the lowercase string form of this view.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Dashboard => "dashboard",
            ViewId::Teams => "teams",
            ViewId::Players => "players",
            ViewId::Matches => "matches",
            ViewId::Tournaments => "tournaments",
            ViewId::Venues => "venues",
            ViewId::Officials => "officials",
            ViewId::Users => "users",
            ViewId::Analytics => "analytics",
            ViewId::Security => "security",
            ViewId::Profile => "profile",
            ViewId::Notifications => "notifications",
            ViewId::Settings => "settings",
            ViewId::Stats => "stats",
            ViewId::Tactics => "tactics",
            ViewId::Reports => "reports",
            ViewId::Press => "press",
        }
    }

    /// Returns `true` if this is the default (fallback) view.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl FromStr for ViewId {
    type Err = ViewParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .iter()
            .find(|view| view.as_str() == s)
            .copied()
            .ok_or_else(|| ViewParseError(s.to_string()))
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

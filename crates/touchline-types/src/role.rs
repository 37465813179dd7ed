//! User role types.
//!
//! A [`Role`] is the category the platform assigns to an authenticated
//! user. It is the sole input (besides the requested view) to the
//! access policy: what a user may see is a function of their role,
//! never of per-user flags.

use crate::error::RoleParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The category of an authenticated user.
///
/// The set is closed: the backend's `role` field is one of exactly
/// these eight wire values, and anything else is a parse error rather
/// than a silent fallback. Keeping the set closed lets the access
/// policy be an exhaustive `match` that the compiler checks for
/// completeness.
///
/// # Wire Format
///
/// Serde uses the platform's SCREAMING_SNAKE_CASE wire values:
///
/// | Variant | Wire value |
/// |---------|-----------|
/// | `Guest` | `GUEST` |
/// | `Player` | `PLAYER` |
/// | `Coach` | `COACH` |
/// | `TeamManager` | `TEAM_MANAGER` |
/// | `TournamentDirector` | `TOURNAMENT_DIRECTOR` |
/// | `FifaAdmin` | `FIFA_ADMIN` |
/// | `MatchOfficial` | `MATCH_OFFICIAL` |
/// | `MediaRepresentative` | `MEDIA_REPRESENTATIVE` |
///
/// # Example
///
/// ```
/// use touchline_types::Role;
///
/// let role: Role = "TEAM_MANAGER".parse().unwrap();
/// assert_eq!(role, Role::TeamManager);
/// assert_eq!(role.wire_name(), "TEAM_MANAGER");
/// assert_eq!(role.display_name(), "Team Manager");
///
/// assert!("SUPER_ADMIN".parse::<Role>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Unauthenticated-tier visitor with a registered account.
    Guest,
    /// Registered player; sees their own matches and statistics.
    Player,
    /// Team coach; works with players, matches and tactics.
    Coach,
    /// Team manager; coach scope plus team administration.
    TeamManager,
    /// Tournament director; runs tournaments, venues and reporting.
    TournamentDirector,
    /// Platform administrator with full reach.
    FifaAdmin,
    /// Referee or other match official.
    MatchOfficial,
    /// Accredited press with read access to match and team data.
    MediaRepresentative,
}

impl Role {
    /// Every role, in wire order. Useful for table-driven tests.
    pub const ALL: [Role; 8] = [
        Role::Guest,
        Role::Player,
        Role::Coach,
        Role::TeamManager,
        Role::TournamentDirector,
        Role::FifaAdmin,
        Role::MatchOfficial,
        Role::MediaRepresentative,
    ];

    /// Returns the wire value used by the backend API.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        match self {
            Role::Guest => "GUEST",
            Role::Player => "PLAYER",
            Role::Coach => "COACH",
            Role::TeamManager => "TEAM_MANAGER",
            Role::TournamentDirector => "TOURNAMENT_DIRECTOR",
            Role::FifaAdmin => "FIFA_ADMIN",
            Role::MatchOfficial => "MATCH_OFFICIAL",
            Role::MediaRepresentative => "MEDIA_REPRESENTATIVE",
        }
    }

    /// Returns the human-readable name shown in headers and menus.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::Player => "Player",
            Role::Coach => "Coach",
            Role::TeamManager => "Team Manager",
            Role::TournamentDirector => "Tournament Director",
            Role::FifaAdmin => "FIFA Admin",
            Role::MatchOfficial => "Match Official",
            Role::MediaRepresentative => "Media Representative",
        }
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .find(|role| role.wire_name() == s)
            .copied()
            .ok_or_else(|| RoleParseError(s.to_string()))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

//! Authenticated user record.

use crate::Role;
use serde::{Deserialize, Serialize};

/// The identity record delivered by the backend on login.
///
/// Field names follow the backend's camelCase JSON. Only the fields
/// this core actually consumes are modeled; unknown fields in the
/// payload are ignored, since the backend owns the full contract.
///
/// # Example
///
/// ```
/// use touchline_types::{Role, UserRecord};
///
/// let json = r#"{
///     "id": 7,
///     "username": "d.rivera",
///     "email": "d.rivera@example.org",
///     "role": "COACH",
///     "team": "CF Atlantico"
/// }"#;
///
/// let user: UserRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(user.role, Role::Coach);
/// assert_eq!(user.team.as_deref(), Some("CF Atlantico"));
/// assert!(user.player_id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Backend-assigned identifier.
    pub id: u64,

    /// Unique login name.
    pub username: String,

    /// Contact address, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The role driving the access policy.
    pub role: Role,

    /// Federation registration number, for registered personnel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fifa_id: Option<String>,

    /// Confederation the user belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confederation: Option<String>,

    /// Team affiliation, for team-scoped roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    /// Linked player record, for users with [`Role::Player`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<u64>,
}

impl UserRecord {
    /// Creates a minimal record with only the required fields set.
    ///
    /// Optional affiliations start empty; set them directly when the
    /// payload carries them.
    #[must_use]
    pub fn new(id: u64, username: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            email: None,
            role,
            fifa_id: None,
            confederation: None,
            team: None,
            player_id: None,
        }
    }

    /// Returns the player id to use for player-scoped screens.
    ///
    /// Falls back to the user id when no explicit link exists, which
    /// is how the platform resolves self-service statistics.
    #[must_use]
    pub fn effective_player_id(&self) -> u64 {
        self.player_id.unwrap_or(self.id)
    }
}

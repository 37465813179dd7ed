//! Endpoint catalog and URL resolution.
//!
//! The backend API is addressed by symbolic names. The catalog is a
//! static name → path-template table; resolution substitutes `{key}`
//! tokens and prefixes the configured base host. Pure string work —
//! no I/O, no state beyond the base URL.

use super::EndpointError;
use std::collections::HashMap;

/// The platform API surface, as symbolic name → path template.
///
/// Templates use `{key}` placeholders for path parameters.
const ENDPOINTS: &[(&str, &str)] = &[
    // Authentication
    ("LOGIN", "/api/auth/login"),
    ("REGISTER", "/api/auth/register"),
    ("LOGOUT", "/api/auth/logout"),
    // Teams
    ("TEAMS", "/api/teams"),
    ("TEAM_REGISTER", "/api/teams/register"),
    ("TEAM_STATUS", "/api/teams/{id}/status"),
    // Players
    ("PLAYERS", "/api/players"),
    ("PLAYER_BY_ID", "/api/players/{id}"),
    ("PLAYER_STATS", "/api/players/{id}/stats"),
    ("PLAYER_MEDICAL", "/api/players/{id}/medical"),
    ("PLAYER_TOP_SCORERS", "/api/players/top-scorers"),
    ("PLAYER_SEARCH", "/api/players/search"),
    // Matches
    ("MATCHES", "/api/matches"),
    ("MATCH_BY_ID", "/api/matches/{id}"),
    ("MATCH_RESULT", "/api/matches/{id}/result"),
    ("MATCH_STATS", "/api/matches/{id}/statistics"),
    ("MATCH_EVENTS", "/api/matches/{id}/events"),
    ("MATCHES_STATUS", "/api/matches/status/{status}"),
    ("MATCHES_UPCOMING", "/api/matches/upcoming"),
    ("MATCHES_LIVE", "/api/matches/live"),
    ("MATCHES_PAST", "/api/matches/past"),
    // Tournaments
    ("TOURNAMENTS", "/api/tournaments"),
    ("TOURNAMENT_BY_ID", "/api/tournaments/{id}"),
    ("TOURNAMENT_STATUS", "/api/tournaments/status/{status}"),
    ("TOURNAMENT_ACTIVE", "/api/tournaments/active"),
    ("TOURNAMENT_UPCOMING", "/api/tournaments/upcoming"),
    ("TOURNAMENT_STANDINGS", "/api/tournaments/{id}/standings"),
    ("TOURNAMENT_BRACKET", "/api/tournaments/{id}/bracket"),
    ("TOURNAMENT_ADVANCE", "/api/tournaments/{id}/advance"),
    ("TOURNAMENT_STATISTICS", "/api/tournaments/{id}/statistics"),
    // Venues
    ("VENUES", "/api/venues"),
    ("VENUE_BY_ID", "/api/venues/{id}"),
    ("VENUE_BY_CITY", "/api/venues/city/{city}"),
    ("VENUE_BY_COUNTRY", "/api/venues/country/{country}"),
    ("VENUE_BY_CAPACITY", "/api/venues/capacity"),
    ("VENUE_BY_SURFACE", "/api/venues/surface/{surfaceType}"),
    // Profile
    ("PROFILE", "/api/profile"),
    // Tickets & payments
    ("TICKETS", "/api/tickets"),
    ("MY_TICKETS", "/api/tickets/my"),
    ("PAYMENT_CHECKOUT", "/api/payments/checkout"),
    ("PAYMENT_CAPTURE", "/api/payments/capture/{reference}"),
    // Officials
    ("OFFICIALS", "/api/officials"),
    ("OFFICIAL_BY_ID", "/api/officials/{id}"),
    ("OFFICIAL_BY_TYPE", "/api/officials/type/{type}"),
    ("OFFICIAL_BY_NATIONALITY", "/api/officials/nationality/{nationality}"),
    ("OFFICIAL_BY_EXPERIENCE", "/api/officials/experience"),
    // Notifications
    ("NOTIFICATIONS", "/api/notifications"),
    ("NOTIFICATIONS_BY_USER", "/api/notifications/user/{userId}"),
    ("NOTIFICATIONS_UNREAD_BY_USER", "/api/notifications/user/{userId}/unread"),
    ("NOTIFICATIONS_MARK_ALL_READ", "/api/notifications/user/{userId}/mark-all-read"),
    ("NOTIFICATION_MARK_READ", "/api/notifications/{id}/read"),
    ("NOTIFICATION_DELETE", "/api/notifications/{id}"),
    ("NOTIFICATION_BROADCAST", "/api/notifications/broadcast"),
    // Admin
    ("ADMIN_ANALYTICS", "/api/admin/analytics"),
    ("ADMIN_REPORTS", "/api/admin/reports"),
    ("ADMIN_AUDIT_LOGS", "/api/admin/audit-logs"),
    ("ADMIN_SYSTEM_HEALTH", "/api/admin/system-health"),
    ("ADMIN_USERS", "/api/auth/users"),
    // Assistant services
    ("AI_TOURNAMENT_PROCESS", "/api/ai/tournament/process"),
    ("AI_TOURNAMENT_PROCESS_ONE", "/api/ai/tournament/process/{tournamentId}"),
    ("AI_MATCH_ANALYZE", "/api/ai/match/analyze/{matchId}"),
    ("AI_ML_PREDICT", "/api/ai/ml/predict/match/{matchId}"),
    ("AI_ML_ANALYZE_TOURNAMENT", "/api/ai/ml/analyze/tournament/{tournamentId}"),
    ("AI_ML_OPTIMIZE", "/api/ai/ml/optimize/{entityType}/{entityId}"),
    ("AI_NLP_SEARCH", "/api/ai/nlp/search"),
    ("AI_NLP_REPORT", "/api/ai/nlp/report/generate"),
    ("AI_WORKFLOW_CREATE", "/api/ai/workflow/create"),
    ("AI_WORKFLOW_ROUTE", "/api/ai/workflow/route"),
    ("AI_WORKFLOW_NOTIFY", "/api/ai/workflow/notify"),
    ("AI_WORKFLOW_OPTIMIZE", "/api/ai/workflow/optimize"),
    ("AI_ANOMALY_DETECT_PERFORMANCE", "/api/ai/anomaly/detect/performance"),
    ("AI_ANOMALY_DETECT_BEHAVIOR", "/api/ai/anomaly/detect/behavior"),
];

/// Resolves symbolic endpoint names to absolute URLs.
///
/// # Failure Model
///
/// An unknown name or an unfilled template parameter is a programming
/// error at the call site; [`resolve`](Self::resolve) fails loudly
/// with a typed error rather than producing a half-built URL.
///
/// # Substitution
///
/// Plain `{key}` token replacement, applied deterministically.
/// Surplus parameters are ignored; no escaping is applied — callers
/// own encoding if a value embeds reserved characters.
///
/// # Example
///
/// ```
/// use touchline_runtime::api::EndpointCatalog;
///
/// let api = EndpointCatalog::new("https://api.example.org");
///
/// let url = api.resolve("MATCH_STATS", &[("id", "42")]).unwrap();
/// assert_eq!(url, "https://api.example.org/api/matches/42/statistics");
///
/// assert!(api.resolve("MATCH_TELEPATHY", &[]).is_err());
/// assert!(api.resolve("MATCH_STATS", &[]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EndpointCatalog {
    base_url: String,
}

impl EndpointCatalog {
    /// Creates a catalog resolving against `base_url`.
    ///
    /// A trailing slash on the base is tolerated and normalized away.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Returns the configured base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the path template for `name`, if the catalog knows it.
    #[must_use]
    pub fn template(name: &str) -> Option<&'static str> {
        ENDPOINTS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, template)| *template)
    }

    /// Returns every symbolic name in the catalog.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        ENDPOINTS.iter().map(|(name, _)| *name).collect()
    }

    /// Resolves `name` with `params` into an absolute URL.
    ///
    /// # Errors
    ///
    /// - [`EndpointError::UnknownEndpoint`] when `name` is not in the
    ///   catalog
    /// - [`EndpointError::MissingParam`] when the template still
    ///   contains a `{key}` after substitution
    pub fn resolve(&self, name: &str, params: &[(&str, &str)]) -> Result<String, EndpointError> {
        let template =
            Self::template(name).ok_or_else(|| EndpointError::UnknownEndpoint(name.to_string()))?;

        let mut path = template.to_string();
        for (key, value) in params {
            path = path.replace(&format!("{{{key}}}"), value);
        }

        if let Some(param) = unfilled_key(&path) {
            return Err(EndpointError::MissingParam {
                endpoint: name.to_string(),
                param,
            });
        }

        Ok(format!("{}{}", self.base_url, path))
    }

    /// [`resolve`](Self::resolve) with a map instead of a pair slice.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn resolve_map(
        &self,
        name: &str,
        params: &HashMap<&str, &str>,
    ) -> Result<String, EndpointError> {
        let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, *v)).collect();
        self.resolve(name, &pairs)
    }
}

/// Returns the first `{key}` still present in `path`, if any.
fn unfilled_key(path: &str) -> Option<String> {
    let start = path.find('{')?;
    let rest = &path[start + 1..];
    let end = rest.find('}')?;
    Some(rest[..end].to_string())
}

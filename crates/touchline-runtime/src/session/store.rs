//! Session storage abstraction.
//!
//! The [`SessionStore`] trait defines the interface for persisting
//! client state across restarts. This allows pluggable backends
//! (local files for the desktop shell, an in-memory store for tests
//! and embedding).

use super::StorageError;
use touchline_auth::Session;
use touchline_types::ViewId;

/// Client-state persistence abstraction.
///
/// A store owns four conceptual keys:
///
/// | Key | Lifetime | Purpose |
/// |-----|----------|---------|
/// | token | until logout | bearer credential |
/// | user | until logout | serialized [`UserRecord`](touchline_types::UserRecord) |
/// | view | until logout | last active view, for reload resume |
/// | welcome | forever | the one-time welcome flag |
///
/// # Design Principles
///
/// - **Both-or-neither**: `establish` persists user and token
///   together; `restore` yields a session only when both are present
///   and parseable
/// - **Corruption is absence**: unreadable data restores as `None`
///   (logged, never surfaced); only environmental failures are errors
/// - **No network**: login and registration calls belong to screens;
///   the store only ever sees their already-resolved results
///
/// # Example
///
/// ```
/// use touchline_runtime::session::{MemoryStore, SessionStore};
/// use touchline_auth::{AuthToken, Session};
/// use touchline_types::{Role, UserRecord};
///
/// let store = MemoryStore::new();
/// assert!(store.restore().unwrap().is_none());
///
/// let session = Session::new(
///     UserRecord::new(1, "admin", Role::FifaAdmin),
///     AuthToken::new("tok-1"),
/// );
/// store.establish(&session).unwrap();
/// assert_eq!(store.restore().unwrap(), Some(session));
/// ```
pub trait SessionStore {
    /// Reads the persisted identity.
    ///
    /// Returns `Ok(None)` when no session is stored **or** when the
    /// stored data is incomplete or unparseable — a half-written or
    /// corrupted session is treated as "no session", not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] only for environmental failures
    /// (e.g. the storage location is unreadable).
    fn restore(&self) -> Result<Option<Session>, StorageError>;

    /// Persists the session's user and token together.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the state cannot be written.
    fn establish(&self, session: &Session) -> Result<(), StorageError>;

    /// Removes the identity fields and the saved view.
    ///
    /// The welcome flag survives: it marks the account's first login
    /// on this client, not the session.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if removal fails.
    fn clear(&self) -> Result<(), StorageError>;

    /// Reads the last active view, if one was saved.
    ///
    /// An unparseable saved view yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for environmental failures.
    fn last_view(&self) -> Result<Option<ViewId>, StorageError>;

    /// Saves the active view for same-client resume.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the view cannot be written.
    fn save_view(&self, view: ViewId) -> Result<(), StorageError>;

    /// Returns `true` if the one-time welcome has been shown.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] for environmental failures.
    fn welcome_seen(&self) -> Result<bool, StorageError>;

    /// Marks the one-time welcome as shown.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the flag cannot be written.
    fn mark_welcome_seen(&self) -> Result<(), StorageError>;
}

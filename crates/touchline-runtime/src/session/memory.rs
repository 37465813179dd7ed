//! In-memory session storage.

use super::{SessionStore, StorageError};
use parking_lot::RwLock;
use touchline_auth::Session;
use touchline_types::ViewId;

/// In-memory session store for tests and embedded shells.
///
/// Holds the same four conceptual keys as
/// [`LocalFileStore`](super::LocalFileStore) but never touches the
/// filesystem, so every operation is infallible in practice (the
/// `Result` shape is kept for trait parity).
///
/// # Example
///
/// ```
/// use touchline_runtime::session::{MemoryStore, SessionStore};
/// use touchline_types::ViewId;
///
/// let store = MemoryStore::new();
/// store.save_view(ViewId::Matches).unwrap();
/// assert_eq!(store.last_view().unwrap(), Some(ViewId::Matches));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    session: Option<Session>,
    view: Option<ViewId>,
    welcome: bool,
}

impl MemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a session and saved view.
    ///
    /// Convenience for tests that simulate a warm restart.
    #[must_use]
    pub fn seeded(session: Session, view: Option<ViewId>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                session: Some(session),
                view,
                welcome: true,
            }),
        }
    }
}

impl SessionStore for MemoryStore {
    fn restore(&self) -> Result<Option<Session>, StorageError> {
        Ok(self.inner.read().session.clone())
    }

    fn establish(&self, session: &Session) -> Result<(), StorageError> {
        self.inner.write().session = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut inner = self.inner.write();
        inner.session = None;
        inner.view = None;
        Ok(())
    }

    fn last_view(&self) -> Result<Option<ViewId>, StorageError> {
        Ok(self.inner.read().view)
    }

    fn save_view(&self, view: ViewId) -> Result<(), StorageError> {
        self.inner.write().view = Some(view);
        Ok(())
    }

    fn welcome_seen(&self) -> Result<bool, StorageError> {
        Ok(self.inner.read().welcome)
    }

    fn mark_welcome_seen(&self) -> Result<(), StorageError> {
        self.inner.write().welcome = true;
        Ok(())
    }
}

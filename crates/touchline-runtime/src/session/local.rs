//! Local file-based session storage.
//!
//! State is stored as one file per conceptual key in a configurable
//! directory:
//!
//! ```text
//! ~/.touchline/session/
//! ├── token       bearer credential (raw string)
//! ├── user.json   serialized user record
//! ├── view        last active view identifier
//! └── welcome     one-time welcome marker
//! ```

use super::{SessionStore, StorageError};
use std::path::{Path, PathBuf};
use touchline_auth::{AuthToken, Session};
use touchline_types::{UserRecord, ViewId};

/// Local file-based session store.
///
/// This is the default backend for the desktop shell.
///
/// # Features
///
/// - Atomic writes (write to temp, then rename)
/// - Automatic directory creation
/// - Corrupt or half-written state restores as `None`
///
/// # Example
///
/// ```no_run
/// use touchline_runtime::session::{LocalFileStore, SessionStore};
/// use std::path::PathBuf;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = LocalFileStore::new(PathBuf::from("~/.touchline/session"))?;
/// let session = store.restore()?;
/// println!("restored: {}", session.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    /// Base directory for state files.
    base_path: PathBuf,
}

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";
const VIEW_FILE: &str = "view";
const WELCOME_FILE: &str = "welcome";

impl LocalFileStore {
    /// Creates a new local file store.
    ///
    /// The directory will be created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DirectoryCreation` if the directory
    /// cannot be created.
    pub fn new(base_path: PathBuf) -> Result<Self, StorageError> {
        let expanded = expand_tilde(&base_path);

        if !expanded.exists() {
            std::fs::create_dir_all(&expanded)
                .map_err(|e| StorageError::directory_creation(&expanded, e))?;
        }

        Ok(Self {
            base_path: expanded,
        })
    }

    /// Returns the base path.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }

    /// Writes a key atomically (temp file, then rename).
    fn write_key(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        let temp = self.base_path.join(format!(".{key}.tmp"));
        std::fs::write(&temp, contents)?;
        std::fs::rename(&temp, self.key_path(key))?;
        Ok(())
    }

    /// Reads a key, mapping "file not found" to `None`.
    fn read_key(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes a key if present.
    fn remove_key(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionStore for LocalFileStore {
    fn restore(&self) -> Result<Option<Session>, StorageError> {
        let Some(token) = self.read_key(TOKEN_FILE)? else {
            return Ok(None);
        };
        let Some(user_json) = self.read_key(USER_FILE)? else {
            tracing::warn!("session restore: token present without user record, treating as absent");
            return Ok(None);
        };

        let user: UserRecord = match serde_json::from_str(&user_json) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "session restore: corrupt user record, treating as absent");
                return Ok(None);
            }
        };

        Ok(Some(Session::new(user, AuthToken::new(token))))
    }

    fn establish(&self, session: &Session) -> Result<(), StorageError> {
        // User first, token last: restore requires the token, so a
        // torn write leaves no token and reads back as absence.
        let user_json = serde_json::to_string_pretty(session.user())?;
        self.write_key(USER_FILE, &user_json)?;
        self.write_key(TOKEN_FILE, session.token().as_str())?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.remove_key(TOKEN_FILE)?;
        self.remove_key(USER_FILE)?;
        self.remove_key(VIEW_FILE)?;
        Ok(())
    }

    fn last_view(&self) -> Result<Option<ViewId>, StorageError> {
        let Some(raw) = self.read_key(VIEW_FILE)? else {
            return Ok(None);
        };

        match raw.trim().parse::<ViewId>() {
            Ok(view) => Ok(Some(view)),
            Err(e) => {
                tracing::warn!(error = %e, "saved view is not recognized, ignoring");
                Ok(None)
            }
        }
    }

    fn save_view(&self, view: ViewId) -> Result<(), StorageError> {
        self.write_key(VIEW_FILE, view.as_str())
    }

    fn welcome_seen(&self) -> Result<bool, StorageError> {
        Ok(self.key_path(WELCOME_FILE).exists())
    }

    fn mark_welcome_seen(&self) -> Result<(), StorageError> {
        self.write_key(WELCOME_FILE, "1")
    }
}

/// Expands `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(rest) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
    }
    path.to_path_buf()
}

/// Returns the default session storage path.
#[must_use]
pub fn default_store_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".touchline")
        .join("session")
}

//! Runtime services for the Touchline console.
//!
//! This crate wires the vocabulary and policy layers into the pieces
//! a shell actually runs: session persistence, the navigation state
//! machine, the view registry, endpoint resolution and configuration.
//!
//! # Crate Architecture
//!
//! ```text
//! touchline-types  (Role, ViewId, UserRecord)
//!     ↑
//! touchline-auth   (AuthToken, Session, AccessPolicy, RoleAccess)
//!     ↑
//! touchline-runtime  ◄── THIS CRATE
//!     ├── session   SessionStore, LocalFileStore, MemoryStore
//!     ├── nav       Router, History, ViewRegistry, Screen
//!     ├── api       EndpointCatalog
//!     └── config    ClientConfig, ConfigLoader
//! ```
//!
//! # Putting It Together
//!
//! ```no_run
//! use touchline_auth::RoleAccess;
//! use touchline_runtime::config::ConfigLoader;
//! use touchline_runtime::nav::Router;
//! use touchline_runtime::session::LocalFileStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new().load()?;
//! let api = config.endpoint_catalog();
//! let store = LocalFileStore::new(config.paths.resolved_storage_dir())?;
//!
//! let mut router = Router::start(RoleAccess, store)?;
//! if router.is_authenticated() {
//!     println!("resuming at {:?}", router.effective_view());
//! }
//! # let _ = api;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod nav;
pub mod session;

// Re-export the layers below for convenience
pub use touchline_auth::{AccessPolicy, AuthToken, RoleAccess, Session};
pub use touchline_types::{Role, UserRecord, ViewId};

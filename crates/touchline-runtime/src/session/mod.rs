//! Session persistence.
//!
//! This module keeps the authenticated identity and the small pieces
//! of client state (last view, welcome flag) alive across restarts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Navigation Layer                         │
//! │  Router::start / login / logout                             │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Storage Abstraction                      │
//! │  SessionStore trait                                         │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!           ┌────────────────┴────────────────┐
//!           ▼                                 ▼
//!     ┌──────────┐                     ┌──────────┐
//!     │  Local   │                     │  Memory  │
//!     │  files   │                     │  (tests) │
//!     └──────────┘                     └──────────┘
//! ```
//!
//! # Corruption Policy
//!
//! Whatever is on disk was written by a previous run and may be torn,
//! stale or hand-edited. Every read path treats unusable data as
//! absence: a corrupt session restores as `None` and the client
//! starts anonymous, which is always safe.

mod error;
mod local;
mod memory;
mod store;

pub use error::StorageError;
pub use local::{default_store_path, LocalFileStore};
pub use memory::MemoryStore;
pub use store::SessionStore;

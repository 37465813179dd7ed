//! Navigation: router, history and view registry.
//!
//! # Control Flow
//!
//! ```text
//! user event ──► Router::navigate(view)
//!                    │
//!                    ├── AccessPolicy.is_allowed(role, view)?
//!                    │       allowed: commit + History::push + save hint
//!                    │       denied:  no-op (fail closed)
//!                    ▼
//!                Router::effective_view()
//!                    │
//!                    ▼
//!                ViewRegistry::resolve(view) ──► Screen (external)
//! ```

mod history;
mod registry;
mod router;

pub use history::{History, NavigationEntry};
pub use registry::{Screen, ScreenContext, ViewRegistry};
pub use router::{LoginOutcome, Navigation, Router, RouterState};

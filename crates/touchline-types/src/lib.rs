//! Core vocabulary for the Touchline console.
//!
//! This crate provides the foundational types shared by every layer of
//! the workspace: user roles, view identifiers and the authenticated
//! user record.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Vocabulary Layer                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  touchline-types   : Role, ViewId, UserRecord  ◄── HERE      │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Policy Layer                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  touchline-auth    : AuthToken, Session, AccessPolicy        │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Runtime Layer                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  touchline-runtime : session store, router, registry, api   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design
//!
//! Both [`Role`] and [`ViewId`] are **closed enums** with explicit
//! wire forms. The platform this console fronts transports them as
//! strings; parsing happens once at the boundary and everything above
//! it works with exhaustively-matchable values. An unknown string is a
//! typed error, never a silent default.
//!
//! # Example
//!
//! ```
//! use touchline_types::{Role, UserRecord, ViewId};
//!
//! let user = UserRecord::new(1, "admin", Role::FifaAdmin);
//! assert_eq!(user.role.display_name(), "FIFA Admin");
//!
//! let view: ViewId = "security".parse().unwrap();
//! assert_eq!(view, ViewId::Security);
//! ```

mod error;
mod role;
mod user;
mod view;

pub use error::{RoleParseError, ViewParseError};
pub use role::Role;
pub use user::UserRecord;
pub use view::ViewId;

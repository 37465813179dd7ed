//! Identity and view-access policy for the Touchline console.
//!
//! This crate provides the authenticated-session value type and the
//! role-based access policy that gates every navigation.
//!
//! # Access Model
//!
//! ```text
//! Rendered View = Requested View ∩ AccessPolicy(role)
//! ```
//!
//! | Piece | Type | Controls |
//! |-------|------|----------|
//! | [`Session`] | Struct | Who is acting (user + bearer token) |
//! | [`AccessPolicy`] | Trait | Which views that user's role may enter |
//! | [`RoleAccess`] | Struct | The platform's static role → view table |
//!
//! # Crate Architecture
//!
//! ```text
//! touchline-types  (Role, ViewId, UserRecord)
//!        ↑
//! touchline-auth   (AuthToken, Session, AccessPolicy, RoleAccess)  ◄── THIS CRATE
//!        ↑
//! touchline-runtime (Router, SessionStore, ViewRegistry — uses touchline-auth)
//! ```
//!
//! # Design Principles
//!
//! - **Fail closed** — an unknown combination yields `false`; only the
//!   default view is universally reachable
//! - **Exhaustive table** — [`RoleAccess`] matches over the closed
//!   [`Role`](touchline_types::Role) enum, so every role provably has
//!   an entry
//! - **Pure decisions** — the policy has no side effects and never
//!   errs; audit logging belongs to the router that consults it

mod error;
mod policy;
mod session;
mod token;

pub use error::AccessDenied;
pub use policy::{AccessPolicy, RoleAccess};
pub use session::Session;
pub use token::AuthToken;

//! Parse errors for wire-boundary strings.

use thiserror::Error;

/// An unrecognized role wire value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: '{0}'")]
pub struct RoleParseError(pub String);

/// An unrecognized view identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view: '{0}'")]
pub struct ViewParseError(pub String);

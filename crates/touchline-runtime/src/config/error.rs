//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("failed to read config file {path}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A config file exists but is not valid TOML for [`ClientConfig`](super::ClientConfig).
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// An environment variable held an unusable value.
    #[error("invalid environment variable {var}: {reason}")]
    InvalidEnvVar {
        /// The variable name.
        var: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl ConfigError {
    /// Creates an Io error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a Parse error.
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Creates an InvalidEnvVar error.
    pub fn invalid_env_var(var: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEnvVar {
            var: var.into(),
            reason: reason.into(),
        }
    }
}

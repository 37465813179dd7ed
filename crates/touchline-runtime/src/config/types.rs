//! Configuration types.
//!
//! All types implement [`Default`] for compile-time fallback values.

use crate::api::EndpointCatalog;
use crate::session::default_store_path;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
///
/// This is the unified configuration after merging all layers.
/// Serializes to TOML for file storage; fields are optional in the
/// file thanks to `#[serde(default)]`.
///
/// # Example
///
/// ```
/// use touchline_runtime::config::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert!(!config.debug);
/// assert_eq!(config.api.base_url, "http://localhost:8080");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Enable debug mode (verbose logging, diagnostics).
    pub debug: bool,

    /// Backend API configuration.
    pub api: ApiConfig,

    /// Path configuration.
    pub paths: PathsConfig,
}

impl ClientConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes to TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserializes from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Builds the endpoint catalog for the configured backend host.
    #[must_use]
    pub fn endpoint_catalog(&self) -> EndpointCatalog {
        EndpointCatalog::new(self.api.base_url.clone())
    }
}

/// Backend API hosts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend REST API.
    pub base_url: String,

    /// Public URL of this console, used in outbound links.
    pub frontend_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            frontend_url: "http://localhost:8081".to_string(),
        }
    }
}

/// Storage path configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Session storage directory. `None` means the per-user default.
    pub storage_dir: Option<PathBuf>,
}

impl PathsConfig {
    /// Returns the storage directory, falling back to the per-user
    /// default (`~/.touchline/session`).
    #[must_use]
    pub fn resolved_storage_dir(&self) -> PathBuf {
        self.storage_dir.clone().unwrap_or_else(default_store_path)
    }
}

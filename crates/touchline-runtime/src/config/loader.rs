//! Configuration loader with hierarchical merging.
//!
//! # Load Order
//!
//! 1. Default values (compile-time)
//! 2. Config file (`~/.touchline/config.toml`, or an explicit path)
//! 3. Environment variables (`TOUCHLINE_*`)
//!
//! Each layer overrides the previous. A missing config file is not an
//! error (fresh installs have none); an unreadable or malformed one is.
//!
//! # Environment Variables
//!
//! - `TOUCHLINE_BASE_URL`: backend API base URL
//! - `TOUCHLINE_FRONTEND_URL`: public console URL
//! - `TOUCHLINE_STORAGE_DIR`: session storage directory
//! - `TOUCHLINE_DEBUG`: enable debug mode (`true`/`false`)

use super::{ClientConfig, ConfigError};
use std::path::PathBuf;
use tracing::debug;

/// Configuration loader with builder pattern.
///
/// # Example
///
/// ```
/// use touchline_runtime::config::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .skip_config_file() // deterministic: defaults only
///     .skip_env_vars()
///     .load()
///     .unwrap();
/// assert!(!config.debug);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Explicit config file path (defaults to `~/.touchline/config.toml`).
    config_path: Option<PathBuf>,

    /// Skip the config file layer.
    skip_file: bool,

    /// Skip the environment variable layer.
    skip_env: bool,
}

impl ConfigLoader {
    /// Creates a new loader with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit config file path.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Skips the config file layer.
    #[must_use]
    pub fn skip_config_file(mut self) -> Self {
        self.skip_file = true;
        self
    }

    /// Skips environment variable loading.
    ///
    /// Useful for testing with deterministic config.
    #[must_use]
    pub fn skip_env_vars(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Loads and merges all configured layers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present config file cannot be
    /// read or parsed, or when an environment variable holds an
    /// unusable value.
    pub fn load(&self) -> Result<ClientConfig, ConfigError> {
        let mut config = ClientConfig::default();

        if !self.skip_file {
            let path = self
                .config_path
                .clone()
                .unwrap_or_else(default_config_path);

            if path.exists() {
                let raw =
                    std::fs::read_to_string(&path).map_err(|e| ConfigError::io(&path, e))?;
                config =
                    ClientConfig::from_toml(&raw).map_err(|e| ConfigError::parse(&path, e))?;
                debug!(path = %path.display(), "loaded config file");
            } else {
                debug!(path = %path.display(), "no config file, using defaults");
            }
        }

        if !self.skip_env {
            apply_env_overrides(&mut config)?;
        }

        Ok(config)
    }
}

fn apply_env_overrides(config: &mut ClientConfig) -> Result<(), ConfigError> {
    if let Ok(val) = std::env::var("TOUCHLINE_BASE_URL") {
        config.api.base_url = val;
    }
    if let Ok(val) = std::env::var("TOUCHLINE_FRONTEND_URL") {
        config.api.frontend_url = val;
    }
    if let Ok(val) = std::env::var("TOUCHLINE_STORAGE_DIR") {
        config.paths.storage_dir = Some(PathBuf::from(val));
    }
    if let Ok(val) = std::env::var("TOUCHLINE_DEBUG") {
        config.debug = parse_bool(&val)
            .ok_or_else(|| ConfigError::invalid_env_var("TOUCHLINE_DEBUG", "expected bool"))?;
    }
    Ok(())
}

/// Parses a boolean environment value.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` (case-insensitive).
fn parse_bool(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Returns the default config file path (`~/.touchline/config.toml`).
#[must_use]
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".touchline")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn deterministic_loader() -> ConfigLoader {
        ConfigLoader::new().skip_env_vars()
    }

    #[test]
    fn defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = deterministic_loader()
            .with_config_path(temp.path().join("missing.toml"))
            .load()
            .expect("load should succeed");

        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn file_layer_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "debug = true\n\n[api]\nbase_url = \"https://api.example.org\"\n",
        )
        .unwrap();

        let config = deterministic_loader()
            .with_config_path(&path)
            .load()
            .expect("load should succeed");

        assert!(config.debug);
        assert_eq!(config.api.base_url, "https://api.example.org");
        // Fields absent from the file keep their defaults
        assert_eq!(config.api.frontend_url, "http://localhost:8081");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "debug = not-a-bool").unwrap();

        let err = deterministic_loader()
            .with_config_path(&path)
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn skip_config_file_ignores_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "debug = true\n").unwrap();

        let config = deterministic_loader()
            .with_config_path(&path)
            .skip_config_file()
            .load()
            .expect("load should succeed");

        assert!(!config.debug);
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("yes"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn default_config_path_is_under_touchline() {
        let path = default_config_path();
        assert!(path.ends_with(PathBuf::from(".touchline").join("config.toml")));
    }
}

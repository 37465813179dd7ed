//! Layered client configuration.
//!
//! Configuration is merged from three layers, lowest priority first:
//! compile-time defaults, the config file, then `TOUCHLINE_*`
//! environment variables. The shell resolves config once at startup
//! and hands the pieces (endpoint catalog, storage directory) to the
//! components that need them.

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{default_config_path, ConfigLoader};
pub use types::{ApiConfig, ClientConfig, PathsConfig};

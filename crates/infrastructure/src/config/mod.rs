//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `faults`: which validation checks are enforced
//! - `resource`: the emulated resource and its schema
//!
//! Sources are layered: built-in defaults, then an optional TOML file
//! (`config.toml`, or the path in `RESTFAULT_CONFIG`), then `RESTFAULT_*`
//! environment variables using `__` between nested keys.

mod faults;
mod resource;
mod server;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

pub use faults::FaultsConfig;
pub use resource::ResourceConfig;
pub use server::{LogFormat, ServerConfig};

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "RESTFAULT";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "RESTFAULT_CONFIG";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,

    /// Enforced validation checks
    #[serde(default)]
    pub faults: FaultsConfig,

    /// Emulated resource
    #[serde(default)]
    #[validate(nested)]
    pub resource: ResourceConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// When `RESTFAULT_CONFIG` is set the file it names must exist; otherwise
    /// `config.toml` in the working directory is used if present.
    pub fn load() -> Result<Self, config::ConfigError> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load_from(path),
            Err(_) => Self::from_sources(
                config::File::with_name("config").required(false),
                environment(),
            ),
        }
    }

    /// Load configuration from a specific file, still honouring env overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration file");
        Self::from_sources(config::File::from(path).required(true), environment())
    }

    fn from_sources<S>(file: S, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.check()?;
        Ok(app)
    }

    /// Run field validation, reporting failures as a config error
    pub fn check(&self) -> Result<(), config::ConfigError> {
        self.validate()
            .map_err(|e| config::ConfigError::Message(format!("invalid configuration: {e}")))
    }

    /// `host:port` the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// `RESTFAULT_*` overrides, e.g. `RESTFAULT_SERVER__PORT=8080` or
/// `RESTFAULT_FAULTS__ENABLED=invalid_payload,payload_extra_keys`
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("faults.enabled")
        .with_list_parse_key("server.allowed_origins")
        .try_parsing(true)
}

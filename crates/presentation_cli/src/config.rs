//! CLI configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `trainsnow.toml` (or the file given with `--config`), then `TRAINSNOW_*`
//! environment variables. Nested keys use `__`, e.g.
//! `TRAINSNOW_TRANSITER__TIMEOUT_SECS=5`.

use std::path::Path;

use integration_transiter::TransiterConfig;
use serde::{Deserialize, Serialize};

/// System used when a command does not name one
pub const DEFAULT_SYSTEM: &str = "us-ny-nycsubway";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub transiter: TransiterConfig,

    #[serde(default = "default_system")]
    pub default_system: String,
}

fn default_system() -> String {
    DEFAULT_SYSTEM.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            transiter: TransiterConfig::default(),
            default_system: default_system(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// An explicit `path` must exist; the implicit `trainsnow.toml` may not.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("trainsnow").required(false),
        };

        config::Config::builder()
            .set_default("default_system", DEFAULT_SYSTEM)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("TRAINSNOW")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

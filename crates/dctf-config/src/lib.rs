//! # dctf-config
//!
//! Layered configuration loading for the delivery monitor using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DCTF_*` prefix, `__` as separator)
//! 2. Project-level `.dctf/config.toml`
//! 3. User-level `~/.config/dctf/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DCTF_QUERY__DELAY_MS` -> `query.delay_ms`,
//! `DCTF_EXPORT__OUTPUT_DIR` -> `export.output_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use dctf_config::DctfConfig;
//!
//! let config = DctfConfig::load_with_dotenv().expect("config");
//! println!("query delay: {:?}", config.query.delay());
//! ```

mod error;
mod export;
mod query;

pub use error::ConfigError;
pub use export::ExportConfig;
pub use query::QueryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "DCTF_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DctfConfig {
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl DctfConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`DctfConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".dctf/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.export.file_prefix;
        if prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "export.file_prefix".into(),
                reason: "must not be empty".into(),
            });
        }
        if prefix.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "export.file_prefix".into(),
                reason: "must be a file name, not a path".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dctf").join("config.toml"))
    }
}

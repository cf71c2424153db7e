//! # fir-config
//!
//! Layered configuration loading for FIR Desk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FIR_*` prefix, `__` as separator)
//! 2. Project-level `.fir/config.toml`
//! 3. User-level `~/.config/fir/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FIR_API__BASE_URL` -> `api.base_url`, `FIR_POLL__TIMEOUT_SECS` ->
//! `poll.timeout_secs`, etc. The `__` (double underscore) separates nested
//! config sections.
//!
//! # Usage
//!
//! ```no_run
//! use fir_config::FirConfig;
//!
//! let config = FirConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.normalized_base_url());
//! ```

mod api;
mod error;
mod general;
mod poll;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use poll::PollConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every configuration key.
pub const ENV_PREFIX: &str = "FIR_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FirConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl FirConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on malformed sources and the section
    /// validation errors for unusable values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first section error found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.poll.validate()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".fir/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fir").join("config.toml"))
    }
}

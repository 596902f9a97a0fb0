//! # loan-config
//!
//! Layered configuration loading for Loanline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Explicit overrides (the `--api-url` flag)
//! 2. Environment variables (`LOANLINE_*` prefix, `__` as separator)
//! 3. Project-level `.loanline/config.toml`
//! 4. User-level `~/.config/loanline/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LOANLINE_API__BASE_URL` -> `api.base_url` and
//! `LOANLINE_UI__COLOR` -> `ui.color`. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use loan_config::LoanlineConfig;
//!
//! let config = LoanlineConfig::load_with_api_url(Some("http://timeline.lan:9000")).expect("config");
//! println!("timeline service: {}", config.api.endpoint());
//! ```

mod api;
mod error;
mod ui;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use ui::{ColorMode, UiConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of every environment variable the config reads.
pub const ENV_PREFIX: &str = "LOANLINE_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoanlineConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl LoanlineConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env` files; the binary loads those before calling in.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the resulting
    /// values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load configuration with an explicit base URL taking precedence over
    /// every other source.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_api_url(api_url: Option<&str>) -> Result<Self, ConfigError> {
        let mut figment = Self::figment();
        if let Some(url) = api_url {
            figment = figment.merge(Serialized::default("api.base_url", url));
        }
        Self::extract(figment)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".loanline/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.api.validate()?;
        Ok(config)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("loanline").join("config.toml"))
    }
}

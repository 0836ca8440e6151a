//! # propdoc-config
//!
//! Layered configuration loading for propdoc using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PROPDOC_*` prefix, `__` as separator)
//! 2. Project-level `.propdoc/config.toml`
//! 3. User-level `~/.config/propdoc/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PROPDOC_EXTRACT__USAGE_SNIPPETS` -> `extract.usage_snippets`,
//! `PROPDOC_EXTRACT__ERROR_HANDLING` -> `extract.error_handling`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use propdoc_config::PropdocConfig;
//!
//! let config = PropdocConfig::load().expect("config");
//! if config.extract.usage_snippets {
//!     println!("rendering props as JSX usage");
//! }
//! ```

mod error;
mod extract;

pub use error::ConfigError;
pub use extract::ExtractConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PropdocConfig {
    #[serde(default)]
    pub extract: ExtractConfig,
}

impl PropdocConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract_validated(&Self::figment())
    }

    /// Load with an explicit project file in place of `.propdoc/config.toml`.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file fails to parse or a value is invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("PROPDOC_").split("__"));
        Self::extract_validated(&figment)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".propdoc/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PROPDOC_").split("__"))
    }

    fn extract_validated(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.extract.validate()?;
        Ok(config)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("propdoc").join("config.toml"))
    }
}

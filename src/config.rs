//! Layered runtime configuration.
//!
//! Values are merged in order: built-in defaults, then the TOML file named by
//! `CRIEUR_CONFIG_FILE` (when set), then `CRIEUR_*` environment variables.

use crate::observability::LogFormat;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an optional TOML configuration file.
pub const CONFIG_FILE_ENV: &str = "CRIEUR_CONFIG_FILE";

/// Prefix of environment variables overriding configuration keys.
pub const ENV_PREFIX: &str = "CRIEUR_";

/// Runtime configuration for the `crieur` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrieurConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub max_pool_size: u32,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for CrieurConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            max_pool_size: 4,
            log_format: LogFormat::Plain,
        }
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed or a value had the wrong type.
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    /// The pool must allow at least one connection.
    #[error("max_pool_size must be greater than zero")]
    InvalidPoolSize,

    /// No database URL was configured.
    #[error("database_url is not configured; set CRIEUR_DATABASE_URL")]
    MissingDatabaseUrl,
}

impl CrieurConfig {
    /// Returns the default provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads configuration from the default provider chain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a provider fails or validation rejects
    /// the merged values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extracts and validates configuration from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPoolSize`] when `max_pool_size` is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_pool_size == 0 {
            return Err(ConfigError::InvalidPoolSize);
        }
        Ok(())
    }

    /// Returns the configured database URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when none is set.
    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::MissingDatabaseUrl)
    }
}

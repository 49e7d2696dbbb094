//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ERP_LITE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use erp_lite_entitlements::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! let resolver = config.build_resolver().expect("Invalid configuration");
//! println!("{} segments configured", resolver.segments().segments().len());
//! ```

mod catalog;
mod error;
mod logging;
mod settings;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use settings::SettingsStoreConfig;

use serde::Deserialize;

use crate::domain::segment::SegmentResolver;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields an in-memory
/// settings store over the built-in catalogs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Company settings storage
    #[serde(default)]
    pub settings: SettingsStoreConfig,

    /// Segment catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ERP_LITE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ERP_LITE__SETTINGS__PATH=/var/lib/erp/settings.json` -> `settings.path`
    /// - `ERP_LITE__CATALOG__SEGMENTS_FILE=segments.yaml` -> `catalog.segments_file`
    /// - `ERP_LITE__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ERP_LITE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.settings.validate()?;
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Validate, then build the resolver over the configured catalogs
    ///
    /// # Errors
    ///
    /// - `ConfigError::ValidationFailed` if any value is invalid
    /// - `ConfigError::Catalog` if the segment override can't be read or is
    ///   malformed
    pub fn build_resolver(&self) -> Result<SegmentResolver, ConfigError> {
        self.validate()?;
        Ok(self.catalog.build_resolver()?)
    }
}

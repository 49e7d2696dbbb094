//! Configuration error types

use thiserror::Error;

use crate::domain::plan::CatalogError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Catalog could not be built: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Logging could not be initialized: {0}")]
    Logging(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Segment catalog file must be .yaml or .yml")]
    InvalidCatalogExtension,

    #[error("Settings file must be .json")]
    InvalidSettingsExtension,

    #[error("Log filter cannot be empty")]
    EmptyLogFilter,
}

//! Settings store configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::ValidationError;
use crate::adapters::{InMemorySettings, JsonFileSettings};
use crate::ports::SettingsProvider;

/// Where company settings are kept
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsStoreConfig {
    /// JSON file path. When unset, settings live in memory only.
    pub path: Option<PathBuf>,
}

impl SettingsStoreConfig {
    /// Validate settings store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::MissingRequired("SETTINGS__PATH"));
            }
            let is_json = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false);
            if !is_json {
                return Err(ValidationError::InvalidSettingsExtension);
            }
        }
        Ok(())
    }

    /// Build the configured settings provider
    pub fn build_provider(&self) -> Arc<dyn SettingsProvider> {
        match &self.path {
            Some(path) => Arc::new(JsonFileSettings::new(path.clone())),
            None => Arc::new(InMemorySettings::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_by_default() {
        let config = SettingsStoreConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn requires_json_extension() {
        let config = SettingsStoreConfig {
            path: Some(PathBuf::from("settings.toml")),
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSettingsExtension));
    }

    #[tokio::test]
    async fn builds_file_provider_for_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = SettingsStoreConfig {
            path: Some(dir.path().join("settings.json")),
        };
        let provider = config.build_provider();
        let mut settings = provider.load().await.unwrap();
        settings.plan = "starter".to_string();
        provider.save(&settings).await.unwrap();

        assert!(dir.path().join("settings.json").exists());
    }
}

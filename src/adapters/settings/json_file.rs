//! JSON file settings store.
//!
//! Keeps the settings record in a single JSON file. Writes go to
//! `{path}.tmp` first and are renamed into place so a crash mid-write never
//! leaves a truncated file behind. The first load on a missing file writes
//! the default record, so the company id stays fixed from then on.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{CompanySettings, SettingsProvider};

/// Settings persisted as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonFileSettings {
    path: PathBuf,
    /// Held while the default record is created.
    init: Arc<Mutex<()>>,
}

impl JsonFileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            init: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn storage_error(&self, action: &str, err: std::io::Error) -> DomainError {
        DomainError::storage(
            self.path.display().to_string(),
            format!("Failed to {} settings: {}", action, err),
        )
    }

    /// Reads the stored record; `None` when the file doesn't exist yet.
    async fn read_existing(&self) -> Result<Option<CompanySettings>, DomainError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.storage_error("read", e)),
        };

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "settings file is corrupted");
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Settings file is not valid JSON: {}", e),
            )
            .with_detail("path", self.path.display().to_string())
        })
    }

    async fn write_temp_and_rename(&self, temp_path: &Path, json: &[u8]) -> Result<(), DomainError> {
        let mut file = fs::File::create(temp_path)
            .await
            .map_err(|e| self.storage_error("create", e))?;
        file.write_all(json)
            .await
            .map_err(|e| self.storage_error("write", e))?;
        file.sync_all()
            .await
            .map_err(|e| self.storage_error("sync", e))?;
        drop(file);

        fs::rename(temp_path, &self.path)
            .await
            .map_err(|e| self.storage_error("rename", e))
    }
}

#[async_trait]
impl SettingsProvider for JsonFileSettings {
    async fn load(&self) -> Result<CompanySettings, DomainError> {
        if let Some(settings) = self.read_existing().await? {
            return Ok(settings);
        }

        let _guard = self.init.lock().await;
        // Another load may have created the file while we waited.
        if let Some(settings) = self.read_existing().await? {
            return Ok(settings);
        }

        let settings = CompanySettings::default();
        self.save(&settings).await?;
        tracing::info!(
            path = %self.path.display(),
            company_id = %settings.company_id,
            "no settings file, created defaults"
        );
        Ok(settings)
    }

    async fn save(&self, settings: &CompanySettings) -> Result<(), DomainError> {
        let json = serde_json::to_vec_pretty(settings).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Failed to serialize settings: {}", e),
            )
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.storage_error("create directory for", e))?;
        }

        let temp_path = self.temp_path();
        if let Err(err) = self.write_temp_and_rename(&temp_path, &json).await {
            match fs::remove_file(&temp_path).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %temp_path.display(), error = %e, "failed to remove temp settings file");
                }
            }
            return Err(err);
        }

        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

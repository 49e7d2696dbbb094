//! In-memory settings store for tests and ephemeral runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{CompanySettings, SettingsProvider};

/// Settings held in process memory. Lost on restart.
#[derive(Debug, Default)]
pub struct InMemorySettings {
    settings: RwLock<CompanySettings>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the given settings.
    pub fn with_settings(settings: CompanySettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }
}

#[async_trait]
impl SettingsProvider for InMemorySettings {
    async fn load(&self) -> Result<CompanySettings, DomainError> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: &CompanySettings) -> Result<(), DomainError> {
        *self.settings.write().await = settings.clone();
        Ok(())
    }
}

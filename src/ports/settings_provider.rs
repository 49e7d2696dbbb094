//! Company settings port.
//!
//! The dashboard keeps the current plan, segment and company name in a small
//! settings record. This port is the only way the application layer reaches
//! that record; the domain never reads storage itself and takes plan and
//! segment as explicit arguments.
//!
//! # Example
//!
//! ```ignore
//! async fn sidebar(settings: &dyn SettingsProvider, resolver: &SegmentResolver) -> Result<(), DomainError> {
//!     let plan: PlanId = settings.current_plan().await?.parse()?;
//!     let segment = settings.current_segment().await?.unwrap_or_default();
//!     let modules = resolver.resolve_entitlements(&segment, plan);
//!     // ... render
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CompanyId, DomainError};
use crate::domain::plan::{PlanError, PlanId};
use crate::domain::segment::SegmentId;

/// Port for loading and saving company settings.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Load the current settings.
    ///
    /// When nothing has been saved yet, implementations return a default
    /// record and keep returning that same record (same company id).
    async fn load(&self) -> Result<CompanySettings, DomainError>;

    /// Persist the settings, replacing what was stored.
    async fn save(&self, settings: &CompanySettings) -> Result<(), DomainError>;

    /// Stored plan identifier, unvalidated.
    async fn current_plan(&self) -> Result<String, DomainError> {
        Ok(self.load().await?.plan)
    }

    /// Stored segment identifier, unvalidated. `None` before onboarding.
    async fn current_segment(&self) -> Result<Option<String>, DomainError> {
        Ok(self.load().await?.segment)
    }

    async fn company_name(&self) -> Result<String, DomainError> {
        Ok(self.load().await?.company_name)
    }
}

/// Persisted company settings.
///
/// Plan and segment stay raw strings here: they come from storage and are
/// validated at the boundary by the handlers that use them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySettings {
    pub company_id: CompanyId,
    pub company_name: String,
    pub plan: String,
    #[serde(default)]
    pub segment: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            company_id: CompanyId::new(),
            company_name: "Minha Empresa".to_string(),
            plan: PlanId::Free.as_str().to_string(),
            segment: None,
            updated_at: None,
        }
    }
}

impl CompanySettings {
    /// Validates the stored plan identifier.
    pub fn validated_plan(&self) -> Result<PlanId, PlanError> {
        self.plan.parse()
    }

    /// Validates the stored segment identifier; unknown or absent is `None`.
    pub fn validated_segment(&self) -> Option<SegmentId> {
        self.segment.as_deref().and_then(SegmentId::parse)
    }
}

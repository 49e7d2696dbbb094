//! CheckCapabilityHandler - Query handler for plan capability flags.

use std::sync::Arc;

use crate::application::WorkspaceError;
use crate::domain::entitlement::{AccessDeniedReason, AccessResult};
use crate::domain::plan::{Capability, PlanCatalog};
use crate::ports::SettingsProvider;

/// Query to check whether the current plan grants a capability.
#[derive(Debug, Clone)]
pub struct CheckCapabilityQuery {
    pub capability: String,
}

/// Handler for capability checks.
pub struct CheckCapabilityHandler {
    settings: Arc<dyn SettingsProvider>,
    plans: Arc<PlanCatalog>,
}

impl CheckCapabilityHandler {
    pub fn new(settings: Arc<dyn SettingsProvider>, plans: Arc<PlanCatalog>) -> Self {
        Self { settings, plans }
    }

    pub async fn handle(&self, query: CheckCapabilityQuery) -> Result<AccessResult, WorkspaceError> {
        let capability: Capability = query.capability.parse()?;
        let plan = self.settings.load().await?.validated_plan()?;

        if self.plans.has_capability(plan, capability) {
            return Ok(AccessResult::Allowed);
        }

        tracing::debug!(plan = %plan, capability = %capability, "capability not included");
        Ok(AccessResult::Denied(AccessDeniedReason::FeatureNotIncluded {
            capability,
            required_plan: self.plans.cheapest_plan_with(capability),
        }))
    }
}

//! CheckUsageHandler - Query handler for user and storage limits.

use std::sync::Arc;

use crate::application::WorkspaceError;
use crate::domain::entitlement::{AccessDeniedReason, AccessResult};
use crate::domain::plan::{PlanCatalog, PlanId, PlanLimits};
use crate::ports::SettingsProvider;

/// Current usage reported by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckUsageQuery {
    pub active_users: u32,
    pub storage_used_gb: u32,
}

/// Usage checked against the plan limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckUsageResult {
    pub plan: PlanId,
    pub limits: PlanLimits,
    /// Whether another user can be added.
    pub add_user: AccessResult,
    /// Whether more files can be stored.
    pub storage: AccessResult,
}

/// Handler for usage checks.
pub struct CheckUsageHandler {
    settings: Arc<dyn SettingsProvider>,
    plans: Arc<PlanCatalog>,
}

impl CheckUsageHandler {
    pub fn new(settings: Arc<dyn SettingsProvider>, plans: Arc<PlanCatalog>) -> Self {
        Self { settings, plans }
    }

    pub async fn handle(&self, query: CheckUsageQuery) -> Result<CheckUsageResult, WorkspaceError> {
        let plan = self.settings.load().await?.validated_plan()?;
        let limits = self.plans.get_limits(plan);

        let add_user = match limits.max_users.as_count() {
            Some(max) if limits.user_limit_reached(query.active_users) => {
                AccessResult::Denied(AccessDeniedReason::UserLimitReached {
                    current: query.active_users,
                    max,
                })
            }
            _ => AccessResult::Allowed,
        };

        let storage = if limits.storage_limit_reached(query.storage_used_gb) {
            AccessResult::Denied(AccessDeniedReason::StorageLimitReached {
                used_gb: query.storage_used_gb,
                max_gb: limits.storage_gb,
            })
        } else {
            AccessResult::Allowed
        };

        Ok(CheckUsageResult {
            plan,
            limits,
            add_user,
            storage,
        })
    }
}

//! ChangePlanHandler - Command handler for switching subscription plans.

use chrono::Utc;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::application::WorkspaceError;
use crate::domain::plan::{PlanCatalog, PlanId};
use crate::ports::SettingsProvider;

/// Command to move the company to another plan.
#[derive(Debug, Clone)]
pub struct ChangePlanCommand {
    pub plan: String,
}

/// Direction of a plan change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanChange {
    Upgrade,
    Downgrade,
    Unchanged,
    /// The stored plan was unreadable and has been replaced.
    Reset,
}

/// Result of changing plans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePlanResult {
    pub previous: Option<PlanId>,
    pub current: PlanId,
    pub change: PlanChange,
}

/// Handler for changing plans.
pub struct ChangePlanHandler {
    settings: Arc<dyn SettingsProvider>,
    plans: Arc<PlanCatalog>,
}

impl ChangePlanHandler {
    pub fn new(settings: Arc<dyn SettingsProvider>, plans: Arc<PlanCatalog>) -> Self {
        Self { settings, plans }
    }

    pub async fn handle(&self, cmd: ChangePlanCommand) -> Result<ChangePlanResult, WorkspaceError> {
        let target: PlanId = cmd.plan.parse()?;

        let mut settings = self.settings.load().await?;
        let previous = settings.validated_plan().ok();

        let change = match previous {
            None => {
                tracing::warn!(stored = %settings.plan, "replacing unreadable stored plan");
                PlanChange::Reset
            }
            Some(previous) => match self.plans.compare_rank(target, previous) {
                Ordering::Greater => PlanChange::Upgrade,
                Ordering::Less => PlanChange::Downgrade,
                Ordering::Equal => PlanChange::Unchanged,
            },
        };

        if change != PlanChange::Unchanged {
            settings.plan = target.as_str().to_string();
            settings.updated_at = Some(Utc::now());
            self.settings.save(&settings).await?;
            tracing::info!(
                company_id = %settings.company_id,
                plan = %target,
                change = ?change,
                "plan changed"
            );
        }

        Ok(ChangePlanResult {
            previous,
            current: target,
            change,
        })
    }
}

//! GetWorkspaceNavigationHandler - Query handler for the segment sidebar.

use serde::Serialize;
use std::sync::Arc;

use crate::application::WorkspaceError;
use crate::domain::entitlement::ModuleEntitlement;
use crate::domain::plan::{PlanId, PlanLimits};
use crate::domain::segment::{SegmentId, SegmentModules, SegmentResolver};
use crate::ports::SettingsProvider;

/// Query for the current company's navigation.
#[derive(Debug, Clone, Default)]
pub struct GetWorkspaceNavigationQuery;

/// Segment header shown above the module list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentSummary {
    pub id: SegmentId,
    pub display_name: String,
    pub icon: String,
}

/// Everything the sidebar needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceNavigation {
    pub company_name: String,
    pub plan: PlanId,
    pub limits: PlanLimits,
    /// False until a known segment has been selected.
    pub configured: bool,
    pub segment: Option<SegmentSummary>,
    pub modules: Vec<ModuleEntitlement>,
}

impl WorkspaceNavigation {
    pub fn locked_count(&self) -> usize {
        self.modules.iter().filter(|m| m.locked).count()
    }
}

/// Handler for building the workspace navigation.
///
/// A corrupted stored plan fails the query; a missing or unknown segment
/// produces an unconfigured navigation instead.
pub struct GetWorkspaceNavigationHandler {
    settings: Arc<dyn SettingsProvider>,
    resolver: Arc<SegmentResolver>,
}

impl GetWorkspaceNavigationHandler {
    pub fn new(settings: Arc<dyn SettingsProvider>, resolver: Arc<SegmentResolver>) -> Self {
        Self { settings, resolver }
    }

    pub async fn handle(
        &self,
        _query: GetWorkspaceNavigationQuery,
    ) -> Result<WorkspaceNavigation, WorkspaceError> {
        let settings = self.settings.load().await?;

        let plan = settings.validated_plan().map_err(|e| {
            tracing::warn!(
                company_id = %settings.company_id,
                plan = %settings.plan,
                "stored plan identifier is not in the catalog"
            );
            WorkspaceError::from(e)
        })?;

        let lookup = match settings.segment.as_deref() {
            Some(segment) => self.resolver.get_modules(segment),
            None => SegmentModules::NotConfigured {
                requested: String::new(),
            },
        };

        let segment = lookup.segment().map(|s| SegmentSummary {
            id: s.id,
            display_name: s.display_name.clone(),
            icon: s.icon.clone(),
        });
        let modules = match &segment {
            Some(summary) => self.resolver.resolve_entitlements(summary.id.as_str(), plan),
            None => Vec::new(),
        };

        let navigation = WorkspaceNavigation {
            company_name: settings.company_name,
            plan,
            limits: self.resolver.plans().get_limits(plan),
            configured: lookup.is_configured(),
            segment,
            modules,
        };

        tracing::debug!(
            plan = %navigation.plan,
            configured = navigation.configured,
            modules = navigation.modules.len(),
            locked = navigation.locked_count(),
            "resolved workspace navigation"
        );

        Ok(navigation)
    }
}

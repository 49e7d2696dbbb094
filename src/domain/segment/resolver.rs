//! Resolves a segment's modules and their lock state for a plan.

use std::sync::Arc;

use super::{ModuleDescriptor, Segment, SegmentCatalog, SegmentId};
use crate::domain::entitlement::{evaluate, ModuleEntitlement};
use crate::domain::plan::{PlanCatalog, PlanError, PlanId};

/// Outcome of a module lookup.
///
/// An unconfigured segment is a normal state (onboarding not finished), so
/// it is a variant here rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentModules<'a> {
    Configured(&'a Segment),
    NotConfigured { requested: String },
}

impl<'a> SegmentModules<'a> {
    pub fn is_configured(&self) -> bool {
        matches!(self, SegmentModules::Configured(_))
    }

    pub fn segment(&self) -> Option<&'a Segment> {
        match *self {
            SegmentModules::Configured(segment) => Some(segment),
            SegmentModules::NotConfigured { .. } => None,
        }
    }

    /// Ordered module list; empty when not configured.
    pub fn modules(&self) -> &'a [ModuleDescriptor] {
        match *self {
            SegmentModules::Configured(segment) => &segment.modules,
            SegmentModules::NotConfigured { .. } => &[],
        }
    }
}

/// Stateless resolver over immutable plan and segment tables.
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct SegmentResolver {
    plans: Arc<PlanCatalog>,
    segments: Arc<SegmentCatalog>,
}

impl SegmentResolver {
    pub fn new(plans: Arc<PlanCatalog>, segments: Arc<SegmentCatalog>) -> Self {
        Self { plans, segments }
    }

    /// Resolver over the built-in tables.
    pub fn standard() -> Self {
        Self::new(
            Arc::new(PlanCatalog::standard().clone()),
            Arc::new(SegmentCatalog::standard().clone()),
        )
    }

    pub fn plans(&self) -> &PlanCatalog {
        &self.plans
    }

    pub fn segments(&self) -> &SegmentCatalog {
        &self.segments
    }

    /// Ordered modules of `segment`.
    ///
    /// Identifiers that are unknown, or known but absent from the loaded
    /// catalog, yield `NotConfigured`; never another segment's modules.
    pub fn get_modules(&self, segment: &str) -> SegmentModules<'_> {
        match SegmentId::parse(segment).and_then(|id| self.segments.get(id)) {
            Some(found) => SegmentModules::Configured(found),
            None => {
                tracing::debug!(segment, "segment not configured");
                SegmentModules::NotConfigured {
                    requested: segment.to_string(),
                }
            }
        }
    }

    /// One entitlement per module of `segment`, in module order.
    pub fn resolve_entitlements(&self, segment: &str, plan: PlanId) -> Vec<ModuleEntitlement> {
        self.get_modules(segment)
            .modules()
            .iter()
            .map(|module| evaluate(&self.plans, module, plan))
            .collect()
    }

    /// Like [`resolve_entitlements`](Self::resolve_entitlements) for a raw
    /// stored plan identifier.
    ///
    /// # Errors
    ///
    /// `PlanError::UnknownPlan` if `plan` is not in the catalog.
    pub fn resolve_entitlements_for(
        &self,
        segment: &str,
        plan: &str,
    ) -> Result<Vec<ModuleEntitlement>, PlanError> {
        let plan: PlanId = plan.parse()?;
        Ok(self.resolve_entitlements(segment, plan))
    }

    /// Modules of `segment` the plan can open.
    pub fn unlocked_modules(&self, segment: &str, plan: PlanId) -> Vec<&ModuleDescriptor> {
        self.get_modules(segment)
            .modules()
            .iter()
            .filter(|module| !evaluate(&self.plans, module, plan).locked)
            .collect()
    }
}

impl Default for SegmentResolver {
    fn default() -> Self {
        Self::standard()
    }
}

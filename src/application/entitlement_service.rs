//! String-boundary facade over plan policy and segment resolution.
//!
//! Identifiers arriving from storage or the presentation layer are raw
//! strings. This service validates them once and hands typed values to the
//! domain, surfacing `PlanError` for anything the catalog doesn't know.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::entitlement::ModuleEntitlement;
use crate::domain::plan::{Capability, Category, PlanError, PlanId, PlanLimits};
use crate::domain::segment::{SegmentModules, SegmentResolver};

/// Entry point for callers that hold raw plan/segment identifiers.
#[derive(Debug, Clone)]
pub struct EntitlementService {
    resolver: Arc<SegmentResolver>,
}

impl EntitlementService {
    pub fn new(resolver: Arc<SegmentResolver>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &SegmentResolver {
        &self.resolver
    }

    pub fn get_limits(&self, plan: &str) -> Result<PlanLimits, PlanError> {
        Ok(self.resolver.plans().get_limits(plan.parse()?))
    }

    pub fn has_capability(&self, plan: &str, capability: &str) -> Result<bool, PlanError> {
        let plan: PlanId = plan.parse()?;
        let capability: Capability = capability.parse()?;
        Ok(self.resolver.plans().has_capability(plan, capability))
    }

    /// Unknown category tags are `Ok(false)`; only the plan is validated.
    pub fn is_category_allowed(&self, plan: &str, category: &str) -> Result<bool, PlanError> {
        let plan: PlanId = plan.parse()?;
        Ok(Category::from_tag(category)
            .map(|c| self.resolver.plans().is_category_allowed(plan, c))
            .unwrap_or(false))
    }

    pub fn compare_rank(&self, a: &str, b: &str) -> Result<Ordering, PlanError> {
        let a: PlanId = a.parse()?;
        let b: PlanId = b.parse()?;
        Ok(self.resolver.plans().compare_rank(a, b))
    }

    pub fn get_modules(&self, segment: &str) -> SegmentModules<'_> {
        self.resolver.get_modules(segment)
    }

    pub fn resolve_entitlements(
        &self,
        segment: &str,
        plan: &str,
    ) -> Result<Vec<ModuleEntitlement>, PlanError> {
        self.resolver.resolve_entitlements_for(segment, plan)
    }
}

impl Default for EntitlementService {
    fn default() -> Self {
        Self::new(Arc::new(SegmentResolver::standard()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::UserLimit;

    fn service() -> EntitlementService {
        EntitlementService::default()
    }

    #[test]
    fn get_limits_for_known_plans() {
        for plan in PlanId::ALL {
            let limits = service().get_limits(plan.as_str()).unwrap();
            assert!(limits.storage_gb > 0);
        }
        assert_eq!(
            service().get_limits("premium").unwrap().max_users,
            UserLimit::Unlimited
        );
    }

    #[test]
    fn get_limits_rejects_unknown_plan() {
        assert_eq!(
            service().get_limits("enterprise").unwrap_err(),
            PlanError::UnknownPlan("enterprise".to_string())
        );
    }

    #[test]
    fn has_capability_validates_both_identifiers() {
        assert!(service().has_capability("premium", "whiteLabel").unwrap());
        assert!(!service().has_capability("business", "apiAccess").unwrap());
        assert_eq!(
            service().has_capability("business", "teleport").unwrap_err(),
            PlanError::UnknownCapability("teleport".to_string())
        );
        assert_eq!(
            service().has_capability("gold", "apiAccess").unwrap_err(),
            PlanError::UnknownPlan("gold".to_string())
        );
    }

    #[test]
    fn unknown_category_is_false_not_error() {
        assert!(!service().is_category_allowed("premium", "quantum").unwrap());
        assert!(service().is_category_allowed("free", "financial-basic").unwrap());
    }

    #[test]
    fn unknown_plan_in_category_check_is_error() {
        assert!(service().is_category_allowed("gold", "crm").is_err());
    }

    #[test]
    fn compare_rank_over_raw_identifiers() {
        assert_eq!(service().compare_rank("free", "starter").unwrap(), Ordering::Less);
        assert_eq!(service().compare_rank("premium", "premium").unwrap(), Ordering::Equal);
        assert!(service().compare_rank("free", "platinum").is_err());
    }

    #[test]
    fn resolve_entitlements_propagates_unknown_plan() {
        assert_eq!(
            service().resolve_entitlements("sales", "bogus-plan").unwrap_err(),
            PlanError::UnknownPlan("bogus-plan".to_string())
        );
    }

    #[test]
    fn get_modules_signals_unconfigured_segment() {
        let service = service();
        let modules = service.get_modules("nonexistent-segment");
        assert!(!modules.is_configured());
        assert!(modules.modules().is_empty());
    }
}

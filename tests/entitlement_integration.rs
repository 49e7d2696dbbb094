//! Integration tests for plan gating and segment resolution.
//!
//! These tests drive the public API end to end:
//! 1. Raw identifiers enter through `EntitlementService` or the settings store
//! 2. The resolver pairs segment modules with plan policy
//! 3. Handlers persist plan/segment changes and rebuild the navigation

use std::cmp::Ordering;
use std::sync::Arc;

use erp_lite_entitlements::adapters::JsonFileSettings;
use erp_lite_entitlements::application::{
    ChangePlanCommand, ChangePlanHandler, EntitlementService, GetWorkspaceNavigationHandler,
    GetWorkspaceNavigationQuery, PlanChange, SelectSegmentCommand, SelectSegmentHandler,
    WorkspaceError,
};
use erp_lite_entitlements::domain::plan::{Category, PlanCatalog, PlanError, PlanId, UserLimit};
use erp_lite_entitlements::domain::segment::{SegmentId, SegmentResolver};
use erp_lite_entitlements::ports::SettingsProvider;

// =============================================================================
// Catalog scenarios
// =============================================================================

#[test]
fn every_plan_has_sane_limits_and_premium_is_unlimited() {
    let service = EntitlementService::default();
    for plan in PlanId::ALL {
        let limits = service.get_limits(plan.as_str()).unwrap();
        if let UserLimit::Limited(max) = limits.max_users {
            assert!(max > 0);
        }
    }
    assert!(service.get_limits("premium").unwrap().max_users.is_unlimited());
}

#[test]
fn compare_rank_is_a_total_order_over_all_pairs() {
    let service = EntitlementService::default();
    for a in PlanId::ALL {
        for b in PlanId::ALL {
            let ab = service.compare_rank(a.as_str(), b.as_str()).unwrap();
            let ba = service.compare_rank(b.as_str(), a.as_str()).unwrap();
            assert_eq!(ab, ba.reverse());
            assert_eq!(ab == Ordering::Equal, a == b);
            for c in PlanId::ALL {
                let bc = service.compare_rank(b.as_str(), c.as_str()).unwrap();
                let ac = service.compare_rank(a.as_str(), c.as_str()).unwrap();
                if ab == Ordering::Less && bc == Ordering::Less {
                    assert_eq!(ac, Ordering::Less);
                }
            }
        }
    }
}

#[test]
fn free_sales_locks_crm_and_advanced() {
    let entitlements = EntitlementService::default()
        .resolve_entitlements("sales", "free")
        .unwrap();

    for entitlement in entitlements {
        match entitlement.module.category {
            Category::Crm | Category::Advanced => assert!(entitlement.locked),
            Category::FinancialBasic => assert!(!entitlement.locked),
            _ => {}
        }
    }
}

#[test]
fn premium_unlocks_every_known_segment() {
    let service = EntitlementService::default();
    for segment in SegmentId::ALL {
        let entitlements = service
            .resolve_entitlements(segment.as_str(), "premium")
            .unwrap();
        assert!(!entitlements.is_empty());
        assert!(entitlements.iter().all(|e| !e.locked));
    }
}

#[test]
fn starter_ecommerce_locks_avancado_modules() {
    let service = EntitlementService::default();
    assert!(!service.is_category_allowed("starter", "Avançado").unwrap());

    let entitlements = service.resolve_entitlements("ecommerce", "starter").unwrap();
    let advanced = entitlements
        .iter()
        .filter(|e| e.module.category == Category::Advanced);
    for entitlement in advanced {
        assert!(entitlement.locked, "{} should be locked", entitlement.module.id);
    }
}

#[test]
fn unknown_segment_is_an_empty_unconfigured_result() {
    let service = EntitlementService::default();
    let modules = service.get_modules("nonexistent-segment");
    assert!(!modules.is_configured());
    assert!(modules.modules().is_empty());
}

#[test]
fn unknown_plan_is_an_error() {
    let err = EntitlementService::default()
        .resolve_entitlements("sales", "bogus-plan")
        .unwrap_err();
    assert_eq!(err, PlanError::UnknownPlan("bogus-plan".to_string()));
}

#[test]
fn resolver_is_shareable_across_threads() {
    let resolver = Arc::new(SegmentResolver::standard());
    let handles: Vec<_> = PlanId::ALL
        .into_iter()
        .map(|plan| {
            let resolver = Arc::clone(&resolver);
            std::thread::spawn(move || resolver.resolve_entitlements("health", plan).len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 5);
    }
}

// =============================================================================
// Onboarding flow over a settings file
// =============================================================================

#[tokio::test]
async fn onboarding_flow_persists_and_unlocks_modules() {
    let dir = tempfile::TempDir::new().unwrap();
    let settings: Arc<dyn SettingsProvider> =
        Arc::new(JsonFileSettings::new(dir.path().join("settings.json")));
    let resolver = Arc::new(SegmentResolver::standard());
    let plans = Arc::new(PlanCatalog::standard().clone());

    let navigation = GetWorkspaceNavigationHandler::new(settings.clone(), resolver.clone());
    let select = SelectSegmentHandler::new(settings.clone(), resolver.clone());
    let change = ChangePlanHandler::new(settings.clone(), plans);

    // Fresh install: free plan, no segment yet.
    let before = navigation.handle(GetWorkspaceNavigationQuery).await.unwrap();
    assert!(!before.configured);
    assert_eq!(before.plan, PlanId::Free);

    select
        .handle(SelectSegmentCommand {
            segment: "sales".to_string(),
        })
        .await
        .unwrap();
    let on_free = navigation.handle(GetWorkspaceNavigationQuery).await.unwrap();
    assert!(on_free.configured);
    let locked_on_free = on_free.locked_count();
    assert!(locked_on_free > 0);

    let result = change
        .handle(ChangePlanCommand {
            plan: "business".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(result.change, PlanChange::Upgrade);

    let on_business = navigation.handle(GetWorkspaceNavigationQuery).await.unwrap();
    assert_eq!(on_business.plan, PlanId::Business);
    assert!(on_business.locked_count() < locked_on_free);
    assert_eq!(on_business.modules.len(), on_free.modules.len());
}

#[tokio::test]
async fn corrupted_stored_plan_surfaces_unknown_plan() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    let store = JsonFileSettings::new(&path);
    let mut stored = store.load().await.unwrap();
    stored.plan = "bogus-plan".to_string();
    stored.segment = Some("sales".to_string());
    store.save(&stored).await.unwrap();

    let handler = GetWorkspaceNavigationHandler::new(
        Arc::new(JsonFileSettings::new(&path)),
        Arc::new(SegmentResolver::standard()),
    );
    let err = handler.handle(GetWorkspaceNavigationQuery).await.unwrap_err();
    assert_eq!(err, WorkspaceError::UnknownPlan("bogus-plan".to_string()));
}

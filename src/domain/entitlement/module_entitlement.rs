//! Lock decisions for segment modules.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::plan::{Category, PlanCatalog, PlanId};
use crate::domain::segment::ModuleDescriptor;

/// Why a module is locked for the current plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LockReason {
    /// The plan's allow-list doesn't include the module's category.
    CategoryNotIncluded {
        category: Category,
        /// Cheapest plan that unlocks the category.
        required_plan: Option<PlanId>,
    },

    /// The module pins a minimum plan above the current one.
    BelowMinimumPlan { required_plan: PlanId },
}

impl LockReason {
    /// Plan the company would need to unlock the module.
    pub fn required_plan(&self) -> Option<PlanId> {
        match self {
            LockReason::CategoryNotIncluded { required_plan, .. } => *required_plan,
            LockReason::BelowMinimumPlan { required_plan } => Some(*required_plan),
        }
    }

    /// Get a user-facing message for the lock reason.
    pub fn user_message(&self) -> String {
        match self {
            LockReason::CategoryNotIncluded {
                category,
                required_plan: Some(plan),
            } => format!(
                "Módulos de {} estão disponíveis a partir do plano {}.",
                category.display_name(),
                plan.display_name()
            ),
            LockReason::CategoryNotIncluded {
                category,
                required_plan: None,
            } => format!(
                "Módulos de {} não estão disponíveis em nenhum plano.",
                category.display_name()
            ),
            LockReason::BelowMinimumPlan { required_plan } => format!(
                "Este módulo requer o plano {} ou superior.",
                required_plan.display_name()
            ),
        }
    }
}

impl fmt::Display for LockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

/// Lock state of one module under one plan. Computed, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntitlement {
    pub module: ModuleDescriptor,
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<LockReason>,
}

impl ModuleEntitlement {
    pub fn is_unlocked(&self) -> bool {
        !self.locked
    }
}

/// Decides whether `module` is locked on `plan`.
///
/// An explicit `min_plan` on the module takes precedence over the category
/// allow-list.
pub fn evaluate(plans: &PlanCatalog, module: &ModuleDescriptor, plan: PlanId) -> ModuleEntitlement {
    let reason = match module.min_plan {
        Some(required_plan) => (plans.compare_rank(plan, required_plan) == Ordering::Less)
            .then_some(LockReason::BelowMinimumPlan { required_plan }),
        None => (!plans.is_category_allowed(plan, module.category)).then(|| {
            LockReason::CategoryNotIncluded {
                category: module.category,
                required_plan: plans.cheapest_plan_for(module.category),
            }
        }),
    };

    ModuleEntitlement {
        module: module.clone(),
        locked: reason.is_some(),
        reason,
    }
}

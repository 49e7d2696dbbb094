//! The plan table and the policy queries answered from it.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::{Capability, CatalogError, Category, PlanId, PlanLimits, UserLimit};

/// Everything a plan grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDefinition {
    pub id: PlanId,
    pub display_name: String,
    pub description: String,
    /// Monthly price in BRL cents.
    pub monthly_price_cents: u32,
    pub limits: PlanLimits,
    #[serde(default)]
    pub capabilities: BTreeSet<Capability>,
    #[serde(default)]
    pub allowed_categories: BTreeSet<Category>,
}

/// Validated, immutable plan table.
///
/// Construction guarantees exactly one definition per [`PlanId`], stored in
/// rank order, with monotonic category and capability sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    plans: Vec<PlanDefinition>,
}

static STANDARD_PLANS: Lazy<PlanCatalog> = Lazy::new(|| {
    // A broken built-in table can't serve a single request.
    PlanCatalog::new(standard_definitions()).expect("built-in plan table must be valid")
});

impl PlanCatalog {
    /// Validates and builds a plan table.
    ///
    /// # Errors
    ///
    /// - `MissingPlan` / `DuplicatePlan` unless every plan appears once
    /// - `NonMonotonicCategory` / `NonMonotonicCapability` if a higher plan
    ///   drops something a cheaper plan grants
    /// - `ExclusiveCapabilityBelowPremium` for api access or white label
    ///   below premium
    /// - `PremiumMissingCategory` if premium doesn't allow every category
    pub fn new(mut definitions: Vec<PlanDefinition>) -> Result<Self, CatalogError> {
        for plan in PlanId::ALL {
            match definitions.iter().filter(|d| d.id == plan).count() {
                0 => return Err(CatalogError::MissingPlan(plan)),
                1 => {}
                _ => return Err(CatalogError::DuplicatePlan(plan)),
            }
        }

        definitions.sort_by_key(|d| d.id);

        for pair in definitions.windows(2) {
            let (lower, higher) = (&pair[0], &pair[1]);
            if let Some(category) = lower
                .allowed_categories
                .difference(&higher.allowed_categories)
                .next()
            {
                return Err(CatalogError::NonMonotonicCategory {
                    category: *category,
                    lower: lower.id,
                    higher: higher.id,
                });
            }
            if let Some(capability) = lower.capabilities.difference(&higher.capabilities).next() {
                return Err(CatalogError::NonMonotonicCapability {
                    capability: *capability,
                    lower: lower.id,
                    higher: higher.id,
                });
            }
        }

        for definition in &definitions {
            if definition.id == PlanId::Premium {
                continue;
            }
            if let Some(capability) = definition
                .capabilities
                .iter()
                .find(|c| c.is_premium_exclusive())
            {
                return Err(CatalogError::ExclusiveCapabilityBelowPremium {
                    capability: *capability,
                    plan: definition.id,
                });
            }
        }

        let premium = &definitions[PlanId::Premium.rank() as usize];
        if let Some(category) = Category::ALL
            .iter()
            .find(|c| !premium.allowed_categories.contains(c))
        {
            return Err(CatalogError::PremiumMissingCategory(*category));
        }

        Ok(Self { plans: definitions })
    }

    /// The built-in plan table.
    pub fn standard() -> &'static PlanCatalog {
        &STANDARD_PLANS
    }

    /// All plans, cheapest first.
    pub fn plans(&self) -> &[PlanDefinition] {
        &self.plans
    }

    pub fn definition(&self, plan: PlanId) -> &PlanDefinition {
        &self.plans[plan.rank() as usize]
    }

    pub fn get_limits(&self, plan: PlanId) -> PlanLimits {
        self.definition(plan).limits
    }

    pub fn has_capability(&self, plan: PlanId, capability: Capability) -> bool {
        self.definition(plan).capabilities.contains(&capability)
    }

    /// Absence from the allow-list is a normal `false`, not an error.
    pub fn is_category_allowed(&self, plan: PlanId, category: Category) -> bool {
        self.definition(plan).allowed_categories.contains(&category)
    }

    /// Same as [`is_category_allowed`](Self::is_category_allowed) for a raw
    /// tag; tags that name no category are never allowed.
    pub fn is_tag_allowed(&self, plan: PlanId, tag: &str) -> bool {
        Category::from_tag(tag)
            .map(|category| self.is_category_allowed(plan, category))
            .unwrap_or(false)
    }

    /// Total order over plans by rank.
    pub fn compare_rank(&self, a: PlanId, b: PlanId) -> Ordering {
        a.rank().cmp(&b.rank())
    }

    /// Cheapest plan whose allow-list contains `category`.
    pub fn cheapest_plan_for(&self, category: Category) -> Option<PlanId> {
        self.plans
            .iter()
            .find(|d| d.allowed_categories.contains(&category))
            .map(|d| d.id)
    }

    /// Cheapest plan granting `capability`.
    pub fn cheapest_plan_with(&self, capability: Capability) -> Option<PlanId> {
        self.plans
            .iter()
            .find(|d| d.capabilities.contains(&capability))
            .map(|d| d.id)
    }
}

/// The canonical plan table.
///
/// | Plan | Users | Storage | Price | Adds |
/// |------|-------|---------|-------|------|
/// | free | 1 | 1 GB | 0,00 | financial-basic, sales, operations |
/// | starter | 3 | 10 GB | 49,90 | inventory |
/// | business | 10 | 50 GB | 149,90 | crm, hr, reports, customReports, advancedIntegrations |
/// | premium | unlimited | 200 GB | 299,90 | advanced, apiAccess, whiteLabel |
pub fn standard_definitions() -> Vec<PlanDefinition> {
    let free_categories: BTreeSet<Category> = [
        Category::FinancialBasic,
        Category::Sales,
        Category::Operations,
    ]
    .into_iter()
    .collect();

    let mut starter_categories = free_categories.clone();
    starter_categories.insert(Category::Inventory);

    let mut business_categories = starter_categories.clone();
    business_categories.extend([Category::Crm, Category::Hr, Category::Reports]);

    let mut premium_categories = business_categories.clone();
    premium_categories.insert(Category::Advanced);

    let business_capabilities: BTreeSet<Capability> =
        [Capability::CustomReports, Capability::AdvancedIntegrations]
            .into_iter()
            .collect();
    let premium_capabilities: BTreeSet<Capability> = Capability::ALL.into_iter().collect();

    vec![
        PlanDefinition {
            id: PlanId::Free,
            display_name: PlanId::Free.display_name().to_string(),
            description: "Para quem está começando a organizar o negócio".to_string(),
            monthly_price_cents: 0,
            limits: PlanLimits {
                max_users: UserLimit::Limited(1),
                storage_gb: 1,
            },
            capabilities: BTreeSet::new(),
            allowed_categories: free_categories,
        },
        PlanDefinition {
            id: PlanId::Starter,
            display_name: PlanId::Starter.display_name().to_string(),
            description: "Pequenas equipes com controle de estoque".to_string(),
            monthly_price_cents: 4_990,
            limits: PlanLimits {
                max_users: UserLimit::Limited(3),
                storage_gb: 10,
            },
            capabilities: BTreeSet::new(),
            allowed_categories: starter_categories,
        },
        PlanDefinition {
            id: PlanId::Business,
            display_name: PlanId::Business.display_name().to_string(),
            description: "Empresas em crescimento com CRM, RH e relatórios".to_string(),
            monthly_price_cents: 14_990,
            limits: PlanLimits {
                max_users: UserLimit::Limited(10),
                storage_gb: 50,
            },
            capabilities: business_capabilities,
            allowed_categories: business_categories,
        },
        PlanDefinition {
            id: PlanId::Premium,
            display_name: PlanId::Premium.display_name().to_string(),
            description: "Todos os módulos, API e marca própria".to_string(),
            monthly_price_cents: 29_990,
            limits: PlanLimits {
                max_users: UserLimit::Unlimited,
                storage_gb: 200,
            },
            capabilities: premium_capabilities,
            allowed_categories: premium_categories,
        },
    ]
}

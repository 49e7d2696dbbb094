//! Subscription plan identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PlanError;

/// Subscription plan a company is on.
///
/// Variants are declared in rank order, so the derived `Ord` is the plan
/// ranking used for "at least X" checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    /// Entry plan, single user, basic finance and sales.
    Free,
    /// Small teams, adds inventory.
    Starter,
    /// Growing companies, adds CRM, HR and reports.
    Business,
    /// Everything, including premium-exclusive capabilities.
    Premium,
}

impl PlanId {
    /// All plans, cheapest first.
    pub const ALL: [PlanId; 4] = [
        PlanId::Free,
        PlanId::Starter,
        PlanId::Business,
        PlanId::Premium,
    ];

    /// Returns the stored identifier for this plan.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Free => "free",
            PlanId::Starter => "starter",
            PlanId::Business => "business",
            PlanId::Premium => "premium",
        }
    }

    /// Returns the display name for this plan.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanId::Free => "Gratuito",
            PlanId::Starter => "Starter",
            PlanId::Business => "Business",
            PlanId::Premium => "Premium",
        }
    }

    /// Returns the numeric rank of this plan.
    ///
    /// Higher rank = more features.
    pub fn rank(&self) -> u8 {
        match self {
            PlanId::Free => 0,
            PlanId::Starter => 1,
            PlanId::Business => 2,
            PlanId::Premium => 3,
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanId {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(PlanId::Free),
            "starter" => Ok(PlanId::Starter),
            "business" => Ok(PlanId::Business),
            "premium" => Ok(PlanId::Premium),
            _ => Err(PlanError::UnknownPlan(s.to_string())),
        }
    }
}

//! Boolean capability flags granted by plans.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PlanError;

/// A plan-level capability switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    /// Report builder with saved custom reports.
    CustomReports,
    /// Third-party integrations beyond the basic bank/e-mail ones.
    AdvancedIntegrations,
    /// Public REST API tokens.
    ApiAccess,
    /// Custom branding, no ERP Lite marks.
    WhiteLabel,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::CustomReports,
        Capability::AdvancedIntegrations,
        Capability::ApiAccess,
        Capability::WhiteLabel,
    ];

    /// Returns the flag name as stored in plan tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::CustomReports => "customReports",
            Capability::AdvancedIntegrations => "advancedIntegrations",
            Capability::ApiAccess => "apiAccess",
            Capability::WhiteLabel => "whiteLabel",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Capability::CustomReports => "Relatórios personalizados",
            Capability::AdvancedIntegrations => "Integrações avançadas",
            Capability::ApiAccess => "Acesso à API",
            Capability::WhiteLabel => "White label",
        }
    }

    /// Capabilities that no plan below premium may grant.
    pub fn is_premium_exclusive(&self) -> bool {
        matches!(self, Capability::ApiAccess | Capability::WhiteLabel)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Capability {
    type Err = PlanError;

    /// Accepts camelCase, snake_case and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "customreports" => Ok(Capability::CustomReports),
            "advancedintegrations" => Ok(Capability::AdvancedIntegrations),
            "apiaccess" => Ok(Capability::ApiAccess),
            "whitelabel" => Ok(Capability::WhiteLabel),
            _ => Err(PlanError::UnknownCapability(s.to_string())),
        }
    }
}

//! Allow/deny results for capability and usage checks.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::plan::{Capability, PlanId};

/// Result of an access check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum AccessResult {
    /// Access is granted.
    Allowed,
    /// Access is denied with a specific reason.
    Denied(AccessDeniedReason),
}

impl AccessResult {
    /// Returns true if access is allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessResult::Allowed)
    }

    /// Returns true if access is denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, AccessResult::Denied(_))
    }

    /// Converts the result to a Result type, with denied becoming an error.
    pub fn into_result(self) -> Result<(), AccessDeniedReason> {
        match self {
            AccessResult::Allowed => Ok(()),
            AccessResult::Denied(reason) => Err(reason),
        }
    }
}

/// Reason why access was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccessDeniedReason {
    /// Capability requires a higher plan.
    FeatureNotIncluded {
        capability: Capability,
        /// Cheapest plan granting the capability.
        required_plan: Option<PlanId>,
    },

    /// Maximum number of users reached for the plan.
    UserLimitReached { current: u32, max: u32 },

    /// Storage allowance used up.
    StorageLimitReached { used_gb: u32, max_gb: u32 },
}

impl AccessDeniedReason {
    /// Get a user-facing message for the denial reason.
    pub fn user_message(&self) -> String {
        match self {
            AccessDeniedReason::FeatureNotIncluded {
                capability,
                required_plan: Some(plan),
            } => format!(
                "{} requer o plano {} ou superior.",
                capability.display_name(),
                plan.display_name()
            ),
            AccessDeniedReason::FeatureNotIncluded {
                capability,
                required_plan: None,
            } => format!("{} não está disponível.", capability.display_name()),
            AccessDeniedReason::UserLimitReached { current, max } => format!(
                "Limite de {} usuários atingido (atualmente {}). Faça upgrade para adicionar mais.",
                max, current
            ),
            AccessDeniedReason::StorageLimitReached { used_gb, max_gb } => format!(
                "Armazenamento esgotado: {} GB de {} GB usados.",
                used_gb, max_gb
            ),
        }
    }
}

impl fmt::Display for AccessDeniedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_is_allowed() {
        let result = AccessResult::Allowed;
        assert!(result.is_allowed());
        assert!(!result.is_denied());
    }

    #[test]
    fn into_result_denied_is_err() {
        let reason = AccessDeniedReason::UserLimitReached { current: 3, max: 3 };
        let err = AccessResult::Denied(reason.clone()).into_result().unwrap_err();
        assert_eq!(err, reason);
    }

    #[test]
    fn feature_message_names_plan() {
        let reason = AccessDeniedReason::FeatureNotIncluded {
            capability: Capability::WhiteLabel,
            required_plan: Some(PlanId::Premium),
        };
        let msg = reason.user_message();
        assert!(msg.contains("White label"));
        assert!(msg.contains("Premium"));
    }

    #[test]
    fn user_limit_message_includes_counts() {
        let msg = AccessDeniedReason::UserLimitReached { current: 4, max: 3 }.user_message();
        assert!(msg.contains('3'));
        assert!(msg.contains('4'));
    }

    #[test]
    fn denied_serializes_with_reason() {
        let result = AccessResult::Denied(AccessDeniedReason::StorageLimitReached {
            used_gb: 12,
            max_gb: 10,
        });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "denied");
        assert_eq!(json["reason"]["type"], "storage_limit_reached");
    }
}

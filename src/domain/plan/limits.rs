//! Numeric limits attached to each plan.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of users on a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserLimitRepr", into = "UserLimitRepr")]
pub enum UserLimit {
    Limited(u32),
    Unlimited,
}

impl UserLimit {
    /// Returns the cap, or `None` when unlimited.
    pub fn as_count(&self) -> Option<u32> {
        match self {
            UserLimit::Limited(max) => Some(*max),
            UserLimit::Unlimited => None,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, UserLimit::Unlimited)
    }
}

impl fmt::Display for UserLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserLimit::Limited(max) => write!(f, "{}", max),
            UserLimit::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// Wire form: a plain number or the string `"unlimited"`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum UserLimitRepr {
    Count(u32),
    Keyword(String),
}

impl From<UserLimit> for UserLimitRepr {
    fn from(limit: UserLimit) -> Self {
        match limit {
            UserLimit::Limited(max) => UserLimitRepr::Count(max),
            UserLimit::Unlimited => UserLimitRepr::Keyword("unlimited".to_string()),
        }
    }
}

impl TryFrom<UserLimitRepr> for UserLimit {
    type Error = String;

    fn try_from(repr: UserLimitRepr) -> Result<Self, Self::Error> {
        match repr {
            UserLimitRepr::Count(max) => Ok(UserLimit::Limited(max)),
            UserLimitRepr::Keyword(word) if word.eq_ignore_ascii_case("unlimited") => {
                Ok(UserLimit::Unlimited)
            }
            UserLimitRepr::Keyword(word) => Err(format!(
                "expected a user count or \"unlimited\", got \"{}\"",
                word
            )),
        }
    }
}

/// Resource limits of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLimits {
    /// Maximum active users.
    pub max_users: UserLimit,
    /// Included file storage in gigabytes.
    pub storage_gb: u32,
}

impl PlanLimits {
    /// Check if the user limit has been reached.
    ///
    /// Returns false if unlimited or under limit.
    pub fn user_limit_reached(&self, current_users: u32) -> bool {
        self.max_users
            .as_count()
            .map(|max| current_users >= max)
            .unwrap_or(false)
    }

    /// Check if the storage allowance has been used up.
    pub fn storage_limit_reached(&self, used_gb: u32) -> bool {
        used_gb >= self.storage_gb
    }
}

//! Plan lookup and catalog construction errors.
//!
//! | Error | Meaning |
//! |-------|---------|
//! | `PlanError::UnknownPlan` | identifier absent from the plan catalog |
//! | `PlanError::UnknownCapability` | flag absent from the capability schema |
//! | `CatalogError` | plan or segment table is malformed (startup-fatal) |

use std::path::PathBuf;
use thiserror::Error;

use super::{Capability, Category, PlanId};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::segment::SegmentId;

/// Errors raised when a caller passes identifiers the catalog doesn't know.
///
/// Both variants mean the caller holds stale or corrupted identifiers.
/// They are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Unknown plan: '{0}'")]
    UnknownPlan(String),

    #[error("Unknown capability: '{0}'")]
    UnknownCapability(String),
}

impl PlanError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::UnknownPlan(_) => ErrorCode::UnknownPlan,
            PlanError::UnknownCapability(_) => ErrorCode::UnknownCapability,
        }
    }
}

impl From<PlanError> for DomainError {
    fn from(err: PlanError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// A plan or segment table failed validation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Plan '{0}' is missing from the plan table")]
    MissingPlan(PlanId),

    #[error("Plan '{0}' is defined more than once")]
    DuplicatePlan(PlanId),

    #[error("Category '{category}' is allowed on '{lower}' but not on higher plan '{higher}'")]
    NonMonotonicCategory {
        category: Category,
        lower: PlanId,
        higher: PlanId,
    },

    #[error("Capability '{capability}' is granted on '{lower}' but not on higher plan '{higher}'")]
    NonMonotonicCapability {
        capability: Capability,
        lower: PlanId,
        higher: PlanId,
    },

    #[error("Premium-exclusive capability '{capability}' granted on '{plan}'")]
    ExclusiveCapabilityBelowPremium { capability: Capability, plan: PlanId },

    #[error("Premium plan does not allow category '{0}'")]
    PremiumMissingCategory(Category),

    #[error("Segment '{0}' is defined more than once")]
    DuplicateSegment(SegmentId),

    #[error("Segment '{0}' has no modules")]
    EmptySegment(SegmentId),

    #[error("Segment '{segment}' has duplicate module id '{module}'")]
    DuplicateModuleId { segment: SegmentId, module: String },

    #[error("Segment '{segment}' has duplicate module path '{path}'")]
    DuplicateModulePath { segment: SegmentId, path: String },

    #[error("Failed to read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::InvalidCatalog, err.to_string())
    }
}

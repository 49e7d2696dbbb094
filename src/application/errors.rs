//! Application-level errors for workspace handlers.
//!
//! | Error | Code |
//! |-------|------|
//! | UnknownPlan | UNKNOWN_PLAN |
//! | UnknownCapability | UNKNOWN_CAPABILITY |
//! | UnknownSegment | UNKNOWN_SEGMENT |
//! | Storage | STORAGE_ERROR (or the store's own code) |

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::plan::PlanError;

/// Errors returned by workspace command and query handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    /// Plan identifier not in the catalog (stored or requested).
    UnknownPlan(String),

    /// Capability flag not in the schema.
    UnknownCapability(String),

    /// Segment identifier rejected when selecting a segment.
    UnknownSegment(String),

    /// Settings store failure.
    Storage { code: ErrorCode, message: String },
}

impl WorkspaceError {
    pub fn unknown_segment(segment: impl Into<String>) -> Self {
        WorkspaceError::UnknownSegment(segment.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            WorkspaceError::UnknownPlan(_) => ErrorCode::UnknownPlan,
            WorkspaceError::UnknownCapability(_) => ErrorCode::UnknownCapability,
            WorkspaceError::UnknownSegment(_) => ErrorCode::UnknownSegment,
            WorkspaceError::Storage { code, .. } => *code,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            WorkspaceError::UnknownPlan(plan) => format!("Unknown plan: '{}'", plan),
            WorkspaceError::UnknownCapability(capability) => {
                format!("Unknown capability: '{}'", capability)
            }
            WorkspaceError::UnknownSegment(segment) => format!("Unknown segment: '{}'", segment),
            WorkspaceError::Storage { message, .. } => format!("Settings error: {}", message),
        }
    }

    /// Callers hold bad identifiers for everything except storage failures.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            WorkspaceError::Storage {
                code: ErrorCode::StorageError,
                ..
            }
        )
    }
}

impl std::fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for WorkspaceError {}

impl From<PlanError> for WorkspaceError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::UnknownPlan(plan) => WorkspaceError::UnknownPlan(plan),
            PlanError::UnknownCapability(capability) => WorkspaceError::UnknownCapability(capability),
        }
    }
}

impl From<DomainError> for WorkspaceError {
    fn from(err: DomainError) -> Self {
        WorkspaceError::Storage {
            code: err.code,
            message: err.message,
        }
    }
}

impl From<WorkspaceError> for DomainError {
    fn from(err: WorkspaceError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_errors_keep_their_identifier() {
        let err: WorkspaceError = PlanError::UnknownPlan("gold".to_string()).into();
        assert_eq!(err, WorkspaceError::UnknownPlan("gold".to_string()));
        assert_eq!(err.code(), ErrorCode::UnknownPlan);

        let err: WorkspaceError = PlanError::UnknownCapability("x".to_string()).into();
        assert_eq!(err.code(), ErrorCode::UnknownCapability);
    }

    #[test]
    fn domain_errors_become_storage_errors_with_same_code() {
        let err: WorkspaceError =
            DomainError::new(ErrorCode::SerializationError, "bad json").into();
        assert_eq!(err.code(), ErrorCode::SerializationError);
        assert!(err.message().contains("bad json"));
    }

    #[test]
    fn only_storage_io_is_retryable() {
        let io = WorkspaceError::Storage {
            code: ErrorCode::StorageError,
            message: "disk full".to_string(),
        };
        assert!(io.is_retryable());
        assert!(!WorkspaceError::UnknownPlan("x".to_string()).is_retryable());
        assert!(!WorkspaceError::unknown_segment("x").is_retryable());
    }

    #[test]
    fn display_matches_message() {
        let err = WorkspaceError::unknown_segment("astrology");
        assert_eq!(format!("{}", err), err.message());
    }

    #[test]
    fn converts_to_domain_error() {
        let domain: DomainError = WorkspaceError::unknown_segment("x").into();
        assert_eq!(domain.code, ErrorCode::UnknownSegment);
    }
}

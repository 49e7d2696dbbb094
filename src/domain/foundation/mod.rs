//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error types that the plan, segment and
//! entitlement modules build on.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode};
pub use ids::CompanyId;

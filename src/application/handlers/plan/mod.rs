//! Plan handlers.
//!
//! ## Commands
//! - Changing the subscription plan
//!
//! ## Queries
//! - Capability checks
//! - User and storage limit checks

mod change_plan;
mod check_capability;
mod check_usage;

// Commands
pub use change_plan::{ChangePlanCommand, ChangePlanHandler, ChangePlanResult, PlanChange};

// Queries
pub use check_capability::{CheckCapabilityHandler, CheckCapabilityQuery};
pub use check_usage::{CheckUsageHandler, CheckUsageQuery, CheckUsageResult};

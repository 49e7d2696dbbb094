//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `plan` - Subscription plans and the plan policy table
//! - `segment` - Business segments, their modules, and the resolver
//! - `entitlement` - Lock decisions and access results

pub mod entitlement;
pub mod foundation;
pub mod plan;
pub mod segment;

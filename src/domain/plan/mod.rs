//! Plan domain module.
//!
//! Answers "does plan P grant category/capability C?" and "what are the
//! limits of plan P?".
//!
//! # Module Structure
//!
//! - `plan_id` - PlanId subscription levels
//! - `capability` - Boolean capability flags
//! - `category` - Feature categories modules are gated by
//! - `limits` - User and storage limits
//! - `catalog` - The validated plan table (PlanPolicy)
//! - `errors` - Lookup and catalog errors

mod capability;
mod catalog;
mod category;
mod errors;
mod limits;
mod plan_id;

pub use capability::Capability;
pub use catalog::{standard_definitions, PlanCatalog, PlanDefinition};
pub use category::Category;
pub use errors::{CatalogError, PlanError};
pub use limits::{PlanLimits, UserLimit};
pub use plan_id::PlanId;

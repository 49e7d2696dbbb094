//! Entitlement domain module.
//!
//! Turns plan policy answers into per-module lock decisions and
//! allow/deny results for capabilities and usage limits.

mod access;
mod module_entitlement;

pub use access::{AccessDeniedReason, AccessResult};
pub use module_entitlement::{evaluate, LockReason, ModuleEntitlement};

//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer validates raw identifiers at the boundary and coordinates the
//! settings port with the domain. Following CQRS, it separates command
//! handlers (write) from query handlers (read).

mod entitlement_service;
mod errors;
pub mod handlers;

pub use entitlement_service::EntitlementService;
pub use errors::WorkspaceError;
pub use handlers::*;

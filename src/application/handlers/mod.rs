//! Application handlers.
//!
//! Command and query handlers that load company settings through the
//! `SettingsProvider` port and answer with the domain's plan and segment
//! rules.

pub mod plan;
pub mod workspace;

pub use plan::{
    ChangePlanCommand, ChangePlanHandler, ChangePlanResult, CheckCapabilityHandler,
    CheckCapabilityQuery, CheckUsageHandler, CheckUsageQuery, CheckUsageResult, PlanChange,
};
pub use workspace::{
    GetWorkspaceNavigationHandler, GetWorkspaceNavigationQuery, SegmentSummary,
    SelectSegmentCommand, SelectSegmentHandler, SelectSegmentResult, WorkspaceNavigation,
};

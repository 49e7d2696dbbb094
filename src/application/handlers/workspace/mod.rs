//! Workspace handlers.
//!
//! ## Commands
//! - Selecting the business segment
//!
//! ## Queries
//! - Workspace navigation (segment modules with lock state)

mod get_navigation;
mod select_segment;

// Commands
pub use select_segment::{SelectSegmentCommand, SelectSegmentHandler, SelectSegmentResult};

// Queries
pub use get_navigation::{
    GetWorkspaceNavigationHandler, GetWorkspaceNavigationQuery, SegmentSummary,
    WorkspaceNavigation,
};

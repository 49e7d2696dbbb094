//! Segment domain module.
//!
//! Business verticals, their ordered module lists, and the resolver that
//! pairs them with plan policy.
//!
//! # Module Structure
//!
//! - `segment_id` - SegmentId business verticals
//! - `module` - Segment and ModuleDescriptor
//! - `builtin` - The built-in segment table
//! - `catalog` - Validated segment table, YAML overrides
//! - `resolver` - SegmentResolver

mod builtin;
mod catalog;
mod module;
mod resolver;
mod segment_id;

pub use builtin::standard_segments;
pub use catalog::SegmentCatalog;
pub use module::{ModuleDescriptor, Segment};
pub use resolver::{SegmentModules, SegmentResolver};
pub use segment_id::SegmentId;

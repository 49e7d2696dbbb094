//! Segment and module descriptors.

use serde::{Deserialize, Serialize};

use super::SegmentId;
use crate::domain::plan::{Category, PlanId};

/// A navigable feature area inside a segment ("Estoque", "CRM & Comercial").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Stable identifier, unique within the segment.
    pub id: String,
    /// Route suffix under the dashboard root.
    pub path: String,
    pub label: String,
    /// Icon key understood by the presentation layer.
    pub icon: String,
    pub category: Category,
    /// Explicit minimum plan; when set it replaces the category check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_plan: Option<PlanId>,
}

impl ModuleDescriptor {
    pub fn new(
        id: impl Into<String>,
        path: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            label: label.into(),
            icon: icon.into(),
            category,
            min_plan: None,
        }
    }

    /// Pins the module to a minimum plan regardless of its category.
    pub fn with_min_plan(mut self, plan: PlanId) -> Self {
        self.min_plan = Some(plan);
        self
    }
}

/// A business vertical and its ordered module list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    pub display_name: String,
    pub icon: String,
    pub modules: Vec<ModuleDescriptor>,
}

impl Segment {
    pub fn module(&self, module_id: &str) -> Option<&ModuleDescriptor> {
        self.modules.iter().find(|m| m.id == module_id)
    }
}

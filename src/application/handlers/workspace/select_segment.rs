//! SelectSegmentHandler - Command handler for picking the business segment.

use chrono::Utc;
use std::sync::Arc;

use crate::application::WorkspaceError;
use crate::domain::segment::{SegmentId, SegmentResolver};
use crate::ports::SettingsProvider;

/// Command to set the company's segment.
#[derive(Debug, Clone)]
pub struct SelectSegmentCommand {
    pub segment: String,
}

/// Result of selecting a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectSegmentResult {
    pub segment: SegmentId,
    pub module_count: usize,
}

/// Handler for selecting a segment.
///
/// Unlike reads, writes reject identifiers the loaded catalog can't serve,
/// so nothing invalid reaches storage.
pub struct SelectSegmentHandler {
    settings: Arc<dyn SettingsProvider>,
    resolver: Arc<SegmentResolver>,
}

impl SelectSegmentHandler {
    pub fn new(settings: Arc<dyn SettingsProvider>, resolver: Arc<SegmentResolver>) -> Self {
        Self { settings, resolver }
    }

    pub async fn handle(
        &self,
        cmd: SelectSegmentCommand,
    ) -> Result<SelectSegmentResult, WorkspaceError> {
        let segment = self
            .resolver
            .get_modules(&cmd.segment)
            .segment()
            .ok_or_else(|| WorkspaceError::unknown_segment(&cmd.segment))?;

        let mut settings = self.settings.load().await?;
        settings.segment = Some(segment.id.as_str().to_string());
        settings.updated_at = Some(Utc::now());
        self.settings.save(&settings).await?;

        tracing::info!(company_id = %settings.company_id, segment = %segment.id, "segment selected");

        Ok(SelectSegmentResult {
            segment: segment.id,
            module_count: segment.modules.len(),
        })
    }
}

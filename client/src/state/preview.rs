#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::net::error::ApiError;
use crate::net::types::{FormMetadata, PreviewModel};
use crate::state::status::StatusLine;
use crate::util::preview_doc;

pub const MISSING_IDS_MESSAGE: &str = "Provide tenant and form IDs before loading the preview.";

/// Last loaded preview plus the preview status line.
///
/// Metadata, validation messages and the frame document all derive from the
/// single `model` value, so they can never disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewState {
    pub model: Option<PreviewModel>,
    pub status: StatusLine,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self { model: None, status: StatusLine::muted("Preview not loaded.") }
    }
}

impl PreviewState {
    /// Start a load for `target`. Without a target nothing is requested; the
    /// missing-ids warning is only shown when `show_errors` is set.
    pub fn begin_load(&mut self, target: Option<(String, String)>, show_errors: bool) -> Option<(String, String)> {
        let Some(target) = target else {
            if show_errors {
                self.status = StatusLine::warning(MISSING_IDS_MESSAGE);
            }
            return None;
        };
        self.status = StatusLine::muted("Loading preview...");
        Some(target)
    }

    /// Replace the model on success, discard it on failure.
    pub fn finish_load(&mut self, result: Result<PreviewModel, ApiError>, refreshed_at: &str) {
        match result {
            Ok(model) => {
                self.model = Some(model);
                self.status = StatusLine::success(format!("Preview refreshed at {refreshed_at}"));
            }
            Err(e) => {
                self.model = None;
                self.status = StatusLine::danger(format!("Preview failed: {e}"));
            }
        }
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&FormMetadata> {
        self.model.as_ref().and_then(|m| m.metadata.as_ref())
    }

    #[must_use]
    pub fn validation_messages(&self) -> &[String] {
        self.model
            .as_ref()
            .map(|m| m.validation_messages.as_slice())
            .unwrap_or_default()
    }

    /// Standalone document for the preview frame, `None` when there is no
    /// HTML to show.
    #[must_use]
    pub fn frame_document(&self) -> Option<String> {
        let html = self.model.as_ref().map(|m| m.html.as_str()).filter(|h| !h.trim().is_empty())?;
        Some(preview_doc::build_preview_document(html))
    }
}

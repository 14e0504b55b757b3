#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::net::types::FormMetadata;
use crate::util::time;

/// Visual emphasis of a status line, mapped onto Bootstrap text utilities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Muted,
    Success,
    Warning,
    Danger,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Muted => "text-muted",
            Self::Success => "text-success",
            Self::Warning => "text-warning",
            Self::Danger => "text-danger",
        }
    }
}

/// A one-line status message with its tone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

impl StatusLine {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self { text: text.into(), tone }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Muted)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Success)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Warning)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Danger)
    }
}

/// Connection-area status: the form lifecycle / capture line plus a
/// secondary feedback line (API selection, last save, version check).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusState {
    pub connection: StatusLine,
    pub feedback: String,
}

impl StatusState {
    /// Report a successful create with the canonical metadata.
    pub fn form_created(&mut self, metadata: &FormMetadata) {
        let version = metadata.version.as_deref().unwrap_or("—");
        self.connection = StatusLine::success(format!("Form \"{}\" ready (version {version}).", metadata.form_id));
        self.feedback = format!("Last save at {}.", time::format_date(metadata.updated_utc.as_deref()));
    }
}

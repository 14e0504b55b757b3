//! Copilot chat transcript and submission state.
//!
//! DESIGN
//! ======
//! A submission moves through `begin_submission` → (`complete` | `fail`).
//! `sending` stays set in between, and a second submission is rejected while
//! it is, so at most one chat request is in flight per page.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::error::ApiError;
use crate::net::types::{ChatResponse, ExecutedTool};

pub const MISSING_TENANT_MESSAGE: &str = "Tenant ID is required before sending chat messages.";
pub const NO_RESPONSE_MESSAGE: &str = "No response returned.";
pub const DEFAULT_TOOL_SUMMARY: &str = "Completed successfully";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

impl ChatRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
            Self::System => "System",
        }
    }

    /// Modifier class appended to `chat-message`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

/// A transcript entry. Never mutated after it is appended.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
    pub tools: Vec<ExecutedTool>,
    pub model: Option<String>,
}

/// Why a submission was not sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRejection {
    MissingTenant,
    EmptyMessage,
    Busy,
}

impl ChatRejection {
    /// Banner text for rejections the operator needs to act on.
    #[must_use]
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Self::MissingTenant => Some(MISSING_TENANT_MESSAGE),
            Self::EmptyMessage | Self::Busy => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub sending: bool,
    /// Inline error banner; hidden when `None`.
    pub error: Option<String>,
    /// Tools executed by the most recent successful reply.
    pub last_tools: Vec<ExecutedTool>,
}

impl ChatState {
    pub fn push(&mut self, role: ChatRole, content: impl Into<String>, timestamp: f64) {
        self.messages.push(ChatMessage { role, content: content.into(), timestamp, tools: Vec::new(), model: None });
    }

    /// Whether the send control should be enabled for `draft`.
    #[must_use]
    pub fn can_send(&self, tenant_id: &str, draft: &str) -> bool {
        !self.sending && !tenant_id.trim().is_empty() && !draft.trim().is_empty()
    }

    /// Validate and record a user submission.
    ///
    /// On acceptance the user message is appended, `sending` is set, and the
    /// trimmed content to send is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`ChatRejection`] when the tenant is missing, the draft is
    /// blank, or a submission is already in flight. No message is appended.
    pub fn begin_submission(&mut self, tenant_id: &str, draft: &str, now: f64) -> Result<String, ChatRejection> {
        if self.sending {
            return Err(ChatRejection::Busy);
        }
        self.error = None;
        if tenant_id.trim().is_empty() {
            self.error = Some(MISSING_TENANT_MESSAGE.to_owned());
            return Err(ChatRejection::MissingTenant);
        }
        let content = draft.trim();
        if content.is_empty() {
            return Err(ChatRejection::EmptyMessage);
        }
        self.push(ChatRole::User, content, now);
        self.sending = true;
        Ok(content.to_owned())
    }

    /// Record the assistant reply. Returns `true` when the reply reports a
    /// successful form save, which warrants a preview reload.
    pub fn complete(&mut self, response: &ChatResponse, now: f64) -> bool {
        self.sending = false;
        self.last_tools.clone_from(&response.executed_tools);
        let content = response
            .assistant_message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(NO_RESPONSE_MESSAGE);
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: content.to_owned(),
            timestamp: now,
            tools: response.executed_tools.clone(),
            model: response.model.clone(),
        });
        did_save_successfully(&self.last_tools)
    }

    /// Record a failed request as a system entry and show the banner.
    pub fn fail(&mut self, error: &ApiError, now: f64) {
        self.sending = false;
        self.push(ChatRole::System, format!("Chat failed: {error}"), now);
        self.error = Some(error.to_string());
    }

    /// Drop the whole transcript and hide the banner.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.error = None;
    }
}

/// Display summary for a tool, with a fallback when the backend sent none.
#[must_use]
pub fn tool_summary(tool: &ExecutedTool) -> &str {
    tool.result_summary
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_TOOL_SUMMARY)
}

/// Heuristic: did any `save_formspec*` tool report `form saved`?
#[must_use]
pub fn did_save_successfully(tools: &[ExecutedTool]) -> bool {
    tools.iter().any(|tool| {
        let name = tool.tool_name.to_lowercase();
        let summary = tool.result_summary.as_deref().unwrap_or_default().to_lowercase();
        name.starts_with("save_formspec") && summary.contains("form saved")
    })
}

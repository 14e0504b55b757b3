#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::{ApiClient, normalize_base_url};
use crate::net::error::ApiError;
use crate::net::types::{ApiInfoDocument, ChatRequest, ChatResponse, CreateFormRequest, FormMetadata};
use crate::util::ids;

pub const DEFAULT_FORM_NAME: &str = "Contact Page";
pub const DEFAULT_CHAT_MODEL: &str = "offline";

/// Validation text shown when create is attempted without a tenant or name.
pub const CREATE_REQUIRES_TENANT_AND_NAME: &str = "Tenant ID and page name are required to create a form.";

/// Result of the last API version probe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ApiVersion {
    /// No base URL selected; nothing to probe.
    #[default]
    Unconfigured,
    Checking,
    Known(String),
    Failed,
}

impl ApiVersion {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Unconfigured => "—",
            Self::Checking => "…",
            Self::Known(version) => version,
            Self::Failed => "error",
        }
    }
}

/// Operator-selected context: which API, tenant and form the page talks to,
/// plus the chat session the backend associates with this page.
///
/// Identifiers start empty so server-rendered markup is deterministic; the
/// browser fills them in once via [`SessionState::ensure_identities`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub api_base_url: String,
    pub tenant_id: String,
    pub form_id: String,
    pub form_name: String,
    pub session_id: String,
    pub chat_model: String,
    pub api_version: ApiVersion,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            tenant_id: String::new(),
            form_id: String::new(),
            form_name: DEFAULT_FORM_NAME.to_owned(),
            session_id: String::new(),
            chat_model: DEFAULT_CHAT_MODEL.to_owned(),
            api_version: ApiVersion::Unconfigured,
        }
    }
}

impl SessionState {
    /// Generate tenant, form and chat session identifiers where still unset.
    pub fn ensure_identities(&mut self) {
        if self.tenant_id.is_empty() {
            self.tenant_id = ids::prefixed_id("tenant");
        }
        if self.form_id.is_empty() {
            self.form_id = ids::prefixed_id("form");
        }
        if self.session_id.is_empty() {
            self.session_id = ids::session_id();
        }
    }

    /// Select a new API base URL and return the feedback line describing it.
    pub fn set_api_base_url(&mut self, raw: &str) -> String {
        self.api_base_url = normalize_base_url(raw);
        let target = if self.api_base_url.is_empty() { "current origin" } else { self.api_base_url.as_str() };
        format!("Using API: {target}")
    }

    pub fn set_tenant_id(&mut self, raw: &str) {
        raw.trim().clone_into(&mut self.tenant_id);
    }

    pub fn set_form_id(&mut self, raw: &str) {
        raw.trim().clone_into(&mut self.form_id);
    }

    pub fn set_form_name(&mut self, raw: &str) {
        raw.trim().clone_into(&mut self.form_name);
    }

    #[must_use]
    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(&self.api_base_url)
    }

    #[must_use]
    pub fn has_tenant(&self) -> bool {
        !self.tenant_id.trim().is_empty()
    }

    /// Tenant and form are both selected.
    #[must_use]
    pub fn has_form_context(&self) -> bool {
        self.preview_target().is_some()
    }

    /// Guidance shown above the chat input.
    #[must_use]
    pub fn chat_hint(&self) -> String {
        if self.tenant_id.is_empty() {
            return "Tenant and form selection is required before sending a message.".to_owned();
        }
        if self.form_id.is_empty() {
            return format!(
                "Working in tenant \"{}\". Provide a form ID or ask the copilot to create one.",
                self.tenant_id
            );
        }
        format!(
            "Chatting against {}/{}. Preview refreshes after each update.",
            self.tenant_id, self.form_id
        )
    }

    /// Label for the chat model badge.
    #[must_use]
    pub fn model_label(&self) -> &str {
        if self.chat_model.is_empty() { "model" } else { &self.chat_model }
    }

    /// Build the create-form body, or the validation message when the tenant
    /// or form name is missing. The form id is only sent when provided.
    ///
    /// # Errors
    ///
    /// Returns [`CREATE_REQUIRES_TENANT_AND_NAME`] when tenant or name is blank.
    pub fn create_form_request(&self) -> Result<CreateFormRequest, &'static str> {
        let tenant_id = self.tenant_id.trim();
        let form_name = self.form_name.trim();
        if tenant_id.is_empty() || form_name.is_empty() {
            return Err(CREATE_REQUIRES_TENANT_AND_NAME);
        }
        let form_id = self.form_id.trim();
        Ok(CreateFormRequest {
            tenant_id: tenant_id.to_owned(),
            form_name: form_name.to_owned(),
            form_id: (!form_id.is_empty()).then(|| form_id.to_owned()),
        })
    }

    /// Adopt the backend's canonical identifiers after a create.
    pub fn adopt_form_metadata(&mut self, metadata: &FormMetadata) {
        self.tenant_id.clone_from(&metadata.tenant_id);
        self.form_id.clone_from(&metadata.form_id);
        self.form_name.clone_from(&metadata.form_name);
    }

    /// Trimmed `(tenant, form)` pair when both are present.
    #[must_use]
    pub fn preview_target(&self) -> Option<(String, String)> {
        let tenant_id = self.tenant_id.trim();
        let form_id = self.form_id.trim();
        if tenant_id.is_empty() || form_id.is_empty() {
            return None;
        }
        Some((tenant_id.to_owned(), form_id.to_owned()))
    }

    /// Chat body for `message`. The form name is only sent when no form id
    /// is selected, so the backend can create one.
    #[must_use]
    pub fn chat_request(&self, message: &str) -> ChatRequest {
        let form_id = (!self.form_id.is_empty()).then(|| self.form_id.clone());
        let form_name = (form_id.is_none() && !self.form_name.is_empty()).then(|| self.form_name.clone());
        ChatRequest {
            tenant_id: self.tenant_id.clone(),
            message: message.to_owned(),
            session_id: self.session_id.clone(),
            form_id,
            form_name,
        }
    }

    /// Adopt the session id and model the backend reported, if any.
    pub fn apply_chat_response(&mut self, response: &ChatResponse) {
        if let Some(session_id) = response.session_id.as_deref().filter(|s| !s.is_empty()) {
            session_id.clone_into(&mut self.session_id);
        }
        if let Some(model) = response.model.as_deref().filter(|m| !m.is_empty()) {
            model.clone_into(&mut self.chat_model);
        }
    }

    /// Start a version probe. Returns the base URL to query, or `None` when
    /// no base URL is selected.
    pub fn begin_version_check(&mut self) -> Option<String> {
        if self.api_base_url.is_empty() {
            self.api_version = ApiVersion::Unconfigured;
            return None;
        }
        self.api_version = ApiVersion::Checking;
        Some(self.api_base_url.clone())
    }

    /// Record a version probe result for `requested_base`. Results for a base
    /// URL that is no longer selected are dropped. Returns the feedback line
    /// to show on failure.
    pub fn finish_version_check(
        &mut self,
        requested_base: &str,
        result: Result<ApiInfoDocument, ApiError>,
    ) -> Option<String> {
        if requested_base != self.api_base_url {
            return None;
        }
        match result {
            Ok(document) => {
                self.api_version = ApiVersion::Known(document.version_label());
                None
            }
            Err(e) => {
                self.api_version = ApiVersion::Failed;
                Some(format!("API version check failed: {e}"))
            }
        }
    }
}

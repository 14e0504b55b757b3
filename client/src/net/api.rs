//! HTTP client for the copilot API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): calls fail with [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is single-shot (no retry, no timeout, no auth). Non-success
//! responses become [`ApiError::Status`] carrying the server's `message` /
//! `error` reason so handlers can surface it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{ApiInfoDocument, ChatRequest, ChatResponse, CreateFormRequest, FormDocument, PreviewModel};

const FORMS_PATH: &str = "/api/forms";
const CHAT_PATH: &str = "/api/chat";
const OPENAPI_PATH: &str = "/api/chat/openapi";

/// Normalize an operator-entered base URL: trim whitespace and drop every
/// trailing `/`. An empty result means "same origin".
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// Path of the preview endpoint with both identifiers percent-encoded.
#[must_use]
pub fn preview_path(tenant_id: &str, form_id: &str) -> String {
    format!(
        "{FORMS_PATH}/{}/{}/preview",
        urlencoding::encode(tenant_id),
        urlencoding::encode(form_id)
    )
}

/// Apply the response contract shared by every endpoint.
///
/// Non-2xx ⇒ [`ApiError::Status`]; 204 or an empty body ⇒ `Ok(None)`;
/// anything else is parsed as JSON.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-success statuses and
/// [`ApiError::Decode`] when a success body is not valid JSON for `T`.
pub fn interpret_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<Option<T>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    if status == 204 || body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Thin wrapper over the four copilot endpoints rooted at a base URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(base_url) }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute (or origin-relative when the base is empty) URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /api/forms`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, undecodable or empty bodies.
    pub async fn create_form(&self, request: &CreateFormRequest) -> Result<FormDocument, ApiError> {
        self.post(FORMS_PATH, request).await?.ok_or(ApiError::EmptyBody)
    }

    /// `GET /api/forms/{tenantId}/{formId}/preview`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, undecodable or empty bodies.
    pub async fn get_preview(&self, tenant_id: &str, form_id: &str) -> Result<PreviewModel, ApiError> {
        self.get(&preview_path(tenant_id, form_id))
            .await?
            .ok_or(ApiError::EmptyBody)
    }

    /// `POST /api/chat`. An empty body is treated as a reply with no content.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, or undecodable bodies.
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        Ok(self.post(CHAT_PATH, request).await?.unwrap_or_default())
    }

    /// `GET /api/chat/openapi`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, or undecodable bodies.
    pub async fn get_api_info(&self) -> Result<ApiInfoDocument, ApiError> {
        Ok(self.get(OPENAPI_PATH).await?.unwrap_or_default())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.url(path))
                .header("Accept", "application/json")
                .build()
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.url(path))
                .header("Accept", "application/json")
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send<T: DeserializeOwned>(request: gloo_net::http::Request) -> Result<Option<T>, ApiError> {
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    // Error bodies are best-effort; an unreadable one falls back to the generic message.
    let body = match resp.text().await {
        Ok(body) => body,
        Err(e) if resp.ok() => return Err(ApiError::Transport(e.to_string())),
        Err(_) => String::new(),
    };
    if !resp.ok() {
        leptos::logging::warn!("copilot api {} -> {status}", resp.url());
    }
    interpret_response(status, &body)
}

//! Wire DTOs for the copilot HTTP API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Response types default
//! every field, missing or `null`, so partially populated payloads still
//! deserialize; request types skip absent optionals so the body only carries
//! what the operator actually provided.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/forms`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormRequest {
    pub tenant_id: String,
    pub form_name: String,
    /// Requested form identifier; the backend assigns one when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_id: Option<String>,
}

/// Response of `POST /api/forms`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDocument {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub metadata: FormMetadata,
}

/// Canonical form identity and lifecycle details as reported by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormMetadata {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub tenant_id: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub form_id: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub form_name: String,
    /// Version label. The backend may send a number or a string; both are
    /// kept as display text.
    #[serde(default, deserialize_with = "deserialize_display_value")]
    pub version: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// ISO-8601 timestamp of the last save.
    #[serde(default)]
    pub updated_utc: Option<String>,
}

/// Response of `GET /api/forms/{tenantId}/{formId}/preview`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewModel {
    #[serde(default)]
    pub metadata: Option<FormMetadata>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub html: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub validation_messages: Vec<String>,
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub tenant_id: String,
    pub message: String,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_name: Option<String>,
}

/// Response of `POST /api/chat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub assistant_message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub executed_tools: Vec<ExecutedTool>,
}

/// A backend-side action reported back alongside an assistant reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutedTool {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub tool_name: String,
    #[serde(default)]
    pub result_summary: Option<String>,
}

/// Response of `GET /api/chat/openapi`; only the version is consumed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiInfoDocument {
    #[serde(default)]
    pub info: Option<ApiInfo>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiInfo {
    #[serde(default, deserialize_with = "deserialize_display_value")]
    pub version: Option<String>,
}

impl ApiInfoDocument {
    /// Advertised API version, `"unknown"` when the document omits it.
    #[must_use]
    pub fn version_label(&self) -> String {
        self.info
            .as_ref()
            .and_then(|info| info.version.as_deref())
            .filter(|v| !v.is_empty())
            .unwrap_or("unknown")
            .to_owned()
    }
}

fn deserialize_display_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

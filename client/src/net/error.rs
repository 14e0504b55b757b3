//! Error type for copilot API calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single copilot API request.
///
/// `Display` is the operator-facing text: for HTTP failures it is exactly
/// the server-supplied reason (or the generic fallback), with no prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("empty response body")]
    EmptyBody,
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a non-success response body.
    ///
    /// Prefers the JSON `message` field, then `error`, then
    /// `Request failed (<status>)`.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = server_reason(body).unwrap_or_else(|| request_failed_message(status));
        Self::Status { status, message }
    }

    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub(crate) fn request_failed_message(status: u16) -> String {
    format!("Request failed ({status})")
}

fn server_reason(body: &str) -> Option<String> {
    let payload: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| payload.get(*key).and_then(serde_json::Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_owned)
}

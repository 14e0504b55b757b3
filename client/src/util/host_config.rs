//! Host-provided configuration read from the server-rendered shell.
//!
//! The host binary renders `<meta name="formpilot-api-base" content="…">`
//! from its environment; the page falls back to its own origin when the tag
//! is missing or empty.

#[cfg(test)]
#[path = "host_config_test.rs"]
mod host_config_test;

use crate::net::api::normalize_base_url;

/// `name` of the meta tag carrying the default API base URL.
pub const API_BASE_META_NAME: &str = "formpilot-api-base";

/// Default API base: the host's configured value, else an http(s) page
/// origin, else empty (relative requests).
#[must_use]
pub fn pick_api_base(configured: Option<&str>, origin: Option<&str>) -> String {
    if let Some(base) = configured.map(normalize_base_url).filter(|b| !b.is_empty()) {
        return base;
    }
    origin
        .filter(|o| o.starts_with("http"))
        .map(normalize_base_url)
        .unwrap_or_default()
}

/// Resolve the default API base from the live document.
pub fn default_api_base() -> String {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window();
        let configured = window
            .as_ref()
            .and_then(web_sys::Window::document)
            .and_then(|doc| {
                doc.query_selector(&format!("meta[name=\"{API_BASE_META_NAME}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"));
        let origin = window.and_then(|w| w.location().origin().ok());
        pick_api_base(configured.as_deref(), origin.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

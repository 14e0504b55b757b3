//! Random identifiers for a fresh page session.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

/// `<prefix>-<8 hex chars>`, e.g. `tenant-3f9a1c2b`.
pub fn prefixed_id(prefix: &str) -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &uuid[..8])
}

/// Chat session identifier (hyphenated UUID v4).
pub fn session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

use super::*;

#[test]
fn prefixed_id_has_prefix_and_short_hex_suffix() {
    let id = prefixed_id("tenant");
    let suffix = id.strip_prefix("tenant-").unwrap();
    assert_eq!(suffix.len(), 8);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn prefixed_ids_differ() {
    assert_ne!(prefixed_id("form"), prefixed_id("form"));
}

#[test]
fn session_id_is_parseable_uuid() {
    let id = session_id();
    assert!(uuid::Uuid::parse_str(&id).is_ok());
}

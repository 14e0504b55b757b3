use super::*;

#[test]
fn pick_api_base_prefers_configured_value() {
    assert_eq!(
        pick_api_base(Some("https://api.example.com/"), Some("http://localhost:3000")),
        "https://api.example.com"
    );
}

#[test]
fn pick_api_base_falls_back_to_http_origin() {
    assert_eq!(pick_api_base(Some("  "), Some("http://localhost:3000")), "http://localhost:3000");
    assert_eq!(pick_api_base(None, Some("https://app.example.com")), "https://app.example.com");
}

#[test]
fn pick_api_base_ignores_non_http_origin() {
    assert_eq!(pick_api_base(None, Some("file://")), "");
    assert_eq!(pick_api_base(None, Some("null")), "");
    assert_eq!(pick_api_base(None, None), "");
}

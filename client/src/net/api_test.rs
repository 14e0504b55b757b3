use super::*;
use crate::net::types::PreviewModel;

// =============================================================
// Base URL + paths
// =============================================================

#[test]
fn normalize_base_url_trims_and_strips_trailing_slashes() {
    assert_eq!(normalize_base_url("  https://api.example.com///  "), "https://api.example.com");
    assert_eq!(normalize_base_url("http://localhost:8080/v1/"), "http://localhost:8080/v1");
    assert_eq!(normalize_base_url("   "), "");
}

#[test]
fn client_url_joins_base_and_path() {
    let client = ApiClient::new("https://api.example.com/");
    assert_eq!(client.base_url(), "https://api.example.com");
    assert_eq!(client.url("/api/chat"), "https://api.example.com/api/chat");
}

#[test]
fn client_url_is_origin_relative_for_empty_base() {
    let client = ApiClient::new("");
    assert_eq!(client.url("/api/chat/openapi"), "/api/chat/openapi");
}

#[test]
fn preview_path_encodes_segments() {
    assert_eq!(preview_path("tenant-1", "form-a"), "/api/forms/tenant-1/form-a/preview");
    assert_eq!(preview_path("acme corp", "a/b?c"), "/api/forms/acme%20corp/a%2Fb%3Fc/preview");
}

#[test]
fn preview_path_encodes_non_ascii_as_utf8() {
    assert_eq!(preview_path("é", "f"), "/api/forms/%C3%A9/f/preview");
    assert_eq!(preview_path("a-b_c.d~e", "x&y#z"), "/api/forms/a-b_c.d~e/x%26y%23z/preview");
}

// =============================================================
// Response contract
// =============================================================

#[test]
fn interpret_response_surfaces_server_message() {
    let err = interpret_response::<PreviewModel>(400, r#"{"message":"bad tenant"}"#).unwrap_err();
    assert_eq!(err.to_string(), "bad tenant");
}

#[test]
fn interpret_response_no_content_yields_none() {
    let out = interpret_response::<PreviewModel>(204, "").unwrap();
    assert!(out.is_none());
}

#[test]
fn interpret_response_empty_body_yields_none() {
    let out = interpret_response::<PreviewModel>(200, "  ").unwrap();
    assert!(out.is_none());
}

#[test]
fn interpret_response_parses_json_body() {
    let out = interpret_response::<PreviewModel>(200, r#"{"html":"<p>hi</p>","validationMessages":["x"]}"#)
        .unwrap()
        .unwrap();
    assert_eq!(out.html, "<p>hi</p>");
    assert_eq!(out.validation_messages, vec!["x".to_owned()]);
}

#[test]
fn interpret_response_reports_decode_errors() {
    let err = interpret_response::<PreviewModel>(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn interpret_response_generic_message_on_missing_reason() {
    let err = interpret_response::<PreviewModel>(503, "{}").unwrap_err();
    assert_eq!(err.to_string(), "Request failed (503)");
}

use super::*;

#[test]
fn from_status_prefers_message_field() {
    let err = ApiError::from_status(400, r#"{"message":"bad tenant","error":"ignored"}"#);
    assert_eq!(err.to_string(), "bad tenant");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn from_status_falls_back_to_error_field() {
    let err = ApiError::from_status(404, r#"{"error":"form not found"}"#);
    assert_eq!(err.to_string(), "form not found");
}

#[test]
fn from_status_uses_generic_message_for_non_json_body() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err.to_string(), "Request failed (502)");
}

#[test]
fn from_status_uses_generic_message_for_empty_body() {
    assert_eq!(ApiError::from_status(500, "").to_string(), "Request failed (500)");
}

#[test]
fn from_status_ignores_non_string_reason() {
    let err = ApiError::from_status(422, r#"{"message":{"detail":"x"}}"#);
    assert_eq!(err.to_string(), "Request failed (422)");
}

#[test]
fn non_status_errors_have_no_status() {
    assert_eq!(ApiError::EmptyBody.status(), None);
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "offline");
}

use super::*;

// =============================================================
// Requests
// =============================================================

#[test]
fn create_form_request_omits_missing_form_id() {
    let req = CreateFormRequest { tenant_id: "t1".to_owned(), form_name: "Contact".to_owned(), form_id: None };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "tenantId": "t1", "formName": "Contact" }));
}

#[test]
fn create_form_request_includes_form_id_when_present() {
    let req = CreateFormRequest {
        tenant_id: "t1".to_owned(),
        form_name: "Contact".to_owned(),
        form_id: Some("f1".to_owned()),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["formId"], "f1");
}

#[test]
fn chat_request_uses_camel_case_and_skips_absent_fields() {
    let req = ChatRequest {
        tenant_id: "t1".to_owned(),
        message: "hi".to_owned(),
        session_id: "s1".to_owned(),
        form_id: None,
        form_name: Some("Contact".to_owned()),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "tenantId": "t1", "message": "hi", "sessionId": "s1", "formName": "Contact" })
    );
}

// =============================================================
// Responses
// =============================================================

#[test]
fn form_metadata_accepts_numeric_version() {
    let meta: FormMetadata = serde_json::from_str(
        r#"{"tenantId":"t","formId":"f","formName":"n","version":3,"status":"Draft","updatedUtc":"2026-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(meta.version.as_deref(), Some("3"));
    assert_eq!(meta.status.as_deref(), Some("Draft"));
    assert_eq!(meta.updated_utc.as_deref(), Some("2026-01-01T00:00:00Z"));
}

#[test]
fn form_metadata_accepts_string_and_null_version() {
    let meta: FormMetadata = serde_json::from_str(r#"{"version":"1.2"}"#).unwrap();
    assert_eq!(meta.version.as_deref(), Some("1.2"));
    let meta: FormMetadata = serde_json::from_str(r#"{"version":null}"#).unwrap();
    assert!(meta.version.is_none());
}

#[test]
fn preview_model_defaults_missing_fields() {
    let preview: PreviewModel = serde_json::from_str("{}").unwrap();
    assert!(preview.metadata.is_none());
    assert!(preview.html.is_empty());
    assert!(preview.validation_messages.is_empty());
}

#[test]
fn chat_response_parses_executed_tools() {
    let resp: ChatResponse = serde_json::from_str(
        r#"{"sessionId":"s2","model":"gpt","assistantMessage":"done","executedTools":[{"toolName":"save_formspec","resultSummary":"Form saved"}]}"#,
    )
    .unwrap();
    assert_eq!(resp.session_id.as_deref(), Some("s2"));
    assert_eq!(resp.model.as_deref(), Some("gpt"));
    assert_eq!(resp.executed_tools.len(), 1);
    assert_eq!(resp.executed_tools[0].tool_name, "save_formspec");
}

#[test]
fn chat_response_treats_null_tools_as_empty() {
    let resp: ChatResponse = serde_json::from_str(r#"{"executedTools":null}"#).unwrap();
    assert!(resp.executed_tools.is_empty());
}

#[test]
fn api_info_version_label_falls_back_to_unknown() {
    let doc: ApiInfoDocument = serde_json::from_str(r#"{"info":{"version":"1.4.0"}}"#).unwrap();
    assert_eq!(doc.version_label(), "1.4.0");
    let doc: ApiInfoDocument = serde_json::from_str(r#"{"info":{}}"#).unwrap();
    assert_eq!(doc.version_label(), "unknown");
    let doc: ApiInfoDocument = serde_json::from_str("{}").unwrap();
    assert_eq!(doc.version_label(), "unknown");
}

#[test]
fn preview_model_treats_null_fields_as_empty() {
    let preview: PreviewModel = serde_json::from_str(
        r#"{"metadata":{"tenantId":null,"formId":"f1","formName":null,"version":2},"html":null,"validationMessages":null}"#,
    )
    .unwrap();
    assert!(preview.html.is_empty());
    assert!(preview.validation_messages.is_empty());
    let meta = preview.metadata.unwrap();
    assert!(meta.tenant_id.is_empty());
    assert_eq!(meta.form_id, "f1");
    assert!(meta.form_name.is_empty());
    assert_eq!(meta.version.as_deref(), Some("2"));
}

#[test]
fn form_document_treats_null_metadata_as_default() {
    let doc: FormDocument = serde_json::from_str(r#"{"metadata":null}"#).unwrap();
    assert_eq!(doc.metadata, FormMetadata::default());
}

#[test]
fn chat_response_accepts_tool_with_null_name() {
    let resp: ChatResponse =
        serde_json::from_str(r#"{"executedTools":[{"toolName":null,"resultSummary":"Form saved"}]}"#).unwrap();
    assert_eq!(resp.executed_tools.len(), 1);
    assert!(resp.executed_tools[0].tool_name.is_empty());
    assert_eq!(resp.executed_tools[0].result_summary.as_deref(), Some("Form saved"));
}

#[test]
fn api_info_accepts_numeric_version() {
    let doc: ApiInfoDocument = serde_json::from_str(r#"{"info":{"version":2}}"#).unwrap();
    assert_eq!(doc.version_label(), "2");
}

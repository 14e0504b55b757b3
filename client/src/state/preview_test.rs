use super::*;
use crate::state::status::Tone;

fn model(html: &str, messages: &[&str]) -> PreviewModel {
    PreviewModel {
        metadata: Some(FormMetadata { form_id: "f1".to_owned(), ..FormMetadata::default() }),
        html: html.to_owned(),
        validation_messages: messages.iter().map(|m| (*m).to_owned()).collect(),
    }
}

#[test]
fn preview_state_default_not_loaded() {
    let s = PreviewState::default();
    assert!(s.model.is_none());
    assert_eq!(s.status, StatusLine::muted("Preview not loaded."));
    assert!(s.frame_document().is_none());
    assert!(s.validation_messages().is_empty());
}

#[test]
fn begin_load_without_target_warns_only_when_asked() {
    let mut s = PreviewState::default();
    assert!(s.begin_load(None, false).is_none());
    assert_eq!(s.status.text, "Preview not loaded.");

    assert!(s.begin_load(None, true).is_none());
    assert_eq!(s.status, StatusLine::warning(MISSING_IDS_MESSAGE));
}

#[test]
fn begin_load_with_target_marks_loading() {
    let mut s = PreviewState::default();
    let target = s.begin_load(Some(("t".to_owned(), "f".to_owned())), true);
    assert_eq!(target, Some(("t".to_owned(), "f".to_owned())));
    assert_eq!(s.status, StatusLine::muted("Loading preview..."));
}

#[test]
fn finish_load_success_replaces_model() {
    let mut s = PreviewState::default();
    s.finish_load(Ok(model("<p>Hi</p>", &["Missing label"])), "10:42");
    assert_eq!(s.status, StatusLine::success("Preview refreshed at 10:42"));
    assert_eq!(s.metadata().map(|m| m.form_id.as_str()), Some("f1"));
    assert_eq!(s.validation_messages(), ["Missing label".to_owned()]);
    assert!(s.frame_document().unwrap().contains("<p>Hi</p>"));
}

#[test]
fn finish_load_failure_discards_model() {
    let mut s = PreviewState::default();
    s.finish_load(Ok(model("<p>Hi</p>", &[])), "10:42");
    s.finish_load(Err(ApiError::from_status(404, r#"{"error":"form not found"}"#)), "10:43");
    assert!(s.model.is_none());
    assert!(s.metadata().is_none());
    assert!(s.frame_document().is_none());
    assert_eq!(s.status.tone, Tone::Danger);
    assert_eq!(s.status.text, "Preview failed: form not found");
}

#[test]
fn frame_document_absent_for_blank_html() {
    let mut s = PreviewState::default();
    s.finish_load(Ok(model("  ", &[])), "10:42");
    assert!(s.frame_document().is_none());
    assert!(s.metadata().is_some());
}

#[test]
fn null_html_from_backend_keeps_model_without_frame() {
    let parsed = serde_json::from_str::<PreviewModel>(r#"{"metadata":{"formId":"f1","formName":null},"html":null}"#)
        .map_err(|e| ApiError::Decode(e.to_string()));
    let mut s = PreviewState::default();
    s.finish_load(parsed, "10:44");
    assert_eq!(s.status, StatusLine::success("Preview refreshed at 10:44"));
    assert!(s.frame_document().is_none());
    assert_eq!(s.metadata().map(|m| m.form_id.as_str()), Some("f1"));
}

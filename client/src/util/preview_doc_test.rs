use super::*;

fn link_count(doc: &str) -> usize {
    doc.matches("rel=\"stylesheet\"").count()
}

fn bootstrap_link() -> String {
    stylesheet_link(BOOTSTRAP_HREF)
}

// =============================================================
// Fragments
// =============================================================

#[test]
fn fragment_is_wrapped_in_shell_with_one_stylesheet() {
    let doc = build_preview_document("<form><input name=\"email\"></form>");
    assert!(doc.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
    assert!(doc.contains("<body><form><input name=\"email\"></form></body></html>"));
    assert_eq!(link_count(&doc), 1);
    assert!(doc.contains(BOOTSTRAP_HREF));
}

#[test]
fn header_element_is_not_a_document_tag() {
    assert!(!has_document_tags("<header><h1>Contact</h1></header>"));
    let doc = build_preview_document("<header>Contact</header>");
    assert!(doc.contains("<body><header>Contact</header></body>"));
}

#[test]
fn document_tags_are_case_insensitive() {
    assert!(has_document_tags("<HTML><BODY>x</BODY></HTML>"));
    assert!(has_document_tags("<html lang=\"en\">"));
    assert!(has_document_tags("<body\n class=\"p-3\">"));
    assert!(!has_document_tags("<div>html body</div>"));
}

#[test]
fn body_inside_script_is_not_a_document_tag() {
    let html = "<form id=\"f\"></form><script>const shell = \"<body>\";</script>";
    assert!(!has_document_tags(html));
    let doc = build_preview_document(html);
    assert!(doc.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
    assert_eq!(link_count(&doc), 1);
}

#[test]
fn body_inside_comment_is_not_a_document_tag() {
    assert!(!has_document_tags("<!-- wrap in <body> later --><form></form>"));
    assert!(has_document_tags("<!-- page --><body><form></form></body>"));
}

// =============================================================
// Full documents
// =============================================================

#[test]
fn document_gets_link_appended_to_head() {
    let html = "<!DOCTYPE html><html><head><title>T</title></head><body>x</body></html>";
    let doc = build_preview_document(html);
    assert_eq!(doc, format!("<html><head><title>T</title>{}</head><body>x</body></html>", bootstrap_link()));
}

#[test]
fn document_with_bootstrap_link_in_head_keeps_one_link() {
    let html = "<html><head><link rel=\"stylesheet\" href=\"/css/bootstrap.css\"></head><body></body></html>";
    let doc = build_preview_document(html);
    assert_eq!(link_count(&doc), 1);
    assert!(!doc.contains(BOOTSTRAP_HREF));
}

#[test]
fn bootstrap_link_in_body_only_still_gets_head_link() {
    let html = "<html><head></head><body><link rel=\"stylesheet\" href=\"/css/bootstrap.css\">x</body></html>";
    let doc = build_preview_document(html);
    assert_eq!(link_count(&doc), 2);
    assert!(doc.contains(&format!("<head>{}</head>", bootstrap_link())));
}

#[test]
fn unrelated_stylesheet_still_gets_bootstrap() {
    let html = "<html><head><link rel=\"stylesheet\" href=\"/site.css\"></head><body></body></html>";
    let doc = build_preview_document(html);
    assert_eq!(link_count(&doc), 2);
    assert!(doc.contains(BOOTSTRAP_HREF));
}

#[test]
fn document_without_head_gets_one() {
    let doc = build_preview_document("<html lang=\"en\"><body>x</body></html>");
    assert_eq!(doc, format!("<html lang=\"en\"><head>{}</head><body>x</body></html>", bootstrap_link()));
}

#[test]
fn body_only_document_gets_head_before_body() {
    let doc = build_preview_document("<body>x</body>");
    assert_eq!(doc, format!("<html><head>{}</head><body>x</body></html>", bootstrap_link()));
}

#[test]
fn unclosed_head_gets_link_at_end_of_head() {
    let doc = build_preview_document("<html><head><title>T</title><body>x</body></html>");
    assert_eq!(doc, format!("<html><head><title>T</title>{}</head><body>x</body></html>", bootstrap_link()));
}

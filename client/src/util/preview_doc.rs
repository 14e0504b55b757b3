//! Standalone document builder for the sandboxed preview frame.
//!
//! Assistant output is either a fragment (`<form>…</form>`) or a full
//! document. Fragments are placed into a minimal shell. Documents are parsed
//! with `scraper` and get the Bootstrap stylesheet appended to `<head>` unless
//! the head already links one.

#[cfg(test)]
#[path = "preview_doc_test.rs"]
mod preview_doc_test;

use scraper::{Html, Node, Selector};

pub const BOOTSTRAP_HREF: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

const ROOT_TAGS: [&str; 3] = ["html", "head", "body"];

/// `<link>` element for a stylesheet at `href`.
#[must_use]
pub fn stylesheet_link(href: &str) -> String {
    format!(r#"<link href="{href}" rel="stylesheet">"#)
}

/// Does `html` contain an opening `<html>`, `<head>` or `<body>` tag?
///
/// Tags that only appear inside comments or `<script>`/`<style>` text do not
/// count.
#[must_use]
pub fn has_document_tags(html: &str) -> bool {
    let markup = strip_raw_text(html).to_ascii_lowercase();
    ROOT_TAGS.iter().any(|tag| has_open_tag(&markup, tag))
}

/// Wrap or patch assistant HTML into a document ready for `srcdoc`.
#[must_use]
pub fn build_preview_document(html: &str) -> String {
    if !has_document_tags(html) {
        let link = stylesheet_link(BOOTSTRAP_HREF);
        return format!(
            r#"<!DOCTYPE html><html lang="en"><head><meta charset="UTF-8"><meta name="viewport" content="width=device-width, initial-scale=1">{link}</head><body>{html}</body></html>"#
        );
    }

    let (Ok(head_sel), Ok(head_link_sel), Ok(link_sel)) = (
        Selector::parse("head"),
        Selector::parse(r#"head link[href*="bootstrap"]"#),
        Selector::parse("link"),
    ) else {
        return html.to_owned();
    };

    let mut doc = Html::parse_document(html);
    if doc.select(&head_link_sel).next().is_none() {
        let link_source = Html::parse_fragment(&stylesheet_link(BOOTSTRAP_HREF));
        let link = link_source.select(&link_sel).next().map(|el| el.value().clone());
        let head_id = doc.select(&head_sel).next().map(|head| head.id());
        if let (Some(link), Some(head_id)) = (link, head_id) {
            if let Some(mut head) = doc.tree.get_mut(head_id) {
                head.append(Node::Element(link));
            }
        }
    }
    doc.root_element().html()
}

/// Source with comment bodies and `<script>`/`<style>` text removed, so only
/// real markup remains for tag detection.
fn strip_raw_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut markup = html.to_owned();
    for node in fragment.tree.nodes() {
        let text: &str = match node.value() {
            Node::Comment(comment) => &**comment,
            Node::Text(text)
                if node
                    .parent()
                    .and_then(|p| p.value().as_element())
                    .is_some_and(|el| matches!(el.name(), "script" | "style")) =>
            {
                &**text
            }
            _ => continue,
        };
        if text.contains('<') {
            markup = markup.replacen(text, "", 1);
        }
    }
    markup
}

/// Is there a `<tag …>` opening tag? The tag name must be followed by
/// whitespace, `/` or `>` so `<header>` does not match `head`.
fn has_open_tag(lower: &str, tag: &str) -> bool {
    let needle = format!("<{tag}");
    lower.match_indices(&needle).any(|(start, _)| {
        lower
            .as_bytes()
            .get(start + needle.len())
            .is_some_and(|b| b.is_ascii_whitespace() || *b == b'>' || *b == b'/')
    })
}

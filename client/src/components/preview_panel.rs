//! Sandboxed preview of the assistant-generated form.

use leptos::prelude::*;

use crate::pages::workspace_actions::{self as actions, Workspace};
use crate::state::preview::PreviewState;

/// Sandbox flags for the preview frame. Scripts stay disabled so generated
/// markup cannot reach the host page; same-origin keeps the document
/// readable for capture.
pub const PREVIEW_SANDBOX: &str = "allow-forms allow-same-origin";

#[component]
pub fn PreviewPanel() -> impl IntoView {
    let ws = Workspace::from_context();
    let preview = ws.preview;

    let status_class = move || format!("small {}", preview.with(|p| p.status.tone.class()));

    view! {
        <section class="card preview-panel">
            <div class="card-header d-flex align-items-center gap-2">
                <span class="fw-semibold">"Preview"</span>
                <span class=status_class>{move || preview.with(|p| p.status.text.clone())}</span>
                <span class="me-auto"></span>
                <button
                    type="button"
                    class="btn btn-outline-secondary btn-sm"
                    on:click=move |_| actions::load_preview(ws, true)
                >
                    "Refresh"
                </button>
                <button type="button" class="btn btn-outline-secondary btn-sm" on:click=move |_| actions::capture_preview(ws)>
                    "Capture"
                </button>
            </div>
            <div class="card-body preview-container">
                {move || match preview.with(PreviewState::frame_document) {
                    Some(document) => {
                        view! {
                            <iframe
                                class="preview-frame"
                                title="Form preview"
                                referrerpolicy="no-referrer"
                                sandbox=PREVIEW_SANDBOX
                                srcdoc=document
                            ></iframe>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div class="text-muted">"No HTML available yet. Create a page or send a chat request."</div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

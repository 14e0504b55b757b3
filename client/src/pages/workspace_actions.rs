//! Event handlers for the workspace page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each handler validates synchronously against the current state, then
//! spawns one async task that calls the copilot API and folds the result back
//! through the pure transition methods in `crate::state`. Failures end up in a
//! status line or the chat transcript; nothing propagates out of a handler.

#[cfg(test)]
#[path = "workspace_actions_test.rs"]
mod workspace_actions_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::chat::ChatState;
use crate::state::preview::PreviewState;
use crate::state::session::SessionState;
use crate::state::status::{StatusLine, StatusState};
use crate::util::{capture, host_config, time};

/// The page's shared state signals, bundled so handlers can be passed around
/// as a single `Copy` value.
#[derive(Clone, Copy)]
pub struct Workspace {
    pub session: RwSignal<SessionState>,
    pub chat: RwSignal<ChatState>,
    pub preview: RwSignal<PreviewState>,
    pub status: RwSignal<StatusState>,
}

impl Workspace {
    /// Collect the signals provided by [`crate::app::App`].
    pub fn from_context() -> Self {
        Self {
            session: expect_context::<RwSignal<SessionState>>(),
            chat: expect_context::<RwSignal<ChatState>>(),
            preview: expect_context::<RwSignal<PreviewState>>(),
            status: expect_context::<RwSignal<StatusState>>(),
        }
    }
}

/// One-time browser initialization: identities, default API base, and the
/// first API version probe.
pub fn initialize(ws: Workspace) {
    let default_base = host_config::default_api_base();
    ws.session.update(|s| {
        s.ensure_identities();
        if s.api_base_url.is_empty() {
            s.set_api_base_url(&default_base);
        }
    });
    refresh_api_version(ws);
}

/// Handle an edit of the API base URL input.
pub fn set_api_base_url(ws: Workspace, raw: &str) {
    let feedback = ws.session.try_update(|s| s.set_api_base_url(raw)).unwrap_or_default();
    ws.status.update(|s| s.feedback = feedback);
    refresh_api_version(ws);
}

/// Probe `GET /api/chat/openapi` for the selected base URL.
pub fn refresh_api_version(ws: Workspace) {
    let Some(base) = ws.session.try_update(SessionState::begin_version_check).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        let client = ws.session.with_untracked(SessionState::api_client);
        let result = client.get_api_info().await;
        if let Err(e) = &result {
            leptos::logging::warn!("api version check against {base} failed: {e}");
        }
        let feedback = ws.session.try_update(|s| s.finish_version_check(&base, result)).flatten();
        if let Some(feedback) = feedback {
            ws.status.update(|s| s.feedback = feedback);
        }
    });
}

/// Create (or re-register) the selected form, adopt the canonical ids, then
/// reload the preview.
pub fn create_form(ws: Workspace) {
    let request = match ws.session.with_untracked(SessionState::create_form_request) {
        Ok(request) => request,
        Err(message) => {
            ws.status.update(|s| s.connection = StatusLine::danger(message));
            return;
        }
    };
    ws.status.update(|s| s.connection = StatusLine::muted("Creating form..."));

    leptos::task::spawn_local(async move {
        let client = ws.session.with_untracked(SessionState::api_client);
        match client.create_form(&request).await {
            Ok(document) => {
                ws.session.update(|s| s.adopt_form_metadata(&document.metadata));
                ws.status.update(|s| s.form_created(&document.metadata));
                load_preview_task(ws, false).await;
            }
            Err(e) => {
                leptos::logging::warn!("create form failed: {e}");
                ws.status.update(|s| s.connection = StatusLine::danger(format!("Create failed: {e}")));
            }
        }
    });
}

/// Reload the preview for the selected tenant/form.
pub fn load_preview(ws: Workspace, show_errors: bool) {
    leptos::task::spawn_local(load_preview_task(ws, show_errors));
}

async fn load_preview_task(ws: Workspace, show_errors: bool) {
    let target = ws.session.with_untracked(SessionState::preview_target);
    let Some((tenant_id, form_id)) = ws.preview.try_update(|p| p.begin_load(target, show_errors)).flatten() else {
        return;
    };
    let client = ws.session.with_untracked(SessionState::api_client);
    let result = client.get_preview(&tenant_id, &form_id).await;
    if let Err(e) = &result {
        leptos::logging::warn!("preview {tenant_id}/{form_id} failed: {e}");
    }
    let refreshed_at = time::format_clock(time::now_ms());
    ws.preview.update(|p| p.finish_load(result, &refreshed_at));
}

/// Submit `draft` to the copilot. Returns `true` when the message was
/// accepted, in which case the caller clears its input.
pub fn submit_chat(ws: Workspace, draft: &str) -> bool {
    let tenant_id = ws.session.with_untracked(|s| s.tenant_id.clone());
    let accepted = ws
        .chat
        .try_update(|c| c.begin_submission(&tenant_id, draft, time::now_ms()));
    let Some(Ok(content)) = accepted else {
        return false;
    };
    let request = ws.session.with_untracked(|s| s.chat_request(&content));

    leptos::task::spawn_local(async move {
        let client = ws.session.with_untracked(SessionState::api_client);
        match client.send_chat(&request).await {
            Ok(response) => {
                ws.session.update(|s| s.apply_chat_response(&response));
                let saved = ws
                    .chat
                    .try_update(|c| c.complete(&response, time::now_ms()))
                    .unwrap_or(false);
                if ws.session.with_untracked(|s| should_reload_preview(saved, s)) {
                    load_preview_task(ws, false).await;
                }
            }
            Err(e) => fail_chat(ws, &e),
        }
    });
    true
}

/// A chat reply triggers a preview reload only when it saved the form and
/// the session still points at a tenant/form pair.
fn should_reload_preview(saved: bool, session: &SessionState) -> bool {
    saved && session.has_form_context()
}

fn fail_chat(ws: Workspace, error: &ApiError) {
    leptos::logging::warn!("chat request failed: {error}");
    ws.chat.update(|c| c.fail(error, time::now_ms()));
}

/// Reset the transcript and hide the error banner.
pub fn clear_chat(ws: Workspace) {
    ws.chat.update(ChatState::clear);
}

/// Rasterize the preview frame and download it as PNG.
pub fn capture_preview(ws: Workspace) {
    let target = match capture::prepare_capture() {
        Ok(target) => target,
        Err(e) => {
            ws.status.update(|s| s.connection = e.status_line());
            return;
        }
    };
    ws.status.update(|s| s.connection = StatusLine::muted("Capturing preview..."));

    leptos::task::spawn_local(async move {
        let line = match capture::render_capture(target).await {
            Ok(()) => StatusLine::success("Preview captured."),
            Err(e) => {
                leptos::logging::warn!("preview capture failed: {e}");
                e.status_line()
            }
        };
        ws.status.update(|s| s.connection = line);
    });
}

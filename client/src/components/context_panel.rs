//! Connection panel: API base URL, tenant/form selection, and form lifecycle
//! buttons.

use leptos::prelude::*;

use crate::net::api::normalize_base_url;
use crate::pages::workspace_actions::{self as actions, Workspace};
use crate::state::status::StatusState;

fn trimmed(raw: &str) -> String {
    raw.trim().to_owned()
}

/// Text input mirroring a normalized session field.
///
/// The input keeps the operator's raw text while typing; it is only
/// overwritten when the session value changes to something the raw text does
/// not normalize to (e.g. canonical ids adopted after a create).
#[component]
fn ContextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    normalize: fn(&str) -> String,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let raw = RwSignal::new(String::new());

    Effect::new(move || {
        let current = value.get();
        if normalize(&raw.get_untracked()) != current {
            raw.set(current);
        }
    });

    view! {
        <div class="mb-2">
            <label class="form-label small mb-1" for=id>
                {label}
            </label>
            <input
                id=id
                class="form-control form-control-sm"
                type="text"
                placeholder=placeholder
                prop:value=move || raw.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    raw.set(text.clone());
                    on_change.run(text);
                }
            />
        </div>
    }
}

#[component]
pub fn ContextPanel() -> impl IntoView {
    let ws = Workspace::from_context();
    let session = ws.session;
    let status = expect_context::<RwSignal<StatusState>>();

    let status_class = move || format!("fw-semibold small {}", status.with(|s| s.connection.tone.class()));

    view! {
        <section class="card mb-3 context-panel">
            <div class="card-body">
                <h2 class="h6 mb-3">"Form context"</h2>
                <ContextField
                    id="apiBaseUrl"
                    label="API base URL"
                    placeholder="https://copilot.example.com"
                    value=Signal::derive(move || session.with(|s| s.api_base_url.clone()))
                    normalize=normalize_base_url
                    on_change=move |text: String| actions::set_api_base_url(ws, &text)
                />
                <div class="form-text mb-2">{move || status.with(|s| s.feedback.clone())}</div>
                <ContextField
                    id="tenantId"
                    label="Tenant ID"
                    value=Signal::derive(move || session.with(|s| s.tenant_id.clone()))
                    normalize=trimmed
                    on_change=move |text: String| session.update(|s| s.set_tenant_id(&text))
                />
                <ContextField
                    id="formId"
                    label="Form ID"
                    placeholder="optional"
                    value=Signal::derive(move || session.with(|s| s.form_id.clone()))
                    normalize=trimmed
                    on_change=move |text: String| session.update(|s| s.set_form_id(&text))
                />
                <ContextField
                    id="formName"
                    label="Page name"
                    value=Signal::derive(move || session.with(|s| s.form_name.clone()))
                    normalize=trimmed
                    on_change=move |text: String| session.update(|s| s.set_form_name(&text))
                />
                <div class="d-flex gap-2 my-2">
                    <button type="button" class="btn btn-primary btn-sm" on:click=move |_| actions::create_form(ws)>
                        "Create form"
                    </button>
                    <button
                        type="button"
                        class="btn btn-outline-secondary btn-sm"
                        on:click=move |_| actions::load_preview(ws, true)
                    >
                        "Load preview"
                    </button>
                </div>
                <div class=status_class>{move || status.with(|s| s.connection.text.clone())}</div>
            </div>
        </section>
    }
}

//! Header bar with version and session badges.

use leptos::prelude::*;

use crate::state::session::SessionState;

pub const FRONTEND_VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn SessionBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <header class="session-bar d-flex flex-wrap align-items-center gap-3 mb-3">
            <h1 class="h5 mb-0 me-auto">"Form Copilot"</h1>
            <span class="small text-muted">
                "Frontend " <span class="badge text-bg-light">{FRONTEND_VERSION}</span>
            </span>
            <span class="small text-muted">
                "API " <span class="badge text-bg-light">{move || session.with(|s| s.api_version.label().to_owned())}</span>
            </span>
            <span class="small text-muted">
                "Session " <code class="session-bar__id">{move || session.with(|s| s.session_id.clone())}</code>
            </span>
        </header>
    }
}

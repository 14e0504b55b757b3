//! Validation messages reported for the loaded preview.

use leptos::prelude::*;

use crate::state::preview::PreviewState;

/// Hidden when the current preview has no validation messages.
#[component]
pub fn ValidationPanel() -> impl IntoView {
    let preview = expect_context::<RwSignal<PreviewState>>();
    let messages = move || preview.with(|p| p.validation_messages().to_vec());

    view! {
        <div class="alert alert-warning validation-panel" class:d-none=move || messages().is_empty()>
            <div class="fw-semibold mb-1">"Validation"</div>
            <ul class="mb-0">
                {move || messages().into_iter().map(|message| view! { <li>{message}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

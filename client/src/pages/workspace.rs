//! Workspace page: the single screen of the copilot client.
//!
//! ARCHITECTURE
//! ============
//! The page only lays out panels and kicks off browser initialization; all
//! handler logic lives in `workspace_actions`.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::context_panel::ContextPanel;
use crate::components::metadata_panel::MetadataPanel;
use crate::components::preview_panel::PreviewPanel;
use crate::components::session_bar::SessionBar;
use crate::components::validation_panel::ValidationPanel;
use crate::pages::workspace_actions::{self as actions, Workspace};

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let ws = Workspace::from_context();

    // Effects only run in the browser, so identities and the API probe are
    // never produced during server rendering.
    Effect::new(move || actions::initialize(ws));

    view! {
        <main class="container-fluid py-3 workspace">
            <SessionBar/>
            <div class="row g-3">
                <div class="col-lg-4">
                    <ContextPanel/>
                    <ChatPanel/>
                </div>
                <div class="col-lg-8">
                    <MetadataPanel/>
                    <ValidationPanel/>
                    <PreviewPanel/>
                </div>
            </div>
        </main>
    }
}

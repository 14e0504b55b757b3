//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::workspace::WorkspacePage;
use crate::state::{chat::ChatState, preview::PreviewState, session::SessionState, status::StatusState};
use crate::util::host_config::API_BASE_META_NAME;
use crate::util::preview_doc::BOOTSTRAP_HREF;

/// Page-level rasterizer used by preview capture.
pub const HTML2CANVAS_SRC: &str = "https://cdn.jsdelivr.net/npm/html2canvas@1.4.1/dist/html2canvas.min.js";

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is the host's default copilot API base URL, exposed to the
/// client through a meta tag.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META_NAME content=api_base/>
                <link rel="stylesheet" href=BOOTSTRAP_HREF/>
                <script src=HTML2CANVAS_SRC></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(ChatState::default()));
    provide_context(RwSignal::new(PreviewState::default()));
    provide_context(RwSignal::new(StatusState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/formpilot.css"/>
        <Title text="Form Copilot"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WorkspacePage/>
            </Routes>
        </Router>
    }
}

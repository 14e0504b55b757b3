//! Copilot chat panel: transcript, executed tools, and the message composer.

use leptos::prelude::*;

use crate::pages::workspace_actions::{self as actions, Workspace};
use crate::state::chat::{ChatMessage, tool_summary};
use crate::util::time;

/// Chat panel showing the transcript and an input for new messages.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let ws = Workspace::from_context();
    let session = ws.session;
    let chat = ws.chat;

    let draft = RwSignal::new(String::new());
    let log_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = log_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        if actions::submit_chat(ws, &draft.get_untracked()) {
            draft.set(String::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || {
        let tenant_id = session.with(|s| s.tenant_id.clone());
        draft.with(|d| chat.with(|c| c.can_send(&tenant_id, d)))
    };
    let sending = move || chat.with(|c| c.sending);

    view! {
        <section class="card chat-panel">
            <div class="card-header d-flex align-items-center gap-2">
                <span class="fw-semibold me-auto">"Copilot chat"</span>
                <span class="badge text-bg-secondary">{move || session.with(|s| s.model_label().to_owned())}</span>
                <button type="button" class="btn btn-link btn-sm p-0" on:click=move |_| actions::clear_chat(ws)>
                    "Clear"
                </button>
            </div>
            <div class="card-body">
                <div class="chat-log" node_ref=log_ref>
                    {move || {
                        let messages = chat.with(|c| c.messages.clone());
                        if messages.is_empty() {
                            return view! {
                                <div class="chat-message">
                                    <div class="chat-message__role">"Assistant"</div>
                                    <div class="text-muted">
                                        "Start chatting to see how the copilot uses the backend tools."
                                    </div>
                                </div>
                            }
                                .into_any();
                        }
                        messages
                            .into_iter()
                            .map(|message| view! { <ChatEntry message=message/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
                <Show when=move || chat.with(|c| c.error.is_some())>
                    <div class="alert alert-danger py-1 px-2 small mt-2" role="alert">
                        {move || chat.with(|c| c.error.clone().unwrap_or_default())}
                    </div>
                </Show>
                <form class="chat-form mt-2" on:submit=on_submit>
                    <textarea
                        class="form-control form-control-sm"
                        rows="3"
                        placeholder="Describe the form you want..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    ></textarea>
                    <div class="d-flex align-items-center gap-2 mt-2">
                        <div class="form-text me-auto">{move || session.with(|s| s.chat_hint())}</div>
                        <span
                            class="spinner-border spinner-border-sm"
                            class:d-none=move || !sending()
                            role="status"
                        ></span>
                        <button type="submit" class="btn btn-primary btn-sm" disabled=move || !can_send()>
                            "Send"
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}

/// One transcript entry with its executed tools.
#[component]
fn ChatEntry(message: ChatMessage) -> impl IntoView {
    let ChatMessage { role, content, timestamp, tools, .. } = message;

    let tools_view = (!tools.is_empty()).then(|| {
        let items = tools
            .iter()
            .map(|tool| {
                let name = tool.tool_name.clone();
                let summary = tool_summary(tool).to_owned();
                view! {
                    <li>
                        <span class="fw-semibold">{name}</span>
                        ": "
                        {summary}
                    </li>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="chat-tools">
                <div class="fw-semibold mb-1">"Executed tools"</div>
                <ul>{items}</ul>
            </div>
        }
    });

    view! {
        <div class=format!("chat-message {}", role.class())>
            <div class="d-flex justify-content-between align-items-center mb-1">
                <div class="chat-message__role">{role.label()}</div>
                <div class="small text-muted">{time::format_clock(timestamp)}</div>
            </div>
            <div class="chat-message__body">{content}</div>
            {tools_view}
        </div>
    }
}

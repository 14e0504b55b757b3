//! Form metadata summary for the loaded preview.

#[cfg(test)]
#[path = "metadata_panel_test.rs"]
mod metadata_panel_test;

use leptos::prelude::*;

use crate::net::types::FormMetadata;
use crate::state::preview::PreviewState;
use crate::util::time;

/// Label/value rows shown for `metadata`; blanks render as `—`.
pub fn metadata_entries(metadata: &FormMetadata) -> Vec<(&'static str, String)> {
    let or_dash = |value: Option<&str>| {
        value
            .filter(|v| !v.is_empty())
            .map_or_else(|| "—".to_owned(), str::to_owned)
    };
    vec![
        ("Tenant", or_dash(Some(metadata.tenant_id.as_str()))),
        ("Form ID", or_dash(Some(metadata.form_id.as_str()))),
        ("Form name", or_dash(Some(metadata.form_name.as_str()))),
        ("Version", or_dash(metadata.version.as_deref())),
        ("Status", or_dash(metadata.status.as_deref())),
        ("Updated", time::format_date(metadata.updated_utc.as_deref())),
    ]
}

#[component]
pub fn MetadataPanel() -> impl IntoView {
    let preview = expect_context::<RwSignal<PreviewState>>();

    view! {
        <div class="metadata-panel mb-3">
            {move || {
                let entries = preview.with(|p| p.metadata().map(metadata_entries));
                let Some(entries) = entries else {
                    return view! {
                        <div class="text-muted small">"Form metadata will show up after loading the preview."</div>
                    }
                        .into_any();
                };
                entries
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="metadata-item">
                                <div class="label">{label}</div>
                                <div class="value">{value}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

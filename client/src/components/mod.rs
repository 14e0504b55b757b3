//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the workspace panels while reading/writing shared state
//! from Leptos context providers.

pub mod chat_panel;
pub mod context_panel;
pub mod metadata_panel;
pub mod preview_panel;
pub mod session_bar;
pub mod validation_panel;

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod capture;
pub mod host_config;
pub mod ids;
pub mod preview_doc;
pub mod time;

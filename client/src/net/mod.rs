//! Networking modules for the copilot HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the four REST calls, `types` defines the wire schema, and
//! `error` carries operator-facing failure text.

pub mod api;
pub mod error;
pub mod types;

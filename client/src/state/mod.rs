//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `chat`, `preview`, `status`) so
//! individual components can depend on small focused models. Each struct is
//! plain data with transition methods; components hold them in `RwSignal`s
//! provided as context.

pub mod chat;
pub mod preview;
pub mod session;
pub mod status;

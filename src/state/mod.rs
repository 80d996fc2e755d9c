//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs provided as `RwSignal` contexts so the
//! transition logic stays testable without a browser.

pub mod notifications;

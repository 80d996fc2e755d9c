//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form submission, redirects,
//! stream startup) and delegates rendering details to `components`.

pub mod login;
pub mod register;
pub mod welcome;

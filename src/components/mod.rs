//! Render-only components shared across pages.

pub mod notification_bar;

//! Networking modules for HTTP calls and the notification stream.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the login/registration REST calls and `notification_client`
//! manages the WebSocket lifecycle, including the reconnect loop.

pub mod api;
pub mod notification_client;

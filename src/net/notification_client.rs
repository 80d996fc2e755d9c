//! Reconnecting WebSocket client for the notification stream.
//!
//! Manages the connection lifecycle: connect, feed incoming text messages
//! into [`NotificationState`], and reconnect after a policy-controlled delay
//! whenever the stream closes, for any reason. Stream failures never reach
//! the user; they are logged and absorbed by the retry loop.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(test)]
#[path = "notification_client_test.rs"]
mod notification_client_test;

use std::time::Duration;

#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "hydrate")]
use crate::state::notifications::NotificationState;

/// Delay between reconnect attempts under the default policy, in
/// milliseconds.
pub const RECONNECT_DELAY_MS: u64 = 3000;

/// Reconnect policy for the notification stream.
///
/// The default reproduces the long-standing behavior: retry forever at a
/// fixed three-second interval, with no backoff growth and no distinction
/// between close reasons. The knobs exist so a deployment can cap attempts
/// or grow the delay instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay before the first reconnect attempt.
    pub initial_delay: Duration,
    /// Upper bound on the per-attempt delay.
    pub max_delay: Duration,
    /// Factor applied to the delay after each failed attempt. `1` keeps the
    /// interval fixed.
    pub backoff_multiplier: u32,
    /// Give up after this many attempts; `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(RECONNECT_DELAY_MS),
            max_delay: Duration::from_millis(RECONNECT_DELAY_MS),
            backoff_multiplier: 1,
            max_attempts: None,
        }
    }
}

impl RetryPolicy {
    /// Delay to wait before reconnect attempt `attempt` (1-based).
    ///
    /// Returns `None` once `max_attempts` is exhausted.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Option<Duration> {
        if let Some(max) = self.max_attempts
            && attempt > max
        {
            return None;
        }
        // Exponent capped well past the point where the delay saturates.
        let exponent = attempt.saturating_sub(1).min(16);
        let factor = self.backoff_multiplier.saturating_pow(exponent);
        let delay = self.initial_delay.saturating_mul(factor.max(1));
        Some(delay.min(self.max_delay))
    }
}

/// Build the notification stream URL for the page's host.
#[must_use]
pub fn notification_ws_url(secure: bool, host: &str) -> String {
    let scheme = if secure { "wss" } else { "ws" };
    format!("{scheme}://{host}/ws/notifications")
}

/// Spawn the notification stream lifecycle as a local async task.
///
/// The loop runs until the retry policy gives up, which under the default
/// policy is never; the browser discards it on page teardown.
#[cfg(feature = "hydrate")]
pub fn spawn_notification_client(state: RwSignal<NotificationState>) {
    leptos::task::spawn_local(notification_client_loop(state, RetryPolicy::default()));
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn notification_client_loop(state: RwSignal<NotificationState>, policy: RetryPolicy) {
    let mut attempt: u32 = 0;
    loop {
        state.update(NotificationState::mark_connecting);

        // Derive the stream target from the page location at connect time.
        let location = web_sys::window().map(|w| w.location());
        let secure = location
            .as_ref()
            .and_then(|l| l.protocol().ok())
            .is_some_and(|p| p == "https:");
        let host = location
            .and_then(|l| l.host().ok())
            .unwrap_or_else(|| "localhost:8000".to_owned());
        let url = notification_ws_url(secure, &host);

        match connect_and_listen(&url, state).await {
            Ok(()) => leptos::logging::log!("notification stream closed"),
            Err(e) => leptos::logging::warn!("notification stream error: {e}"),
        }

        state.update(NotificationState::mark_disconnected);

        attempt += 1;
        let Some(delay) = policy.delay_for_attempt(attempt) else {
            leptos::logging::warn!("notification stream: giving up after {attempt} attempts");
            return;
        };
        gloo_timers::future::sleep(delay).await;
    }
}

/// Connect and feed incoming messages into state until disconnect.
///
/// The client never sends anything; the stream is server-push only.
#[cfg(feature = "hydrate")]
async fn connect_and_listen(url: &str, state: RwSignal<NotificationState>) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let mut ws = WebSocket::open(url).map_err(|e| e.to_string())?;

    state.update(NotificationState::mark_connected);
    leptos::logging::log!("notification stream connected");

    while let Some(msg) = ws.next().await {
        match msg {
            Ok(Message::Text(text)) => state.update(|s| s.record_message(text)),
            Ok(Message::Bytes(_)) => {}
            Err(e) => {
                leptos::logging::warn!("notification stream recv error: {e}");
                break;
            }
        }
    }

    Ok(())
}

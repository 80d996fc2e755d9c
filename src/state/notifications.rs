//! Notification feed state for the welcome page.
//!
//! DESIGN
//! ======
//! The stream client and the notification bar share this one struct via an
//! `RwSignal` context. All mutation goes through named transition methods so
//! the read/unread rules are auditable and testable in plain unit tests.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Bar label shown while at least one message is unread.
pub const UNREAD_LABEL: &str = "🔔 You have new notifications!";
/// Bar label shown when everything has been read.
pub const NO_UNREAD_LABEL: &str = "📭 No unread notifications.";

/// WebSocket connection lifecycle for the notification stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; closed and waiting for the next reconnect attempt.
    #[default]
    Disconnected,
    /// Handshake in progress.
    Connecting,
    /// Stream is open and delivering messages.
    Connected,
}

/// State of the notification feed.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    /// Current stream lifecycle state.
    pub connection_status: ConnectionStatus,
    /// One-time latch: the bar stays hidden until the first message arrives.
    pub bar_visible: bool,
    /// Whether the message log panel is expanded.
    pub details_visible: bool,
    /// True once a message arrived that the user has not acknowledged by
    /// opening the panel.
    pub unread: bool,
    /// Received messages, newest first. Never trimmed, so a long-lived
    /// session grows this without bound.
    pub messages: Vec<String>,
}

impl NotificationState {
    /// Record an incoming message: prepend to the log, reveal the bar, and
    /// flag it unread.
    pub fn record_message(&mut self, message: String) {
        self.messages.insert(0, message);
        self.bar_visible = true;
        self.unread = true;
    }

    /// Flip the details panel. Opening it acknowledges every pending
    /// message; closing it leaves the unread flag alone.
    pub fn toggle_details(&mut self) {
        self.details_visible = !self.details_visible;
        if self.details_visible {
            self.unread = false;
        }
    }

    /// A connect attempt is starting.
    pub fn mark_connecting(&mut self) {
        self.connection_status = ConnectionStatus::Connecting;
    }

    /// The stream handshake completed. Messages and the unread flag survive
    /// reconnects untouched.
    pub fn mark_connected(&mut self) {
        self.connection_status = ConnectionStatus::Connected;
    }

    /// The stream closed, for any reason; the client will schedule a
    /// reconnect.
    pub fn mark_disconnected(&mut self) {
        self.connection_status = ConnectionStatus::Disconnected;
    }

    /// Bar label for the current read state.
    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.unread { UNREAD_LABEL } else { NO_UNREAD_LABEL }
    }
}

use super::*;

// =============================================================
// NotificationState defaults
// =============================================================

#[test]
fn default_state_is_disconnected_and_empty() {
    let state = NotificationState::default();
    assert_eq!(state.connection_status, ConnectionStatus::Disconnected);
    assert!(!state.bar_visible);
    assert!(!state.details_visible);
    assert!(!state.unread);
    assert!(state.messages.is_empty());
}

#[test]
fn default_label_is_neutral() {
    let state = NotificationState::default();
    assert_eq!(state.label(), NO_UNREAD_LABEL);
}

// =============================================================
// record_message
// =============================================================

#[test]
fn record_message_reveals_bar_and_sets_unread() {
    let mut state = NotificationState::default();
    state.record_message("New user registered: a@b.com".to_owned());
    assert!(state.bar_visible);
    assert!(state.unread);
    assert_eq!(state.label(), UNREAD_LABEL);
}

#[test]
fn messages_are_kept_newest_first() {
    let mut state = NotificationState::default();
    state.record_message("first".to_owned());
    state.record_message("second".to_owned());
    state.record_message("third".to_owned());
    assert_eq!(state.messages, vec!["third", "second", "first"]);
}

#[test]
fn unread_persists_across_a_burst_of_messages() {
    let mut state = NotificationState::default();
    for n in 1..=5 {
        state.record_message(format!("message {n}"));
        assert!(state.unread, "unread must hold after message {n}");
    }
    assert_eq!(state.messages.len(), 5);
}

// =============================================================
// toggle_details
// =============================================================

#[test]
fn opening_details_clears_unread_and_resets_label() {
    let mut state = NotificationState::default();
    for n in 0..10 {
        state.record_message(format!("message {n}"));
    }
    state.toggle_details();
    assert!(state.details_visible);
    assert!(!state.unread);
    assert_eq!(state.label(), NO_UNREAD_LABEL);
    // Acknowledging does not drop the log.
    assert_eq!(state.messages.len(), 10);
}

#[test]
fn closing_details_leaves_unread_alone() {
    let mut state = NotificationState::default();
    state.toggle_details();
    assert!(state.details_visible);

    // A message lands while the panel is open, then the panel is closed.
    state.record_message("late arrival".to_owned());
    state.toggle_details();
    assert!(!state.details_visible);
    assert!(state.unread);
    assert_eq!(state.label(), UNREAD_LABEL);
}

#[test]
fn message_after_acknowledgement_sets_unread_again() {
    let mut state = NotificationState::default();
    state.record_message("one".to_owned());
    state.toggle_details();
    assert!(!state.unread);

    state.toggle_details();
    state.record_message("two".to_owned());
    assert!(state.unread);
    assert_eq!(state.label(), UNREAD_LABEL);
}

#[test]
fn bar_stays_visible_once_revealed() {
    let mut state = NotificationState::default();
    state.record_message("only".to_owned());
    state.toggle_details();
    state.toggle_details();
    assert!(state.bar_visible);
}

// =============================================================
// Connection transitions
// =============================================================

#[test]
fn connection_transitions_update_status() {
    let mut state = NotificationState::default();
    state.mark_connecting();
    assert_eq!(state.connection_status, ConnectionStatus::Connecting);
    state.mark_connected();
    assert_eq!(state.connection_status, ConnectionStatus::Connected);
    state.mark_disconnected();
    assert_eq!(state.connection_status, ConnectionStatus::Disconnected);
}

#[test]
fn disconnect_keeps_log_and_unread_state() {
    let mut state = NotificationState::default();
    state.mark_connecting();
    state.mark_connected();
    state.record_message("survives".to_owned());

    // Three consecutive drop/reconnect cycles.
    for _ in 0..3 {
        state.mark_disconnected();
        state.mark_connecting();
        state.mark_connected();
    }
    assert_eq!(state.messages, vec!["survives"]);
    assert!(state.unread);
    assert!(state.bar_visible);
}

//! Notification bar with unread badge and expandable message log.

use leptos::prelude::*;

use crate::state::notifications::NotificationState;

/// Notification bar and details panel.
///
/// The bar stays hidden until the first message arrives, carries the
/// `unread` class while unacknowledged messages exist, and toggles the
/// details panel on click. Opening the panel marks everything as read; the
/// log itself renders newest first and is never trimmed.
#[component]
pub fn NotificationBar() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    let bar_display = move || {
        if notifications.get().bar_visible {
            "block"
        } else {
            "none"
        }
    };
    let details_display = move || {
        if notifications.get().details_visible {
            "block"
        } else {
            "none"
        }
    };

    view! {
        <div class="notification-area">
            <div
                id="notification"
                class="notification"
                class:unread=move || notifications.get().unread
                style:display=bar_display
                on:click=move |_| notifications.update(NotificationState::toggle_details)
            >
                <span id="notification-label" class="notification__label">
                    {move || notifications.get().label()}
                </span>
            </div>
            <div
                id="notification-details"
                class="notification-details"
                style:display=details_display
            >
                <ul id="notification-list" class="notification-list">
                    {move || {
                        notifications
                            .get()
                            .messages
                            .iter()
                            .map(|msg| view! { <li>{msg.clone()}</li> })
                            .collect_view()
                    }}
                </ul>
            </div>
        </div>
    }
}

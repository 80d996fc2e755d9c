//! Welcome page hosting the live notification feed.

use leptos::prelude::*;

use crate::components::notification_bar::NotificationBar;
#[cfg(feature = "hydrate")]
use crate::state::notifications::NotificationState;

#[cfg(feature = "hydrate")]
thread_local! {
    /// One stream per page load: route re-renders must not stack loops.
    static STREAM_STARTED: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

/// Welcome page shown after login.
///
/// Starts the notification stream client on first mount and renders the
/// notification bar plus a sign-out control.
#[component]
pub fn WelcomePage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let notifications = expect_context::<RwSignal<NotificationState>>();
        let already_started = STREAM_STARTED.with(|flag| flag.replace(true));
        if !already_started {
            crate::net::notification_client::spawn_notification_client(notifications);
        }
    }

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
    };

    view! {
        <div class="welcome-page">
            <header class="welcome-page__header">
                <h1>"Welcome!"</h1>
                <button class="auth-button auth-button--ghost" on:click=on_logout>
                    "Sign out"
                </button>
            </header>
            <p class="welcome-page__intro">
                "You are signed in. New activity shows up in the bar below."
            </p>
            <NotificationBar/>
        </div>
    }
}

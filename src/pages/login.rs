//! Login page: credential form posting to the authentication endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;

/// Fallback shown when the server rejects the login without a usable
/// `detail` field.
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FAILED: &str = "Login failed.";
/// Shown for transport-level failures.
#[cfg(any(test, feature = "hydrate"))]
const NETWORK_ERROR: &str = "Network error.";

/// Map a login failure onto the exact text shown in the error region.
///
/// A server-provided `detail` is shown verbatim; everything else collapses
/// into one of the two generic messages.
#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected {
            detail: Some(detail),
        } => detail.clone(),
        ApiError::Rejected { detail: None } => LOGIN_FAILED.to_owned(),
        ApiError::Network => NETWORK_ERROR.to_owned(),
    }
}

/// Login page with email + password form.
///
/// On success the browser navigates to `/welcome`. There is no retry; a
/// failed attempt leaves the form ready for manual resubmission.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // One request in flight at a time.
        if busy.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/welcome");
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("login request failed: {e}");
                    error.set(login_error_message(&e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <form id="login-form" class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p id="error" class="auth-error">{move || error.get()}</p>
                </Show>
                <p class="auth-switch">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}

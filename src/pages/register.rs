//! Registration page: new-account form with redirect-on-success.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use std::time::Duration;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;

/// Fixed, non-cancellable delay before navigating to `/login` after a
/// successful registration.
#[cfg(any(test, feature = "hydrate"))]
pub const REDIRECT_DELAY: Duration = Duration::from_millis(3000);

/// Success text shown while the redirect delay runs.
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_SUCCESS: &str = "✅ Registration successful! Redirecting to login...";
/// Fallback shown when the server rejects the registration without a usable
/// `detail` field.
#[cfg(any(test, feature = "hydrate"))]
const REGISTRATION_FAILED: &str = "Registration failed.";
/// Shown for transport-level failures.
#[cfg(any(test, feature = "hydrate"))]
const NETWORK_ERROR: &str = "Network error.";

/// Map a registration failure onto the exact text shown in the error region.
#[cfg(any(test, feature = "hydrate"))]
fn register_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected {
            detail: Some(detail),
        } => detail.clone(),
        ApiError::Rejected { detail: None } => REGISTRATION_FAILED.to_owned(),
        ApiError::Network => NETWORK_ERROR.to_owned(),
    }
}

/// Registration page with email + password form.
///
/// On success it shows a confirmation message and, after [`REDIRECT_DELAY`],
/// navigates to `/login`. The delay is unconditional; the `busy` latch stays
/// set so the form cannot be resubmitted while it runs.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        busy.set(true);
        message.set(String::new());
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&email_value, &password_value).await {
                Ok(()) => {
                    message.set(REGISTER_SUCCESS.to_owned());
                    gloo_timers::future::sleep(REDIRECT_DELAY).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("register request failed: {e}");
                    error.set(register_error_message(&e));
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
                <h1>"Create Account"</h1>
                <form id="register-form" class="auth-form" on:submit=on_submit>
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
                        "Register"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p id="register-message" class="auth-success">{move || message.get()}</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p id="error" class="auth-error">{move || error.get()}</p>
                </Show>
                <p class="auth-switch">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

//! REST API helpers for the authentication endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`ApiError`]: a rejection carrying the
//! server's `detail` text when the error body had one, or a transport-level
//! network failure. Pages map these onto the exact strings shown to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
use thiserror::Error;

/// Failure modes for the auth endpoints.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status. `detail` holds the
    /// JSON `detail` field of the error body when one was present.
    #[error("request rejected by server")]
    Rejected { detail: Option<String> },
    /// Transport-level failure: offline, DNS, CORS, aborted request.
    #[error("network error")]
    Network,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Extract the `detail` field from a JSON error body.
///
/// Returns `None` when the body is not JSON, lacks the field, or carries a
/// non-string value there.
#[cfg(any(test, feature = "hydrate"))]
fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok()?.detail
}

/// Log in via `POST /login` with a form-encoded credential body.
///
/// The field names mirror the HTML form the server historically consumed.
///
/// # Errors
///
/// [`ApiError::Rejected`] for any non-200 status, [`ApiError::Network`] for
/// transport failures.
pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new().map_err(|_| ApiError::Network)?;
        params.append("email", email);
        params.append("password", password);
        let resp = gloo_net::http::Request::post("/login")
            .body(params)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        if resp.status() == 200 {
            return Ok(());
        }
        let detail = resp.text().await.ok().and_then(|body| error_detail(&body));
        Err(ApiError::Rejected { detail })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network)
    }
}

/// Register a new account via `POST /register` with a JSON body.
///
/// # Errors
///
/// [`ApiError::Rejected`] for any non-success status, [`ApiError::Network`]
/// for transport failures.
pub async fn register(email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/register")
            .json(&payload)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        if resp.ok() {
            return Ok(());
        }
        let detail = resp.text().await.ok().and_then(|body| error_detail(&body));
        Err(ApiError::Rejected { detail })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network)
    }
}

/// Log out the current user by calling `POST /logout`.
///
/// Fire-and-forget: the caller navigates back to the login page regardless
/// of the outcome.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/logout").send().await;
    }
}

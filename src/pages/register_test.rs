use super::*;

// =============================================================
// register_error_message
// =============================================================

#[test]
fn rejected_with_detail_shows_detail_verbatim() {
    let err = ApiError::Rejected {
        detail: Some("Email already registered".to_owned()),
    };
    assert_eq!(register_error_message(&err), "Email already registered");
}

#[test]
fn rejected_without_detail_falls_back_to_generic_message() {
    let err = ApiError::Rejected { detail: None };
    assert_eq!(register_error_message(&err), "Registration failed.");
}

#[test]
fn transport_failure_shows_network_error() {
    assert_eq!(register_error_message(&ApiError::Network), "Network error.");
}

// =============================================================
// Redirect timing and success text
// =============================================================

#[test]
fn redirect_delay_is_three_seconds() {
    assert_eq!(REDIRECT_DELAY, Duration::from_millis(3000));
}

#[test]
fn success_message_announces_the_redirect() {
    assert_eq!(
        REGISTER_SUCCESS,
        "✅ Registration successful! Redirecting to login..."
    );
}

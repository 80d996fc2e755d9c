use super::*;

// =============================================================
// login_error_message
// =============================================================

#[test]
fn rejected_with_detail_shows_detail_verbatim() {
    let err = ApiError::Rejected {
        detail: Some("Invalid email or password".to_owned()),
    };
    assert_eq!(login_error_message(&err), "Invalid email or password");
}

#[test]
fn rejected_without_detail_falls_back_to_generic_message() {
    let err = ApiError::Rejected { detail: None };
    assert_eq!(login_error_message(&err), "Login failed.");
}

#[test]
fn transport_failure_shows_network_error() {
    assert_eq!(login_error_message(&ApiError::Network), "Network error.");
}

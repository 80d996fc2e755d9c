use super::*;

// =============================================================
// error_detail
// =============================================================

#[test]
fn error_detail_extracts_string_field() {
    assert_eq!(
        error_detail(r#"{"detail":"Invalid credentials"}"#),
        Some("Invalid credentials".to_owned())
    );
}

#[test]
fn error_detail_missing_field_is_none() {
    assert_eq!(error_detail(r#"{"message":"nope"}"#), None);
}

#[test]
fn error_detail_unparsable_body_is_none() {
    assert_eq!(error_detail("<html>502 Bad Gateway</html>"), None);
    assert_eq!(error_detail(""), None);
}

#[test]
fn error_detail_non_string_value_is_none() {
    assert_eq!(error_detail(r#"{"detail":42}"#), None);
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_variants_are_distinct() {
    assert_ne!(ApiError::Rejected { detail: None }, ApiError::Network);
    assert_ne!(
        ApiError::Rejected {
            detail: Some("x".to_owned())
        },
        ApiError::Rejected { detail: None }
    );
}

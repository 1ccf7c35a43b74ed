use axum::http::HeaderValue;

use super::*;

fn headers_with_auth(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

// =============================================================
// bearer_token
// =============================================================

#[test]
fn bearer_token_extracts_token() {
    let headers = headers_with_auth("Bearer abc123");
    assert_eq!(bearer_token(&headers), Some("abc123"));
}

#[test]
fn bearer_token_scheme_is_case_insensitive() {
    let headers = headers_with_auth("bEaReR abc123");
    assert_eq!(bearer_token(&headers), Some("abc123"));
}

#[test]
fn bearer_token_missing_header_is_none() {
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}

#[test]
fn bearer_token_rejects_wrong_scheme() {
    let headers = headers_with_auth("Basic abc123");
    assert_eq!(bearer_token(&headers), None);
}

#[test]
fn bearer_token_rejects_missing_token() {
    let headers = headers_with_auth("Bearer");
    assert_eq!(bearer_token(&headers), None);
}

#[test]
fn bearer_token_rejects_extra_parts() {
    let headers = headers_with_auth("Bearer abc 123");
    assert_eq!(bearer_token(&headers), None);
}

// =============================================================
// auth_error_to_status
// =============================================================

#[test]
fn error_mapping_matches_contract() {
    assert_eq!(auth_error_to_status(&AuthError::InvalidIdentifier), StatusCode::BAD_REQUEST);
    assert_eq!(auth_error_to_status(&AuthError::InvalidCredentials), StatusCode::UNAUTHORIZED);
    assert_eq!(auth_error_to_status(&AuthError::DuplicateAccount), StatusCode::CONFLICT);
}

// =============================================================
// Request/response body shapes
// =============================================================

#[test]
fn credentials_body_deserializes_role() {
    let body: CredentialsBody =
        serde_json::from_str(r#"{"identifier":"a@b.com","secret":"pw","role":"instructor"}"#).unwrap();
    assert_eq!(body.role, Role::Instructor);
    assert_eq!(body.identifier, "a@b.com");
}

#[test]
fn login_response_serializes_contract_fields() {
    let resp = LoginResponse {
        token: "tok".to_owned(),
        role: Role::Student,
        email: "a@b.com".to_owned(),
    };
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["token"], "tok");
    assert_eq!(json["role"], "student");
    assert_eq!(json["email"], "a@b.com");
}

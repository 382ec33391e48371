use super::*;

#[test]
fn login_response_decodes_complete_payload() {
    let raw = r#"{
        "token": "tok1",
        "user": {"id": 1, "name": "Ada", "email": "a@x.com", "role": "admin"},
        "role": "admin",
        "expires_at": "2026-09-01T00:00:00Z"
    }"#;
    let decoded: LoginResponse = serde_json::from_str(raw).expect("decode");
    assert_eq!(decoded.token, "tok1");
    assert_eq!(decoded.user.id, 1);
    assert_eq!(decoded.user.email, "a@x.com");
    assert_eq!(decoded.role, "admin");
    assert_eq!(decoded.expires_at.as_deref(), Some("2026-09-01T00:00:00Z"));
    assert_eq!(decoded.message, None);
}

#[test]
fn login_response_tolerates_missing_optional_fields() {
    let raw = r#"{
        "token": "tok2",
        "user": {"id": 7, "name": "Eve", "email": "e@x.com"},
        "role": "writer"
    }"#;
    let decoded: LoginResponse = serde_json::from_str(raw).expect("decode");
    assert_eq!(decoded.expires_at, None);
    assert_eq!(decoded.message, None);
}

#[test]
fn login_request_serializes_expected_field_names() {
    let request = LoginRequest {
        identifier: "a@x.com".to_owned(),
        password: "secret1".to_owned(),
    };
    let encoded = serde_json::to_value(&request).expect("encode");
    assert_eq!(
        encoded,
        serde_json::json!({"identifier": "a@x.com", "password": "secret1"})
    );
}

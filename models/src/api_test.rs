use super::*;

// =============================================================
// from_status body parsing
// =============================================================

#[test]
fn from_status_keeps_json_object_body() {
    let err = ApiError::from_status(422, r#"{"message":"Invalid payload"}"#);
    let ApiError::Status { status, body } = err else {
        panic!("expected status error");
    };
    assert_eq!(status, 422);
    assert_eq!(body, Some(serde_json::json!({"message": "Invalid payload"})));
}

#[test]
fn from_status_wraps_plain_text_body_as_string() {
    let err = ApiError::from_status(500, "something broke");
    let ApiError::Status { body, .. } = err else {
        panic!("expected status error");
    };
    assert_eq!(body, Some(Value::String("something broke".to_owned())));
}

#[test]
fn from_status_treats_blank_body_as_empty() {
    let err = ApiError::from_status(502, "  \n");
    assert_eq!(err, ApiError::Status { status: 502, body: None });
}

// =============================================================
// detail extraction precedence
// =============================================================

#[test]
fn detail_uses_bare_string_body_verbatim() {
    let err = ApiError::from_status(403, "Admin access required");
    assert_eq!(err.detail(), "Admin access required");
}

#[test]
fn detail_prefers_nested_error_message() {
    let err = ApiError::from_status(
        401,
        r#"{"error":{"message":"Invalid credentials"},"message":"outer"}"#,
    );
    assert_eq!(err.detail(), "Invalid credentials");
}

#[test]
fn detail_falls_back_to_top_level_message() {
    let err = ApiError::from_status(400, r#"{"message":"Missing identifier"}"#);
    assert_eq!(err.detail(), "Missing identifier");
}

#[test]
fn detail_accepts_string_valued_error_field() {
    let err = ApiError::from_status(409, r#"{"error":"Already suspended"}"#);
    assert_eq!(err.detail(), "Already suspended");
}

#[test]
fn detail_generic_for_unrecognized_shape() {
    let err = ApiError::from_status(500, r#"{"trace_id":"abc123"}"#);
    assert_eq!(err.detail(), "Failed to process your request");
}

#[test]
fn detail_generic_for_empty_body() {
    let err = ApiError::from_status(504, "");
    assert_eq!(err.detail(), "Failed to process your request");
}

#[test]
fn detail_uses_transport_message_when_present() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.detail(), "connection refused");
    let empty = ApiError::Transport(String::new());
    assert_eq!(empty.detail(), "Failed to process your request");
}

#[test]
fn envelope_round_trips_with_typed_payload() {
    let encoded = r#"{"message":"Users retrieved","data":[1,2,3]}"#;
    let decoded: ApiResponse<Vec<i64>> = serde_json::from_str(encoded).expect("decode");
    assert_eq!(decoded.message, "Users retrieved");
    assert_eq!(decoded.data, vec![1, 2, 3]);
}

use super::*;

#[test]
fn configuration_decodes_type_field_into_value_type() {
    let raw = r#"{
        "id": 4,
        "key": "chat_claim_timeout_minutes",
        "value": "5",
        "type": "integer",
        "description": "Minutes before an unclaimed chat is released",
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-01-02T00:00:00Z"
    }"#;
    let config: SystemConfiguration = serde_json::from_str(raw).expect("decode");
    assert_eq!(config.value_type, ConfigValueType::Integer);
    assert_eq!(config.key, "chat_claim_timeout_minutes");
}

#[test]
fn request_serializes_type_field_and_omits_empty_description() {
    let request = ConfigurationRequest {
        key: "message_cost_tokens".to_owned(),
        value: "3".to_owned(),
        value_type: ConfigValueType::Integer,
        description: None,
    };
    let encoded = serde_json::to_value(&request).expect("encode");
    assert_eq!(
        encoded,
        serde_json::json!({"key": "message_cost_tokens", "value": "3", "type": "integer"})
    );
}

#[test]
fn value_type_strings_match_wire_form() {
    for value_type in [
        ConfigValueType::String,
        ConfigValueType::Integer,
        ConfigValueType::Decimal,
        ConfigValueType::Boolean,
        ConfigValueType::Json,
    ] {
        let encoded = serde_json::to_string(&value_type).expect("encode");
        assert_eq!(encoded, format!("\"{}\"", value_type.as_str()));
    }
}

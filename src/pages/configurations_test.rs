use super::*;

#[test]
fn unknown_type_choice_defaults_to_string() {
    assert_eq!(value_type_from_choice("nope"), ConfigValueType::String);
    assert_eq!(value_type_from_choice("boolean"), ConfigValueType::Boolean);
}

#[test]
fn form_round_trips_an_existing_record() {
    let record = SystemConfiguration {
        id: 3,
        key: "message_cost_tokens".to_owned(),
        value: "3".to_owned(),
        value_type: ConfigValueType::Integer,
        description: "Tokens charged per message".to_owned(),
        created_at: "2026-01-01T00:00:00Z".to_owned(),
        updated_at: "2026-01-01T00:00:00Z".to_owned(),
    };
    let form = ConfigForm::from_record(&record);
    assert_eq!(form.id, Some(3));
    assert_eq!(form.type_choice, "integer");

    let request = form.to_request();
    assert_eq!(request.key, "message_cost_tokens");
    assert_eq!(request.value_type, ConfigValueType::Integer);
    assert_eq!(request.description.as_deref(), Some("Tokens charged per message"));
}

#[test]
fn to_request_trims_the_key_and_drops_empty_description() {
    let form = ConfigForm {
        id: None,
        key: "  new_key ".to_owned(),
        value: "true".to_owned(),
        type_choice: "boolean".to_owned(),
        description: String::new(),
    };
    let request = form.to_request();
    assert_eq!(request.key, "new_key");
    assert_eq!(request.description, None);
}

use super::*;

#[test]
fn parse_recognizes_all_tiers() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("writer"), Some(Role::Writer));
    assert_eq!(Role::parse("user"), Some(Role::User));
}

#[test]
fn parse_rejects_unknown_tier() {
    assert_eq!(Role::parse("superadmin"), None);
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn as_str_round_trips_through_parse() {
    for role in [Role::Admin, Role::Writer, Role::User] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn serde_uses_lowercase_wire_form() {
    let encoded = serde_json::to_string(&Role::Writer).expect("encode");
    assert_eq!(encoded, "\"writer\"");
    let decoded: Role = serde_json::from_str("\"admin\"").expect("decode");
    assert_eq!(decoded, Role::Admin);
}

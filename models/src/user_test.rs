use super::*;

#[test]
fn default_filters_produce_no_query_parameters() {
    assert!(UserFilters::default().query_pairs().is_empty());
}

#[test]
fn query_pairs_include_only_set_filters() {
    let filters = UserFilters {
        status: Some(StatusFilter::Suspended),
        role: Some(Role::Writer),
        page: Some(3),
        ..UserFilters::default()
    };
    assert_eq!(
        filters.query_pairs(),
        vec![
            ("status", "suspended".to_owned()),
            ("role", "writer".to_owned()),
            ("page", "3".to_owned()),
        ]
    );
}

#[test]
fn empty_search_is_omitted() {
    let filters = UserFilters {
        search: Some(String::new()),
        ..UserFilters::default()
    };
    assert!(filters.query_pairs().is_empty());
}

#[test]
fn full_filter_set_orders_parameters_stably() {
    let filters = UserFilters {
        search: Some("ada".to_owned()),
        status: Some(StatusFilter::Active),
        verification: Some(VerificationFilter::Pending),
        role: Some(Role::User),
        sort_by: Some(SortKey::LastSeenAt),
        sort_order: Some(SortOrder::Desc),
        page: Some(1),
        per_page: Some(25),
    };
    let pairs = filters.query_pairs();
    assert_eq!(pairs.len(), 8);
    assert_eq!(pairs[0], ("search", "ada".to_owned()));
    assert_eq!(pairs[4], ("sort_by", "last_seen_at".to_owned()));
    assert_eq!(pairs[7], ("per_page", "25".to_owned()));
}

#[test]
fn verification_status_decodes_lowercase_wire_form() {
    let decoded: VerificationStatus = serde_json::from_str("\"rejected\"").expect("decode");
    assert_eq!(decoded, VerificationStatus::Rejected);
}

#[test]
fn page_meta_tolerates_null_bounds_on_empty_pages() {
    let raw = r#"{"current_page":1,"last_page":1,"per_page":20,"total":0,"from":null,"to":null}"#;
    let meta: PageMeta = serde_json::from_str(raw).expect("decode");
    assert_eq!(meta.total, 0);
    assert_eq!(meta.from, None);
}

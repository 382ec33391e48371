use super::*;

#[test]
fn profile_paths_embed_the_profile_id() {
    assert_eq!(profile_path(9), "/profiles/9");
    assert_eq!(profile_action_path(9, "online-status"), "/profiles/9/online-status");
}

#[test]
fn list_query_always_carries_pagination() {
    let pairs = list_query(1, 20, None, None);
    assert_eq!(
        pairs,
        vec![("per_page", "20".to_owned()), ("page", "1".to_owned())]
    );
}

#[test]
fn list_query_appends_status_and_non_empty_search() {
    let pairs = list_query(2, 10, Some(ProfileStatus::Inactive), Some("lena"));
    assert_eq!(pairs[2], ("status", "inactive".to_owned()));
    assert_eq!(pairs[3], ("search", "lena".to_owned()));

    let no_search = list_query(2, 10, None, Some(""));
    assert_eq!(no_search.len(), 2);
}

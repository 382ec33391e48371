use super::*;

#[test]
fn status_choice_all_means_no_filter() {
    assert_eq!(status_from_choice("all"), None);
}

#[test]
fn status_choice_maps_onto_filters() {
    assert_eq!(status_from_choice("active"), Some(ProfileStatus::Active));
    assert_eq!(status_from_choice("inactive"), Some(ProfileStatus::Inactive));
}

#[test]
fn writer_ids_parse_ignores_blanks_and_junk() {
    assert_eq!(parse_writer_ids("12, 15, 31"), vec![12, 15, 31]);
    assert_eq!(parse_writer_ids("12,,abc, 7 "), vec![12, 7]);
    assert!(parse_writer_ids("").is_empty());
}

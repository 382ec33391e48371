use super::*;
use models::user::VerificationStatus;

fn sample_user() -> User {
    User {
        id: 1,
        name: "Ada".to_owned(),
        email: "a@x.com".to_owned(),
        email_verified_at: None,
        phone: "+100000000".to_owned(),
        phone_verified_at: None,
        bio: String::new(),
        interests: Vec::new(),
        profile_photo: String::new(),
        last_seen_at: None,
        verification_status: VerificationStatus::Pending,
        verification_id_photo: None,
        verification_selfie: None,
        verified_at: None,
        verification_notes: None,
        country: "KE".to_owned(),
        city: "Nairobi".to_owned(),
        age: 30,
        date_of_birth: "1996-01-01".to_owned(),
        is_active: true,
        is_suspended: false,
        suspension_reason: None,
        deleted_at: None,
        two_factor_confirmed_at: None,
        created_at: "2026-01-01T00:00:00Z".to_owned(),
        updated_at: "2026-01-01T00:00:00Z".to_owned(),
        role: None,
    }
}

#[test]
fn status_choice_all_means_no_filter() {
    assert_eq!(status_from_choice("all"), None);
    assert_eq!(status_from_choice("anything-else"), None);
}

#[test]
fn status_choice_maps_onto_filters() {
    assert_eq!(status_from_choice("active"), Some(StatusFilter::Active));
    assert_eq!(status_from_choice("suspended"), Some(StatusFilter::Suspended));
}

#[test]
fn row_status_prefers_suspension_over_activity() {
    let mut user = sample_user();
    assert_eq!(row_status(&user), "active");
    user.is_suspended = true;
    assert_eq!(row_status(&user), "suspended");
    user.is_suspended = false;
    user.is_active = false;
    assert_eq!(row_status(&user), "inactive");
}

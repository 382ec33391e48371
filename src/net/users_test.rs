use super::*;

#[test]
fn user_paths_embed_the_user_id() {
    assert_eq!(user_path(42), "/admin/users/42");
    assert_eq!(user_action_path(42, "suspend"), "/admin/users/42/suspend");
    assert_eq!(user_action_path(7, "unsuspend"), "/admin/users/7/unsuspend");
}

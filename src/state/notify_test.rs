use super::*;

// =============================================================
// NotifyState queue behavior
// =============================================================

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = NotifyState::default();
    let first = state.push(Severity::Error, "one");
    let second = state.push(Severity::Success, "two");
    assert!(second > first);
    assert_eq!(state.toasts().len(), 2);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = NotifyState::default();
    let first = state.push(Severity::Error, "one");
    let second = state.push(Severity::Warn, "two");

    state.dismiss(first);
    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].id, second);

    // Unknown ids are ignored.
    state.dismiss(999);
    assert_eq!(state.toasts().len(), 1);
}

#[test]
fn push_derives_summary_from_severity() {
    let mut state = NotifyState::default();
    state.push(Severity::Error, "boom");
    assert_eq!(state.toasts()[0].summary, "Error");
    state.push(Severity::Success, "done");
    assert_eq!(state.toasts()[1].summary, "Success");
}

// =============================================================
// Notifier relay
// =============================================================

#[test]
fn report_api_error_extracts_the_backend_message() {
    let notify = Notifier::new();
    let err = ApiError::from_status(401, r#"{"error":{"message":"Invalid credentials"}}"#);
    notify.report_api_error(&err);

    let state = notify.state().get_untracked();
    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].severity, Severity::Error);
    assert_eq!(state.toasts()[0].detail, "Invalid credentials");
}

#[test]
fn report_success_prefers_the_payload_message() {
    let notify = Notifier::new();
    notify.report_success(Some("User suspended"));
    notify.report_success(None);
    notify.report_success(Some(""));

    let state = notify.state().get_untracked();
    assert_eq!(state.toasts()[0].detail, "User suspended");
    assert_eq!(state.toasts()[1].detail, "Operation completed successfully");
    assert_eq!(state.toasts()[2].detail, "Operation completed successfully");
}

#[test]
fn error_queues_verbatim_text() {
    let notify = Notifier::new();
    notify.error("Admin access required");
    let state = notify.state().get_untracked();
    assert_eq!(state.toasts()[0].detail, "Admin access required");
}

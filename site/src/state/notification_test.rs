use super::*;

#[test]
fn default_has_nothing_visible() {
    let state = NotificationState::default();
    assert!(state.current.is_none());
    assert_eq!(state.visible(), 0);
}

#[test]
fn show_makes_notification_visible() {
    let mut state = NotificationState::default();
    state.show("Saved", Severity::Success);
    let current = state.current.as_ref().unwrap();
    assert_eq!(current.message, "Saved");
    assert_eq!(current.severity, Severity::Success);
}

#[test]
fn second_show_replaces_first() {
    let mut state = NotificationState::default();
    state.show("first", Severity::Info);
    state.show("second", Severity::Error);
    assert_eq!(state.visible(), 1);
    assert_eq!(state.current.as_ref().unwrap().message, "second");
}

#[test]
fn ids_increase_per_show() {
    let mut state = NotificationState::default();
    let a = state.show("a", Severity::Info);
    let b = state.show("b", Severity::Info);
    assert!(b > a);
}

#[test]
fn dismiss_current_id_removes_it() {
    let mut state = NotificationState::default();
    let id = state.show("hello", Severity::Info);
    assert!(state.dismiss(id));
    assert_eq!(state.visible(), 0);
}

#[test]
fn stale_dismiss_keeps_replacement() {
    let mut state = NotificationState::default();
    let first = state.show("first", Severity::Info);
    state.show("second", Severity::Info);
    assert!(!state.dismiss(first));
    assert_eq!(state.current.as_ref().unwrap().message, "second");
}

#[test]
fn dismiss_twice_is_harmless() {
    let mut state = NotificationState::default();
    let id = state.show("x", Severity::Info);
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
}

#[test]
fn severity_names_match_css_modifiers() {
    assert_eq!(Severity::Info.as_str(), "info");
    assert_eq!(Severity::Success.as_str(), "success");
    assert_eq!(Severity::Error.as_str(), "error");
}

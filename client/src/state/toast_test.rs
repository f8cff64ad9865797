use super::*;

#[test]
fn toast_ids_are_monotonic() {
    let mut state = ToastState::default();
    let first = state.success("saved");
    let second = state.error("failed");
    assert!(second > first);
}

#[test]
fn success_and_error_set_levels() {
    let mut state = ToastState::default();
    state.success("Result saved to history");
    state.error("Failed to save result");

    assert_eq!(state.toasts[0].level, ToastLevel::Success);
    assert_eq!(state.toasts[1].level, ToastLevel::Error);
}

#[test]
fn only_success_toasts_auto_dismiss() {
    let mut state = ToastState::default();
    state.success("ok");
    state.error("bad");

    assert!(state.toasts[0].auto_dismiss());
    assert!(!state.toasts[1].auto_dismiss());
}

#[test]
fn dismiss_removes_exactly_the_matching_toast() {
    let mut state = ToastState::default();
    let keep = state.success("keep");
    let drop = state.success("drop");

    state.dismiss(drop);

    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, keep);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.success("ok");

    state.dismiss(999);

    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.success("one");
    state.dismiss(first);

    let second = state.success("two");
    assert!(second > first);
}

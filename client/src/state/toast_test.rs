use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Logged in successfully");
    let b = state.push(ToastKind::Error, "Invalid credentials");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "Invalid credentials");
    assert_eq!(state.items[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    let b = state.push(ToastKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
}

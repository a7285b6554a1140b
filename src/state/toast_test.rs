use super::*;

// =============================================================
// Push and id assignment
// =============================================================

#[test]
fn push_assigns_sequential_ids() {
    let mut toasts = ToastQueue::default();
    let a = push(&mut toasts, ToastLevel::Success, "Message sent!", "Thanks");
    let b = push(&mut toasts, ToastLevel::Error, "Error", "Nope");
    assert_eq!(a, 0);
    assert_eq!(b, 1);
    assert_eq!(toasts.entries.len(), 2);
}

#[test]
fn push_records_level_and_text() {
    let mut toasts = ToastQueue::default();
    push(&mut toasts, ToastLevel::Error, "Network Error", "Unplugged");
    assert_eq!(toasts.entries[0].level, ToastLevel::Error);
    assert_eq!(toasts.entries[0].title, "Network Error");
    assert_eq!(toasts.entries[0].body, "Unplugged");
}

#[test]
fn push_never_reuses_a_live_id() {
    let mut toasts = ToastQueue::default();
    push(&mut toasts, ToastLevel::Success, "a", "a");
    push(&mut toasts, ToastLevel::Success, "b", "b");
    dismiss(&mut toasts, 0);
    let c = push(&mut toasts, ToastLevel::Success, "c", "c");
    assert_eq!(c, 2);
    let ids: Vec<u64> = toasts.entries.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn push_after_a_drain_does_not_reuse_ids() {
    let mut toasts = ToastQueue::default();
    let a = push(&mut toasts, ToastLevel::Success, "a", "a");
    dismiss(&mut toasts, a);
    assert!(toasts.entries.is_empty());

    let b = push(&mut toasts, ToastLevel::Success, "b", "b");
    assert_ne!(a, b);

    // A late auto-dismiss firing for the drained toast leaves the new one up.
    dismiss(&mut toasts, a);
    assert_eq!(toasts.entries.len(), 1);
    assert_eq!(toasts.entries[0].id, b);
}

// =============================================================
// Dismiss
// =============================================================

#[test]
fn dismiss_removes_only_the_target() {
    let mut toasts = ToastQueue::default();
    push(&mut toasts, ToastLevel::Success, "a", "a");
    push(&mut toasts, ToastLevel::Error, "b", "b");
    dismiss(&mut toasts, 0);
    assert_eq!(toasts.entries.len(), 1);
    assert_eq!(toasts.entries[0].title, "b");
}

#[test]
fn dismiss_of_unknown_id_is_a_noop() {
    let mut toasts = ToastQueue::default();
    push(&mut toasts, ToastLevel::Success, "a", "a");
    dismiss(&mut toasts, 99);
    assert_eq!(toasts.entries.len(), 1);
}

// =============================================================
// ToastLevel
// =============================================================

#[test]
fn toast_level_default_is_success() {
    assert_eq!(ToastLevel::default(), ToastLevel::Success);
}

#[test]
fn toast_level_variants_are_distinct() {
    assert_ne!(ToastLevel::Success, ToastLevel::Error);
}

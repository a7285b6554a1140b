//! Notification queue for transient success/error messages.
//!
//! DESIGN
//! ======
//! The queue itself is plain data mutated through `push`/`dismiss`, so the
//! id bookkeeping is testable off-wasm. Ids are allocated from a counter
//! carried in the queue, not from the live entries. `notify` is the
//! signal-facing wrapper the components call; it also schedules the
//! automatic dismissal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays up before dismissing itself, in milliseconds.
pub const TOAST_DISMISS_MS: u32 = 4_000;

/// Severity of a notification, selects the accent styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Success,
    Error,
}

/// One entry in the notification stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub body: String,
}

/// The live notification entries plus the counter their ids come from.
///
/// Ids advance monotonically and are never reused, even after the queue
/// drains, so a pending dismissal timer can only ever remove its own toast.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    pub entries: Vec<Toast>,
    next_id: u64,
}

/// Append a toast under a never-reused id. Returns the new id.
pub fn push(queue: &mut ToastQueue, level: ToastLevel, title: &str, body: &str) -> u64 {
    let id = queue.next_id;
    queue.next_id += 1;
    queue.entries.push(Toast {
        id,
        level,
        title: title.to_owned(),
        body: body.to_owned(),
    });
    id
}

/// Remove a toast by id; already-gone ids are a no-op.
pub fn dismiss(queue: &mut ToastQueue, id: u64) {
    queue.entries.retain(|t| t.id != id);
}

/// Push onto the shared queue and schedule the automatic dismissal.
pub fn notify(toasts: RwSignal<ToastQueue>, level: ToastLevel, title: &str, body: &str) {
    let mut id = 0;
    toasts.update(|q| id = push(q, level, title, body));
    gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || {
        toasts.update(|q| dismiss(q, id));
    })
    .forget();
}

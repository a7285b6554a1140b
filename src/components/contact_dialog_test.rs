use super::*;
use serde_json::json;

use crate::net::contact::{ContactReply, SendError};

fn clean_state() -> DialogState {
    DialogState {
        draft: ContactSubmission {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            message: "Hello, I would like to connect.".to_owned(),
        },
        ..DialogState::default()
    }
}

// =============================================================
// Submit gating
// =============================================================

#[test]
fn default_dialog_is_idle_and_empty() {
    let state = DialogState::default();
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert_eq!(state.draft, ContactSubmission::default());
    assert!(state.errors.is_clean());
}

#[test]
fn begin_submit_rejects_an_empty_draft() {
    let mut state = DialogState::default();
    assert!(!begin_submit(&mut state));
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert!(state.errors.name.is_some());
    assert!(state.errors.email.is_some());
    assert!(state.errors.message.is_some());
}

#[test]
fn begin_submit_moves_a_clean_draft_to_sending() {
    let mut state = clean_state();
    assert!(begin_submit(&mut state));
    assert_eq!(state.phase, SubmitPhase::Sending);
    assert!(state.errors.is_clean());
}

#[test]
fn begin_submit_refuses_while_a_send_is_in_flight() {
    let mut state = clean_state();
    assert!(begin_submit(&mut state));
    let snapshot = state.clone();
    assert!(!begin_submit(&mut state));
    assert_eq!(state, snapshot);
}

#[test]
fn begin_submit_allows_a_retry_after_failure() {
    let mut state = clean_state();
    assert!(begin_submit(&mut state));
    settle_failure(&mut state);
    assert!(begin_submit(&mut state));
}

// =============================================================
// Settling
// =============================================================

#[test]
fn settle_failure_keeps_the_draft_for_a_retry() {
    let mut state = clean_state();
    let draft = state.draft.clone();
    assert!(begin_submit(&mut state));
    settle_failure(&mut state);
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert_eq!(state.draft, draft);
}

#[test]
fn settle_success_clears_the_form() {
    let mut state = clean_state();
    assert!(begin_submit(&mut state));
    settle_success(&mut state);
    assert_eq!(state.phase, SubmitPhase::Sent);
    assert_eq!(state.draft, ContactSubmission::default());
    assert!(state.errors.is_clean());
}

// =============================================================
// Closing
// =============================================================

#[test]
fn close_is_blocked_only_while_sending() {
    let mut state = clean_state();
    assert!(close_allowed(&state));
    assert!(begin_submit(&mut state));
    assert!(!close_allowed(&state));
    settle_success(&mut state);
    assert!(close_allowed(&state));
}

#[test]
fn reset_for_close_returns_to_default() {
    let mut state = clean_state();
    state.errors = field_errors(&ContactSubmission::default());
    reset_for_close(&mut state);
    assert_eq!(state, DialogState::default());
}

// =============================================================
// Editing
// =============================================================

#[test]
fn edits_before_any_submit_report_nothing() {
    let mut state = DialogState::default();
    edit(&mut state, |draft| draft.name = "J".to_owned());
    assert!(state.errors.is_clean());
}

#[test]
fn edits_revalidate_once_a_submit_has_failed() {
    let mut state = DialogState::default();
    assert!(!begin_submit(&mut state));
    assert!(state.errors.name.is_some());

    edit(&mut state, |draft| draft.name = "Jane Doe".to_owned());
    assert!(state.errors.name.is_none());
    assert!(state.errors.email.is_some());
    assert!(state.errors.message.is_some());
}

// =============================================================
// Toast copy
// =============================================================

#[test]
fn success_and_failure_toasts_borrow_the_notice_text() {
    let reply = ContactReply {
        success: json!(true),
        message: Some("Thanks for reaching out!".to_owned()),
        ..ContactReply::default()
    };
    let body: &str = &sent_confirmation(&reply);
    assert_eq!(body, "Thanks for reaching out!");

    let err = SendError::Refused {
        message: "Mailbox full".to_owned(),
    };
    assert_eq!(err.title(), "Error");
    let notice: &str = &err.notice();
    assert_eq!(notice, "Mailbox full");
}

use super::*;
use serde_json::json;

fn make_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        message: "Hello, I would like to connect.".to_owned(),
    }
}

// =============================================================
// Field validation
// =============================================================

#[test]
fn valid_submission_is_clean() {
    let errors = field_errors(&make_submission());
    assert!(errors.is_clean());
    assert_eq!(errors, FieldErrors::default());
}

#[test]
fn short_name_is_reported() {
    let mut submission = make_submission();
    submission.name = "J".to_owned();
    let errors = field_errors(&submission);
    assert_eq!(
        errors.name.as_deref(),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(errors.email, None);
    assert_eq!(errors.message, None);
    assert!(!errors.is_clean());
}

#[test]
fn name_of_two_characters_passes() {
    let mut submission = make_submission();
    submission.name = "Jo".to_owned();
    assert!(field_errors(&submission).is_clean());
}

#[test]
fn invalid_email_is_reported() {
    let mut submission = make_submission();
    submission.email = "not-an-email".to_owned();
    let errors = field_errors(&submission);
    assert_eq!(
        errors.email.as_deref(),
        Some("Please enter a valid email address")
    );
    assert_eq!(errors.name, None);
}

#[test]
fn email_without_domain_is_reported() {
    let mut submission = make_submission();
    submission.email = "jane@".to_owned();
    assert!(field_errors(&submission).email.is_some());
}

#[test]
fn short_message_is_reported() {
    let mut submission = make_submission();
    submission.message = "Hello".to_owned();
    let errors = field_errors(&submission);
    assert_eq!(
        errors.message.as_deref(),
        Some("Message must be at least 10 characters")
    );
}

#[test]
fn message_of_ten_characters_passes() {
    let mut submission = make_submission();
    submission.message = "exactly 10".to_owned();
    assert!(field_errors(&submission).is_clean());
}

#[test]
fn empty_submission_reports_every_field() {
    let errors = field_errors(&ContactSubmission::default());
    assert!(errors.name.is_some());
    assert!(errors.email.is_some());
    assert!(errors.message.is_some());
    assert!(!errors.is_clean());
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn submission_serializes_to_wire_fields() {
    let value = serde_json::to_value(make_submission()).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "Hello, I would like to connect.",
        })
    );
}

#[test]
fn reply_parses_success_and_message() {
    let reply: ContactReply =
        serde_json::from_str(r#"{"success":true,"message":"Sent!"}"#).unwrap();
    assert_eq!(reply.success, json!(true));
    assert_eq!(reply.message.as_deref(), Some("Sent!"));
    assert_eq!(reply.error, None);
}

#[test]
fn reply_defaults_missing_fields() {
    let reply: ContactReply = serde_json::from_str("{}").unwrap();
    assert_eq!(reply.success, serde_json::Value::Null);
    assert_eq!(reply.message, None);
    assert_eq!(reply.error, None);
}

// =============================================================
// Success truthiness
// =============================================================

#[test]
fn truthy_success_values_accepted() {
    assert!(reply_success(&json!(true)));
    assert!(reply_success(&json!(1)));
    assert!(reply_success(&json!("ok")));
    assert!(reply_success(&json!({})));
}

#[test]
fn falsy_success_values_rejected() {
    assert!(!reply_success(&serde_json::Value::Null));
    assert!(!reply_success(&json!(false)));
    assert!(!reply_success(&json!(0)));
    assert!(!reply_success(&json!("")));
}

// =============================================================
// Rejection messages (non-2xx replies)
// =============================================================

#[test]
fn rejection_prefers_error_field() {
    let message = rejection_message(500, "Internal Server Error", r#"{"error":"Server overloaded"}"#);
    assert_eq!(message, "Server overloaded");
}

#[test]
fn rejection_falls_back_to_message_field() {
    let message = rejection_message(503, "Service Unavailable", r#"{"message":"Try later"}"#);
    assert_eq!(message, "Try later");
}

#[test]
fn rejection_ignores_empty_error_field() {
    let message = rejection_message(500, "Internal Server Error", r#"{"error":"","message":"Busy"}"#);
    assert_eq!(message, "Busy");
}

#[test]
fn rejection_unparseable_body_reports_status_line() {
    let message = rejection_message(502, "Bad Gateway", "<html>upstream died</html>");
    assert_eq!(message, "Server error: 502 Bad Gateway");
}

#[test]
fn rejection_json_without_fields_uses_fallback() {
    assert_eq!(
        rejection_message(500, "Internal Server Error", "{}"),
        "Failed to send message. Please try again."
    );
    assert_eq!(
        rejection_message(500, "Internal Server Error", "42"),
        "Failed to send message. Please try again."
    );
}

// =============================================================
// Refusals and confirmations (2xx replies)
// =============================================================

#[test]
fn refusal_uses_reply_error() {
    let reply = ContactReply {
        success: json!(false),
        error: Some("Mailbox full".to_owned()),
        ..ContactReply::default()
    };
    assert_eq!(refusal_message(&reply), "Mailbox full");
}

#[test]
fn refusal_without_error_uses_fallback() {
    let reply = ContactReply::default();
    assert_eq!(refusal_message(&reply), "Failed to send message");
}

#[test]
fn sent_confirmation_prefers_reply_message() {
    let reply = ContactReply {
        success: json!(true),
        message: Some("Sent!".to_owned()),
        ..ContactReply::default()
    };
    assert_eq!(sent_confirmation(&reply), "Sent!");
}

#[test]
fn sent_confirmation_without_message_uses_fallback() {
    let reply = ContactReply::default();
    assert_eq!(
        sent_confirmation(&reply),
        "Thank you for your message. A confirmation email has been sent to your inbox."
    );
}

// =============================================================
// Endpoint and configuration
// =============================================================

#[test]
fn contact_endpoint_appends_api_path() {
    assert_eq!(
        contact_endpoint("http://localhost:3001"),
        "http://localhost:3001/api/contact"
    );
}

#[test]
fn default_api_base_points_at_local_backend() {
    assert_eq!(DEFAULT_API_BASE, "http://localhost:3001");
}

// =============================================================
// SendError surfacing
// =============================================================

#[test]
fn network_failure_title_is_distinct() {
    assert_eq!(SendError::Unreachable.title(), "Network Error");
    assert_eq!(SendError::InvalidReply.title(), "Error");
    assert_eq!(
        SendError::Rejected {
            message: "x".to_owned()
        }
        .title(),
        "Error"
    );
}

#[test]
fn notices_cover_every_variant() {
    assert_eq!(
        SendError::Unreachable.notice(),
        "Could not connect to the server. Please make sure the backend is running and try again."
    );
    assert_eq!(
        SendError::InvalidReply.notice(),
        "Invalid response from server. Please try again."
    );
    assert_eq!(
        SendError::Rejected {
            message: "Server overloaded".to_owned()
        }
        .notice(),
        "Server overloaded"
    );
    assert_eq!(
        SendError::Refused {
            message: "Mailbox full".to_owned()
        }
        .notice(),
        "Mailbox full"
    );
}

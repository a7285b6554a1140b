//! Contact form submission to the external backend.
//!
//! One POST per submit attempt, no retries, no client-side timeout beyond
//! whatever the browser applies. The backend address is baked in at build
//! time from `PORTFOLIO_API_URL`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode folds into `SendError`, one variant per user-visible
//! outcome: the server rejected the request, answered nonsense, answered
//! "no", or was never reached at all. Callers surface `title()`/`notice()`
//! verbatim and leave the form populated so the user can retry. Nothing in
//! this module panics.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Local development backend, used when `PORTFOLIO_API_URL` is not set.
pub const DEFAULT_API_BASE: &str = "http://localhost:3001";

const REJECTED_FALLBACK: &str = "Failed to send message. Please try again.";
const REFUSED_FALLBACK: &str = "Failed to send message";
const SENT_FALLBACK: &str =
    "Thank you for your message. A confirmation email has been sent to your inbox.";

/// The name/email/message triple a visitor submits.
///
/// Lives only for the duration of the dialog: cleared after a successful
/// send or when the dialog closes, never persisted anywhere.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

/// Per-field validation messages, `None` when the field is acceptable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Run the field checks and collect the message for each failing field.
pub fn field_errors(submission: &ContactSubmission) -> FieldErrors {
    let mut out = FieldErrors::default();
    let Err(errors) = submission.validate() else {
        return out;
    };
    for (field, errs) in errors.field_errors() {
        let text = errs
            .iter()
            .find_map(|e| e.message.as_ref().map(ToString::to_string));
        match &*field {
            "name" => out.name = text,
            "email" => out.email = text,
            "message" => out.message = text,
            _ => {}
        }
    }
    out
}

/// What the backend sends back, both on success and on failure.
///
/// `success` stays a raw JSON value because the backend is only contracted
/// to send something truthy, not specifically `true`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ContactReply {
    #[serde(default)]
    pub success: serde_json::Value,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// How a submission attempt failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendError {
    /// The request never reached the server.
    Unreachable,
    /// The server answered with a non-2xx status.
    Rejected { message: String },
    /// A 2xx reply whose body was not valid JSON.
    InvalidReply,
    /// A 2xx reply that reports failure.
    Refused { message: String },
}

impl SendError {
    /// Notification heading for this failure class.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Unreachable => "Network Error",
            Self::Rejected { .. } | Self::InvalidReply | Self::Refused { .. } => "Error",
        }
    }

    /// User-facing description of what went wrong.
    pub fn notice(&self) -> String {
        match self {
            Self::Unreachable => {
                "Could not connect to the server. Please make sure the backend is running and try again."
                    .to_owned()
            }
            Self::InvalidReply => "Invalid response from server. Please try again.".to_owned(),
            Self::Rejected { message } | Self::Refused { message } => message.clone(),
        }
    }
}

/// Base URL of the contact backend.
///
/// Read from the `PORTFOLIO_API_URL` environment variable at compile time,
/// falling back to the local development server.
pub fn api_base_url() -> &'static str {
    option_env!("PORTFOLIO_API_URL").unwrap_or(DEFAULT_API_BASE)
}

fn contact_endpoint(base: &str) -> String {
    format!("{base}/api/contact")
}

/// True under JavaScript truthiness rules, which is what the backend's
/// `success` field is judged by.
fn reply_success(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

fn non_empty_field(reply: &serde_json::Value, key: &str) -> Option<String> {
    reply
        .get(key)
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

/// Best-effort human-readable message for a non-2xx reply.
///
/// Prefers the body's `error` field, then `message`; an unparseable body
/// falls back to the status line.
fn rejection_message(status: u16, status_text: &str, body: &str) -> String {
    let Ok(reply) = serde_json::from_str::<serde_json::Value>(body) else {
        return format!("Server error: {status} {status_text}");
    };
    non_empty_field(&reply, "error")
        .or_else(|| non_empty_field(&reply, "message"))
        .unwrap_or_else(|| REJECTED_FALLBACK.to_owned())
}

fn refusal_message(reply: &ContactReply) -> String {
    reply
        .error
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| REFUSED_FALLBACK.to_owned())
}

/// Toast body after a successful send.
pub fn sent_confirmation(reply: &ContactReply) -> String {
    reply
        .message
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| SENT_FALLBACK.to_owned())
}

/// POST the submission to `{base}/api/contact`.
///
/// Expects the caller to have validated the fields already; the backend is
/// never asked to judge input this side can judge itself.
///
/// # Errors
///
/// Returns a `SendError` describing which way the attempt failed; see the
/// module docs for the taxonomy.
pub async fn send_contact(
    base: &str,
    submission: &ContactSubmission,
) -> Result<ContactReply, SendError> {
    let url = contact_endpoint(base);
    let req = gloo_net::http::Request::post(&url)
        .json(submission)
        .map_err(|e| {
            log::error!("contact request could not be encoded: {e}");
            SendError::Unreachable
        })?;

    let resp = match req.send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("contact request never reached {url}: {e}");
            return Err(SendError::Unreachable);
        }
    };

    if !resp.ok() {
        let status = resp.status();
        let status_text = resp.status_text();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("contact request rejected: {status} {status_text}");
        return Err(SendError::Rejected {
            message: rejection_message(status, &status_text, &body),
        });
    }

    let reply: ContactReply = match resp.json().await {
        Ok(reply) => reply,
        Err(e) => {
            log::warn!("contact reply was not valid JSON: {e}");
            return Err(SendError::InvalidReply);
        }
    };

    if reply_success(&reply.success) {
        Ok(reply)
    } else {
        Err(SendError::Refused {
            message: refusal_message(&reply),
        })
    }
}

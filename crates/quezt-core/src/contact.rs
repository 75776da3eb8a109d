//! Contact form contract.
//!
//! A raw request body is decoded into an untyped JSON value, validated into a
//! [`ContactSubmission`], and mapped to exactly one of three replies:
//!
//! | Outcome | Status | Body |
//! |---|---|---|
//! | accepted | 200 | `{"success": true, "message": CONFIRMATION_MESSAGE}` |
//! | missing name, email or message | 400 | `{"error": "Missing required fields"}` |
//! | undecodable body or other failure | 500 | `{"error": "Internal server error"}` |
//!
//! Nothing here sends mail or stores the submission. Email format is not
//! checked and submissions are not de-duplicated.

use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CONFIRMATION_MESSAGE: &str = "Thank you for your message. We will be in touch soon!";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    MissingFields,
}

impl RejectReason {
    /// Client-facing error text.
    pub fn message(self) -> &'static str {
        match self {
            RejectReason::MissingFields => "Missing required fields",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted(ContactSubmission),
    Rejected(RejectReason),
}

// ---------------------------------------------------------------------------
// Decode + validate
// ---------------------------------------------------------------------------

/// Parse a raw body into an untyped value. No shape is assumed yet.
pub fn decode(raw: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(raw)?)
}

/// Classify an arbitrary payload.
///
/// `name`, `email` and `message` must each carry a usable value: absent,
/// `null`, `false`, `0` and blank strings count as missing. Any other value is
/// kept; strings are trimmed, everything else becomes its compact JSON text.
/// `company` is optional and dropped when blank.
pub fn validate(payload: &Value) -> ValidationOutcome {
    let name = text_field(payload, "name");
    let email = text_field(payload, "email");
    let message = text_field(payload, "message");

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) => {
            ValidationOutcome::Accepted(ContactSubmission {
                name,
                email,
                company: text_field(payload, "company"),
                message,
            })
        }
        _ => ValidationOutcome::Rejected(RejectReason::MissingFields),
    }
}

fn text_field(payload: &Value, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Endpoint contract
// ---------------------------------------------------------------------------

/// The single reply produced for one submission attempt.
#[derive(Debug)]
pub enum SubmissionReply {
    Accepted(ContactSubmission),
    Rejected(RejectReason),
    Failed(SiteError),
}

impl SubmissionReply {
    pub fn status(&self) -> u16 {
        match self {
            SubmissionReply::Accepted(_) => 200,
            SubmissionReply::Rejected(_) => 400,
            SubmissionReply::Failed(_) => 500,
        }
    }

    pub fn body(&self) -> Value {
        match self {
            SubmissionReply::Accepted(_) => serde_json::json!({
                "success": true,
                "message": CONFIRMATION_MESSAGE,
            }),
            SubmissionReply::Rejected(reason) => serde_json::json!({ "error": reason.message() }),
            SubmissionReply::Failed(_) => serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE }),
        }
    }
}

impl From<ValidationOutcome> for SubmissionReply {
    fn from(outcome: ValidationOutcome) -> Self {
        match outcome {
            ValidationOutcome::Accepted(s) => SubmissionReply::Accepted(s),
            ValidationOutcome::Rejected(r) => SubmissionReply::Rejected(r),
        }
    }
}

/// Decode and validate a raw request body.
///
/// A body of literal `null` is valid JSON with no fields, so it is rejected
/// with 400 rather than treated as a failure.
pub fn handle(raw: &[u8]) -> SubmissionReply {
    match decode(raw) {
        Ok(payload) => validate(&payload).into(),
        Err(e) => SubmissionReply::Failed(e),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

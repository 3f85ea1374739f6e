use serde::Serialize;
use serde_json::Value;

use crate::error::RelayError;

/// A contact form submission after trimming. All three fields are non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Parses the raw request body. An empty body behaves like `{}`, and a JSON
    /// value that isn't an object carries no fields.
    pub fn from_body(body: &[u8]) -> Result<Self, RelayError> {
        let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Default::default())
        } else {
            serde_json::from_slice(body)?
        };

        let submission = ContactSubmission {
            name: field_text(&value, "name"),
            email: field_text(&value, "email"),
            message: field_text(&value, "message"),
        };

        if submission.name.is_empty() || submission.email.is_empty() || submission.message.is_empty() {
            return Err(RelayError::Validation);
        }
        Ok(submission)
    }
}

fn field_text(body: &Value, key: &str) -> String {
    match body.get(key) {
        None => String::new(),
        Some(value) if is_falsy(value) => String::new(),
        Some(value) => coerce_text(value).trim().to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Text form of a submitted value. Arrays join their items with commas and
/// null items become empty, so `[]` reads as an empty field.
fn coerce_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(coerce_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

/// Body sent to the Resend `/emails` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub reply_to: String,
    #[serde(rename = "replyTo")]
    pub reply_to_camel: String,
    pub headers: ReplyHeaders,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyHeaders {
    #[serde(rename = "Reply-To")]
    pub reply_to: String,
}

#[derive(Debug, Serialize)]
pub struct RelaySuccess {
    pub ok: bool,
    pub data: Value,
}

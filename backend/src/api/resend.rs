use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::contact::{ContactConfig, CONTACT_SUBJECT};
use crate::error::RelayError;
use crate::handlers::contact_dtos::{ContactSubmission, OutboundEmail, ReplyHeaders};

pub const RESEND_EMAILS_URL: &str = "https://api.resend.com/emails";

/// Delivers a single email. The relay never retries, so one call is one attempt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<Value, RelayError>;
}

pub struct ResendClient {
    client: Client,
    endpoint: String,
}

impl ResendClient {
    pub fn new() -> Self {
        Self::with_endpoint(RESEND_EMAILS_URL.to_string())
    }

    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

impl Default for ResendClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<Value, RelayError> {
        tracing::info!("Sending contact email to {:?}", email.to);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        interpret_response(status, &body)
    }
}

/// Maps Resend's reply to the relay result. Only 2xx counts as delivered.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<Value, RelayError> {
    if !status.is_success() {
        tracing::error!("Resend API request failed. Status: {}, Body: {}", status, body);
        return Err(RelayError::Upstream(format!(
            "Resend API error ({}): {}",
            status.as_u16(),
            body
        )));
    }

    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body)
        .map_err(|e| RelayError::Upstream(format!("Invalid response from Resend: {}", e)))
}

pub fn build_email(submission: &ContactSubmission, config: &ContactConfig) -> OutboundEmail {
    OutboundEmail {
        from: config.sender(),
        to: vec![config.to.clone()],
        subject: CONTACT_SUBJECT.to_string(),
        text: format!(
            "Name: {}\nEmail: {}\n\n{}",
            submission.name, submission.email, submission.message
        ),
        reply_to: submission.email.clone(),
        reply_to_camel: submission.email.clone(),
        headers: ReplyHeaders {
            reply_to: submission.email.clone(),
        },
    }
}

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};

use crate::api::resend::build_email;
use crate::error::RelayError;
use crate::handlers::contact_dtos::{ContactSubmission, RelaySuccess};
use crate::AppState;

pub async fn send_email(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RelaySuccess>, RelayError> {
    let submission = ContactSubmission::from_body(&body).map_err(|e| {
        tracing::warn!("Rejected contact submission: {}", e);
        e
    })?;

    let api_key = state.contact.api_key.as_deref().ok_or_else(|| {
        tracing::error!("RESEND_API_KEY missing, cannot relay contact submission");
        RelayError::MissingApiKey
    })?;

    let email = build_email(&submission, &state.contact);
    let data = state.mailer.send(api_key, &email).await?;

    tracing::info!("Relayed contact message from {}", submission.email);
    Ok(Json(RelaySuccess { ok: true, data }))
}

pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

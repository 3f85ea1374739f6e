use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Everything that can go wrong while relaying a contact form submission.
/// Each variant maps to exactly one HTTP response, so nothing escapes the handler.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Missing fields")]
    Validation,

    #[error("Missing RESEND_API_KEY")]
    MissingApiKey,

    #[error("{0}")]
    Upstream(String),

    #[error("Invalid request body: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Validation => StatusCode::BAD_REQUEST,
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::MissingApiKey
            | RelayError::Upstream(_)
            | RelayError::MalformedRequest(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        RelayError::Upstream(e.to_string())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            RelayError::MethodNotAllowed => (
                status,
                [(header::ALLOW, "POST")],
                "Method Not Allowed",
            )
                .into_response(),
            RelayError::Validation => {
                (status, Json(json!({"error": "Missing fields"}))).into_response()
            }
            RelayError::MissingApiKey => {
                (status, Json(json!({"error": "Missing RESEND_API_KEY"}))).into_response()
            }
            RelayError::Upstream(_) | RelayError::MalformedRequest(_) => {
                tracing::error!("Contact relay failed: {}", self);
                (
                    status,
                    Json(json!({"error": "Server error", "detail": self.to_string()})),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_kind() {
        assert_eq!(RelayError::Validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(RelayError::MissingApiKey.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            RelayError::Upstream("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(RelayError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn method_not_allowed_is_plain_text() {
        let response = RelayError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
        assert!(response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }
}

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Custom error type for pr_title_guard operations
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("missing X-Hub-Signature header")]
    MissingSignature,

    #[error("payload signature check failed")]
    SignatureMismatch,

    #[error("malformed body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("payload submitted for wrong repo: {0}")]
    WrongRepository(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to post comment: {0}")]
    CommentPost(String),
}

impl IntoResponse for HookError {
    fn into_response(self) -> Response {
        // Response bodies are fixed per variant; the detail stays in the logs.
        let (status, message) = match &self {
            HookError::MissingSignature => (StatusCode::BAD_REQUEST, "Missing X-Hub-Signature"),
            HookError::SignatureMismatch => (
                StatusCode::FORBIDDEN,
                "Validating payload against signature failed",
            ),
            HookError::MalformedBody(_) => (StatusCode::BAD_REQUEST, "Malformed body"),
            HookError::WrongRepository(_) => {
                (StatusCode::BAD_REQUEST, "Payload submitted for wrong repo")
            }
            HookError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server misconfigured"),
            HookError::CommentPost(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Unable to post comment")
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Helper type for Results that use HookError
pub type Result<T> = std::result::Result<T, HookError>;

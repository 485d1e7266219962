use crate::state::MessageError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::debug;

/// HTTP server initialization errors
#[derive(Debug, Error)]
pub enum HttpInitError {
    #[error("Failed to bind HTTP listener {addr}: {reason}")]
    BindFailed { addr: String, reason: String },
}

/// HTTP server runtime errors
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("HTTP server failed: {0}")]
    Serve(String),
}

/// Request rejections; all of them happen before any state change or send
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    InvalidMessage(#[from] MessageError),

    #[error("{0}")]
    InvalidField(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(error = %self, "Rejecting request");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

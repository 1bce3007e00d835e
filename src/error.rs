use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::outbound::OutboundError;
use crate::password::PasswordError;

/// Errors surfaced by route handlers.
///
/// Every variant renders as `{"error": "<message>"}`. Logical failures keep
/// status 200 so existing clients that branch on the `error` key keep working.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Outbound(#[from] OutboundError),
}

/// JSON error payload
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Password(e) => tracing::warn!(error = %e, "Password request rejected"),
            AppError::Outbound(OutboundError::Transport(e)) => {
                tracing::warn!(error = %e, "Upstream request failed")
            }
            AppError::Outbound(e) => tracing::warn!(error = %e, "Outbound request rejected"),
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}

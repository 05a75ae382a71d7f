use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub const NOT_CONFIGURED_MESSAGE: &str = "Twilio credentials not configured";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send SMS";

// The send-failure cause is logged where it happens and never returned.
pub enum AppError {
    NotConfigured,
    SendFailed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::NotConfigured => NOT_CONFIGURED_MESSAGE,
            AppError::SendFailed => SEND_FAILED_MESSAGE,
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": message })),
        )
            .into_response()
    }
}

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use log::{error, info, warn};

use crate::config::CredentialSource;
use crate::error::AppError;
use crate::provider::{mask_phone, OutgoingSms, SmsProvider};
use crate::types::{HealthResponse, SendRequest, SendResponse};

pub const MESSAGE_BODY: &str = "Hello from All Hands SMS Demo!";

const INDEX_HTML: &str = include_str!("../static/index.html");

pub struct AppState {
    pub credentials: CredentialSource,
    pub provider: Arc<dyn SmsProvider>,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// Credentials are checked before the body is parsed.
pub async fn send_sms(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let creds = state.credentials.load().ok_or_else(|| {
        warn!("Rejecting send: Twilio credentials not configured");
        AppError::NotConfigured
    })?;

    let req: SendRequest = serde_json::from_slice(&body).map_err(|e| {
        error!(
            "Error sending SMS: malformed request body ({:?} at line {} column {})",
            e.classify(),
            e.line(),
            e.column()
        );
        AppError::SendFailed
    })?;
    let masked = mask_phone(&req.phone_number);

    let sms = OutgoingSms {
        to: &req.phone_number,
        from: &creds.from_number,
        body: MESSAGE_BODY,
    };
    let sid = state.provider.send(&creds, sms).await.map_err(|e| {
        error!("Error sending SMS to {}: {}", masked, e);
        AppError::SendFailed
    })?;
    info!("Sent SMS {} to {}", sid, masked);

    Ok((StatusCode::OK, Json(SendResponse { success: true })))
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = if state.credentials.load().is_some() {
        "ok"
    } else {
        "unconfigured"
    };
    Json(HealthResponse {
        status: status.to_string(),
    })
}

mod config;
mod error;
mod handlers;
mod provider;
mod twilio;
mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use log::{info, warn};
use tower_http::cors::CorsLayer;

use config::CredentialSource;
use handlers::AppState;
use twilio::TwilioClient;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/send-sms", post(handlers::send_sms))
        .route("/api/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    pretty_env_logger::init_timed();

    let api_base = config::api_base();
    let port = config::port();

    let credentials = CredentialSource::Env;
    if credentials.load().is_none() {
        warn!("Twilio credentials are not set; /api/send-sms will answer 500 until they are");
    }

    info!("Twilio API base: {}", api_base);
    let provider = Arc::new(TwilioClient::new(api_base)?);
    let state = Arc::new(AppState {
        credentials,
        provider,
    });

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

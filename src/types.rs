use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SendRequest {
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

#[derive(Serialize)]
pub struct SendResponse {
    pub success: bool,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

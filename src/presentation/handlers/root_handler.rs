use axum::Json;
use serde::{Deserialize, Serialize};

pub const LIVENESS_MESSAGE: &str = "AI Attendance Management API is running!";

#[derive(Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// liveness check
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: LIVENESS_MESSAGE.to_string(),
    })
}

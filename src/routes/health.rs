use axum::{routing::get, Json, Router};

use crate::models::HealthResponse;

pub fn router() -> Router {
    Router::new().route("/api/health", get(health_check))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        model: crate::llm::google::models::DEFAULT.to_string(),
    })
}

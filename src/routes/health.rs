use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::AppState;
use crate::models::responses::StatusResponse;
use crate::services::prompt::HEALTH_MESSAGE;

#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, body = String, content_type = "text/plain", description = "Liveness check")),
    tag = "Health"
)]
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

#[utoipa::path(
    get,
    path = "/status",
    responses((status = 200, body = StatusResponse, description = "Detailed service status")),
    tag = "Health"
)]
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: state.settings.app_name.clone(),
        version: state.settings.app_version.clone(),
        environment: state.settings.environment.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        gemini_configured: state.chat.is_configured(),
        timestamp: Utc::now().naive_utc(),
    })
}

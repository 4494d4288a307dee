use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::core::metrics;
use crate::core::state::AppState;
use crate::schemas::HealthResponse;

pub(crate) const WELCOME_MESSAGE: &str =
    "Welcome to the Items API! Use /items endpoints to manage items.";

pub(crate) async fn root() -> &'static str {
    WELCOME_MESSAGE
}

pub(crate) async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        service: state.settings().api().project_name.clone(),
        status: "healthy".to_string(),
        version: state.settings().api().version.clone(),
        item_count: state.items().len(),
    })
}

pub(crate) async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    if !state.settings().telemetry().prometheus_enabled {
        return StatusCode::NOT_FOUND.into_response();
    }

    match metrics::render() {
        Some(body) => ([(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
            .into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

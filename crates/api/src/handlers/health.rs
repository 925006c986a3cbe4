use axum::{extract::State, http::StatusCode, Json};
use deli_core::{AppState, Persistence};
use deli_primitives::models::dtos::order_dto::HealthStatus;
use std::sync::Arc;
use tracing::error;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    summary = "Health check endpoint",
    description = "Reports whether the API can serve requests and which storage mode was chosen at startup. \
                   Running without a database is a degraded but healthy state.",
    operation_id = "healthCheck",
    responses(
        (status = 200, description = "Service status", body = HealthStatus),
    ),
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    let persistence = state.persistence.label().to_string();

    match (&state.persistence, state.persistence.check()) {
        (_, Ok(())) => Json(HealthStatus {
            status: StatusCode::OK.to_string(),
            message: "API is healthy".to_string(),
            persistence,
        }),
        (Persistence::Unavailable, Err(_)) => Json(HealthStatus {
            status: StatusCode::OK.to_string(),
            message: "API is healthy; orders are not being persisted".to_string(),
            persistence,
        }),
        (_, Err(e)) => {
            error!("Health check DB query failed: {}", e);
            Json(HealthStatus {
                status: StatusCode::SERVICE_UNAVAILABLE.to_string(),
                message: "Health check DB query failed".to_string(),
                persistence,
            })
        }
    }
}

use axum::extract::{Json, State};
use deli_core::services::report_service::{ApiError, ReportService};
use deli_core::AppState;
use deli_primitives::models::dtos::order_dto::{OrdersResponse, StorageNotice, SummaryResponse};
use std::sync::Arc;

const NO_STORAGE_MESSAGE: &str = "Order history is unavailable: no database connection";

fn notice() -> StorageNotice {
    StorageNotice {
        message: NO_STORAGE_MESSAGE.to_string(),
    }
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "Stored orders, newest first, or a notice when nothing is persisted", body = OrdersResponse),
        (status = 500, description = "Database error")
    ),
    tag = "Admin"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<OrdersResponse>, ApiError> {
    match ReportService::list_orders(&state) {
        Ok(orders) => Ok(Json(OrdersResponse::Orders(orders))),
        Err(ApiError::PersistenceUnavailable(_)) => Ok(Json(OrdersResponse::Unavailable(notice()))),
        Err(e) => Err(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/orders/summary",
    responses(
        (status = 200, description = "Dashboard totals", body = SummaryResponse),
        (status = 500, description = "Database error")
    ),
    tag = "Admin"
)]
pub async fn order_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SummaryResponse>, ApiError> {
    match ReportService::summary(&state) {
        Ok(summary) => Ok(Json(SummaryResponse::Summary(summary))),
        Err(ApiError::PersistenceUnavailable(_)) => Ok(Json(SummaryResponse::Unavailable(notice()))),
        Err(e) => Err(e),
    }
}

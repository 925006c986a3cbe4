use axum::extract::{Json, Path, State};
use deli_core::services::refund_service::RefundService;
use deli_core::AppState;
use deli_primitives::models::dtos::order_dto::RefundResponse;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::warn;

#[utoipa::path(
    post,
    path = "/api/refund-order/{order_id}",
    params(
        ("order_id" = String, Path, description = "Stored order id")
    ),
    responses(
        (status = 200, description = "Refund processed", body = RefundResponse),
        (status = 404, description = "Order not found", body = RefundResponse),
        (status = 409, description = "Order already refunded", body = RefundResponse),
        (status = 500, description = "Payment provider error", body = RefundResponse)
    ),
    tag = "Admin"
)]
pub async fn refund_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> (StatusCode, Json<RefundResponse>) {
    match RefundService::refund(&state, &order_id).await {
        Ok(refund) => (
            StatusCode::OK,
            Json(RefundResponse::succeeded(refund.refund_id, refund.refund_amount)),
        ),
        Err(e) => {
            warn!(error = %e, order_id = %order_id, "Refund failed");
            let (status, message) = e.status_and_message();
            (status, Json(RefundResponse::failed(message)))
        }
    }
}

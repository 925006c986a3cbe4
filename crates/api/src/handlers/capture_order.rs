use axum::extract::{Json, Path, State};
use deli_core::services::checkout_service::{ApiError, CheckoutService, Order};
use deli_core::AppState;
use deli_primitives::models::dtos::checkout_dto::CaptureOrderRequest;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/capture-order/{order_id}",
    params(
        ("order_id" = String, Path, description = "PayPal order id returned by create-order")
    ),
    request_body = CaptureOrderRequest,
    responses(
        (status = 200, description = "Captured order, stored when persistence is available", body = Order),
        (status = 500, description = "Capture rejected or could not be processed")
    ),
    tag = "Checkout"
)]
pub async fn capture_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    body: Option<Json<CaptureOrderRequest>>,
) -> Result<Json<Order>, ApiError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let order = CheckoutService::capture_order(&state, &order_id, req.item_id.as_deref()).await?;

    Ok(Json(order))
}

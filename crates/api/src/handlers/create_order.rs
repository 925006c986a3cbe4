use axum::extract::{Json, State};
use deli_core::services::checkout_service::{ApiError, CheckoutService, CreateOrderResponse};
use deli_core::AppState;
use deli_primitives::models::dtos::checkout_dto::CreateOrderRequest;
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/create-order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "PayPal order created", body = CreateOrderResponse),
        (status = 400, description = "Invalid item id"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Payment provider error")
    ),
    tag = "Checkout"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>, ApiError> {
    req.validate()?;

    let created = CheckoutService::create_order(&state, &req.item_id).await?;

    Ok(Json(created))
}

use crate::handlers::{
    capture_order::__path_capture_order, create_order::__path_create_order,
    health::__path_health_check, orders::__path_list_orders, orders::__path_order_summary,
    products::__path_list_products, refund_order::__path_refund_order,
};
use deli_primitives::models::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_products, create_order, capture_order,
        list_orders, order_summary, refund_order, health_check
    ),
    components(schemas(
        Product, Order, RefundDetails, OrderStatus, PaymentMethod,
        CreateOrderRequest, CreateOrderResponse, CaptureOrderRequest,
        RefundResponse, OrderSummary, StorageNotice, HealthStatus
    )),
    tags(
        (name = "Catalog", description = "Products offered by the shop"),
        (name = "Checkout", description = "PayPal order creation and capture"),
        (name = "Admin", description = "Order history, totals and refunds"),
        (name = "Health", description = "Service status")
    )
)]
pub struct ApiDoc;

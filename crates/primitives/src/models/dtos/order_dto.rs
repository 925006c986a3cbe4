use crate::models::entities::order::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefundResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub refund_id: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        with = "rust_decimal::serde::float_option"
    )]
    #[schema(value_type = Option<f64>)]
    pub refund_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl RefundResponse {
    pub fn succeeded(refund_id: String, refund_amount: Decimal) -> Self {
        Self {
            success: true,
            refund_id: Some(refund_id),
            refund_amount: Some(refund_amount),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            refund_id: None,
            refund_amount: None,
            error: Some(error.into()),
        }
    }
}

/// Body returned by reporting routes when there is nothing persistent to report on.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StorageNotice {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum OrdersResponse {
    Orders(Vec<Order>),
    Unavailable(StorageNotice),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub total_orders: usize,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub average_order: Decimal,
    pub today_orders: usize,
    pub refunded_orders: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SummaryResponse {
    Summary(OrderSummary),
    Unavailable(StorageNotice),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub persistence: String,
}

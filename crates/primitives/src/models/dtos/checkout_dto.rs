use crate::utility::validate_item_id;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(custom(function = "validate_item_id"))]
    pub item_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    /// Gateway intent id, handed to the buyer's approval flow.
    pub id: String,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub approve_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOrderRequest {
    #[serde(default)]
    pub item_id: Option<String>,
}

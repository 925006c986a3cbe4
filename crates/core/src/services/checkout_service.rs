use crate::app_state::AppState;
use crate::services::caption::{buyer_full_name, compose_caption};
use crate::services::catalog_service::CatalogService;
use chrono::Utc;
pub use deli_primitives::{
    error::ApiError,
    models::{
        dtos::checkout_dto::CreateOrderResponse,
        dtos::providers::paypal::{PayPalAmount, PayPalCaptureResponse},
        entities::enum_types::{OrderStatus, PaymentMethod},
        entities::order::Order,
        entities::product::Product,
    },
};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{info, warn};
use uuid::Uuid;

/// PayPal caps purchase-unit descriptions at 127 characters.
const MAX_DESCRIPTION_CHARS: usize = 127;
const FALLBACK_ITEM: &str = "Item";

/// The parts of a PayPal capture response that end up on an order.
struct CapturedPayment {
    transaction_id: String,
    amount: Decimal,
    currency: String,
    buyer_name: String,
    buyer_email: Option<String>,
    gateway_description: Option<String>,
    reference_id: Option<String>,
}

impl CapturedPayment {
    fn from_response(resp: PayPalCaptureResponse) -> Result<Self, ApiError> {
        let unit = resp
            .purchase_units
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::Gateway("Capture response has no purchase units".into()))?;

        let capture = unit
            .payments
            .captures
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::Gateway("Capture response has no captures".into()))?;

        if let Some(status) = capture.status.as_deref() {
            if status.eq_ignore_ascii_case("DECLINED") || status.eq_ignore_ascii_case("FAILED") {
                return Err(ApiError::Gateway(format!(
                    "Capture {} finished with status {}",
                    capture.id, status
                )));
            }
        }

        let amount = Decimal::from_str(capture.amount.value.trim()).map_err(|_| {
            ApiError::Gateway(format!("Invalid captured amount: {}", capture.amount.value))
        })?;

        let (buyer_name, buyer_email) = match resp.payer {
            Some(payer) => {
                let name = payer.name.as_ref();
                (
                    buyer_full_name(
                        name.and_then(|n| n.given_name.as_deref()),
                        name.and_then(|n| n.surname.as_deref()),
                    ),
                    payer.email_address,
                )
            }
            None => (buyer_full_name(None, None), None),
        };

        Ok(Self {
            transaction_id: capture.id,
            amount,
            currency: capture.amount.currency_code,
            buyer_name,
            buyer_email,
            gateway_description: unit.description.filter(|d| !d.trim().is_empty()),
            reference_id: unit.reference_id.filter(|r| !r.trim().is_empty()),
        })
    }
}

pub struct CheckoutService;

impl CheckoutService {
    /// Opens a PayPal intent for the product's current price. Nothing is stored.
    pub async fn create_order(
        state: &AppState,
        item_id: &str,
    ) -> Result<CreateOrderResponse, ApiError> {
        let product = CatalogService::find_product(state, item_id.trim())?;

        let amount = PayPalAmount {
            currency_code: state.config.paypal_details.currency.clone(),
            value: format!("{:.2}", product.price),
        };

        let intent = state
            .paypal
            .create_order(&product.id, intent_description(&product), amount)
            .await?;

        info!(
            paypal_order_id = %intent.id,
            item_id = %product.id,
            price = %product.price,
            "PayPal order created"
        );

        Ok(CreateOrderResponse {
            approve_url: intent.approve_url().map(str::to_string),
            id: intent.id,
            product_name: product.name,
        })
    }

    /// Captures an approved intent and records the resulting order.
    ///
    /// A gateway rejection is returned as is. A storage failure is not: the
    /// buyer has paid, so the order is handed back unstored.
    pub async fn capture_order(
        state: &AppState,
        external_order_id: &str,
        item_id: Option<&str>,
    ) -> Result<Order, ApiError> {
        let response = state.paypal.capture_order(external_order_id).await?;
        let payment = CapturedPayment::from_response(response)?;

        // the correlation token set at create time stands in for a missing item id
        let item_id = item_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .or_else(|| payment.reference_id.clone());
        let product = item_id.as_deref().and_then(|id| resolve_product(state, id));

        let (item, item_description) = match product {
            Some(p) => (p.name, Some(p.description)),
            None => (
                payment
                    .gateway_description
                    .clone()
                    .unwrap_or_else(|| FALLBACK_ITEM.to_string()),
                payment.gateway_description.clone(),
            ),
        };

        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            external_order_id: external_order_id.to_string(),
            order_caption: compose_caption(&payment.buyer_name, &item, payment.amount),
            buyer_name: payment.buyer_name,
            buyer_email: payment.buyer_email,
            status: OrderStatus::Captured,
            amount: payment.amount,
            currency: payment.currency,
            item_id,
            item,
            item_description,
            transaction_id: payment.transaction_id,
            payment_method: PaymentMethod::Paypal,
            refund: None,
            created_at: now,
            updated_at: now,
        };

        match state.orders.insert(&order) {
            Ok(()) => info!(
                order_id = %order.id,
                paypal_order_id = %order.external_order_id,
                amount = %order.amount,
                "Order captured and stored"
            ),
            Err(e) => warn!(
                error = %e,
                order_id = %order.id,
                paypal_order_id = %order.external_order_id,
                "Order captured but not stored"
            ),
        }

        Ok(order)
    }
}

fn intent_description(product: &Product) -> String {
    format!("{}: {}", product.name, product.description)
        .chars()
        .take(MAX_DESCRIPTION_CHARS)
        .collect()
}

/// Catalog problems after a capture must not fail the request; the gateway
/// description stands in instead.
fn resolve_product(state: &AppState, item_id: &str) -> Option<Product> {
    match state.catalog.find(item_id) {
        Ok(Some(product)) => Some(product),
        Ok(None) => {
            warn!(item_id, "Captured item no longer in catalog; using gateway description");
            None
        }
        Err(e) => {
            warn!(error = %e, item_id, "Catalog lookup failed during capture");
            None
        }
    }
}

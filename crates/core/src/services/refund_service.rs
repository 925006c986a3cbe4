use crate::app_state::AppState;
use chrono::Utc;
pub use deli_primitives::{error::ApiError, models::entities::order::RefundDetails};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{error, info, warn};
use uuid::Uuid;

pub struct RefundService;

impl RefundService {
    /// Refunds the capture behind a stored order.
    ///
    /// The order is looked up before PayPal is contacted, so unknown or
    /// already refunded orders never reach the gateway. Two racing calls may
    /// both refund at PayPal; only the first one updates the record.
    pub async fn refund(state: &AppState, order_id: &str) -> Result<RefundDetails, ApiError> {
        let not_found = || ApiError::NotFound(format!("Order {} not found", order_id));

        let id = Uuid::parse_str(order_id.trim()).map_err(|_| not_found())?;
        let order = state.orders.find(id)?.ok_or_else(not_found)?;

        if order.is_refunded() {
            return Err(ApiError::AlreadyRefunded(format!(
                "Order {} has already been refunded",
                order.id
            )));
        }

        let outcome = state.paypal.refund_capture(&order.transaction_id).await?;

        if is_rejected(&outcome.status) {
            warn!(
                order_id = %order.id,
                refund_id = %outcome.id,
                refund_status = %outcome.status,
                "PayPal did not complete the refund"
            );
            return Err(ApiError::Gateway(format!(
                "Refund {} finished with status {}",
                outcome.id, outcome.status
            )));
        }

        let refund_amount = match outcome.amount.as_ref() {
            None => order.amount,
            Some(amount) => Decimal::from_str(amount.value.trim()).unwrap_or_else(|_| {
                warn!(
                    order_id = %order.id,
                    reported = %amount.value,
                    "Unreadable refund amount from PayPal; recording the order amount"
                );
                order.amount
            }),
        };

        let refund = RefundDetails {
            refund_amount,
            refund_id: outcome.id,
            refund_date: Utc::now(),
            refund_status: outcome.status,
        };

        match state.orders.mark_refunded(order.id, &refund) {
            Ok(Some(_)) => {
                info!(
                    order_id = %order.id,
                    refund_id = %refund.refund_id,
                    amount = %refund.refund_amount,
                    "Order refunded"
                );
                Ok(refund)
            }
            Ok(None) => {
                error!(
                    order_id = %order.id,
                    refund_id = %refund.refund_id,
                    "PayPal refunded an order another request had already refunded"
                );
                Err(ApiError::AlreadyRefunded(format!(
                    "Order {} has already been refunded",
                    order.id
                )))
            }
            Err(e) => {
                error!(
                    error = %e,
                    order_id = %order.id,
                    refund_id = %refund.refund_id,
                    "PayPal refund succeeded but the order record was not updated"
                );
                Err(e)
            }
        }
    }
}

/// PayPal answers some refunds with a 2xx but a terminal non-success status.
fn is_rejected(status: &str) -> bool {
    status.eq_ignore_ascii_case("FAILED") || status.eq_ignore_ascii_case("CANCELLED")
}

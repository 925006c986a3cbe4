use crate::models::entities::enum_types::{OrderStatus, PaymentMethod};
use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A captured order as the rest of the system sees it.
///
/// `amount` is whatever the gateway reported at capture, never the catalog price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub external_order_id: String,
    pub buyer_name: String,
    pub buyer_email: Option<String>,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 3.75)]
    pub amount: Decimal,
    pub currency: String,
    pub item_id: Option<String>,
    pub item: String,
    pub item_description: Option<String>,
    pub order_caption: String,
    pub transaction_id: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub refund: Option<RefundDetails>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefundDetails {
    pub refund_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub refund_amount: Decimal,
    pub refund_date: DateTime<Utc>,
    pub refund_status: String,
}

impl Order {
    pub fn is_refunded(&self) -> bool {
        self.status == OrderStatus::Refunded
    }

    /// Applies a gateway refund outcome, moving the order to `Refunded`.
    pub fn apply_refund(&mut self, refund: RefundDetails) {
        self.status = OrderStatus::Refunded;
        self.updated_at = refund.refund_date;
        self.refund = Some(refund);
    }
}

// ── Row mapping for the `orders` table

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRecord {
    pub id: Uuid,
    pub external_order_id: String,
    pub buyer_name: String,
    pub buyer_email: Option<String>,
    pub status: OrderStatus,
    pub amount: Decimal,
    pub currency: String,
    pub item_id: Option<String>,
    pub item: String,
    pub item_description: Option<String>,
    pub order_caption: String,
    pub transaction_id: String,
    pub payment_method: String,
    pub refund_id: Option<String>,
    pub refund_amount: Option<Decimal>,
    pub refund_date: Option<DateTime<Utc>>,
    pub refund_status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<OrderRecord> for Order {
    fn from(row: OrderRecord) -> Self {
        let refund = match (row.refund_id, row.refund_amount, row.refund_date) {
            (Some(refund_id), Some(refund_amount), Some(refund_date)) => Some(RefundDetails {
                refund_id,
                refund_amount,
                refund_date,
                refund_status: row.refund_status.unwrap_or_default(),
            }),
            _ => None,
        };

        Self {
            id: row.id,
            external_order_id: row.external_order_id,
            buyer_name: row.buyer_name,
            buyer_email: row.buyer_email,
            status: row.status,
            amount: row.amount,
            currency: row.currency,
            item_id: row.item_id,
            item: row.item,
            item_description: row.item_description,
            order_caption: row.order_caption,
            transaction_id: row.transaction_id,
            // only one provider is ever written
            payment_method: PaymentMethod::Paypal,
            refund,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        let refund = order.refund.as_ref();

        Self {
            id: order.id,
            external_order_id: order.external_order_id.clone(),
            buyer_name: order.buyer_name.clone(),
            buyer_email: order.buyer_email.clone(),
            status: order.status,
            amount: order.amount,
            currency: order.currency.clone(),
            item_id: order.item_id.clone(),
            item: order.item.clone(),
            item_description: order.item_description.clone(),
            order_caption: order.order_caption.clone(),
            transaction_id: order.transaction_id.clone(),
            payment_method: order.payment_method.to_string(),
            refund_id: refund.map(|r| r.refund_id.clone()),
            refund_amount: refund.map(|r| r.refund_amount),
            refund_date: refund.map(|r| r.refund_date),
            refund_status: refund.map(|r| r.refund_status.clone()),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

use crate::app_state::AppState;
use chrono::{NaiveDate, Utc};
pub use deli_primitives::{
    error::ApiError,
    models::{dtos::order_dto::OrderSummary, entities::order::Order},
};
use rust_decimal::Decimal;

pub struct ReportService;

impl ReportService {
    pub fn list_orders(state: &AppState) -> Result<Vec<Order>, ApiError> {
        state.orders.list_newest_first()
    }

    pub fn summary(state: &AppState) -> Result<OrderSummary, ApiError> {
        let orders = state.orders.list_newest_first()?;
        Ok(summarize(&orders, Utc::now().date_naive()))
    }
}

/// Dashboard totals. Revenue counts every captured amount, refunded or not.
pub fn summarize(orders: &[Order], today: NaiveDate) -> OrderSummary {
    let total_orders = orders.len();
    let total_revenue: Decimal = orders.iter().map(|o| o.amount).sum();

    let average_order = if total_orders > 0 {
        (total_revenue / Decimal::from(total_orders)).round_dp(2)
    } else {
        Decimal::ZERO
    };

    OrderSummary {
        total_orders,
        total_revenue,
        average_order,
        today_orders: orders
            .iter()
            .filter(|o| o.created_at.date_naive() == today)
            .count(),
        refunded_orders: orders.iter().filter(|o| o.is_refunded()).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use deli_primitives::models::entities::enum_types::{OrderStatus, PaymentMethod};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn order(amount: Decimal, days_ago: i64, status: OrderStatus) -> Order {
        let created = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap() - Duration::days(days_ago);
        Order {
            id: Uuid::new_v4(),
            external_order_id: "PAYPAL-1".into(),
            buyer_name: "Ann Lee".into(),
            buyer_email: None,
            status,
            amount,
            currency: "USD".into(),
            item_id: Some("3".into()),
            item: "Cold Brew Coffee".into(),
            item_description: None,
            order_caption: String::new(),
            transaction_id: "CAP-1".into(),
            payment_method: PaymentMethod::Paypal,
            refund: None,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn summary_of_no_orders_is_zero() {
        let summary = summarize(&[], NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.total_revenue, Decimal::ZERO);
        assert_eq!(summary.average_order, Decimal::ZERO);
        assert_eq!(summary.today_orders, 0);
    }

    #[test]
    fn summary_totals_and_today_count() {
        let orders = vec![
            order(dec!(3.75), 0, OrderStatus::Captured),
            order(dec!(8.95), 0, OrderStatus::Refunded),
            order(dec!(2.50), 1, OrderStatus::Captured),
        ];

        let summary = summarize(&orders, NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());

        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.total_revenue, dec!(15.20));
        assert_eq!(summary.average_order, dec!(5.07));
        assert_eq!(summary.today_orders, 2);
        assert_eq!(summary.refunded_orders, 1);
    }
}

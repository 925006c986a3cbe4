use crate::persistence::DbPool;
use deli_primitives::error::ApiError;
use deli_primitives::models::entities::enum_types::OrderStatus;
use deli_primitives::models::entities::order::{Order, OrderRecord, RefundDetails};
use deli_primitives::schema::orders;
use diesel::prelude::*;
use uuid::Uuid;

pub trait OrderStore: Send + Sync {
    fn insert(&self, order: &Order) -> Result<(), ApiError>;

    fn find(&self, id: Uuid) -> Result<Option<Order>, ApiError>;

    fn list_newest_first(&self) -> Result<Vec<Order>, ApiError>;

    /// Moves an order to `Refunded` unless it already is.
    ///
    /// Returns `None` when no row changed, which is how a losing concurrent
    /// refund finds out it lost.
    fn mark_refunded(&self, id: Uuid, refund: &RefundDetails) -> Result<Option<Order>, ApiError>;
}

pub struct PgOrderStore {
    pool: DbPool,
}

impl PgOrderStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderStore for PgOrderStore {
    fn insert(&self, order: &Order) -> Result<(), ApiError> {
        let mut conn = self.pool.get()?;

        diesel::insert_into(orders::table)
            .values(OrderRecord::from(order))
            .execute(&mut conn)?;
        Ok(())
    }

    fn find(&self, id: Uuid) -> Result<Option<Order>, ApiError> {
        let mut conn = self.pool.get()?;

        let row = orders::table
            .find(id)
            .select(OrderRecord::as_select())
            .first::<OrderRecord>(&mut conn)
            .optional()?;

        Ok(row.map(Order::from))
    }

    fn list_newest_first(&self) -> Result<Vec<Order>, ApiError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .order(orders::created_at.desc())
            .select(OrderRecord::as_select())
            .load::<OrderRecord>(&mut conn)?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    fn mark_refunded(&self, id: Uuid, refund: &RefundDetails) -> Result<Option<Order>, ApiError> {
        let mut conn = self.pool.get()?;

        let row = diesel::update(
            orders::table
                .filter(orders::id.eq(id))
                .filter(orders::status.ne(OrderStatus::Refunded)),
        )
        .set((
            orders::status.eq(OrderStatus::Refunded),
            orders::refund_id.eq(Some(refund.refund_id.clone())),
            orders::refund_amount.eq(Some(refund.refund_amount)),
            orders::refund_date.eq(Some(refund.refund_date)),
            orders::refund_status.eq(Some(refund.refund_status.clone())),
            orders::updated_at.eq(refund.refund_date),
        ))
        .returning(OrderRecord::as_returning())
        .get_result::<OrderRecord>(&mut conn)
        .optional()?;

        Ok(row.map(Order::from))
    }
}

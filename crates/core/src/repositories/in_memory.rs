use super::order_repository::OrderStore;
use deli_primitives::error::ApiError;
use deli_primitives::models::entities::order::{Order, RefundDetails};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// Orders kept for the life of the process.
///
/// Selected with `STORAGE_BACKEND=memory`; nothing survives a restart.
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> ApiError {
    ApiError::Internal("order store lock poisoned".into())
}

impl OrderStore for MemoryOrderStore {
    fn insert(&self, order: &Order) -> Result<(), ApiError> {
        let mut orders = self.orders.write().map_err(poisoned)?;
        orders.insert(order.id, order.clone());
        Ok(())
    }

    fn find(&self, id: Uuid) -> Result<Option<Order>, ApiError> {
        let orders = self.orders.read().map_err(poisoned)?;
        Ok(orders.get(&id).cloned())
    }

    fn list_newest_first(&self) -> Result<Vec<Order>, ApiError> {
        let orders = self.orders.read().map_err(poisoned)?;
        let mut list: Vec<Order> = orders.values().cloned().collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    fn mark_refunded(&self, id: Uuid, refund: &RefundDetails) -> Result<Option<Order>, ApiError> {
        let mut orders = self.orders.write().map_err(poisoned)?;

        match orders.get_mut(&id) {
            Some(order) if !order.is_refunded() => {
                order.apply_refund(refund.clone());
                Ok(Some(order.clone()))
            }
            _ => Ok(None),
        }
    }
}

/// Stand-in used when the database could not be reached at startup.
/// Writes and listings fail with `PersistenceUnavailable`, lookups find nothing.
#[derive(Default)]
pub struct EphemeralOrderStore;

impl OrderStore for EphemeralOrderStore {
    fn insert(&self, _order: &Order) -> Result<(), ApiError> {
        Err(ApiError::PersistenceUnavailable(
            "order not stored: no database connection".into(),
        ))
    }

    fn find(&self, _id: Uuid) -> Result<Option<Order>, ApiError> {
        Ok(None)
    }

    fn list_newest_first(&self) -> Result<Vec<Order>, ApiError> {
        Err(ApiError::PersistenceUnavailable(
            "orders are not persisted: no database connection".into(),
        ))
    }

    fn mark_refunded(&self, _id: Uuid, _refund: &RefundDetails) -> Result<Option<Order>, ApiError> {
        Err(ApiError::PersistenceUnavailable(
            "refund not stored: no database connection".into(),
        ))
    }
}

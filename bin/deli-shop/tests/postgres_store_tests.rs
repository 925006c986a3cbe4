use chrono::{DateTime, Duration, DurationRound, Utc};
use deli_core::persistence::DbPool;
use deli_core::repositories::{CatalogStore, OrderStore, PgCatalogStore, PgOrderStore};
use deli_core::Persistence;
use deli_primitives::models::app_state::storage_details::{StorageBackend, StorageInfo};
use deli_primitives::models::entities::enum_types::{OrderStatus, PaymentMethod};
use deli_primitives::models::entities::order::{Order, RefundDetails};
use deli_primitives::models::entities::product::seed_catalog;
use diesel::RunQueryDsl;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use secrecy::SecretString;
use uuid::Uuid;

/// Pool against `TEST_DATABASE_URL` with migrations applied, or `None` when
/// no test database is configured.
fn test_pool() -> Option<DbPool> {
    let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("Warning: TEST_DATABASE_URL is not set; skipping Postgres store tests.");
        return None;
    };

    let storage = StorageInfo {
        backend: StorageBackend::Postgres,
        database_url: Some(SecretString::from(database_url)),
    };

    match Persistence::probe(&storage) {
        Persistence::Postgres(pool) => Some(pool),
        _ => panic!("TEST_DATABASE_URL is set but the database is unreachable"),
    }
}

fn order(amount: Decimal, created_at: DateTime<Utc>) -> Order {
    Order {
        id: Uuid::new_v4(),
        external_order_id: format!("PAYPAL-{}", Uuid::new_v4()),
        buyer_name: "José Müller".into(),
        buyer_email: Some("buyer@example.com".into()),
        status: OrderStatus::Captured,
        amount,
        currency: "USD".into(),
        item_id: Some("3".into()),
        item: "Cold Brew Coffee".into(),
        item_description: Some("Slow-steeped for 18 hours, served over ice".into()),
        order_caption: format!("Order paid by José Müller for Cold Brew Coffee ${}", amount),
        transaction_id: format!("CAP-{}", Uuid::new_v4()),
        payment_method: PaymentMethod::Paypal,
        refund: None,
        created_at: micros(created_at),
        updated_at: micros(created_at),
    }
}

/// Postgres keeps microseconds.
fn micros(at: DateTime<Utc>) -> DateTime<Utc> {
    at.duration_trunc(Duration::microseconds(1)).unwrap()
}

fn refund(id: &str, amount: Decimal) -> RefundDetails {
    RefundDetails {
        refund_id: id.into(),
        refund_amount: amount,
        refund_date: micros(Utc::now()),
        refund_status: "COMPLETED".into(),
    }
}

#[test]
fn test_order_row_round_trips() {
    let Some(pool) = test_pool() else { return };
    let store = PgOrderStore::new(pool);

    let placed = order(dec!(3.50), Utc::now());
    store.insert(&placed).unwrap();

    let found = store.find(placed.id).unwrap().unwrap();

    assert_eq!(found, placed);
    assert_eq!(found.amount.to_string(), "3.50");
    assert!(store.find(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn test_orders_listed_newest_first() {
    let Some(pool) = test_pool() else { return };
    let store = PgOrderStore::new(pool);

    let older = order(dec!(2.50), Utc::now() - Duration::hours(2));
    let newer = order(dec!(8.95), Utc::now() - Duration::hours(1));
    store.insert(&older).unwrap();
    store.insert(&newer).unwrap();

    let ids: Vec<Uuid> = store
        .list_newest_first()
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .filter(|id| *id == older.id || *id == newer.id)
        .collect();

    assert_eq!(ids, vec![newer.id, older.id]);
}

#[test]
fn test_mark_refunded_changes_row_once() {
    let Some(pool) = test_pool() else { return };
    let store = PgOrderStore::new(pool);

    let placed = order(dec!(3.75), Utc::now());
    store.insert(&placed).unwrap();

    let first = refund("REFUND-1", dec!(3.75));
    let updated = store.mark_refunded(placed.id, &first).unwrap().unwrap();

    assert_eq!(updated.status, OrderStatus::Refunded);
    assert_eq!(updated.refund, Some(first.clone()));

    let second = store
        .mark_refunded(placed.id, &refund("REFUND-2", dec!(3.75)))
        .unwrap();
    assert!(second.is_none());

    let stored = store.find(placed.id).unwrap().unwrap();
    assert_eq!(stored.refund, Some(first));
}

#[test]
fn test_concurrent_mark_refunded_has_one_winner() {
    let Some(pool) = test_pool() else { return };
    let store = PgOrderStore::new(pool);

    let placed = order(dec!(7.50), Utc::now());
    store.insert(&placed).unwrap();

    let winners = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let store = &store;
                let id = placed.id;
                s.spawn(move || {
                    store
                        .mark_refunded(id, &refund(&format!("REFUND-{}", n), dec!(7.50)))
                        .unwrap()
                })
            })
            .collect();

        handles
            .into_iter()
            .filter_map(|h| h.join().unwrap())
            .count()
    });

    assert_eq!(winners, 1);
}

#[test]
fn test_catalog_seeded_once() {
    let Some(pool) = test_pool() else { return };

    {
        let mut conn = pool.get().unwrap();
        diesel::sql_query("DELETE FROM products")
            .execute(&mut conn)
            .unwrap();
    }

    let store = PgCatalogStore::new(pool);

    assert_eq!(store.seed_if_empty(&seed_catalog()).unwrap(), 6);
    assert_eq!(store.seed_if_empty(&seed_catalog()).unwrap(), 0);

    let products = store.list().unwrap();
    assert_eq!(products, seed_catalog());
    assert_eq!(store.find("3").unwrap().unwrap().price, dec!(3.75));
}

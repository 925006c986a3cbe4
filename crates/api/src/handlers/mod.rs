pub mod capture_order;
pub mod create_order;
pub mod health;
pub mod orders;
pub mod products;
pub mod refund_order;

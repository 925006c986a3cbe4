pub mod catalog_repository;
pub mod in_memory;
pub mod order_repository;

pub use catalog_repository::{CatalogStore, PgCatalogStore, StaticCatalogStore};
pub use in_memory::{EphemeralOrderStore, MemoryOrderStore};
pub use order_repository::{OrderStore, PgOrderStore};

use crate::persistence::DbPool;
use deli_primitives::error::ApiError;
use deli_primitives::models::entities::product::{NewProduct, Product};
use deli_primitives::schema::products;
use diesel::prelude::*;

/// Read side of the product catalog. Products never change after seeding.
pub trait CatalogStore: Send + Sync {
    fn list(&self) -> Result<Vec<Product>, ApiError>;

    fn find(&self, id: &str) -> Result<Option<Product>, ApiError>;

    /// Writes `seed` only when the catalog holds no products. Returns the
    /// number of products inserted.
    fn seed_if_empty(&self, seed: &[Product]) -> Result<usize, ApiError>;
}

pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CatalogStore for PgCatalogStore {
    fn list(&self) -> Result<Vec<Product>, ApiError> {
        let mut conn = self.pool.get()?;

        products::table
            .order(products::id.asc())
            .select(Product::as_select())
            .load::<Product>(&mut conn)
            .map_err(ApiError::from)
    }

    fn find(&self, id: &str) -> Result<Option<Product>, ApiError> {
        let mut conn = self.pool.get()?;

        products::table
            .find(id)
            .select(Product::as_select())
            .first::<Product>(&mut conn)
            .optional()
            .map_err(ApiError::from)
    }

    fn seed_if_empty(&self, seed: &[Product]) -> Result<usize, ApiError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, ApiError, _>(|conn| {
            let existing = products::table.count().get_result::<i64>(conn)?;
            if existing > 0 {
                return Ok(0);
            }

            let rows: Vec<NewProduct<'_>> = seed.iter().map(NewProduct::from).collect();

            diesel::insert_into(products::table)
                .values(&rows)
                .on_conflict_do_nothing()
                .execute(conn)
                .map_err(ApiError::from)
        })
    }
}

/// Fixed in-process catalog, used whenever there is no database behind the shop.
pub struct StaticCatalogStore {
    products: Vec<Product>,
}

impl StaticCatalogStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn seeded() -> Self {
        Self::new(deli_primitives::models::entities::product::seed_catalog())
    }
}

impl CatalogStore for StaticCatalogStore {
    fn list(&self) -> Result<Vec<Product>, ApiError> {
        Ok(self.products.clone())
    }

    fn find(&self, id: &str) -> Result<Option<Product>, ApiError> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    fn seed_if_empty(&self, _seed: &[Product]) -> Result<usize, ApiError> {
        Ok(0)
    }
}

use crate::app_state::AppState;
use deli_primitives::error::ApiError;
use deli_primitives::models::entities::product::{seed_catalog, Product};
use tracing::{info, warn};

pub struct CatalogService;

impl CatalogService {
    /// Never fails: a store error falls back to the seed list.
    pub fn list_products(state: &AppState) -> Vec<Product> {
        match state.catalog.list() {
            Ok(products) if !products.is_empty() => products,
            Ok(_) => {
                warn!("Catalog is empty; serving seed products");
                seed_catalog()
            }
            Err(e) => {
                warn!(error = %e, "Catalog lookup failed; serving seed products");
                seed_catalog()
            }
        }
    }

    pub fn find_product(state: &AppState, item_id: &str) -> Result<Product, ApiError> {
        state
            .catalog
            .find(item_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", item_id)))
    }

    pub fn seed_if_empty(state: &AppState) -> Result<usize, ApiError> {
        let inserted = state.catalog.seed_if_empty(&seed_catalog())?;

        if inserted > 0 {
            info!("Seeded catalog with {} products", inserted);
        }
        Ok(inserted)
    }
}

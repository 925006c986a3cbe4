use axum::extract::{Json, State};
use deli_core::services::catalog_service::CatalogService;
use deli_core::AppState;
use deli_primitives::models::entities::product::Product;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Catalog, or the fixed seed list when the store is unavailable", body = [Product])
    ),
    tag = "Catalog"
)]
pub async fn list_products(State(state): State<Arc<AppState>>) -> Json<Vec<Product>> {
    Json(CatalogService::list_products(&state))
}

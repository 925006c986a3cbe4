use axum::routing::get;
use axum::Router;
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use deli_core::services::catalog_service::CatalogService;
use deli_core::AppState;
use deli_primitives::models::app_state::app_config::AppConfig;
use eyre::Report;
use http::HeaderValue;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub fn build_cors(config: &AppConfig) -> Result<CorsLayer, Report> {
    let allowed_origins = config
        .cors_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| eyre::eyre!("Invalid CORS origin: {}", e))?;

    Ok(CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(allowed_origins))
}

pub fn load_env() {
    if dotenvy::dotenv().is_ok() {
        info!("Loaded .env file");
    } else {
        info!("No .env file found, using system environment");
    }
}

pub fn build_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Result<Router, Report> {
    let cors = build_cors(&state.config)?;

    Ok(deli_api::app::create_router(state)
        .route(
            "/metrics",
            get(move || std::future::ready(metric_handle.render())),
        )
        .layer(metric_layer)
        .layer(cors))
}

pub fn initialize_system(state: &Arc<AppState>) {
    match CatalogService::seed_if_empty(state) {
        Ok(0) => info!("Catalog already populated"),
        Ok(n) => info!("Catalog initialized with {} products", n),
        Err(e) => tracing::warn!(
            "Failed to seed catalog: {}. Continuing with whatever the store holds.",
            e
        ),
    }
}

mod observability;

pub mod utility;

pub use deli_primitives::error::ApiError;

use crate::utility::logging::setup_logging;
use crate::utility::server::serve;
use crate::utility::tasks::{build_router, initialize_system, load_env};
use deli_core::{AppState, Persistence};
use deli_primitives::models::app_state::app_config::AppConfig;
use eyre::Report;
use tracing::{info, warn};

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    info!("Starting Deli Shop...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    if !config.paypal_details.has_credentials() {
        warn!("PayPal credentials are not configured; checkout and refunds will fail");
    }

    // 4. decide, once, where catalog and orders live
    let persistence = Persistence::probe(&config.storage_details);

    // 5. build application state
    let state = AppState::new(config, persistence)?;

    // 6. seed the catalog on first start
    initialize_system(&state);

    // 7. initialize metrics
    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    // 8. build axum router
    let app = build_router(state.clone(), metric_layer, metric_handle)?;

    // 9. start HTTP server
    serve(app, &state.config).await?;

    info!("Deli Shop shut down gracefully");
    Ok(())
}

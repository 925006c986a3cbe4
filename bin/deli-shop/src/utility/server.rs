use crate::utility::shutdown::shutdown_signal;
use axum::Router;
use deli_primitives::models::app_state::app_config::AppConfig;
use eyre::{Report, WrapErr};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// Serves the shop until Ctrl+C or SIGTERM. Peer addresses are kept for the rate limiter.
pub async fn serve(router: Router, config: &AppConfig) -> Result<(), Report> {
    let addr = config.bind_address()?;

    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Cannot bind {}", addr))?;

    info!(
        %addr,
        env = %config.app_env,
        currency = %config.paypal_details.currency,
        "Deli Shop accepting orders"
    );
    info!("API docs at http://{}/swagger-ui/", addr);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .wrap_err("HTTP server stopped unexpectedly")
}

use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    capture_order::capture_order, create_order::create_order, health::health_check,
    orders::{list_orders, order_summary},
    products::list_products,
    refund_order::refund_order,
};
use axum::{
    extract::State,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use deli_core::AppState;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(storefront_routes())
        .merge(admin_routes())
        .route("/api/health", get(health_check))
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024)) // 2MB limit
        .layer(middleware::from_fn_with_state(
            state.clone(),
            https_redirect_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        );

    // keyed on peer IP, which the in-process test server does not provide
    if !state.config.is_test() {
        match GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .finish()
        {
            Some(conf) => router = router.layer(GovernorLayer::new(Arc::new(conf))),
            None => warn!("Invalid rate limit configuration; rate limiting disabled"),
        }
    }

    router.with_state(state)
}

fn storefront_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/create-order", post(create_order))
        .route("/api/capture-order/{order_id}", post(capture_order))
}

fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/orders", get(list_orders))
        .route("/api/orders/summary", get(order_summary))
        .route("/api/refund-order/{order_id}", post(refund_order))
}

async fn https_redirect_middleware(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: middleware::Next,
) -> axum::response::Response {
    if state.config.app_env == "production" {
        let headers = req.headers();
        let proto = headers
            .get("x-forwarded-proto")
            .and_then(|h| h.to_str().ok());

        if let Some("http") = proto {
            let host = headers
                .get("host")
                .and_then(|h| h.to_str().ok())
                .unwrap_or("localhost");

            let path_and_query = req.uri().path_and_query().map(|pq| pq.as_str()).unwrap_or("");
            let redirect_url = format!("https://{}{}", host, path_and_query);

            return axum::response::Redirect::permanent(&redirect_url).into_response();
        }
    }

    next.run(req).await
}

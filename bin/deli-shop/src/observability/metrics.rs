use axum_prometheus::metrics_exporter_prometheus::PrometheusHandle;
use axum_prometheus::{PrometheusMetricLayer, PrometheusMetricLayerBuilder};

/// Request metrics under the `deli_shop` prefix; scrapes of `/metrics` are not counted.
pub fn setup_metrics() -> (PrometheusMetricLayer<'static>, PrometheusHandle) {
    PrometheusMetricLayerBuilder::new()
        .with_prefix("deli_shop")
        .with_ignore_patterns(&["/metrics"])
        .with_default_metrics()
        .build_pair()
}

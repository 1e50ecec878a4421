//! Prometheus metrics for request tracking.
//!
//! This module provides metrics for:
//! - HTTP request counts and latency per route template
//! - Request body decode failures
//! - Non-numeric path ids coerced to zero

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{debug, info};

use crate::error::Result;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Body decode failures counter metric name.
pub const METRIC_BODY_DECODE_FAILURES: &str = "body_decode_failures_total";
/// Path id coercions counter metric name.
pub const METRIC_PATH_ID_COERCIONS: &str = "path_id_coercions_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_counter!(
        METRIC_BODY_DECODE_FAILURES,
        "Total number of request bodies that failed to decode"
    );
    describe_counter!(
        METRIC_PATH_ID_COERCIONS,
        "Total number of non-numeric path ids coerced to zero"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus exporter on its own listener.
///
/// Must be called from within a tokio runtime.
pub fn install_exporter(addr: SocketAddr) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

/// Record a served HTTP request.
pub fn record_http_request(start: Instant, method: &str, route: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(latency_ms);
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Increment body decode failures counter.
pub fn inc_body_decode_failures() {
    counter!(METRIC_BODY_DECODE_FAILURES).increment(1);
}

/// Increment path id coercions counter.
pub fn inc_path_id_coercions() {
    counter!(METRIC_PATH_ID_COERCIONS).increment(1);
}

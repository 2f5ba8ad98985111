//! Metrics collection and exposition.
//!
//! # Metrics
//! - `office_hours_gate_decisions_total` (counter): admissions and rejections by `decision`
//! - `office_hours_requests_total` (counter): responses by `path`, `status`; `path` is a page route or `other`

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_gate_decision(admitted: bool) {
    let decision = if admitted { "admit" } else { "reject" };
    counter!("office_hours_gate_decisions_total", "decision" => decision).increment(1);
}

pub fn record_request(path: &'static str, status: u16) {
    counter!(
        "office_hours_requests_total",
        "path" => path,
        "status" => status.to_string()
    )
    .increment(1);
}

//! Prometheus metrics for RSVP traffic.
//!
//! # Exported Metrics
//!
//! - `wedding_rsvp_submissions_total{attending}` - Accepted RSVPs, by answer
//! - `wedding_rsvp_guests_total` - Guests added by accepted RSVPs
//! - `wedding_rsvp_rejected_total{reason}` - Submissions refused before storage
//! - `wedding_rsvp_storage_errors_total{operation}` - Failed repository calls

use metrics::describe_counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use thiserror::Error;

/// Failure to start the metrics exporter.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// `METRICS_HOST:METRICS_PORT` is not a socket address.
    #[error("invalid metrics address {0}")]
    InvalidAddress(String),

    /// The exporter could not be installed (port in use, recorder already set).
    #[error("failed to install Prometheus exporter: {0}")]
    Install(#[from] BuildError),
}

/// Start the Prometheus scrape endpoint on `addr` and register metric
/// descriptions.
///
/// # Errors
///
/// Returns [`MetricsError`] if `addr` does not parse or the exporter fails
/// to install.
pub fn install_exporter(addr: &str) -> Result<(), MetricsError> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|_| MetricsError::InvalidAddress(addr.to_string()))?;

    PrometheusBuilder::new().with_http_listener(addr).install()?;
    register_metrics();

    tracing::info!(%addr, "Prometheus metrics available at /metrics");
    Ok(())
}

/// Register metric descriptions with the installed recorder.
pub fn register_metrics() {
    describe_counter!(
        "wedding_rsvp_submissions_total",
        "Accepted RSVP submissions by attendance (yes, no)"
    );
    describe_counter!(
        "wedding_rsvp_guests_total",
        "Total guests across accepted attending RSVPs"
    );
    describe_counter!(
        "wedding_rsvp_rejected_total",
        "RSVP submissions rejected before reaching storage, by reason"
    );
    describe_counter!(
        "wedding_rsvp_storage_errors_total",
        "Repository failures by operation (insert, list, stats)"
    );
}

/// Record a stored RSVP.
pub fn record_submission(attending: bool, guest_count: i32) {
    let answer = if attending { "yes" } else { "no" };
    metrics::counter!("wedding_rsvp_submissions_total", "attending" => answer).increment(1);
    if let Ok(guests) = u64::try_from(guest_count) {
        metrics::counter!("wedding_rsvp_guests_total").increment(guests);
    }
}

/// Record a submission refused before storage.
pub fn record_rejection(reason: &'static str) {
    metrics::counter!("wedding_rsvp_rejected_total", "reason" => reason).increment(1);
}

/// Record a failed repository call.
pub fn record_storage_error(operation: &'static str) {
    metrics::counter!("wedding_rsvp_storage_errors_total", "operation" => operation).increment(1);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;

    #[test]
    fn test_invalid_address_is_rejected() {
        let err = install_exporter("not an address").unwrap_err();
        assert!(matches!(err, MetricsError::InvalidAddress(_)));
        assert_eq!(err.to_string(), "invalid metrics address not an address");
    }

    #[test]
    fn test_recording_without_exporter_is_noop() {
        record_submission(true, 3);
        record_submission(false, 0);
        record_rejection("missing_fields");
        record_storage_error("insert");
    }
}

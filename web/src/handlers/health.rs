//! Liveness endpoint.
//!
//! Used by load balancers and container orchestrators to check the process is
//! up. It touches no dependency; readiness lives with the
//! service that owns the database handle.

use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Liveness response body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Liveness {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Crate version of the running build.
    pub version: &'static str,
}

/// Simple health check endpoint (for basic liveness).
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// { "status": "ok", "version": "0.1.0" }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, Json<Liveness>) {
    (
        StatusCode::OK,
        Json(Liveness {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

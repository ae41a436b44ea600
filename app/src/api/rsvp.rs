//! RSVP endpoints.
//!
//! - `POST /api/rsvp`: validate and store one response
//! - `GET /api/rsvp`: every response plus attendance totals
//! - `GET /api/rsvp/export.csv`: the same rows as a spreadsheet download

use crate::metrics;
use crate::server::AppState;
use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use wedding_rsvp_core::export::{CSV_FILENAME, rsvps_to_csv};
use wedding_rsvp_core::{AttendanceStats, RsvpError, RsvpReceipt, RsvpResponse, RsvpSubmission};
use wedding_rsvp_web::{AppError, JsonBody};

/// Message returned with every accepted submission.
pub const SUBMITTED_MESSAGE: &str = "RSVP submitted successfully";

const SUBMIT_FAILED: &str = "Failed to submit RSVP";
const FETCH_FAILED: &str = "Failed to fetch RSVPs";

// ============================================================================
// Response Types
// ============================================================================

/// Body of a successful `POST /api/rsvp`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitRsvpResponse {
    /// Always `true`; failures use the error body instead.
    pub success: bool,
    /// The stored response
    pub rsvp: RsvpReceipt,
    /// Confirmation text
    pub message: String,
}

/// Body of `GET /api/rsvp`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListRsvpsResponse {
    /// Every response, newest first
    pub rsvps: Vec<RsvpResponse>,
    /// Totals over the same table
    pub stats: AttendanceStats,
}

// ============================================================================
// Handlers
// ============================================================================

/// Submit an RSVP.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:8080/api/rsvp \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Alice","email":"a@x.com","attending":"yes","guests":3,"dietary":"vegan"}'
/// ```
pub async fn submit_rsvp(
    State(state): State<AppState>,
    body: Result<JsonBody<RsvpSubmission>, AppError>,
) -> Result<Json<SubmitRsvpResponse>, AppError> {
    let JsonBody(submission) = body.inspect_err(|e| {
        tracing::info!(error = %e, "RSVP body rejected");
        metrics::record_rejection("malformed_body");
    })?;

    let rsvp = submission.normalize().map_err(|e| {
        if let RsvpError::MissingRequiredFields { missing } = &e {
            tracing::info!(?missing, "RSVP rejected");
        }
        metrics::record_rejection("missing_fields");
        to_app_error(e, SUBMIT_FAILED)
    })?;

    let stored = state
        .repository
        .insert(rsvp, state.clock.now())
        .await
        .map_err(|e| {
            metrics::record_storage_error("insert");
            to_app_error(e, SUBMIT_FAILED)
        })?;

    metrics::record_submission(stored.attending, stored.guest_count);
    tracing::info!(
        rsvp_id = stored.id,
        attending = stored.attending,
        guest_count = stored.guest_count,
        "RSVP submitted"
    );

    Ok(Json(SubmitRsvpResponse {
        success: true,
        rsvp: stored.receipt(),
        message: SUBMITTED_MESSAGE.to_string(),
    }))
}

/// List every RSVP with attendance totals.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/api/rsvp
/// # {"rsvps":[...],"stats":{"total_responses":2,"attending_count":1,"total_guests":3}}
/// ```
pub async fn list_rsvps(State(state): State<AppState>) -> Result<Json<ListRsvpsResponse>, AppError> {
    let rsvps = state.repository.list().await.map_err(|e| {
        metrics::record_storage_error("list");
        to_app_error(e, FETCH_FAILED)
    })?;

    let stats = state.repository.stats().await.map_err(|e| {
        metrics::record_storage_error("stats");
        to_app_error(e, FETCH_FAILED)
    })?;

    tracing::debug!(count = rsvps.len(), "RSVPs listed");
    Ok(Json(ListRsvpsResponse { rsvps, stats }))
}

/// Download every RSVP as CSV.
///
/// # Example
///
/// ```bash
/// curl -OJ http://localhost:8080/api/rsvp/export.csv
/// ```
pub async fn export_rsvps_csv(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rsvps = state.repository.list().await.map_err(|e| {
        metrics::record_storage_error("list");
        to_app_error(e, FETCH_FAILED)
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILENAME}\""),
            ),
        ],
        rsvps_to_csv(&rsvps),
    ))
}

/// Client errors keep their message; storage errors are replaced by
/// `failure` and logged with the cause.
fn to_app_error(err: RsvpError, failure: &str) -> AppError {
    if err.is_client_error() {
        AppError::bad_request(err.to_string())
    } else {
        AppError::internal(failure).with_source(err.into())
    }
}

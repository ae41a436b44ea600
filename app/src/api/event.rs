//! Event details, countdown and calendar download.

use crate::server::AppState;
use axum::{Json, extract::State, http::header, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wedding_rsvp_core::Countdown;
use wedding_rsvp_core::calendar::{CALENDAR_FILENAME, render_ics};

/// Body of `GET /api/event`.
#[derive(Debug, Serialize, Deserialize)]
pub struct EventResponse {
    /// Names of the couple
    pub couple: String,
    /// Ceremony start
    pub starts_at: DateTime<Utc>,
    /// End of the celebration
    pub ends_at: DateTime<Utc>,
    /// Venue name
    pub venue: String,
    /// Venue address
    pub address: String,
    /// Time left until `starts_at`, zero once it has passed
    pub countdown: Countdown,
}

/// Event details with a countdown computed at request time.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/api/event
/// ```
#[allow(clippy::unused_async)]
pub async fn get_event(State(state): State<AppState>) -> Json<EventResponse> {
    let wedding = &state.wedding;

    Json(EventResponse {
        couple: wedding.couple.clone(),
        starts_at: wedding.starts_at,
        ends_at: wedding.ends_at(),
        venue: wedding.venue.clone(),
        address: wedding.address.clone(),
        countdown: wedding.countdown(state.clock.now()),
    })
}

/// Single-event iCalendar file for "Add to Calendar".
#[allow(clippy::unused_async)]
pub async fn download_calendar(State(state): State<AppState>) -> impl IntoResponse {
    let ics = render_ics(&state.wedding, state.clock.now());

    (
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CALENDAR_FILENAME}\""),
            ),
        ],
        ics,
    )
}

//! Router configuration for the wedding RSVP service.

use super::health::readiness_check;
use super::state::AppState;
use crate::api::{event, rsvp};
use crate::pages;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use wedding_rsvp_web::correlation_id_layer;
use wedding_rsvp_web::handlers::health_check;

/// Build the complete Axum router.
///
/// - `/` and `/admin`: static pages
/// - `/calendar.ics`: calendar download
/// - `/api/rsvp`: submit (POST) and list (GET)
/// - `/api/rsvp/export.csv`: CSV export for the admin page
/// - `/api/event`: event details and countdown
/// - `/health`, `/ready`: probes
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/rsvp", get(rsvp::list_rsvps).post(rsvp::submit_rsvp))
        .route("/rsvp/export.csv", get(rsvp::export_rsvps_csv))
        .route("/event", get(event::get_event));

    Router::new()
        .route("/", get(pages::landing_page))
        .route("/admin", get(pages::admin_page))
        .route("/calendar.ics", get(event::download_calendar))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .with_state(state)
}

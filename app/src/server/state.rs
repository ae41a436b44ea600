//! Application state for the wedding RSVP HTTP server.

use std::sync::Arc;
use wedding_rsvp_core::environment::Clock;
use wedding_rsvp_core::{RsvpRepository, WeddingEvent};

/// Application state shared across all HTTP handlers.
///
/// Cloned (cheaply via Arc) for each request. Nothing in it is mutated after
/// startup; the only shared mutable resource is behind the repository.
#[derive(Clone)]
pub struct AppState {
    /// Where RSVP responses are stored
    pub repository: Arc<dyn RsvpRepository>,

    /// Source of `created_at` timestamps, countdowns and calendar stamps
    pub clock: Arc<dyn Clock>,

    /// The configured event
    pub wedding: Arc<WeddingEvent>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(
        repository: Arc<dyn RsvpRepository>,
        clock: Arc<dyn Clock>,
        wedding: WeddingEvent,
    ) -> Self {
        Self {
            repository,
            clock,
            wedding: Arc::new(wedding),
        }
    }
}

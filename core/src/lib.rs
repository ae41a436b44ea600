//! # Wedding RSVP Core
//!
//! Domain types and rules for the wedding RSVP service.
//!
//! This crate owns everything that does not touch HTTP or SQL:
//!
//! - **Responses**: the stored RSVP record and the raw submission it is built from
//! - **Normalisation**: required-field validation, the `"yes"` attendance rule,
//!   guest-count defaulting
//! - **Stats**: attendance aggregates over a set of responses
//! - **Repository**: the storage trait implemented by the `PostgreSQL` crate and
//!   by the in-memory test doubles
//! - **Environment**: the injected `Clock`
//! - **Formatting**: CSV export, calendar (`.ics`) files and the countdown
//!
//! ## Example
//!
//! ```
//! use wedding_rsvp_core::rsvp::RsvpSubmission;
//!
//! let submission = RsvpSubmission {
//!     name: Some("Alice".to_string()),
//!     email: Some("a@x.com".to_string()),
//!     attending: Some("yes".to_string()),
//!     guests: Some(3),
//!     dietary: Some("vegan".to_string()),
//!     message: None,
//! };
//!
//! let rsvp = submission.normalize().unwrap();
//! assert!(rsvp.attending());
//! assert_eq!(rsvp.guest_count(), 3);
//! assert_eq!(rsvp.message(), "");
//! ```

#![forbid(unsafe_code)]

pub mod calendar;
pub mod error;
pub mod event;
pub mod export;
pub mod repository;
pub mod rsvp;
pub mod stats;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use error::{Result, RsvpError};
pub use event::{Countdown, DEFAULT_DURATION_HOURS, MAX_DURATION_HOURS, WeddingEvent};
pub use repository::RsvpRepository;
pub use rsvp::{Attendance, NewRsvp, RsvpReceipt, RsvpResponse, RsvpSubmission};
pub use stats::AttendanceStats;

/// Environment module - Dependency injection traits
///
/// All time-dependent behaviour (row timestamps, countdowns, calendar stamps)
/// reads the current time through [`Clock`](environment::Clock) so tests can
/// pin it.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use wedding_rsvp_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let before = clock.now();
    /// assert!(clock.now() >= before);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

//! The wedding itself: when, where, and how long until it starts.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Length of the celebration when none is configured.
pub const DEFAULT_DURATION_HOURS: u32 = 4;

/// Longest celebration a calendar entry will span.
pub const MAX_DURATION_HOURS: u32 = 168;

/// Details of the single event this site is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeddingEvent {
    /// Names shown in the hero and calendar summary, e.g. `"Emma & James"`.
    pub couple: String,
    /// Ceremony start.
    pub starts_at: DateTime<Utc>,
    /// Length of the celebration in hours.
    pub duration_hours: u32,
    /// Venue name.
    pub venue: String,
    /// Street address of the venue.
    pub address: String,
    /// One-line invitation text used in the calendar entry.
    pub description: String,
    /// Domain used to build calendar UIDs.
    pub calendar_domain: String,
}

impl WeddingEvent {
    /// When the celebration ends.
    ///
    /// A duration that would run past the representable range falls back to
    /// [`DEFAULT_DURATION_HOURS`].
    #[must_use]
    pub fn ends_at(&self) -> DateTime<Utc> {
        let after = |hours: u32| self.starts_at.checked_add_signed(TimeDelta::hours(i64::from(hours)));

        after(self.duration_hours)
            .or_else(|| after(DEFAULT_DURATION_HOURS))
            .unwrap_or(self.starts_at)
    }

    /// Venue and address as one line.
    #[must_use]
    pub fn location(&self) -> String {
        match (self.venue.is_empty(), self.address.is_empty()) {
            (false, false) => format!("{}, {}", self.venue, self.address),
            (false, true) => self.venue.clone(),
            (true, _) => self.address.clone(),
        }
    }

    /// Time remaining until the ceremony, as seen at `now`.
    #[must_use]
    pub fn countdown(&self, now: DateTime<Utc>) -> Countdown {
        Countdown::until(self.starts_at, now)
    }
}

/// Days, hours, minutes and seconds left before a moment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    /// Whole days remaining.
    pub days: i64,
    /// Hours remaining after whole days.
    pub hours: i64,
    /// Minutes remaining after whole hours.
    pub minutes: i64,
    /// Seconds remaining after whole minutes.
    pub seconds: i64,
}

impl Countdown {
    /// Break the time from `now` to `target` into display units.
    ///
    /// Once `target` has passed every unit is zero.
    #[must_use]
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = (target - now).num_seconds().max(0);

        Self {
            days: remaining / 86_400,
            hours: remaining % 86_400 / 3_600,
            minutes: remaining % 3_600 / 60,
            seconds: remaining % 60,
        }
    }
}

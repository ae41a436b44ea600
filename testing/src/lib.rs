//! # Wedding RSVP Testing
//!
//! Test doubles and helpers for the wedding RSVP service.
//!
//! This crate provides:
//! - Deterministic [`Clock`] implementations
//! - In-memory and always-failing [`RsvpRepository`](wedding_rsvp_core::RsvpRepository) stores
//! - Submission builders and proptest strategies
//!
//! ## Example
//!
//! ```
//! use wedding_rsvp_testing::{InMemoryRsvpRepository, helpers, test_clock};
//! use wedding_rsvp_core::environment::Clock;
//! use wedding_rsvp_core::RsvpRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = InMemoryRsvpRepository::new();
//! let rsvp = helpers::attending("Alice", 3).normalize()?;
//! let stored = repo.insert(rsvp, test_clock().now()).await?;
//!
//! assert_eq!(stored.id, 1);
//! assert_eq!(repo.stats().await?.total_guests, 3);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use wedding_rsvp_core::environment::Clock;

pub mod repository_mocks;

pub use repository_mocks::{FailingRsvpRepository, InMemoryRsvpRepository};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use chrono::TimeDelta;
    use std::sync::Mutex;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use wedding_rsvp_testing::mocks::FixedClock;
    /// use wedding_rsvp_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Clock that moves forward by a fixed step on every read.
    ///
    /// Gives each inserted row a distinct, increasing `created_at`, which is
    /// what ordering tests need.
    ///
    /// ```
    /// use wedding_rsvp_testing::mocks::SteppingClock;
    /// use wedding_rsvp_core::environment::Clock;
    /// use chrono::{TimeDelta, Utc};
    ///
    /// let start = Utc::now();
    /// let clock = SteppingClock::new(start, TimeDelta::seconds(5));
    /// assert_eq!(clock.now(), start);
    /// assert_eq!(clock.now(), start + TimeDelta::seconds(5));
    /// ```
    #[derive(Debug)]
    pub struct SteppingClock {
        next: Mutex<DateTime<Utc>>,
        step: TimeDelta,
    }

    impl SteppingClock {
        /// First read returns `start`; each later read adds `step`.
        #[must_use]
        pub const fn new(start: DateTime<Utc>, step: TimeDelta) -> Self {
            Self {
                next: Mutex::new(start),
                step,
            }
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            // A poisoned lock still holds a valid timestamp.
            let mut next = self
                .next
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            let now = *next;
            *next = now + self.step;
            now
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::from_timestamp(1_735_689_600, 0).unwrap_or_default())
    }
}

/// Builders for common submissions.
pub mod helpers {
    use wedding_rsvp_core::rsvp::RsvpSubmission;

    /// A complete "yes" answer for `name` with `guests` in the party.
    #[must_use]
    pub fn attending(name: &str, guests: i32) -> RsvpSubmission {
        RsvpSubmission {
            name: Some(name.to_string()),
            email: Some(email_for(name)),
            attending: Some("yes".to_string()),
            guests: Some(guests),
            dietary: None,
            message: None,
        }
    }

    /// A complete "no" answer for `name`.
    #[must_use]
    pub fn declining(name: &str) -> RsvpSubmission {
        RsvpSubmission {
            name: Some(name.to_string()),
            email: Some(email_for(name)),
            attending: Some("no".to_string()),
            guests: None,
            dietary: None,
            message: None,
        }
    }

    fn email_for(name: &str) -> String {
        format!("{}@example.com", name.to_lowercase().replace(' ', "."))
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;
    use wedding_rsvp_core::rsvp::RsvpSubmission;

    /// Submissions whose three required fields are always present and non-empty.
    ///
    /// The attendance answer is drawn from a mix of `"yes"` and other strings,
    /// and `guests` may be absent, zero, or negative.
    pub fn valid_submission() -> impl Strategy<Value = RsvpSubmission> {
        (
            "[A-Za-z][A-Za-z ]{0,20}",
            "[a-z]{1,8}@[a-z]{1,8}\\.com",
            prop_oneof![Just("yes".to_string()), Just("no".to_string()), "[a-z]{1,5}"],
            proptest::option::of(-5..20i32),
            proptest::option::of("[a-z ]{0,12}"),
            proptest::option::of("[a-z ]{0,30}"),
        )
            .prop_map(|(name, email, attending, guests, dietary, message)| RsvpSubmission {
                name: Some(name),
                email: Some(email),
                attending: Some(attending),
                guests,
                dietary,
                message,
            })
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, SteppingClock, test_clock};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_stepping_clock_advances() {
        let start = test_clock().now();
        let clock = SteppingClock::new(start, TimeDelta::minutes(1));

        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start + TimeDelta::minutes(1));
        assert_eq!(clock.now(), start + TimeDelta::minutes(2));
    }

    #[test]
    fn test_helpers_build_complete_submissions() {
        let yes = helpers::attending("Alice Smith", 2);
        assert_eq!(yes.email.as_deref(), Some("alice.smith@example.com"));
        assert!(yes.normalize().is_ok());

        let no = helpers::declining("Bob");
        assert_eq!(no.attending.as_deref(), Some("no"));
        assert!(no.normalize().is_ok());
    }
}

//! Attendance aggregates.

use crate::rsvp::RsvpResponse;
use serde::{Deserialize, Serialize};

/// Headline numbers shown at the top of the admin page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStats {
    /// Number of responses received.
    pub total_responses: i64,
    /// Number of responses that said yes.
    pub attending_count: i64,
    /// Sum of `guest_count` over attending responses.
    pub total_guests: i64,
}

impl AttendanceStats {
    /// Compute the aggregates over a set of rows.
    ///
    /// Stores that cannot aggregate natively use this; the `PostgreSQL`
    /// repository computes the same numbers in SQL.
    pub fn tally<'a>(rows: impl IntoIterator<Item = &'a RsvpResponse>) -> Self {
        rows.into_iter().fold(Self::default(), |mut stats, row| {
            stats.total_responses += 1;
            if row.attending {
                stats.attending_count += 1;
                stats.total_guests += i64::from(row.guest_count);
            }
            stats
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn row(id: i32, attending: bool, guest_count: i32) -> RsvpResponse {
        RsvpResponse {
            id,
            name: format!("Guest {id}"),
            email: format!("guest{id}@example.com"),
            attending,
            guest_count,
            dietary_restrictions: String::new(),
            message: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_tally_is_zero() {
        let stats = AttendanceStats::tally(&Vec::<RsvpResponse>::new());
        assert_eq!(stats, AttendanceStats::default());
    }

    #[test]
    fn test_declines_only_count_as_responses() {
        let rows = vec![row(1, true, 3), row(2, false, 0), row(3, true, 1)];
        let stats = AttendanceStats::tally(&rows);

        assert_eq!(stats.total_responses, 3);
        assert_eq!(stats.attending_count, 2);
        assert_eq!(stats.total_guests, 4);
    }

    #[test]
    fn test_serializes_with_admin_field_names() {
        let json = serde_json::to_value(AttendanceStats {
            total_responses: 2,
            attending_count: 1,
            total_guests: 3,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "total_responses": 2,
                "attending_count": 1,
                "total_guests": 3,
            })
        );
    }

    proptest! {
        #[test]
        fn prop_tally_matches_definition(
            entries in proptest::collection::vec((any::<bool>(), 1..10i32), 0..50),
        ) {
            let rows: Vec<RsvpResponse> = entries
                .iter()
                .enumerate()
                .map(|(i, (attending, guests))| {
                    let id = i32::try_from(i).unwrap();
                    row(id, *attending, if *attending { *guests } else { 0 })
                })
                .collect();

            let stats = AttendanceStats::tally(&rows);

            prop_assert_eq!(stats.total_responses, rows.len() as i64);
            prop_assert_eq!(
                stats.attending_count,
                rows.iter().filter(|r| r.attending).count() as i64
            );
            prop_assert_eq!(
                stats.total_guests,
                rows.iter()
                    .filter(|r| r.attending)
                    .map(|r| i64::from(r.guest_count))
                    .sum::<i64>()
            );
        }
    }
}

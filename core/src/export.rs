//! CSV export of RSVP responses for the admin page.

use crate::rsvp::RsvpResponse;
use chrono::{DateTime, Utc};

/// Suggested download name.
pub const CSV_FILENAME: &str = "wedding-rsvps.csv";

/// Column headers, in order.
pub const CSV_HEADER: [&str; 7] = [
    "Name",
    "Email",
    "Attending",
    "Guests",
    "Dietary",
    "Message",
    "Submitted",
];

/// Render responses as CSV, one row per response in the given order.
///
/// Every cell is quoted and embedded quotes are doubled, so names and
/// messages containing commas or newlines survive a round trip through a
/// spreadsheet.
#[must_use]
pub fn rsvps_to_csv(rows: &[RsvpResponse]) -> String {
    let mut csv = String::new();
    push_row(&mut csv, CSV_HEADER.iter().map(|h| (*h).to_string()));

    for row in rows {
        push_row(
            &mut csv,
            [
                row.name.clone(),
                row.email.clone(),
                if row.attending { "Yes" } else { "No" }.to_string(),
                row.guest_count.to_string(),
                row.dietary_restrictions.clone(),
                row.message.clone(),
                submitted_at(row.created_at),
            ],
        );
    }

    csv
}

/// Human-readable submission time, e.g. `Nov 1, 2025, 05:00 PM` (UTC).
#[must_use]
pub fn submitted_at(created_at: DateTime<Utc>) -> String {
    created_at.format("%b %-d, %Y, %I:%M %p").to_string()
}

fn push_row(csv: &mut String, cells: impl IntoIterator<Item = String>) {
    let quoted: Vec<String> = cells.into_iter().map(|cell| quote(&cell)).collect();
    csv.push_str(&quoted.join(","));
    csv.push('\n');
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;

    fn row(name: &str, attending: bool, guest_count: i32, message: &str) -> RsvpResponse {
        RsvpResponse {
            id: 1,
            name: name.to_string(),
            email: "guest@example.com".to_string(),
            attending,
            guest_count,
            dietary_restrictions: String::new(),
            message: message.to_string(),
            created_at: DateTime::parse_from_rfc3339("2025-11-01T17:05:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn test_header_only_when_empty() {
        assert_eq!(
            rsvps_to_csv(&[]),
            "\"Name\",\"Email\",\"Attending\",\"Guests\",\"Dietary\",\"Message\",\"Submitted\"\n"
        );
    }

    #[test]
    fn test_rows_follow_input_order() {
        let csv = rsvps_to_csv(&[row("Alice", true, 3, ""), row("Bob", false, 0, "")]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "\"Alice\",\"guest@example.com\",\"Yes\",\"3\",\"\",\"\",\"Nov 1, 2025, 05:05 PM\""
        );
        assert!(lines[2].starts_with("\"Bob\",\"guest@example.com\",\"No\",\"0\""));
    }

    #[test]
    fn test_quotes_are_doubled() {
        let csv = rsvps_to_csv(&[row("Dr. \"Doc\" Brown", true, 1, "Great Scott, see you")]);
        assert!(csv.contains("\"Dr. \"\"Doc\"\" Brown\""));
        assert!(csv.contains("\"Great Scott, see you\""));
    }
}

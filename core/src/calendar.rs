//! iCalendar (`.ics`) file for the "Add to Calendar" button.

use crate::event::WeddingEvent;
use chrono::{DateTime, Utc};

/// `PRODID` written into every calendar file.
pub const PRODUCT_ID: &str = "-//Wedding//Wedding Invitation//EN";

/// Suggested download name.
pub const CALENDAR_FILENAME: &str = "wedding-invitation.ics";

/// Render a single-event calendar for the wedding.
///
/// `dtstamp` is the generation time. The `UID` depends only on the start
/// time and domain, so re-downloading updates the same calendar entry.
#[must_use]
pub fn render_ics(event: &WeddingEvent, dtstamp: DateTime<Utc>) -> String {
    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODUCT_ID}"),
        "BEGIN:VEVENT".to_string(),
        format!(
            "UID:wedding-{}@{}",
            event.starts_at.timestamp(),
            event.calendar_domain
        ),
        format!("DTSTAMP:{}", ics_timestamp(dtstamp)),
        format!("DTSTART:{}", ics_timestamp(event.starts_at)),
        format!("DTEND:{}", ics_timestamp(event.ends_at())),
        format!("SUMMARY:{}", escape_text(&format!("{} Wedding", event.couple))),
        format!("DESCRIPTION:{}", escape_text(&event.description)),
        format!("LOCATION:{}", escape_text(&event.location())),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    let mut ics = lines.join("\r\n");
    ics.push_str("\r\n");
    ics
}

/// UTC timestamp in iCalendar basic format, e.g. `20251101T170000Z`.
fn ics_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Escape a TEXT value (RFC 5545 §3.3.11).
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

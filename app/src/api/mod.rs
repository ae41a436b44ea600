//! JSON and file endpoints under `/api` (plus the calendar download).

pub mod event;
pub mod rsvp;

pub use event::{download_calendar, get_event};
pub use rsvp::{export_rsvps_csv, list_rsvps, submit_rsvp};

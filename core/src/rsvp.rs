//! RSVP responses and the normalisation of raw form submissions.
//!
//! A guest's form arrives as an [`RsvpSubmission`] with every field optional.
//! [`RsvpSubmission::normalize`] turns it into a [`NewRsvp`], the only value a
//! repository will insert. Once stored, a row comes back as an
//! [`RsvpResponse`]; rows are never updated or deleted.

use crate::error::{Result, RsvpError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::num::FpCategory;

/// The literal answer that marks a submission as attending.
pub const ATTENDING_ANSWER: &str = "yes";

/// Guest count recorded when an attending guest does not say how many are coming.
pub const DEFAULT_GUEST_COUNT: i32 = 1;

/// Whether a guest is coming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attendance {
    /// The guest answered `"yes"`.
    Attending,
    /// Any other answer.
    Declined,
}

impl Attendance {
    /// Parse the form's attendance answer.
    ///
    /// Only the exact string `"yes"` counts as attending. `"no"`, `"Yes"`,
    /// `"maybe"` and anything else are all declines.
    #[must_use]
    pub fn from_answer(answer: &str) -> Self {
        if answer == ATTENDING_ANSWER {
            Self::Attending
        } else {
            Self::Declined
        }
    }

    /// `true` for [`Attendance::Attending`].
    #[must_use]
    pub const fn is_attending(self) -> bool {
        matches!(self, Self::Attending)
    }
}

/// Raw RSVP form payload, as posted by the landing page.
///
/// `attending` and `guests` accept any JSON value. A non-string answer other
/// than `null`, `false` or `0` is a decline, and a guest count that is not an
/// integer is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpSubmission {
    /// Guest name (required).
    pub name: Option<String>,
    /// Contact email (required).
    pub email: Option<String>,
    /// Attendance answer, `"yes"` or `"no"` (required).
    #[serde(default, deserialize_with = "answer")]
    pub attending: Option<String>,
    /// Party size when attending.
    #[serde(default, deserialize_with = "party_size")]
    pub guests: Option<i32>,
    /// Dietary restrictions, free text.
    pub dietary: Option<String>,
    /// Message to the couple, free text.
    pub message: Option<String>,
}

impl RsvpSubmission {
    /// Validate required fields and apply the defaulting rules.
    ///
    /// # Errors
    ///
    /// Returns [`RsvpError::MissingRequiredFields`] when `name`, `email` or
    /// `attending` is absent or empty.
    pub fn normalize(self) -> Result<NewRsvp> {
        match (
            required(self.name),
            required(self.email),
            required(self.attending),
        ) {
            (Some(name), Some(email), Some(answer)) => Ok(NewRsvp::new(
                name,
                email,
                Attendance::from_answer(&answer),
                self.guests,
                self.dietary.unwrap_or_default(),
                self.message.unwrap_or_default(),
            )),
            (name, email, answer) => {
                let missing = [("name", name), ("email", email), ("attending", answer)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(field, _)| field)
                    .collect();
                Err(RsvpError::MissingRequiredFields { missing })
            }
        }
    }
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// `null`, `false` and `0` are no answer at all. Any other non-string keeps
/// its JSON text, which can never equal `"yes"`.
fn answer<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if is_zero(&n) => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Integers, or strings holding one, that fit an `i32`; anything else is
/// treated as unspecified.
fn party_size<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().and_then(|count| i32::try_from(count).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn is_zero(n: &Number) -> bool {
    n.as_f64()
        .is_some_and(|value| value.classify() == FpCategory::Zero)
}

/// A validated RSVP ready to be inserted.
///
/// Fields are private so the `attending = false ⇒ guest_count = 0` invariant
/// cannot be broken after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRsvp {
    name: String,
    email: String,
    attendance: Attendance,
    guest_count: i32,
    dietary_restrictions: String,
    message: String,
}

impl NewRsvp {
    /// Build a new RSVP, deriving the guest count from the attendance.
    ///
    /// Attending guests get `guests` if it is at least one, otherwise
    /// [`DEFAULT_GUEST_COUNT`]. Declined guests always get zero.
    #[must_use]
    pub fn new(
        name: String,
        email: String,
        attendance: Attendance,
        guests: Option<i32>,
        dietary_restrictions: String,
        message: String,
    ) -> Self {
        let guest_count = match attendance {
            Attendance::Attending => guests
                .filter(|count| *count >= 1)
                .unwrap_or(DEFAULT_GUEST_COUNT),
            Attendance::Declined => 0,
        };

        Self {
            name,
            email,
            attendance,
            guest_count,
            dietary_restrictions,
            message,
        }
    }

    /// Guest name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Parsed attendance.
    #[must_use]
    pub const fn attendance(&self) -> Attendance {
        self.attendance
    }

    /// Whether the guest is coming.
    #[must_use]
    pub const fn attending(&self) -> bool {
        self.attendance.is_attending()
    }

    /// Party size; zero when not attending.
    #[must_use]
    pub const fn guest_count(&self) -> i32 {
        self.guest_count
    }

    /// Dietary restrictions, empty when not given.
    #[must_use]
    pub fn dietary_restrictions(&self) -> &str {
        &self.dietary_restrictions
    }

    /// Message to the couple, empty when not given.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A stored RSVP row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpResponse {
    /// Generated primary key.
    pub id: i32,
    /// Guest name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Whether the guest is coming.
    pub attending: bool,
    /// Party size; zero when not attending.
    pub guest_count: i32,
    /// Dietary restrictions, possibly empty.
    pub dietary_restrictions: String,
    /// Message to the couple, possibly empty.
    pub message: String,
    /// Server-assigned insertion time.
    pub created_at: DateTime<Utc>,
}

impl RsvpResponse {
    /// Materialise a row from a validated RSVP and its generated fields.
    #[must_use]
    pub fn record(id: i32, rsvp: NewRsvp, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            attending: rsvp.attending(),
            guest_count: rsvp.guest_count,
            name: rsvp.name,
            email: rsvp.email,
            dietary_restrictions: rsvp.dietary_restrictions,
            message: rsvp.message,
            created_at,
        }
    }

    /// The subset of fields echoed back to the guest after submitting.
    #[must_use]
    pub fn receipt(&self) -> RsvpReceipt {
        RsvpReceipt {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            attending: self.attending,
            guest_count: self.guest_count,
            created_at: self.created_at,
        }
    }
}

/// Confirmation returned for a freshly inserted RSVP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpReceipt {
    /// Generated primary key.
    pub id: i32,
    /// Guest name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Whether the guest is coming.
    pub attending: bool,
    /// Party size; zero when not attending.
    pub guest_count: i32,
    /// Server-assigned insertion time.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn submission(name: &str, email: &str, attending: &str) -> RsvpSubmission {
        RsvpSubmission {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            attending: Some(attending.to_string()),
            ..RsvpSubmission::default()
        }
    }

    #[test]
    fn test_alice_attending_with_party_of_three() {
        let rsvp = RsvpSubmission {
            guests: Some(3),
            dietary: Some("vegan".to_string()),
            ..submission("Alice", "a@x.com", "yes")
        }
        .normalize()
        .unwrap();

        assert!(rsvp.attending());
        assert_eq!(rsvp.guest_count(), 3);
        assert_eq!(rsvp.dietary_restrictions(), "vegan");
        assert_eq!(rsvp.message(), "");
    }

    #[test]
    fn test_bob_declining() {
        let rsvp = submission("Bob", "b@x.com", "no").normalize().unwrap();

        assert!(!rsvp.attending());
        assert_eq!(rsvp.guest_count(), 0);
        assert_eq!(rsvp.attendance(), Attendance::Declined);
    }

    #[test]
    fn test_attending_without_guests_defaults_to_one() {
        let rsvp = submission("Carol", "c@x.com", "yes").normalize().unwrap();
        assert_eq!(rsvp.guest_count(), DEFAULT_GUEST_COUNT);
    }

    #[test]
    fn test_attending_with_zero_guests_defaults_to_one() {
        let rsvp = RsvpSubmission {
            guests: Some(0),
            ..submission("Dan", "d@x.com", "yes")
        }
        .normalize()
        .unwrap();
        assert_eq!(rsvp.guest_count(), 1);
    }

    #[test]
    fn test_answer_is_case_sensitive() {
        assert_eq!(Attendance::from_answer("Yes"), Attendance::Declined);
        assert_eq!(Attendance::from_answer("YES"), Attendance::Declined);
        assert_eq!(Attendance::from_answer("yes"), Attendance::Attending);
    }

    #[test]
    fn test_missing_fields_are_listed_in_form_order() {
        let err = RsvpSubmission {
            email: Some(String::new()),
            ..RsvpSubmission::default()
        }
        .normalize()
        .unwrap_err();

        assert_eq!(
            err,
            RsvpError::MissingRequiredFields {
                missing: vec!["name", "email", "attending"],
            }
        );
    }

    #[test]
    fn test_only_missing_field_is_reported() {
        let err = RsvpSubmission {
            attending: None,
            ..submission("Eve", "e@x.com", "yes")
        }
        .normalize()
        .unwrap_err();

        assert_eq!(
            err,
            RsvpError::MissingRequiredFields {
                missing: vec!["attending"],
            }
        );
    }

    #[test]
    fn test_submission_deserializes_from_form_json() {
        let json = r#"{"name":"Alice","email":"a@x.com","attending":"yes","guests":2,"dietary":"","message":"See you!"}"#;
        let parsed: RsvpSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.guests, Some(2));
        assert_eq!(parsed.message.as_deref(), Some("See you!"));

        let sparse: RsvpSubmission = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert_eq!(sparse.email, None);
        assert_eq!(sparse.attending, None);
        assert_eq!(sparse.guests, None);
    }

    fn parse(json: &str) -> RsvpSubmission {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_non_string_answers_are_declines() {
        for raw in ["true", "1", "\"Yes\"", "[\"yes\"]", "{}"] {
            let rsvp = parse(&format!(
                r#"{{"name":"A","email":"e@x","attending":{raw},"guests":2}}"#
            ))
            .normalize()
            .unwrap();

            assert!(!rsvp.attending(), "answer {raw}");
            assert_eq!(rsvp.guest_count(), 0, "answer {raw}");
        }
    }

    #[test]
    fn test_falsy_answers_are_missing() {
        for raw in ["null", "false", "0", "0.0", "\"\""] {
            let err = parse(&format!(r#"{{"name":"A","email":"e@x","attending":{raw}}}"#))
                .normalize()
                .unwrap_err();

            assert_eq!(
                err,
                RsvpError::MissingRequiredFields {
                    missing: vec!["attending"],
                },
                "answer {raw}"
            );
        }
    }

    #[test]
    fn test_guest_count_is_read_leniently() {
        assert_eq!(parse(r#"{"guests":"3"}"#).guests, Some(3));
        assert_eq!(parse(r#"{"guests":4}"#).guests, Some(4));
        assert_eq!(parse(r#"{"guests":"three"}"#).guests, None);
        assert_eq!(parse(r#"{"guests":2.5}"#).guests, None);
        assert_eq!(parse(r#"{"guests":99999999999}"#).guests, None);
        assert_eq!(parse(r#"{"guests":null}"#).guests, None);

        let declined = parse(r#"{"name":"A","email":"e@x","attending":"no","guests":"2"}"#)
            .normalize()
            .unwrap();
        assert_eq!(declined.guest_count(), 0);

        let unreadable = parse(r#"{"name":"A","email":"e@x","attending":"yes","guests":[2]}"#)
            .normalize()
            .unwrap();
        assert_eq!(unreadable.guest_count(), DEFAULT_GUEST_COUNT);
    }

    #[test]
    fn test_record_and_receipt() {
        let created_at = DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let rsvp = submission("Bob", "b@x.com", "no").normalize().unwrap();
        let row = RsvpResponse::record(7, rsvp, created_at);

        assert_eq!(row.id, 7);
        assert!(!row.attending);
        assert_eq!(row.guest_count, 0);
        assert_eq!(row.dietary_restrictions, "");

        let receipt = row.receipt();
        assert_eq!(receipt.id, 7);
        assert_eq!(receipt.name, "Bob");
        assert_eq!(receipt.created_at, created_at);
    }

    proptest! {
        #[test]
        fn prop_non_yes_answer_never_counts_guests(
            answer in "[a-zA-Z ]{1,12}".prop_filter("not yes", |a| a != ATTENDING_ANSWER),
            guests in proptest::option::of(any::<i32>()),
        ) {
            let rsvp = RsvpSubmission {
                guests,
                ..submission("Guest", "guest@example.com", &answer)
            }
            .normalize()
            .unwrap();

            prop_assert!(!rsvp.attending());
            prop_assert_eq!(rsvp.guest_count(), 0);
        }

        #[test]
        fn prop_attending_guest_count_is_positive(guests in proptest::option::of(any::<i32>())) {
            let rsvp = RsvpSubmission {
                guests,
                ..submission("Guest", "guest@example.com", "yes")
            }
            .normalize()
            .unwrap();

            prop_assert!(rsvp.attending());
            prop_assert!(rsvp.guest_count() >= 1);
            if let Some(count) = guests.filter(|c| *c >= 1) {
                prop_assert_eq!(rsvp.guest_count(), count);
            }
        }

        #[test]
        fn prop_missing_required_field_is_rejected(
            drop_name in any::<bool>(),
            drop_email in any::<bool>(),
            drop_attending in any::<bool>(),
        ) {
            prop_assume!(drop_name || drop_email || drop_attending);

            let mut raw = submission("Guest", "guest@example.com", "yes");
            if drop_name { raw.name = None; }
            if drop_email { raw.email = Some(String::new()); }
            if drop_attending { raw.attending = None; }

            let result = raw.normalize();
            prop_assert!(
                matches!(result, Err(RsvpError::MissingRequiredFields { .. })),
                "expected missing-field error"
            );
        }
    }
}

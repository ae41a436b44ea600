//! Error types for RSVP operations.

use thiserror::Error;

/// Result type alias for RSVP operations.
pub type Result<T> = std::result::Result<T, RsvpError>;

/// Everything that can go wrong while accepting or reading RSVPs.
///
/// The two variants map onto the two failure classes the HTTP layer knows
/// about: the caller sent something unusable, or the store failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RsvpError {
    /// One or more required submission fields were absent or empty.
    #[error("Name, email, and attendance response are required")]
    MissingRequiredFields {
        /// Names of the offending fields, in form order.
        missing: Vec<&'static str>,
    },

    /// The backing store failed to read or write.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RsvpError {
    /// Whether the caller, not the server, is at fault.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingRequiredFields { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = RsvpError::MissingRequiredFields {
            missing: vec!["name"],
        };
        assert_eq!(
            err.to_string(),
            "Name, email, and attendance response are required"
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn test_storage_is_server_error() {
        let err = RsvpError::Storage("connection refused".to_string());
        assert_eq!(err.to_string(), "Storage error: connection refused");
        assert!(!err.is_client_error());
    }
}

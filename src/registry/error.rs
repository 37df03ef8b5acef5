//! Error types for registry operations.
//!
//! Every failure a caller can trigger is reported synchronously through
//! [`RegistryError`]; nothing in the registry panics or logs on a rejected
//! operation. Failures fall into two families: *validation* failures (the
//! raw parameters are unusable on their own) and *conflict* failures (the
//! parameters collide with state already in the registry). The remaining
//! variants are lookup failures for dangling identifiers.

use crate::api::{EventId, MemberId};

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Event name is empty.
    #[error("event name must not be empty")]
    EmptyName,

    /// Event location is empty.
    #[error("event location must not be empty")]
    EmptyLocation,

    /// Duration is zero or negative.
    #[error("event duration must be positive, got {0}")]
    NonPositiveDuration(i32),

    /// Capacity is zero or negative.
    #[error("event capacity must be positive, got {0}")]
    NonPositiveCapacity(i32),

    /// The date or time components do not form a valid calendar datetime.
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")]
    InvalidDate {
        day: u32,
        month: u32,
        year: i32,
        hour: u32,
        minute: u32,
    },

    /// An event with the same normalized name already exists.
    #[error("an event named {name:?} already exists")]
    DuplicateName { name: String },

    /// The candidate shares both location and time window with an existing
    /// event.
    #[error("overlaps event {with:?} at the same location and time")]
    VenueConflict { with: String },

    /// The member is already enrolled in an event whose time window overlaps
    /// the target event's.
    #[error("member calendar conflicts with enrolled event {with:?}")]
    CalendarConflict { with: String },

    /// The event already has as many participants as its capacity allows.
    #[error("event {name:?} is full ({capacity} participants)")]
    CapacityReached { name: String, capacity: i32 },

    /// The member is already in the event's participant set.
    #[error("member {member} is already enrolled in event {event}")]
    AlreadyEnrolled { event: EventId, member: MemberId },

    /// Withdrawal target pair has no enrollment to undo.
    #[error("member {member} is not enrolled in event {event}")]
    NotEnrolled { event: EventId, member: MemberId },

    /// A member with the same case-insensitive name pair already exists.
    #[error("a member named {first_name} {last_name} is already registered")]
    DuplicateMember {
        last_name: String,
        first_name: String,
    },

    /// No event with this identifier.
    #[error("unknown event id {0}")]
    UnknownEvent(EventId),

    /// No member with this identifier.
    #[error("unknown member id {0}")]
    UnknownMember(MemberId),
}

impl RegistryError {
    /// Whether this is a validation failure: the supplied parameters are
    /// rejected before any comparison against existing state.
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Self::EmptyName
                | Self::EmptyLocation
                | Self::NonPositiveDuration(_)
                | Self::NonPositiveCapacity(_)
                | Self::InvalidDate { .. }
        )
    }

    /// Whether this is a conflict failure: the parameters are well-formed but
    /// collide with state already held by the registry.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateName { .. }
                | Self::VenueConflict { .. }
                | Self::CalendarConflict { .. }
                | Self::CapacityReached { .. }
                | Self::AlreadyEnrolled { .. }
                | Self::DuplicateMember { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(RegistryError::EmptyName.is_validation_failure());
        assert!(RegistryError::NonPositiveDuration(-12).is_validation_failure());
        assert!(!RegistryError::EmptyName.is_conflict());
    }

    #[test]
    fn test_conflict_classification() {
        let err = RegistryError::DuplicateName {
            name: "Fair".to_string(),
        };
        assert!(err.is_conflict());
        assert!(!err.is_validation_failure());
    }

    #[test]
    fn test_lookup_errors_are_neither() {
        let err = RegistryError::UnknownEvent(EventId::new(9));
        assert!(!err.is_validation_failure());
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_display_messages() {
        let err = RegistryError::InvalidDate {
            day: 38,
            month: 9,
            year: 2022,
            hour: 8,
            minute: 30,
        };
        assert_eq!(err.to_string(), "invalid calendar date: 2022-09-38 08:30");

        let err = RegistryError::CapacityReached {
            name: "Fair".to_string(),
            capacity: 2,
        };
        assert_eq!(err.to_string(), "event \"Fair\" is full (2 participants)");
    }
}

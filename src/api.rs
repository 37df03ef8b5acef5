//! Public API surface for the AMS backend.
//!
//! This file consolidates the identifier newtypes used throughout the crate
//! and re-exports the main domain types so embedders can depend on a single
//! module path.

pub use crate::models::{Event, Member, PersonalInfo};
pub use crate::registry::{
    Association, EventRegistry, MemberDirectory, RegistryError, RegistryResult,
};
pub use crate::shared::SharedAssociation;
pub use crate::store::{StoreConfig, StoreError, StoreResult};

use serde::{Deserialize, Serialize};

/// Event identifier (registry-assigned surrogate key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EventId(pub i64);

/// Member identifier (directory-assigned surrogate key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MemberId(pub i64);

impl EventId {
    pub fn new(value: i64) -> Self {
        EventId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl MemberId {
    pub fn new(value: i64) -> Self {
        MemberId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EventId> for i64 {
    fn from(id: EventId) -> Self {
        id.0
    }
}

impl From<MemberId> for i64 {
    fn from(id: MemberId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::{EventId, MemberId};

    #[test]
    fn test_event_id_new() {
        let id = EventId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_event_id_equality() {
        let id1 = EventId::new(100);
        let id2 = EventId::new(100);
        let id3 = EventId::new(101);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_event_id_ordering() {
        let id1 = EventId::new(1);
        let id2 = EventId::new(2);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_member_id_new() {
        let id = MemberId::new(55);
        assert_eq!(id.value(), 55);
    }

    #[test]
    fn test_member_id_equality() {
        let id1 = MemberId::new(200);
        let id2 = MemberId::new(200);
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_ids_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(MemberId::new(1));
        set.insert(MemberId::new(2));
        set.insert(MemberId::new(1)); // Duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_event_id_display() {
        assert_eq!(EventId::new(7).to_string(), "7");
        assert_eq!(MemberId::new(-3).to_string(), "-3");
    }

    #[test]
    fn test_event_id_into_i64() {
        let raw: i64 = EventId::new(999).into();
        assert_eq!(raw, 999);
    }
}

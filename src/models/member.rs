//! Member record and personal information.

use serde::{Deserialize, Serialize};

use crate::api::{EventId, MemberId};

/// Personal information attached to a member.
///
/// The (last name, first name) pair doubles as the user-facing identity of a
/// member: the directory refuses to admit two members whose name pairs match
/// case-insensitively. Address and age are plain informational fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    last_name: String,
    first_name: String,
    address: String,
    age: i32,
}

impl PersonalInfo {
    /// Basic information: name pair only, empty address, age zero.
    pub fn new(last_name: &str, first_name: &str) -> Self {
        Self::with_details(last_name, first_name, "", 0)
    }

    /// Complete information. A negative age is replaced by zero.
    pub fn with_details(last_name: &str, first_name: &str, address: &str, age: i32) -> Self {
        Self {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            address: address.to_string(),
            age: age.max(0),
        }
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_address(&mut self, address: &str) {
        self.address = address.to_string();
    }

    /// Update the age. A negative value is ignored and the current age kept.
    pub fn set_age(&mut self, age: i32) {
        if age >= 0 {
            self.age = age;
        }
    }

    /// Case-insensitive (last name, first name) pair used for the directory's
    /// uniqueness rule.
    pub fn identity_key(&self) -> (String, String) {
        (
            self.last_name.to_lowercase(),
            self.first_name.to_lowercase(),
        )
    }
}

/// A member of the association.
///
/// The two event lists are maintained exclusively by the registry facade:
/// `events` records every event the member is or was enrolled in, in
/// enrollment order; `upcoming_events` records the subset whose start was
/// still in the future at the moment of enrollment. Neither list is
/// re-filtered as time passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    info: PersonalInfo,
    events: Vec<EventId>,
    upcoming_events: Vec<EventId>,
}

impl Member {
    pub(crate) fn new(id: MemberId, info: PersonalInfo) -> Self {
        Self {
            id,
            info,
            events: Vec::new(),
            upcoming_events: Vec::new(),
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn info(&self) -> &PersonalInfo {
        &self.info
    }

    /// Mutable access to the personal fields. This does not touch enrollment
    /// state; identity changes do not re-run the admission uniqueness check.
    pub fn info_mut(&mut self) -> &mut PersonalInfo {
        &mut self.info
    }

    /// Every event the member is or was enrolled in, in enrollment order.
    pub fn events(&self) -> &[EventId] {
        &self.events
    }

    /// Events that were still in the future when the member enrolled.
    pub fn upcoming_events(&self) -> &[EventId] {
        &self.upcoming_events
    }

    pub fn is_enrolled_in(&self, event: EventId) -> bool {
        self.events.contains(&event)
    }

    pub(crate) fn record_enrollment(&mut self, event: EventId, upcoming: bool) {
        self.events.push(event);
        if upcoming {
            self.upcoming_events.push(event);
        }
    }

    /// Drop the event from both lists.
    pub(crate) fn forget_event(&mut self, event: EventId) {
        self.events.retain(|e| *e != event);
        self.upcoming_events.retain(|e| *e != event);
    }
}

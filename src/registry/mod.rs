//! The association registry: events, members, and the enrollment relation.
//!
//! # Architecture
//!
//! The registry follows a single-choke-point design:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Embedding host (UI, tests, persistence)                │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │ operations only, never raw field access
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Association (mod.rs) - facade                          │
//! │  - enrollment / withdrawal across both sides            │
//! │  - event deletion with member scrubbing                 │
//! │  - snapshot save/load entry points                      │
//! └───────┬─────────────────────────────────┬───────────────┘
//!         │                                 │
//! ┌───────▼───────────────┐   ┌─────────────▼───────────────┐
//! │  EventRegistry        │   │  MemberDirectory            │
//! │  (events.rs)          │   │  (members.rs)               │
//! └───────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! The enrollment relation is stored redundantly on both sides (an event's
//! participant set, a member's event lists). Keeping the two in sync is
//! entirely the facade's job: [`EventRegistry`] and [`MemberDirectory`] never
//! hand out mutable access, so no embedder can update one side without the
//! other.

pub mod error;
pub mod events;
pub mod members;


pub use error::{RegistryError, RegistryResult};
pub use events::EventRegistry;
pub use members::MemberDirectory;

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::api::{EventId, MemberId};
use crate::models::{time_windows_disjoint, Event, Member, PersonalInfo};
use crate::store;

/// Wall-clock "now" used for every upcoming-subset snapshot decision.
pub(crate) fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// The whole association: event registry, member directory, and every
/// operation that spans the two.
///
/// Each mutating operation validates completely before touching any state,
/// so a failed call leaves the association exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Association {
    events: EventRegistry,
    members: MemberDirectory,
}

impl Association {
    /// Create an association with no events and no members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the event registry.
    pub fn events(&self) -> &EventRegistry {
        &self.events
    }

    /// Read access to the member directory.
    pub fn members(&self) -> &MemberDirectory {
        &self.members
    }

    // ==================== Events ====================

    /// Create a new event. See [`EventRegistry::create_event`] for the
    /// validation pipeline.
    #[allow(clippy::too_many_arguments)]
    pub fn create_event(
        &mut self,
        name: &str,
        location: &str,
        day: u32,
        month: u32,
        year: i32,
        hour: u32,
        minute: u32,
        duration: i32,
        capacity: i32,
    ) -> RegistryResult<EventId> {
        self.events.create_event(
            name, location, day, month, year, hour, minute, duration, capacity,
        )
    }

    /// Amend an existing event, re-running the full creation pipeline. See
    /// [`EventRegistry::amend_event`].
    #[allow(clippy::too_many_arguments)]
    pub fn amend_event(
        &mut self,
        id: EventId,
        name: &str,
        location: &str,
        day: u32,
        month: u32,
        year: i32,
        hour: u32,
        minute: u32,
        duration: i32,
        capacity: i32,
    ) -> RegistryResult<()> {
        self.events.amend_event(
            id, name, location, day, month, year, hour, minute, duration, capacity,
        )
    }

    /// Delete an event. Every enrolled member is withdrawn first: the event
    /// disappears from their event lists before it leaves the registry's
    /// collections. Deleting an id that is not present does nothing.
    pub fn delete_event(&mut self, id: EventId) {
        let Some(event) = self.events.remove(id) else {
            return;
        };

        for member_id in event.participants() {
            if let Some(member) = self.members.get_mut(*member_id) {
                member.forget_event(id);
            }
        }
    }

    // ==================== Enrollment ====================

    /// Enroll a member in an event.
    ///
    /// Rejected (leaving all state unchanged) when the member is already a
    /// participant, when the event is full, or when any event on the member's
    /// own list overlaps the target's time window - the location does not
    /// matter for a personal calendar conflict.
    ///
    /// On success the event joins the member's event list, joins the
    /// member's upcoming list only if its start is strictly after now, and
    /// the member joins the event's participant set.
    pub fn enroll(&mut self, event_id: EventId, member_id: MemberId) -> RegistryResult<()> {
        let event = self
            .events
            .get(event_id)
            .ok_or(RegistryError::UnknownEvent(event_id))?;
        let member = self
            .members
            .get(member_id)
            .ok_or(RegistryError::UnknownMember(member_id))?;

        if event.is_participant(member_id) {
            return Err(RegistryError::AlreadyEnrolled {
                event: event_id,
                member: member_id,
            });
        }

        if event.participant_count() >= event.capacity() as usize {
            return Err(RegistryError::CapacityReached {
                name: event.name().to_string(),
                capacity: event.capacity(),
            });
        }

        for enrolled_id in member.events() {
            if let Some(enrolled) = self.events.get(*enrolled_id) {
                if !time_windows_disjoint(event, enrolled) {
                    return Err(RegistryError::CalendarConflict {
                        with: enrolled.name().to_string(),
                    });
                }
            }
        }

        let upcoming = event.start() > now();

        // All checks passed; both sides mutate together.
        if let Some(member) = self.members.get_mut(member_id) {
            member.record_enrollment(event_id, upcoming);
        }
        if let Some(event) = self.events.get_mut(event_id) {
            event.insert_participant(member_id);
        }
        Ok(())
    }

    /// Withdraw a member from an event, removing the enrollment from both
    /// sides. Fails with [`RegistryError::NotEnrolled`] when there is nothing
    /// to undo.
    pub fn withdraw(&mut self, event_id: EventId, member_id: MemberId) -> RegistryResult<()> {
        let event = self
            .events
            .get(event_id)
            .ok_or(RegistryError::UnknownEvent(event_id))?;

        if !event.is_participant(member_id) {
            return Err(RegistryError::NotEnrolled {
                event: event_id,
                member: member_id,
            });
        }

        if let Some(event) = self.events.get_mut(event_id) {
            event.remove_participant(member_id);
        }
        if let Some(member) = self.members.get_mut(member_id) {
            member.forget_event(event_id);
        }
        Ok(())
    }

    // ==================== Members ====================

    /// Admit a new member. See [`MemberDirectory::add_member`].
    pub fn add_member(&mut self, info: PersonalInfo) -> RegistryResult<MemberId> {
        self.members.add_member(info)
    }

    /// Remove a member, first withdrawing them from every event they
    /// participate in. Returns whether the member existed.
    pub fn remove_member(&mut self, id: MemberId) -> bool {
        let Some(member) = self.members.get(id) else {
            return false;
        };

        let enrolled: Vec<EventId> = member.events().to_vec();
        for event_id in enrolled {
            if let Some(event) = self.events.get_mut(event_id) {
                event.remove_participant(id);
            }
        }

        self.members.remove(id).is_some()
    }

    /// Designate the president. See [`MemberDirectory::designate_president`].
    pub fn designate_president(&mut self, member: Option<MemberId>) -> bool {
        self.members.designate_president(member)
    }

    pub fn president(&self) -> Option<&Member> {
        self.members.president()
    }

    // ==================== Queries ====================

    /// Events whose start was still in the future when they were last
    /// created or amended.
    pub fn upcoming_events(&self) -> Vec<&Event> {
        self.events.upcoming_events()
    }

    /// Every event a member is or was enrolled in, in enrollment order.
    pub fn member_events(&self, member_id: MemberId) -> RegistryResult<Vec<&Event>> {
        let member = self
            .members
            .get(member_id)
            .ok_or(RegistryError::UnknownMember(member_id))?;
        Ok(self.resolve_events(member.events()))
    }

    /// Events that were still in the future when the member enrolled.
    pub fn member_upcoming_events(&self, member_id: MemberId) -> RegistryResult<Vec<&Event>> {
        let member = self
            .members
            .get(member_id)
            .ok_or(RegistryError::UnknownMember(member_id))?;
        Ok(self.resolve_events(member.upcoming_events()))
    }

    /// The members enrolled in an event.
    pub fn participants(&self, event_id: EventId) -> RegistryResult<Vec<&Member>> {
        let event = self
            .events
            .get(event_id)
            .ok_or(RegistryError::UnknownEvent(event_id))?;
        Ok(event
            .participants()
            .iter()
            .filter_map(|id| self.members.get(*id))
            .collect())
    }

    fn resolve_events(&self, ids: &[EventId]) -> Vec<&Event> {
        ids.iter().filter_map(|id| self.events.get(*id)).collect()
    }

    // ==================== Persistence ====================

    /// Save the whole association graph to a snapshot file.
    pub fn save_data<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        store::snapshot::save(self, path.as_ref())
            .with_context(|| format!("Failed to save association data to {}", path.as_ref().display()))
    }

    /// Load a whole association graph from a snapshot file, replacing
    /// nothing in place: the caller swaps in the returned value.
    pub fn load_data<P: AsRef<Path>>(path: P) -> anyhow::Result<Association> {
        store::snapshot::load(path.as_ref())
            .with_context(|| format!("Failed to load association data from {}", path.as_ref().display()))
    }
}

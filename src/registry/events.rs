//! Event registry: authoritative event collection and upcoming index.
//!
//! Events enter the collection only through [`EventRegistry::create_event`],
//! which runs the full validation pipeline, and change only through
//! [`EventRegistry::amend_event`], which re-runs the same pipeline. The
//! first failing check wins and nothing is inserted or modified on failure.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::error::{RegistryError, RegistryResult};
use super::now;
use crate::api::EventId;
use crate::models::{no_overlap, Event};

/// Authoritative collection of all events plus the derived upcoming subset.
///
/// The upcoming subset is indexed once, at creation or amendment time, using
/// the wall clock of that instant; it is never re-derived as time passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRegistry {
    events: Vec<Event>,
    upcoming: Vec<EventId>,
    next_id: i64,
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRegistry {
    /// Create a registry with no events.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            upcoming: Vec::new(),
            next_id: 1,
        }
    }

    /// All events, in creation order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events whose start was still in the future when they were last
    /// created or amended.
    pub fn upcoming_events(&self) -> Vec<&Event> {
        self.upcoming
            .iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up an event by id.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id() == id)
    }

    /// Look up an event by its normalized display name.
    pub fn find_by_name(&self, name: &str) -> Option<&Event> {
        let wanted = crate::models::event::title_case(name);
        self.events.iter().find(|e| e.name() == wanted)
    }

    /// Create a new event.
    ///
    /// Checks run in order, first failure wins: name and location must be
    /// non-empty and duration and capacity strictly positive; the date/time
    /// components must form a valid calendar datetime; the candidate must not
    /// share both location and time window with any existing event, nor reuse
    /// an existing event's normalized name. The scan is O(n) over the
    /// registry, which is fine at association scale.
    ///
    /// `duration` is recorded as supplied; the overlap window applies it as
    /// hours even though legacy callers pass minutes.
    ///
    /// On success the event is added to the full collection, indexed in the
    /// upcoming subset when its start is strictly in the future, and its id
    /// returned.
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
        validate_parameters(name, location, duration, capacity)?;
        let start = compose_start(day, month, year, hour, minute)?;

        let candidate = Event::new(
            EventId::new(self.next_id),
            name,
            location,
            start,
            duration,
            capacity,
        );
        self.check_conflicts(&candidate, None)?;

        let id = candidate.id();
        self.events.push(candidate);
        if start > now() {
            self.upcoming.push(id);
        }
        self.next_id += 1;
        Ok(id)
    }

    /// Replace every identity field of an existing event, re-running the
    /// complete creation pipeline against the rest of the registry (the
    /// amended event itself is excluded from the conflict scan).
    ///
    /// Participants are untouched. Capacity is validated positive exactly as
    /// at creation and not compared against the current enrollment count.
    /// The event's membership in the upcoming subset is recomputed from the
    /// wall clock of this call.
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
        if self.get(id).is_none() {
            return Err(RegistryError::UnknownEvent(id));
        }

        validate_parameters(name, location, duration, capacity)?;
        let start = compose_start(day, month, year, hour, minute)?;

        let candidate = Event::new(id, name, location, start, duration, capacity);
        self.check_conflicts(&candidate, Some(id))?;

        let event = self
            .get_mut(id)
            .ok_or(RegistryError::UnknownEvent(id))?;
        event.set_name(name);
        event.set_location(location);
        event.set_start(start);
        event.set_duration(duration);
        event.set_capacity(capacity);

        self.upcoming.retain(|e| *e != id);
        if start > now() {
            self.upcoming.push(id);
        }
        Ok(())
    }

    /// Remove an event from both collections, returning it (with its
    /// participant set intact) so the caller can scrub member state.
    pub(crate) fn remove(&mut self, id: EventId) -> Option<Event> {
        let index = self.events.iter().position(|e| e.id() == id)?;
        self.upcoming.retain(|e| *e != id);
        Some(self.events.remove(index))
    }

    fn check_conflicts(&self, candidate: &Event, exclude: Option<EventId>) -> RegistryResult<()> {
        for existing in &self.events {
            if Some(existing.id()) == exclude {
                continue;
            }
            if !no_overlap(candidate, existing) {
                return Err(RegistryError::VenueConflict {
                    with: existing.name().to_string(),
                });
            }
            if candidate.name() == existing.name() {
                return Err(RegistryError::DuplicateName {
                    name: existing.name().to_string(),
                });
            }
        }
        Ok(())
    }
}

fn validate_parameters(
    name: &str,
    location: &str,
    duration: i32,
    capacity: i32,
) -> RegistryResult<()> {
    if name.is_empty() {
        return Err(RegistryError::EmptyName);
    }
    if location.is_empty() {
        return Err(RegistryError::EmptyLocation);
    }
    if duration <= 0 {
        return Err(RegistryError::NonPositiveDuration(duration));
    }
    if capacity <= 0 {
        return Err(RegistryError::NonPositiveCapacity(capacity));
    }
    Ok(())
}

fn compose_start(
    day: u32,
    month: u32,
    year: i32,
    hour: u32,
    minute: u32,
) -> RegistryResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or(RegistryError::InvalidDate {
            day,
            month,
            year,
            hour,
            minute,
        })
}

//! Event record and display-text normalization.
//!
//! An [`Event`] is created and owned by the event registry; the participant
//! set it carries is mutated only through the registry facade so the
//! bidirectional member/event bookkeeping can never drift.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::api::{EventId, MemberId};

/// Reformat a string so the first letter of each whitespace-separated word is
/// capitalized and the rest is lowercased.
///
/// Empty or whitespace-only input is returned unchanged. Runs of whitespace
/// between words collapse to a single space.
pub(crate) fn title_case(input: &str) -> String {
    if input.trim().is_empty() {
        return input.to_string();
    }

    input
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// A single event of the association.
///
/// `name` and `location` are normalized to title case on every assignment.
/// `start` is a wall-clock datetime without timezone. `duration` is stored as
/// supplied by the caller; the time-window arithmetic interprets it as hours
/// (see [`end`](Event::end)). `capacity` is validated strictly positive when
/// the event enters the registry and is not re-checked afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    name: String,
    location: String,
    start: NaiveDateTime,
    duration: i32,
    capacity: i32,
    participants: BTreeSet<MemberId>,
}

impl Event {
    /// Create an event with no participants. Name and location are normalized.
    pub(crate) fn new(
        id: EventId,
        name: &str,
        location: &str,
        start: NaiveDateTime,
        duration: i32,
        capacity: i32,
    ) -> Self {
        Self {
            id,
            name: title_case(name),
            location: title_case(location),
            start,
            duration,
            capacity,
            participants: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Duration as supplied at creation or amendment. The unit the callers
    /// supply has historically been minutes while [`end`](Event::end) applies
    /// it as hours; the raw value is kept unchanged here.
    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// Maximum number of simultaneous participants.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Ids of the currently enrolled members.
    pub fn participants(&self) -> &BTreeSet<MemberId> {
        &self.participants
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn is_participant(&self, member: MemberId) -> bool {
        self.participants.contains(&member)
    }

    /// End of the event's time window: start plus duration applied as hours.
    ///
    /// Saturates at the representable maximum instead of overflowing for
    /// absurd durations.
    pub fn end(&self) -> NaiveDateTime {
        self.start
            .checked_add_signed(Duration::hours(i64::from(self.duration)))
            .unwrap_or(NaiveDateTime::MAX)
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = title_case(name);
    }

    pub(crate) fn set_location(&mut self, location: &str) {
        self.location = title_case(location);
    }

    pub(crate) fn set_start(&mut self, start: NaiveDateTime) {
        self.start = start;
    }

    pub(crate) fn set_duration(&mut self, duration: i32) {
        self.duration = duration;
    }

    pub(crate) fn set_capacity(&mut self, capacity: i32) {
        self.capacity = capacity;
    }

    pub(crate) fn insert_participant(&mut self, member: MemberId) -> bool {
        self.participants.insert(member)
    }

    pub(crate) fn remove_participant(&mut self, member: MemberId) -> bool {
        self.participants.remove(&member)
    }
}

//! Overlap predicates over two events.
//!
//! All three predicates are pure and symmetric. Two events conflict for the
//! registry only when they share both time and place; a member's personal
//! calendar conflict ignores place entirely and uses
//! [`time_windows_disjoint`] alone.

use crate::models::Event;

/// True iff the two events take place at different (normalized) locations.
pub fn locations_differ(a: &Event, b: &Event) -> bool {
    a.location() != b.location()
}

/// True iff the two time windows do not intersect: one event starts strictly
/// after the other has ended. Events that merely touch at an endpoint are
/// treated as overlapping.
pub fn time_windows_disjoint(a: &Event, b: &Event) -> bool {
    a.start() > b.end() || a.end() < b.start()
}

/// True iff the two events can coexist in the registry: they are apart in
/// time or apart in space.
pub fn no_overlap(a: &Event, b: &Event) -> bool {
    time_windows_disjoint(a, b) || locations_differ(a, b)
}

//! Shared access to one association from concurrent hosts.
//!
//! The registry itself is synchronous, single-threaded logic: every
//! operation is a check-then-act sequence over plain collections. A host
//! that calls in from several threads must therefore serialize whole
//! operations, not individual reads and writes. [`SharedAssociation`] does
//! exactly that with one coarse lock around the entire graph.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::registry::Association;

/// Cloneable handle to an [`Association`] behind a single read-write lock.
///
/// Each closure passed to [`read`](SharedAssociation::read) or
/// [`write`](SharedAssociation::write) runs under the lock from start to
/// finish, so a validate-then-mutate sequence such as enrollment can never
/// interleave with another thread's mutation.
#[derive(Debug, Clone, Default)]
pub struct SharedAssociation {
    inner: Arc<RwLock<Association>>,
}

impl SharedAssociation {
    /// Wrap an association for shared use.
    pub fn new(association: Association) -> Self {
        Self {
            inner: Arc::new(RwLock::new(association)),
        }
    }

    /// Run a read-only closure under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&Association) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run a mutating closure under the lock. The closure sees the
    /// association exclusively for its whole duration.
    pub fn write<R>(&self, f: impl FnOnce(&mut Association) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Replace the whole graph, e.g. after loading a snapshot.
    pub fn replace(&self, association: Association) {
        *self.inner.write() = association;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonalInfo;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedAssociation::new(Association::new());
        let other = shared.clone();

        shared.write(|a| a.add_member(PersonalInfo::new("Doe", "Jane")).unwrap());
        assert_eq!(other.read(|a| a.members().len()), 1);
    }

    #[test]
    fn test_replace_swaps_graph() {
        let shared = SharedAssociation::new(Association::new());
        shared.write(|a| a.add_member(PersonalInfo::new("Doe", "Jane")).unwrap());

        shared.replace(Association::new());
        assert_eq!(shared.read(|a| a.members().len()), 0);
    }

    #[test]
    fn test_concurrent_enrollment_is_serialized() {
        use chrono::{Datelike, Duration, Timelike};

        let shared = SharedAssociation::new(Association::new());
        let start = chrono::Local::now().naive_local() + Duration::days(3);

        let event = shared.write(|a| {
            a.create_event(
                "Chess Night",
                "Club House",
                start.day(),
                start.month(),
                start.year(),
                start.hour(),
                start.minute(),
                2,
                1,
            )
            .unwrap()
        });

        let members: Vec<_> = shared.write(|a| {
            (0..4)
                .map(|i| a.add_member(PersonalInfo::new("Doe", &format!("P{i}"))).unwrap())
                .collect()
        });

        let handles: Vec<_> = members
            .into_iter()
            .map(|m| {
                let shared = shared.clone();
                std::thread::spawn(move || shared.write(|a| a.enroll(event, m).is_ok()))
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        // Capacity 1: exactly one thread wins.
        assert_eq!(successes, 1);
        assert_eq!(
            shared.read(|a| a.events().events()[0].participant_count()),
            1
        );
    }
}

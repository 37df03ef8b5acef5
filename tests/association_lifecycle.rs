//! Full lifecycle integration tests against the public API.

use ams_rust::api::{EventId, MemberId};
use ams_rust::models::PersonalInfo;
use ams_rust::registry::{Association, RegistryError};
use chrono::{Datelike, Duration, NaiveDateTime, Timelike};

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn create_at(
    association: &mut Association,
    name: &str,
    location: &str,
    start: NaiveDateTime,
    duration: i32,
    capacity: i32,
) -> Result<EventId, RegistryError> {
    association.create_event(
        name,
        location,
        start.day(),
        start.month(),
        start.year(),
        start.hour(),
        start.minute(),
        duration,
        capacity,
    )
}

#[test]
fn season_of_events_lifecycle() {
    let mut association = Association::new();
    let base = now() + Duration::days(30);

    // Build a small season across two venues.
    let fair = create_at(&mut association, "spring fair", "main square", base, 8, 100).unwrap();
    let gala = create_at(
        &mut association,
        "charity gala",
        "town hall",
        base + Duration::days(1),
        5,
        2,
    )
    .unwrap();

    // Names and locations come back normalized.
    assert_eq!(association.events().get(fair).unwrap().name(), "Spring Fair");
    assert_eq!(
        association.events().get(gala).unwrap().location(),
        "Town Hall"
    );

    // The same venue cannot host a second event in the same window.
    let clash = create_at(
        &mut association,
        "pop-up market",
        "MAIN square",
        base + Duration::hours(2),
        2,
        50,
    );
    assert!(matches!(clash, Err(RegistryError::VenueConflict { .. })));
    assert_eq!(association.events().len(), 2);

    // Members join; the gala fills up at capacity two.
    let luke = association
        .add_member(PersonalInfo::with_details("Skywalker", "Luke", "Tatooine", 20))
        .unwrap();
    let leia = association
        .add_member(PersonalInfo::new("Organa", "Leia"))
        .unwrap();
    let han = association.add_member(PersonalInfo::new("Solo", "Han")).unwrap();

    association.enroll(gala, luke).unwrap();
    association.enroll(gala, leia).unwrap();
    assert!(matches!(
        association.enroll(gala, han),
        Err(RegistryError::CapacityReached { .. })
    ));

    // Luke is busy at the gala; the fair on the previous day is fine.
    association.enroll(fair, luke).unwrap();
    assert_eq!(association.member_events(luke).unwrap().len(), 2);
    assert_eq!(association.member_upcoming_events(luke).unwrap().len(), 2);

    // Leadership bookkeeping.
    assert!(association.designate_president(Some(leia)));
    assert_eq!(association.president().unwrap().id(), leia);

    // Deleting the gala releases everyone.
    association.delete_event(gala);
    assert_eq!(association.member_events(luke).unwrap().len(), 1);
    assert!(association.member_events(leia).unwrap().is_empty());
    assert_eq!(association.events().len(), 1);
}

#[test]
fn snapshot_survives_full_graph() {
    let mut association = Association::new();
    let base = now() + Duration::days(10);

    let fair = create_at(&mut association, "Street Fair", "Main Square", base, 3, 10).unwrap();
    let m = association
        .add_member(PersonalInfo::new("Doe", "Jane"))
        .unwrap();
    association.enroll(fair, m).unwrap();

    let path = std::env::temp_dir().join(format!("ams-lifecycle-{}.json", std::process::id()));
    association.save_data(&path).unwrap();
    let restored = Association::load_data(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(association, restored);
    assert_eq!(restored.upcoming_events().len(), 1);
    assert_eq!(restored.participants(fair).unwrap().len(), 1);

    // The restored graph keeps enforcing the invariants.
    let mut restored = restored;
    assert!(matches!(
        restored.enroll(fair, m),
        Err(RegistryError::AlreadyEnrolled { .. })
    ));
    let clash = create_at(
        &mut restored,
        "Second Fair",
        "Main Square",
        base + Duration::hours(1),
        2,
        10,
    );
    assert!(matches!(clash, Err(RegistryError::VenueConflict { .. })));
}

#[test]
fn member_removal_and_unknown_ids() {
    let mut association = Association::new();
    let base = now() + Duration::days(4);
    let event = create_at(&mut association, "Workshop", "Library", base, 2, 5).unwrap();

    let m = association
        .add_member(PersonalInfo::new("Doe", "John"))
        .unwrap();
    association.enroll(event, m).unwrap();

    assert!(association.remove_member(m));
    assert!(association.participants(event).unwrap().is_empty());

    assert!(matches!(
        association.member_events(m),
        Err(RegistryError::UnknownMember(_))
    ));
    assert!(matches!(
        association.participants(EventId::new(999)),
        Err(RegistryError::UnknownEvent(_))
    ));
    assert!(matches!(
        association.enroll(event, MemberId::new(999)),
        Err(RegistryError::UnknownMember(_))
    ));
}

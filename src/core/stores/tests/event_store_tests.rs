use chrono::NaiveDate;

use super::sequence_ids;
use crate::core::errors::StoreError;
use crate::core::stores::EventStore;
use crate::domain::event::DEFAULT_DURATION_MINUTES;
use crate::domain::EntityId;

fn store() -> EventStore {
    EventStore::new(sequence_ids("event"))
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

#[test]
fn add_composes_date_from_day_and_time() {
    let mut events = store();
    let id = events
        .add("Standup", None, "09:30", 15, monday())
        .expect("valid event");

    let event = events.get(&id).unwrap();
    assert_eq!(event.date.date(), monday());
    assert_eq!(event.date.format("%H:%M").to_string(), "09:30");
    assert_eq!(event.time, "09:30");
}

#[test]
fn add_normalizes_unpadded_times() {
    let mut events = store();
    let id = events
        .add("Workout", None, "7:05", DEFAULT_DURATION_MINUTES, monday())
        .unwrap();
    assert_eq!(events.get(&id).unwrap().time, "07:05");
}

#[test]
fn add_rejects_blank_or_malformed_input() {
    let mut events = store();
    for (title, time, minutes) in [
        ("", "09:30", 60u32),
        ("Standup", "", 60),
        ("Standup", "half past nine", 60),
        ("Standup", "09:30", 0),
    ] {
        let err = events
            .add(title, None, time, minutes, monday())
            .expect_err("invalid event must fail");
        assert!(matches!(err, StoreError::Validation(_)));
    }
    assert!(events.is_empty());
    assert_eq!(events.revision(), 0);
}

#[test]
fn events_on_date_orders_by_time_and_ignores_other_days() {
    let mut events = store();
    events.add("Review", None, "14:00", 60, monday()).unwrap();
    events.add("Standup", None, "09:30", 15, monday()).unwrap();
    events
        .add("Tomorrow", None, "08:00", 60, monday().succ_opt().unwrap())
        .unwrap();

    let titles: Vec<&str> = events
        .events_on_date(monday())
        .iter()
        .map(|event| event.title.as_str())
        .collect();
    assert_eq!(titles, ["Standup", "Review"]);
}

#[test]
fn events_on_date_keeps_insertion_order_for_equal_times() {
    let mut events = store();
    events.add("First", None, "09:30", 30, monday()).unwrap();
    events.add("Second", None, "09:30", 30, monday()).unwrap();

    let titles: Vec<&str> = events
        .events_on_date(monday())
        .iter()
        .map(|event| event.title.as_str())
        .collect();
    assert_eq!(titles, ["First", "Second"]);
}

#[test]
fn delete_removes_exactly_one_event() {
    let mut events = store();
    let id = events.add("Standup", None, "09:30", 15, monday()).unwrap();
    events.add("Review", None, "14:00", 60, monday()).unwrap();

    events.delete(&id).unwrap();
    assert_eq!(events.len(), 1);
    let err = events.delete(&id).expect_err("second delete is a no-op");
    assert!(matches!(err, StoreError::NotFound(_)));
    assert!(events.delete(&EntityId::from("missing")).is_err());
}

#[test]
fn week_of_starts_on_the_monday_on_or_before() {
    // 2026-03-02 is itself a Monday; 2026-03-05 is the Thursday after it.
    let thursday = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
    let week = EventStore::week_of(thursday);
    assert_eq!(week[0], monday());
    assert_eq!(week[6], NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());

    let same_week = EventStore::week_of(monday());
    assert_eq!(same_week, week);
    for pair in week.windows(2) {
        assert_eq!(pair[1], pair[0].succ_opt().unwrap());
    }
}

#[test]
fn week_of_crosses_month_boundaries() {
    // 2026-03-01 is a Sunday, so its week starts in February.
    let sunday = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let week = EventStore::week_of(sunday);
    assert_eq!(week[0], NaiveDate::from_ymd_opt(2026, 2, 23).unwrap());
    assert_eq!(week[6], sunday);
}

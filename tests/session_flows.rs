//! End-to-end flows through the public API, with injected clock and ids.

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use planner_core::core::ids::SequenceIds;
use planner_core::core::session::Session;
use planner_core::core::stores::EventStore;
use planner_core::core::summary::SummaryService;
use planner_core::core::time::{Clock, FixedClock};
use planner_core::domain::{
    Mood, TaskCategory, TaskFilter, TaskPriority, TransactionKind,
};

fn fixed_session() -> Session {
    // Monday 2026-03-02.
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 3, 2, 8, 30, 0).unwrap());
    Session::with_parts(Arc::new(clock), || Box::new(SequenceIds::default()))
}

#[test]
fn sequence_ids_make_creation_deterministic() {
    let mut session = fixed_session();
    let first = session
        .tasks
        .add("One", None, TaskCategory::Personal, TaskPriority::Low, None)
        .unwrap();
    let second = session
        .tasks
        .add("Two", None, TaskCategory::Personal, TaskPriority::Low, None)
        .unwrap();

    assert_eq!(first.as_str(), "id-1");
    assert_eq!(second.as_str(), "id-2");
    assert_eq!(
        session.tasks.get(&first).unwrap().created_at,
        session.clock().now()
    );
}

#[test]
fn stores_are_independent() {
    let mut session = fixed_session();
    session
        .tasks
        .add("Task", None, TaskCategory::Work, TaskPriority::High, None)
        .unwrap();
    session
        .transactions
        .add(TransactionKind::Income, 10.0, "Other", None)
        .unwrap();

    // Same generator prefix per store, but id spaces never collide across
    // stores because each store owns its own generator.
    assert_eq!(session.tasks.len(), 1);
    assert_eq!(session.transactions.len(), 1);
    assert!(session.events.is_empty());
    assert!(session.entries.is_empty());
}

#[test]
fn full_day_flow_feeds_the_dashboard() {
    let mut session = fixed_session();
    let today = session.clock().today();

    let chores = session
        .tasks
        .add(
            "Buy milk",
            Some("2 liters".into()),
            TaskCategory::Personal,
            TaskPriority::Low,
            None,
        )
        .unwrap();
    session
        .tasks
        .add("Ship report", None, TaskCategory::Work, TaskPriority::High, None)
        .unwrap();
    session.tasks.toggle_complete(&chores).unwrap();

    session
        .transactions
        .add(TransactionKind::Income, 1000.0, "Salary", None)
        .unwrap();
    session
        .transactions
        .add(TransactionKind::Expense, 300.0, "Food", Some("groceries".into()))
        .unwrap();

    session
        .events
        .add("Standup", None, "09:30", 15, today)
        .unwrap();
    session
        .events
        .add("Review", None, "14:00", 60, today)
        .unwrap();

    session
        .entries
        .add("Day one", "Great day", Mood::Happy)
        .unwrap();

    let summary = SummaryService::dashboard(&session);
    assert_eq!(summary.pending_tasks, 1);
    assert_eq!(summary.balance, 700.0);
    assert_eq!(summary.events_today, 2);
    assert_eq!(summary.diary_entries, 1);

    let week = EventStore::week_of(today);
    assert_eq!(week[0], today);
    assert_eq!(week[6], NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());

    let pending: Vec<&str> = session
        .tasks
        .filter(TaskFilter::Pending)
        .iter()
        .map(|task| task.title.as_str())
        .collect();
    assert_eq!(pending, ["Ship report"]);
}

#[test]
fn revisions_signal_when_consumers_should_refetch() {
    let mut session = fixed_session();
    let before = session.entries.revision();

    let id = session
        .entries
        .add("Day one", "Great day", Mood::Neutral)
        .unwrap();
    assert!(session.entries.revision() > before);

    let after_add = session.entries.revision();
    // Rejected mutations must not advance the revision.
    assert!(session.entries.edit(&id, "", "x", Mood::Sad).is_err());
    assert_eq!(session.entries.revision(), after_add);

    session.entries.toggle_favorite(&id).unwrap();
    assert!(session.entries.revision() > after_add);
}

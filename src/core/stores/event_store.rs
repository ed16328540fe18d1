//! In-memory store for schedule events and week-view helpers.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use tracing::{debug, warn};

use crate::core::errors::{Result, StoreError};
use crate::core::ids::IdGenerator;
use crate::domain::event::Event;
use crate::domain::EntityId;

/// Owns the event collection and its calendar queries.
///
/// Unlike the other stores, events carry an explicit target date rather than a
/// creation timestamp, so no clock is needed here.
pub struct EventStore {
    events: Vec<Event>,
    ids: Box<dyn IdGenerator>,
    revision: u64,
}

impl EventStore {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            events: Vec::new(),
            ids,
            revision: 0,
        }
    }

    /// Creates an event on `target_date` at the given `"HH:MM"` start time.
    ///
    /// The stored timestamp combines the target calendar day with the parsed
    /// hour and minute; the time string is re-rendered zero-padded so that
    /// lexicographic ordering matches chronological ordering. Rejects blank
    /// titles, blank or unparseable times, and zero durations.
    pub fn add(
        &mut self,
        title: &str,
        description: Option<String>,
        time: &str,
        duration_minutes: u32,
        target_date: NaiveDate,
    ) -> Result<EntityId> {
        if title.trim().is_empty() {
            warn!("rejected event with blank title");
            return Err(StoreError::Validation(
                "event title must not be empty".into(),
            ));
        }
        if time.trim().is_empty() {
            return Err(StoreError::Validation("event time must not be empty".into()));
        }
        let start = NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|_| {
            StoreError::Validation(format!("event time `{}` is not HH:MM", time.trim()))
        })?;
        if duration_minutes == 0 {
            return Err(StoreError::Validation(
                "event duration must be at least one minute".into(),
            ));
        }
        let id = self.ids.next_id();
        self.events.push(Event {
            id: id.clone(),
            title: title.to_string(),
            description,
            date: target_date.and_time(start),
            time: start.format("%H:%M").to_string(),
            duration_minutes,
        });
        self.revision += 1;
        debug!(%id, %target_date, "event added");
        Ok(id)
    }

    /// Removes the matching event permanently.
    pub fn delete(&mut self, id: &EntityId) -> Result<()> {
        let before = self.events.len();
        self.events.retain(|event| event.id != *id);
        if self.events.len() == before {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.revision += 1;
        Ok(())
    }

    /// Events falling on the given calendar day, ordered by start time.
    ///
    /// The sort is stable, so events sharing a start time keep insertion order.
    pub fn events_on_date(&self, date: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| event.date.date() == date)
            .collect();
        events.sort_by(|a, b| a.time.cmp(&b.time));
        events
    }

    /// The seven consecutive days starting from the Monday on or before `date`.
    pub fn week_of(date: NaiveDate) -> [NaiveDate; 7] {
        let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        std::array::from_fn(|offset| monday + Duration::days(offset as i64))
    }

    /// Read-only view of the current collection in insertion order.
    pub fn snapshot(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &EntityId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == *id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Monotonic counter bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

//! Domain model for schedule events.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, Identifiable};

/// Length assumed for an event when no duration is given.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    /// Calendar day plus time-of-day, composed at creation from the target
    /// date and the parsed `time` field.
    pub date: NaiveDateTime,
    /// Start time normalized to zero-padded 24-hour `"HH:MM"`, so lexicographic
    /// comparison orders events chronologically within a day.
    pub time: String,
    pub duration_minutes: u32,
}

impl Identifiable for Event {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

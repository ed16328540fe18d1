//! Domain model for diary entries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::StoreError;
use crate::domain::common::{EntityId, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiaryEntry {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    /// Creation timestamp; edits never change it.
    pub date: DateTime<Utc>,
    pub is_favorite: bool,
    pub mood: Mood,
}

impl Identifiable for DiaryEntry {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
/// Enumerates the moods an entry can be tagged with.
pub enum Mood {
    Happy,
    Excited,
    #[default]
    Neutral,
    Sad,
    Stressed,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mood::Happy => "Happy",
            Mood::Excited => "Excited",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::Stressed => "Stressed",
        };
        f.write_str(label)
    }
}

impl FromStr for Mood {
    type Err = StoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "excited" => Ok(Mood::Excited),
            "neutral" => Ok(Mood::Neutral),
            "sad" => Ok(Mood::Sad),
            "stressed" => Ok(Mood::Stressed),
            other => Err(StoreError::Validation(format!("unknown mood `{other}`"))),
        }
    }
}

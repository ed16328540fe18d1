//! In-memory store for diary entries, with favorites and text search.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::errors::{Result, StoreError};
use crate::core::ids::IdGenerator;
use crate::core::time::Clock;
use crate::domain::entry::{DiaryEntry, Mood};
use crate::domain::EntityId;

/// Owns the diary-entry collection and its query/mutation operations.
pub struct EntryStore {
    entries: Vec<DiaryEntry>,
    clock: Arc<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    revision: u64,
}

impl EntryStore {
    pub fn new(clock: Arc<dyn Clock>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            entries: Vec::new(),
            clock,
            ids,
            revision: 0,
        }
    }

    /// Creates an entry dated at the current instant.
    ///
    /// Rejects blank titles or content; the collection is untouched on error.
    pub fn add(&mut self, title: &str, content: &str, mood: Mood) -> Result<EntityId> {
        Self::validate_text(title, content)?;
        let id = self.ids.next_id();
        self.entries.push(DiaryEntry {
            id: id.clone(),
            title: title.to_string(),
            content: content.to_string(),
            date: self.clock.now(),
            is_favorite: false,
            mood,
        });
        self.revision += 1;
        debug!(%id, "diary entry added");
        Ok(id)
    }

    /// Replaces the title, content, and mood of the matching entry in place.
    ///
    /// The id, creation date, and favorite flag are never altered.
    pub fn edit(&mut self, id: &EntityId, title: &str, content: &str, mood: Mood) -> Result<()> {
        Self::validate_text(title, content)?;
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == *id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        entry.title = title.to_string();
        entry.content = content.to_string();
        entry.mood = mood;
        self.revision += 1;
        Ok(())
    }

    /// Removes the matching entry permanently.
    pub fn delete(&mut self, id: &EntityId) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != *id);
        if self.entries.len() == before {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.revision += 1;
        Ok(())
    }

    /// Flips the favorite flag of the matching entry.
    pub fn toggle_favorite(&mut self, id: &EntityId) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == *id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        entry.is_favorite = !entry.is_favorite;
        self.revision += 1;
        Ok(())
    }

    /// Case-insensitive substring match against title or content.
    ///
    /// An empty term matches every entry. Results keep insertion order.
    pub fn search(&self, term: &str) -> Vec<&DiaryEntry> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                needle.is_empty()
                    || entry.title.to_lowercase().contains(&needle)
                    || entry.content.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// All entries ordered most recent first; same-instant entries keep
    /// insertion order.
    pub fn sorted_by_date_descending(&self) -> Vec<&DiaryEntry> {
        let mut items: Vec<&DiaryEntry> = self.entries.iter().collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }

    /// Read-only view of the current collection in insertion order.
    pub fn snapshot(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn get(&self, id: &EntityId) -> Option<&DiaryEntry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Monotonic counter bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn validate_text(title: &str, content: &str) -> Result<()> {
        if title.trim().is_empty() {
            warn!("rejected diary entry with blank title");
            return Err(StoreError::Validation(
                "diary entry title must not be empty".into(),
            ));
        }
        if content.trim().is_empty() {
            return Err(StoreError::Validation(
                "diary entry content must not be empty".into(),
            ));
        }
        Ok(())
    }
}

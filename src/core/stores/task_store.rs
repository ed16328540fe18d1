//! In-memory store for to-do tasks.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::core::errors::{Result, StoreError};
use crate::core::ids::IdGenerator;
use crate::core::time::Clock;
use crate::domain::task::{Task, TaskCategory, TaskFilter, TaskPriority};
use crate::domain::EntityId;

/// Owns the task collection and its query/mutation operations.
///
/// Tasks are kept in insertion order; [`TaskStore::snapshot`] is the canonical
/// read surface and [`TaskStore::revision`] tells consumers when to re-fetch.
pub struct TaskStore {
    tasks: Vec<Task>,
    clock: Arc<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    revision: u64,
}

impl TaskStore {
    pub fn new(clock: Arc<dyn Clock>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            tasks: Vec::new(),
            clock,
            ids,
            revision: 0,
        }
    }

    /// Creates a task and appends it to the collection.
    ///
    /// Rejects blank titles; the collection is untouched on error.
    pub fn add(
        &mut self,
        title: &str,
        description: Option<String>,
        category: TaskCategory,
        priority: TaskPriority,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<EntityId> {
        if title.trim().is_empty() {
            warn!("rejected task with blank title");
            return Err(StoreError::Validation(
                "task title must not be empty".into(),
            ));
        }
        let id = self.ids.next_id();
        self.tasks.push(Task {
            id: id.clone(),
            title: title.to_string(),
            description,
            category,
            priority,
            due_date,
            completed: false,
            created_at: self.clock.now(),
        });
        self.revision += 1;
        debug!(%id, "task added");
        Ok(id)
    }

    /// Flips the completion flag of the matching task.
    pub fn toggle_complete(&mut self, id: &EntityId) -> Result<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == *id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        task.completed = !task.completed;
        self.revision += 1;
        Ok(())
    }

    /// Removes the matching task permanently.
    pub fn delete(&mut self, id: &EntityId) -> Result<()> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != *id);
        if self.tasks.len() == before {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.revision += 1;
        debug!(%id, "task deleted");
        Ok(())
    }

    /// Returns the tasks matching `filter`, preserving insertion order.
    pub fn filter(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| match filter {
                TaskFilter::All => true,
                TaskFilter::Pending => !task.completed,
                TaskFilter::Completed => task.completed,
            })
            .collect()
    }

    /// Read-only view of the current collection in insertion order.
    pub fn snapshot(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &EntityId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Monotonic counter bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

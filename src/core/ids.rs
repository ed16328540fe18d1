use uuid::Uuid;

use crate::domain::EntityId;

/// Produces fresh unique identifiers for newly created entities.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> EntityId;
}

/// Default generator backed by random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> EntityId {
        EntityId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic generator emitting `prefix-1`, `prefix-2`, ... sequences.
#[derive(Debug, Clone)]
pub struct SequenceIds {
    prefix: String,
    next: u64,
}

impl SequenceIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequenceIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequenceIds {
    fn next_id(&mut self) -> EntityId {
        let id = EntityId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

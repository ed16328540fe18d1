//! Shared identifier plumbing for planner entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned to an entity at creation time.
///
/// Ids are plain strings so the generating scheme (UUIDs in production,
/// counting sequences in tests) stays swappable behind
/// [`crate::core::ids::IdGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Exposes a stable identifier for entities held in a store.
pub trait Identifiable {
    fn id(&self) -> &EntityId;
}

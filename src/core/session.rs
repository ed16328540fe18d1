//! Session wiring: one in-memory instance of each feature store.

use std::sync::Arc;

use crate::core::ids::{IdGenerator, UuidIds};
use crate::core::stores::{EntryStore, EventStore, TaskStore, TransactionStore};
use crate::core::time::{Clock, SystemClock};

/// Owns the four feature stores for one application lifetime.
///
/// Each store is an explicit, independently testable state container; nothing
/// outlives the session, and dropping it discards all state.
pub struct Session {
    pub tasks: TaskStore,
    pub transactions: TransactionStore,
    pub events: EventStore,
    pub entries: EntryStore,
    clock: Arc<dyn Clock>,
}

impl Session {
    /// Builds a session backed by the system clock and UUID identifiers.
    pub fn new() -> Self {
        Self::with_parts(Arc::new(SystemClock), || Box::new(UuidIds))
    }

    /// Builds a session with an injected clock and one id generator per store.
    pub fn with_parts(
        clock: Arc<dyn Clock>,
        mut ids: impl FnMut() -> Box<dyn IdGenerator>,
    ) -> Self {
        Self {
            tasks: TaskStore::new(clock.clone(), ids()),
            transactions: TransactionStore::new(clock.clone(), ids()),
            events: EventStore::new(ids()),
            entries: EntryStore::new(clock.clone(), ids()),
            clock,
        }
    }

    /// The clock shared by the session's stores.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

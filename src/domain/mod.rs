//! Pure domain models (Task, Transaction, Event, DiaryEntry).
//! No I/O, no CLI, no store logic. Only data types and core enums.

pub mod common;
pub mod entry;
pub mod event;
pub mod task;
pub mod transaction;

pub use common::*;
pub use entry::*;
pub use event::*;
pub use task::*;
pub use transaction::*;

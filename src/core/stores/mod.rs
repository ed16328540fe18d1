//! The four feature stores. Each owns one in-memory collection plus a small
//! set of synchronous query/mutation operations; none depends on the others.

pub mod entry_store;
pub mod event_store;
pub mod task_store;
pub mod transaction_store;

pub use entry_store::EntryStore;
pub use event_store::EventStore;
pub use task_store::TaskStore;
pub use transaction_store::TransactionStore;

#[cfg(test)]
mod tests;

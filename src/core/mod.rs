//! Core state management: errors, clock and id injection, the four stores,
//! session wiring, and dashboard aggregation.

pub mod errors;
pub mod ids;
pub mod session;
pub mod stores;
pub mod summary;
pub mod time;

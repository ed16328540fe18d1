#![doc(test(attr(deny(warnings))))]

//! Planner Core offers in-memory task, finance, schedule, and diary stores
//! that power a personal productivity dashboard and CLI.

pub mod cli;
pub mod core;
pub mod domain;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Planner Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}

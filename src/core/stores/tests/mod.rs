use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::core::ids::SequenceIds;
use crate::core::time::{Clock, FixedClock};

mod event_store_tests;

/// Reference instant shared by the store tests: Monday 2026-03-02, 12:00 UTC.
pub(crate) fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap()
}

pub(crate) fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(fixed_instant()))
}

pub(crate) fn sequence_ids(prefix: &str) -> Box<SequenceIds> {
    Box::new(SequenceIds::new(prefix))
}

/// Clock whose `now()` advances by one minute on every call, so records
/// created back to back carry distinct timestamps.
pub(crate) struct SteppingClock {
    ticks: AtomicI64,
}

impl SteppingClock {
    pub(crate) fn starting_at_fixed_instant() -> Arc<Self> {
        Arc::new(Self {
            ticks: AtomicI64::new(0),
        })
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_instant() + Duration::minutes(tick)
    }
}

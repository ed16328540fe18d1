//! Aggregation helpers for the dashboard view.

use serde::Serialize;

use crate::core::session::Session;
use crate::core::time::Clock;
use crate::domain::event::Event;
use crate::domain::task::TaskFilter;

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub pending_tasks: usize,
    pub balance: f64,
    pub events_today: usize,
    pub diary_entries: usize,
}

/// Aggregates store data for summary surfaces.
///
/// See also: [`crate::core::stores::TransactionStore::balance`] for the
/// underlying totals.
pub struct SummaryService;

impl SummaryService {
    /// Computes the headline counters across all four stores.
    pub fn dashboard(session: &Session) -> DashboardSummary {
        DashboardSummary {
            pending_tasks: session.tasks.filter(TaskFilter::Pending).len(),
            balance: session.transactions.balance(),
            events_today: session
                .events
                .events_on_date(session.clock().today())
                .len(),
            diary_entries: session.entries.len(),
        }
    }

    /// Today's events ordered by start time.
    pub fn today_schedule(session: &Session) -> Vec<&Event> {
        session.events.events_on_date(session.clock().today())
    }
}

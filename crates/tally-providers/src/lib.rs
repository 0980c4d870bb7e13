#![allow(non_snake_case)]

pub mod aggregate;
pub mod events;

use tally_types::DashboardData;
use tracing::warn;

/// Reads the event log and aggregates it into the datasets the dashboard
/// renders. A missing or unreadable log is not an error at this level: the
/// dashboard shows its empty state instead.
pub async fn collect_dashboard_data(eventsPath: &str) -> DashboardData {
    let events = match events::read_events(eventsPath).await {
        Ok(events) => events,
        Err(e) => {
            warn!("event log {eventsPath} unavailable, serving empty datasets: {e}");
            return DashboardData::default();
        }
    };

    DashboardData {
        total_events: events.len() as u64,
        events_by_kind: aggregate::events_by_kind(&events),
        unique_visitors: aggregate::unique_visitors(&events),
    }
}

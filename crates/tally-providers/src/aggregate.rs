use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::NaiveDate;
use tally_types::{ChartDataset, DataRow};

use crate::events::Event;

/// Series key used by the unique-visitors dataset.
pub const VISITORS_LABEL: &str = "visitors";

fn day_index(day: &NaiveDate) -> String {
    day.format("%m-%d").to_string()
}

/// Per-day event counts, one series per event kind. Kinds are sorted so the
/// series order (and therefore bar order and palette assignment) is stable
/// across loads. A kind that did not occur on a given day is simply absent
/// from that row.
pub fn events_by_kind(events: &[Event]) -> ChartDataset {
    let kinds: BTreeSet<&str> = events.iter().map(|e| e.kind.as_str()).collect();

    let mut byDay: BTreeMap<NaiveDate, BTreeMap<&str, u64>> = BTreeMap::new();
    for event in events {
        *byDay
            .entry(event.day)
            .or_default()
            .entry(event.kind.as_str())
            .or_insert(0) += 1;
    }

    let rows = byDay
        .iter()
        .map(|(day, counts)| {
            let mut row = DataRow::new(day_index(day));
            for (kind, count) in counts {
                row.values.insert((*kind).to_string(), *count as f64);
            }
            row
        })
        .collect();

    ChartDataset {
        labels: kinds.into_iter().map(str::to_string).collect(),
        rows,
    }
}

/// Distinct users per day, as a single-series dataset.
pub fn unique_visitors(events: &[Event]) -> ChartDataset {
    let mut byDay: BTreeMap<NaiveDate, HashSet<&str>> = BTreeMap::new();
    for event in events {
        byDay
            .entry(event.day)
            .or_default()
            .insert(event.user.as_str());
    }

    let rows = byDay
        .iter()
        .map(|(day, users)| DataRow::new(day_index(day)).with_value(VISITORS_LABEL, users.len() as f64))
        .collect();

    ChartDataset {
        labels: vec![VISITORS_LABEL.to_string()],
        rows,
    }
}

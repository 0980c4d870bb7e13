use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One point along the category axis. `index` is the axis label; `values`
/// holds one number per series key. Rows are opaque beyond key lookup —
/// nothing validates that every series key is present in every row.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DataRow {
    pub index: String,
    pub values: HashMap<String, f64>,
}

impl DataRow {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }
}

/// Rows plus the ordered series keys that should be drawn from them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub rows: Vec<DataRow>,
}

impl Default for ChartDataset {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            rows: Vec::new(),
        }
    }
}

/// Everything the dashboard page fetches in one server-fn round trip.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    pub events_by_kind: ChartDataset,
    pub unique_visitors: ChartDataset,
    pub total_events: u64,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self {
            events_by_kind: ChartDataset::default(),
            unique_visitors: ChartDataset::default(),
            total_events: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_value_lookup() {
        let row = DataRow::new("01-15").with_value("clicks", 42.0);
        assert_eq!(row.value("clicks"), Some(42.0));
        assert_eq!(row.value("views"), None);
    }
}

use std::collections::HashMap;

/// The 5 theme colors assigned cyclically to series without an explicit
/// override. Slot order matters: the i-th series gets slot `i % 5`.
pub const CHART_PALETTE: [&str; 5] = [
    "#4f8ef7", // blue
    "#76b900", // green
    "#f59e0b", // amber
    "#ef4444", // red
    "#a855f7", // violet
];

/// Resolved fill color for one series, in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesColor {
    pub key: String,
    pub color: String,
}

/// Derives the per-series color config from the ordered series keys: an
/// override wins when present, otherwise the palette cycles. Pure function
/// of its inputs, rebuilt on every render.
pub fn build_color_config(
    labels: &[String],
    overrides: &HashMap<String, String>,
) -> Vec<SeriesColor> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| SeriesColor {
            key: label.clone(),
            color: overrides
                .get(label)
                .cloned()
                .unwrap_or_else(|| CHART_PALETTE[index % CHART_PALETTE.len()].to_string()),
        })
        .collect()
}

use tally_types::DataRow;

use crate::chart::color::SeriesColor;
use crate::chart::scale::{BandScale, LinearScale};
use crate::format::format_number;

/// Fixed viewBox of the chart SVG. The element itself is responsive; the
/// scene is laid out once in these coordinates.
pub const VIEW_WIDTH: f32 = 600.0;
pub const VIEW_HEIGHT: f32 = 300.0;

const MARGIN: f32 = 20.0;
/// Horizontal room reserved for the y-axis tick labels.
const Y_AXIS_GUTTER: f32 = 40.0;
/// Vertical room reserved for the x-axis tick labels.
const X_AXIS_GUTTER: f32 = 24.0;

/// Gap between the plot bottom and the x tick labels.
pub const X_TICK_MARGIN: f32 = 10.0;
/// Corner rounding on bars.
pub const BAR_RADIUS: f32 = 6.0;
/// Gap between a bar top and its value label.
pub const VALUE_LABEL_OFFSET: f32 = 12.0;
/// Font size of the value labels.
pub const VALUE_LABEL_FONT_SIZE: f32 = 16.0;

/// Value labels are drawn only below this row count; denser charts would
/// overlap the labels.
const VALUE_LABEL_MAX_ROWS: usize = 10;

const Y_TICK_COUNT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}

/// One tick along an axis: pixel position on that axis plus display text.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub position: f32,
    pub label: String,
}

/// One drawable bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub row: usize,
    pub series: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    /// Present only when the scene draws value labels (few enough rows).
    pub value_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub series: String,
    pub color: String,
}

/// One series line inside the hover tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipEntry {
    pub series: String,
    pub color: String,
    pub value: String,
}

/// Invisible hover target covering one category band, with the tooltip
/// content for that row precomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverBand {
    pub x: f32,
    pub width: f32,
    pub center: f32,
    pub index_label: String,
    pub entries: Vec<TooltipEntry>,
}

/// Everything the BarChart component draws, precomputed from the rows.
#[derive(Clone, Debug, PartialEq)]
pub struct BarScene {
    pub plot: PlotRect,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub bars: Vec<BarRect>,
    pub legend: Vec<LegendEntry>,
    pub hover_bands: Vec<HoverBand>,
    pub show_value_labels: bool,
}

/// Lays out a grouped vertical bar chart: one band per row, one bar per
/// series key present in that row, in series order. A series key absent
/// from a row produces no bar there; a present zero produces a zero-height
/// bar (still labeled).
pub fn build_bar_scene(rows: &[DataRow], series: &[SeriesColor]) -> BarScene {
    let plot = PlotRect {
        left: MARGIN + Y_AXIS_GUTTER,
        right: VIEW_WIDTH - MARGIN,
        top: MARGIN,
        bottom: VIEW_HEIGHT - MARGIN - X_AXIS_GUTTER,
    };

    let maxValue = rows
        .iter()
        .flat_map(|row| series.iter().filter_map(|s| row.value(&s.key)))
        .fold(0.0_f64, f64::max);
    let yScale = LinearScale::fit(maxValue, Y_TICK_COUNT);
    let xScale = BandScale::new(rows.len(), plot.left, plot.width());

    let plotHeight = plot.bottom - plot.top;
    let showValueLabels = rows.len() < VALUE_LABEL_MAX_ROWS;

    let yTicks = yScale
        .ticks()
        .into_iter()
        .map(|tick| AxisTick {
            position: plot.bottom - yScale.fraction(tick) as f32 * plotHeight,
            label: format_number(tick),
        })
        .collect();

    let xTicks = rows
        .iter()
        .enumerate()
        .map(|(i, row)| AxisTick {
            position: xScale.center(i),
            label: row.index.clone(),
        })
        .collect();

    let mut bars = Vec::new();
    let mut hoverBands = Vec::new();
    for (rowIndex, row) in rows.iter().enumerate() {
        let mut entries = Vec::new();
        for (seriesIndex, s) in series.iter().enumerate() {
            let Some(value) = row.value(&s.key) else {
                continue;
            };
            let (x, width) = xScale.slot(rowIndex, seriesIndex, series.len());
            let height = yScale.fraction(value) as f32 * plotHeight;
            bars.push(BarRect {
                row: rowIndex,
                series: s.key.clone(),
                x,
                y: plot.bottom - height,
                width,
                height,
                color: s.color.clone(),
                value_label: showValueLabels.then(|| format_number(value)),
            });
            entries.push(TooltipEntry {
                series: s.key.clone(),
                color: s.color.clone(),
                value: format_number(value),
            });
        }
        hoverBands.push(HoverBand {
            x: xScale.band_x(rowIndex),
            width: xScale.band_width(),
            center: xScale.center(rowIndex),
            index_label: row.index.clone(),
            entries,
        });
    }

    let legend = series
        .iter()
        .map(|s| LegendEntry {
            series: s.key.clone(),
            color: s.color.clone(),
        })
        .collect();

    BarScene {
        plot,
        x_ticks: xTicks,
        y_ticks: yTicks,
        bars,
        legend,
        hover_bands: hoverBands,
        show_value_labels: showValueLabels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::color::{build_color_config, CHART_PALETTE};
    use std::collections::HashMap;

    fn series(labels: &[&str]) -> Vec<SeriesColor> {
        let labels: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        build_color_config(&labels, &HashMap::new())
    }

    fn sales_rows() -> Vec<DataRow> {
        vec![
            DataRow::new("a").with_value("sales", 5.0),
            DataRow::new("b").with_value("sales", 9.0),
        ]
    }

    #[test]
    fn single_series_scenario() {
        let scene = build_bar_scene(&sales_rows(), &series(&["sales"]));

        assert_eq!(scene.bars.len(), 2);
        assert!(scene.bars.iter().all(|b| b.color == CHART_PALETTE[0]));
        assert_eq!(scene.bars[0].value_label.as_deref(), Some("5"));
        assert_eq!(scene.bars[1].value_label.as_deref(), Some("9"));

        assert_eq!(scene.legend.len(), 1);
        assert_eq!(scene.legend[0].series, "sales");

        assert_eq!(scene.x_ticks.len(), 2);
        assert_eq!(scene.x_ticks[0].label, "a");
        assert_eq!(scene.x_ticks[1].label, "b");
    }

    #[test]
    fn bars_follow_series_order_within_each_row() {
        let rows = vec![DataRow::new("a")
            .with_value("first", 1.0)
            .with_value("second", 2.0)
            .with_value("third", 3.0)];
        let scene = build_bar_scene(&rows, &series(&["third", "first", "second"]));

        let order: Vec<&str> = scene.bars.iter().map(|b| b.series.as_str()).collect();
        assert_eq!(order, vec!["third", "first", "second"]);
        // grouped left-to-right in that order
        assert!(scene.bars[0].x < scene.bars[1].x);
        assert!(scene.bars[1].x < scene.bars[2].x);
    }

    #[test]
    fn value_labels_suppressed_at_ten_rows() {
        let nineRows: Vec<DataRow> = (0..9)
            .map(|i| DataRow::new(format!("r{i}")).with_value("n", i as f64))
            .collect();
        let tenRows: Vec<DataRow> = (0..10)
            .map(|i| DataRow::new(format!("r{i}")).with_value("n", i as f64))
            .collect();

        let sparse = build_bar_scene(&nineRows, &series(&["n"]));
        assert!(sparse.show_value_labels);
        assert!(sparse.bars.iter().all(|b| b.value_label.is_some()));

        let dense = build_bar_scene(&tenRows, &series(&["n"]));
        assert!(!dense.show_value_labels);
        assert!(dense.bars.iter().all(|b| b.value_label.is_none()));
    }

    #[test]
    fn missing_series_key_emits_no_bar() {
        let rows = vec![
            DataRow::new("a").with_value("x", 4.0).with_value("y", 2.0),
            DataRow::new("b").with_value("y", 3.0),
        ];
        let scene = build_bar_scene(&rows, &series(&["x", "y"]));

        assert_eq!(scene.bars.len(), 3);
        assert!(!scene
            .bars
            .iter()
            .any(|b| b.row == 1 && b.series == "x"));

        // tooltip for the second band omits the absent series too
        assert_eq!(scene.hover_bands[1].entries.len(), 1);
        assert_eq!(scene.hover_bands[1].entries[0].series, "y");
    }

    #[test]
    fn present_zero_still_renders_a_labeled_bar() {
        let rows = vec![DataRow::new("a").with_value("n", 0.0)];
        let scene = build_bar_scene(&rows, &series(&["n"]));

        assert_eq!(scene.bars.len(), 1);
        assert_eq!(scene.bars[0].height, 0.0);
        assert_eq!(scene.bars[0].value_label.as_deref(), Some("0"));
    }

    #[test]
    fn bars_stay_inside_the_plot() {
        let rows: Vec<DataRow> = (0..12)
            .map(|i| DataRow::new(format!("{i}")).with_value("n", (i * 37) as f64))
            .collect();
        let scene = build_bar_scene(&rows, &series(&["n"]));

        for bar in &scene.bars {
            assert!(bar.x >= scene.plot.left);
            assert!(bar.x + bar.width <= scene.plot.right + 1e-3);
            assert!(bar.y >= scene.plot.top - 1e-3);
            assert!(bar.y + bar.height <= scene.plot.bottom + 1e-3);
        }
    }

    #[test]
    fn one_hover_band_per_row() {
        let scene = build_bar_scene(&sales_rows(), &series(&["sales"]));
        assert_eq!(scene.hover_bands.len(), 2);
        assert_eq!(scene.hover_bands[0].index_label, "a");
        assert_eq!(scene.hover_bands[0].entries[0].value, "5");
    }
}

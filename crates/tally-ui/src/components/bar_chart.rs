use leptos::prelude::*;
use tally_types::DataRow;

use crate::chart::color::SeriesColor;
use crate::chart::scene::{
    build_bar_scene, BAR_RADIUS, VALUE_LABEL_FONT_SIZE, VALUE_LABEL_OFFSET, VIEW_HEIGHT,
    VIEW_WIDTH, X_TICK_MARGIN,
};

/// Responsive grouped bar chart. Geometry comes precomputed from the scene
/// builder; the only reactive state is the hovered category, which drives
/// the tooltip overlay.
///
/// Axis styling follows the card design: horizontal gridlines only, no axis
/// or tick lines, formatted y ticks.
#[component]
pub fn BarChart(rows: Vec<DataRow>, series: Vec<SeriesColor>) -> impl IntoView {
    let scene = build_bar_scene(&rows, &series);
    let (hovered, setHovered) = signal(Option::<usize>::None);

    let gridlines = scene
        .y_ticks
        .iter()
        .map(|tick| {
            view! {
                <line
                    x1=format!("{}", scene.plot.left)
                    x2=format!("{}", scene.plot.right)
                    y1=format!("{}", tick.position)
                    y2=format!("{}", tick.position)
                    class="chart-grid"
                />
            }
        })
        .collect_view();

    let yLabels = scene
        .y_ticks
        .iter()
        .map(|tick| {
            view! {
                <text
                    x=format!("{}", scene.plot.left - 8.0)
                    y=format!("{}", tick.position + 4.0)
                    text-anchor="end"
                    class="chart-axis-text"
                >
                    {tick.label.clone()}
                </text>
            }
        })
        .collect_view();

    let xLabels = scene
        .x_ticks
        .iter()
        .map(|tick| {
            view! {
                <text
                    x=format!("{}", tick.position)
                    y=format!("{}", scene.plot.bottom + X_TICK_MARGIN + 12.0)
                    text-anchor="middle"
                    class="chart-axis-text"
                >
                    {tick.label.clone()}
                </text>
            }
        })
        .collect_view();

    let bars = scene
        .bars
        .iter()
        .map(|bar| {
            view! {
                <rect
                    x=format!("{}", bar.x)
                    y=format!("{}", bar.y)
                    width=format!("{}", bar.width)
                    height=format!("{}", bar.height)
                    rx=format!("{BAR_RADIUS}")
                    fill=bar.color.clone()
                />
            }
        })
        .collect_view();

    let valueLabels = scene
        .bars
        .iter()
        .filter_map(|bar| {
            bar.value_label.as_ref().map(|label| {
                view! {
                    <text
                        x=format!("{}", bar.x + bar.width / 2.0)
                        y=format!("{}", bar.y - VALUE_LABEL_OFFSET)
                        text-anchor="middle"
                        font-size=format!("{VALUE_LABEL_FONT_SIZE}")
                        class="chart-value-label"
                    >
                        {label.clone()}
                    </text>
                }
            })
        })
        .collect_view();

    // Transparent hit targets, one per category band. No cursor highlight,
    // just the tooltip.
    let hoverTargets = scene
        .hover_bands
        .iter()
        .enumerate()
        .map(|(i, band)| {
            view! {
                <rect
                    x=format!("{}", band.x)
                    y=format!("{}", scene.plot.top)
                    width=format!("{}", band.width)
                    height=format!("{}", scene.plot.bottom - scene.plot.top)
                    fill="transparent"
                    on:mouseenter=move |_| setHovered.set(Some(i))
                    on:mouseleave=move |_| setHovered.set(None)
                />
            }
        })
        .collect_view();

    let legend = scene
        .legend
        .iter()
        .map(|entry| {
            view! {
                <div class="chart-legend-item">
                    <span
                        class="chart-legend-swatch"
                        style=format!("background-color: {}", entry.color)
                    ></span>
                    <span>{entry.series.clone()}</span>
                </div>
            }
        })
        .collect_view();

    let hoverBands = scene.hover_bands.clone();
    let tooltip = move || {
        hovered.get().map(|i| {
            let band = hoverBands[i].clone();
            let leftPct = band.center / VIEW_WIDTH * 100.0;
            view! {
                <div class="chart-tooltip" style=format!("left: {leftPct:.1}%")>
                    <div class="chart-tooltip-title">{band.index_label}</div>
                    {band
                        .entries
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <div class="chart-tooltip-row">
                                    <span
                                        class="chart-tooltip-indicator"
                                        style=format!("border-color: {}", entry.color)
                                    ></span>
                                    <span class="chart-tooltip-series">{entry.series}</span>
                                    <span class="chart-tooltip-value">{entry.value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
    };

    view! {
        <div class="bar-chart">
            <svg
                width="100%"
                height="100%"
                viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
                class="bar-chart-svg"
            >
                {gridlines}
                {yLabels}
                {xLabels}
                {bars}
                {valueLabels}
                {hoverTargets}
            </svg>
            {tooltip}
            <div class="chart-legend">{legend}</div>
        </div>
    }
}

use std::collections::HashMap;

use leptos::prelude::*;
use tally_types::DataRow;

use crate::chart::color::build_color_config;
use crate::components::bar_chart::BarChart;
use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::components::tooltip::HoverTip;

/// Titled card containing a responsive bar chart: hover tooltip on the
/// whole card, per-series coloring, value labels on sparse data, and a
/// "no data" fallback when `data` is empty.
///
/// `data_labels` selects which row fields are drawn and in what order.
/// No validation is performed; a label missing from some rows simply
/// renders no bar there.
#[component]
pub fn ChartCard(
    /// Card title.
    chart_name: String,
    /// Card subtitle.
    subtitle: String,
    /// Text shown in the hover tooltip attached to the whole card.
    tooltip_description: String,
    /// Ordered rows; may be empty.
    data: Vec<DataRow>,
    /// Ordered series keys to draw as bars.
    data_labels: Vec<String>,
    /// Per-series color overrides; series without one cycle the palette.
    #[prop(optional)]
    color_overrides: Option<HashMap<String, String>>,
) -> impl IntoView {
    let overrides = color_overrides.unwrap_or_default();
    let seriesColors = build_color_config(&data_labels, &overrides);

    if data.is_empty() {
        return view! {
            <Card>
                <CardHeader>
                    <CardTitle>{chart_name}</CardTitle>
                    <CardDescription>{subtitle}</CardDescription>
                </CardHeader>
                <CardContent>
                    <p>"No data available"</p>
                </CardContent>
            </Card>
        }
        .into_any();
    }

    view! {
        <HoverTip text=tooltip_description>
            <Card>
                <CardHeader>
                    <CardTitle>{chart_name}</CardTitle>
                    <CardDescription>{subtitle}</CardDescription>
                </CardHeader>
                <CardContent>
                    <BarChart rows=data series=seriesColors />
                </CardContent>
            </Card>
        </HoverTip>
    }
    .into_any()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_to_string<V: IntoView>(f: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.set();
        let html = f().to_html();
        drop(owner);
        html
    }

    fn sales_rows() -> Vec<DataRow> {
        vec![
            DataRow::new("a").with_value("sales", 5.0),
            DataRow::new("b").with_value("sales", 9.0),
        ]
    }

    #[test]
    fn empty_data_renders_the_fallback_card_without_a_chart() {
        let html = render_to_string(|| {
            view! {
                <ChartCard
                    chart_name="Events by kind".to_string()
                    subtitle="Daily counts".to_string()
                    tooltip_description="Counts per day.".to_string()
                    data=Vec::new()
                    data_labels=vec!["sales".to_string()]
                />
            }
        });

        assert!(html.contains("Events by kind"));
        assert!(html.contains("Daily counts"));
        assert!(html.contains("No data available"));
        // terminal branch: no chart, no legend, no card-level tooltip
        assert!(!html.contains("<svg"));
        assert!(!html.contains("chart-legend"));
        assert!(!html.contains("hover-tip"));
    }

    #[test]
    fn populated_data_renders_the_chart_inside_the_tooltip_trigger() {
        let html = render_to_string(|| {
            view! {
                <ChartCard
                    chart_name="Sales".to_string()
                    subtitle="By day".to_string()
                    tooltip_description="Sales per day.".to_string()
                    data=sales_rows()
                    data_labels=vec!["sales".to_string()]
                />
            }
        });

        assert!(html.contains("<svg"));
        assert!(html.contains("chart-legend"));
        assert!(html.contains("hover-tip"));
        assert!(html.contains("Sales per day."));
        assert!(!html.contains("No data available"));
    }
}

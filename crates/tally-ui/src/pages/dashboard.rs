use std::collections::HashMap;

use leptos::prelude::*;
use tally_types::DashboardData;

use crate::components::chart_card::ChartCard;
use crate::format::format_number;

#[server]
async fn get_dashboard_data() -> Result<DashboardData, ServerFnError> {
    use tally_types::EventsPath;

    let eventsPath = use_context::<EventsPath>()
        .map(|p| p.0)
        .unwrap_or_else(|| "events.ndjson".into());
    Ok(tally_providers::collect_dashboard_data(&eventsPath).await)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    // Hold latest data in a signal — never re-enters loading after first data arrives.
    #[allow(unused_variables)]
    let (data, setData) = signal(Option::<Result<DashboardData, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        let fetch = move || {
            spawn_local(async move {
                let result = get_dashboard_data().await.map_err(|e| e.to_string());
                setData.set(Some(result));
            });
        };

        // Initial fetch on mount
        fetch();

        // Re-poll every 30 seconds — updates the signal in place, no flicker
        let handle = set_interval_with_handle(fetch, std::time::Duration::from_secs(30))
            .expect("failed to set interval");
        on_cleanup(move || handle.clear());
    }

    view! {
        <div class="dashboard-header">
            <h1>"Event Analytics"</h1>
            <p class="subtitle">"Tally event log, aggregated daily"</p>
        </div>
        {move || {
            match data.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading analytics..."
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(d)) => {
                    view! { <DashboardContent data=d /> }.into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="load-error">"Failed to load analytics: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}

#[component]
fn DashboardContent(data: DashboardData) -> impl IntoView {
    let mut visitorColors = HashMap::new();
    visitorColors.insert("visitors".to_string(), "#76b900".to_string());

    let totalFormatted = format_number(data.total_events as f64);

    view! {
        <div class="dashboard-grid">
            <ChartCard
                chart_name="Events by kind".to_string()
                subtitle="Daily event counts, one series per kind".to_string()
                tooltip_description="Counts of logged events per day, split by event kind."
                    .to_string()
                data=data.events_by_kind.rows
                data_labels=data.events_by_kind.labels
            />
            <ChartCard
                chart_name="Unique visitors".to_string()
                subtitle="Distinct users per day".to_string()
                tooltip_description="Number of distinct users with at least one event each day."
                    .to_string()
                data=data.unique_visitors.rows
                data_labels=data.unique_visitors.labels
                color_overrides=visitorColors
            />
        </div>
        <p class="dashboard-footer">{totalFormatted} " events in the current log"</p>
    }
}

use leptos::prelude::*;

/// Presentational card primitives: container, header block, title,
/// description, and a fixed-height content area. Layout only, no behavior.
#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <div class="card">{children()}</div> }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="card-header">{children()}</div> }
}

#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! { <div class="card-title">{children()}</div> }
}

#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! { <div class="card-description">{children()}</div> }
}

/// Fixed-height body so charts get a stable drawing area.
#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card-content">{children()}</div> }
}

use leptos::prelude::*;

/// Wraps its children in a hover trigger: the `text` bubble appears above
/// the wrapped content while the pointer is over it (CSS-driven).
#[component]
pub fn HoverTip(text: String, children: Children) -> impl IntoView {
    view! {
        <div class="hover-tip">
            {children()}
            <div class="hover-tip-content" role="tooltip">
                {text}
            </div>
        </div>
    }
}

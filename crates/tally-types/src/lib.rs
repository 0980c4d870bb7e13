pub mod chart;
pub use chart::*;

/// Events-file path wrapper for sharing via Leptos context.
#[derive(Clone, Debug)]
pub struct EventsPath(pub String);

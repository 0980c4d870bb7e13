pub mod bar_chart;
pub mod card;
pub mod chart_card;
pub mod tooltip;

//! Pure computation behind the bar chart: color assignment, pixel scales,
//! and the scene builder that turns rows into drawable geometry. Everything
//! here is plain data so the view layer stays a thin SVG template.

pub mod color;
pub mod scale;
pub mod scene;

//! UI components.

pub mod dashboard;
pub mod filters;
pub mod sankey;

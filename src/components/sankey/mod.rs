//! Sankey diagram of vote flows.
//!
//! Draws voters on the left, proposals on the right, and one band per vote
//! sized by voting power and colored by choice. Layout and drawing are done by
//! plotly.js, which the host page must load before the app mounts.
//!
//! # Example
//!
//! ```ignore
//! use vote_sankey::components::sankey::{SankeyChart, SankeyStyle};
//!
//! let links = Signal::derive(move || filter::apply(&graph, &palette, &selection.get()));
//!
//! view! { <SankeyChart labels=graph.nodes().to_vec() links=links style=SankeyStyle::default() /> }
//! ```

mod component;
pub mod render;
pub mod theme;

pub use component::SankeyChart;
pub use theme::{ChoicePalette, Color, SankeyStyle};

//! vote-sankey: Sankey diagram of governance votes.
//!
//! This crate loads a static vote dump, builds a voter → proposal flow graph
//! weighted by voting power and colored by choice, and renders it as a
//! WASM-based dashboard with choice, proposal and voter filters.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;
pub mod error;
pub mod filter;
pub mod graph;
pub mod votes;

pub use components::dashboard::{LoadError, VoteDashboard};
pub use config::{AddressBook, DashboardConfig, LayoutVariant};
pub use error::DashboardError;
pub use filter::FilterSelection;
pub use graph::{SankeyGraph, SankeyLink};
pub use votes::{Choice, VoteDataset, VoteRecord};

/// The vote dump shipped with the app, from `data/votes.json`.
pub const BUNDLED_VOTES: &str = include_str!("../data/votes.json");

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("vote-sankey: logging initialized");
}

/// A loaded dataset: configuration plus the graph built from it.
#[derive(Clone, Debug)]
pub struct Dashboard {
	pub config: DashboardConfig,
	pub graph: SankeyGraph,
}

impl Dashboard {
	/// Parse `votes_json` and build the graph against `config`.
	pub fn from_sources(votes_json: &str, config: DashboardConfig) -> Result<Self, DashboardError> {
		let dataset = VoteDataset::from_json(votes_json)?;
		let graph = SankeyGraph::build(dataset.votes(), &config.address_book, &config.palette)?;
		info!(
			"vote-sankey: loaded {} votes into {} nodes",
			dataset.votes().len(),
			graph.node_count()
		);
		Ok(Self { config, graph })
	}
}

/// Text of the script element with the given id, if the page has one.
fn script_text(id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load configuration and votes from the page, falling back to the bundled
/// dump when there is no `vote-data` script element.
///
/// A `<script id="address-book">` JSON object adds to (or overrides) the
/// built-in delegate names; `<script id="dashboard-layout">` picks the
/// [`LayoutVariant`].
pub fn load_dashboard() -> Result<Dashboard, DashboardError> {
	let mut config = DashboardConfig::default();
	if let Some(json) = script_text("address-book") {
		config.apply_address_book(&json)?;
	}
	if let Some(json) = script_text("dashboard-layout") {
		config.apply_layout(&json)?;
	}

	match script_text("vote-data") {
		Some(text) => Dashboard::from_sources(&text, config),
		None => {
			info!("vote-sankey: no vote-data element, using bundled votes");
			Dashboard::from_sources(BUNDLED_VOTES, config)
		}
	}
}

/// Main application component.
/// Loads the vote dump and renders the filterable Sankey dashboard.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let body = match load_dashboard() {
		Ok(dashboard) => view! { <VoteDashboard dashboard=dashboard /> }.into_any(),
		Err(e) => {
			error!("vote-sankey: startup failed: {}", e);
			view! { <LoadError message=e.to_string() /> }.into_any()
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text="Governance Vote Flows" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		{body}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_votes_build() {
		let dashboard = Dashboard::from_sources(BUNDLED_VOTES, DashboardConfig::default()).unwrap();
		let dataset = VoteDataset::from_json(BUNDLED_VOTES).unwrap();
		assert_eq!(dashboard.graph.link_count(), dataset.votes().len());
		assert!(dashboard.graph.link_count() > 0);
	}

	#[test]
	fn unknown_voter_aborts_load() {
		let votes = r#"{ "data": { "votes": [
			{ "voter": "0x0000000000000000000000000000000000000001", "proposal": { "title": "P" }, "choice": 1, "vp": 1 }
		] } }"#;
		let err = Dashboard::from_sources(votes, DashboardConfig::default()).unwrap_err();
		assert!(matches!(err, DashboardError::UnknownVoter { .. }));
	}

	#[test]
	fn alternate_address_book() {
		let votes = r#"{ "data": { "votes": [
			{ "voter": "0xABCD", "proposal": { "title": "P" }, "choice": 3, "vp": 2.5 }
		] } }"#;
		let config = DashboardConfig {
			address_book: AddressBook::new([("0xabcd", "Carol")]),
			..DashboardConfig::default()
		};
		let dashboard = Dashboard::from_sources(votes, config).unwrap();
		assert_eq!(dashboard.graph.nodes(), ["Carol", "P"]);
	}
}

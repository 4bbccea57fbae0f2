//! The vote dashboard: filter controls wired to the Sankey chart.

use std::sync::Arc;

use leptos::prelude::*;
use log::debug;

use super::filters::{ChoiceChecklist, MultiSelect};
use super::sankey::SankeyChart;
use crate::Dashboard;
use crate::filter::{self, FilterSelection};

/// Renders the filters and the diagram for a loaded [`Dashboard`].
///
/// The graph is shared read-only; every change to one of the three filter
/// signals recomputes the filtered link list from scratch.
#[component]
pub fn VoteDashboard(dashboard: Dashboard) -> impl IntoView {
	let Dashboard { config, graph } = dashboard;
	let graph = Arc::new(graph);
	let initial = FilterSelection::default();

	let choices = RwSignal::new(initial.choices);
	let proposals = RwSignal::new(initial.proposals);
	let voters = RwSignal::new(initial.voters);

	let labels = graph.nodes().to_vec();
	let voter_options: Vec<String> = graph.voters().iter().cloned().collect();
	let proposal_options: Vec<String> = graph.proposals().iter().cloned().collect();

	let palette = config.palette.clone();
	let filtered = Memo::new(move |_| {
		let selection = FilterSelection {
			choices: choices.get(),
			proposals: proposals.get(),
			voters: voters.get(),
		};
		let links = filter::apply(&graph, &palette, &selection);
		debug!(
			"vote-sankey: filter {:?} kept {} of {} links",
			selection,
			links.len(),
			graph.link_count()
		);
		links
	});

	view! {
		<div class="vote-dashboard">
			<ChoiceChecklist selected=choices />
			<MultiSelect
				id="voter-filter"
				placeholder="Filter voters"
				options=voter_options
				selected=voters
			/>
			<MultiSelect
				id="proposal-filter"
				placeholder="Filter proposals"
				options=proposal_options
				selected=proposals
			/>
			{config
				.credit
				.map(|credit| {
					view! {
						<div id="credit-link">
							<a href=credit.url target="_blank" rel="noopener">
								{credit.text}
							</a>
						</div>
					}
				})}
			<SankeyChart
				labels=labels
				links=filtered
				style=config.style
				variant=config.layout
			/>
		</div>
	}
}

/// Shown instead of the dashboard when startup fails.
#[component]
pub fn LoadError(message: String) -> impl IntoView {
	view! {
		<div class="load-error">
			<h1>"Unable to load votes"</h1>
			<p>{message}</p>
		</div>
	}
}

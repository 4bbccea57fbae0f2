//! Vote flow graph: voters and proposals as nodes, one link per vote.
//!
//! Voters and proposals share a single label namespace and index space. A
//! node's index is the position where its label first appeared while walking
//! the votes in dataset order, which is what the Sankey trace expects for its
//! `source`/`target` arrays.

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::components::sankey::{ChoicePalette, Color};
use crate::config::AddressBook;
use crate::error::DashboardError;
use crate::votes::{Choice, VoteRecord};

/// A single vote as a weighted, colored flow from voter to proposal.
#[derive(Clone, Debug, PartialEq)]
pub struct SankeyLink {
	/// Voter node index.
	pub source: usize,
	/// Proposal node index.
	pub target: usize,
	/// Voting power.
	pub value: f64,
	pub color: Color,
	pub choice: Choice,
}

/// Immutable node/link graph built once from the vote dump.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SankeyGraph {
	nodes: Vec<String>,
	index: HashMap<String, usize>,
	links: Vec<SankeyLink>,
	proposals: BTreeSet<String>,
	voters: BTreeSet<String>,
}

impl SankeyGraph {
	/// Build the graph in a single pass over `votes`.
	///
	/// Fails on the first vote whose address is missing from `book`, whose
	/// choice code is not 1, 2 or 3, or whose voting power is negative.
	pub fn build(
		votes: &[VoteRecord],
		book: &AddressBook,
		palette: &ChoicePalette,
	) -> Result<Self, DashboardError> {
		let mut graph = Self {
			links: Vec::with_capacity(votes.len()),
			..Self::default()
		};

		for vote in votes {
			let voter = book
				.resolve(&vote.voter)
				.ok_or_else(|| DashboardError::UnknownVoter {
					address: vote.voter.clone(),
				})?;
			let choice = vote.choice().ok_or(DashboardError::UnknownChoice {
				choice: vote.choice,
			})?;
			if vote.vp < 0.0 || vote.vp.is_nan() {
				return Err(DashboardError::NegativeVotingPower {
					address: vote.voter.clone(),
					vp: vote.vp,
				});
			}
			let title = vote.proposal.title.as_str();

			let source = graph.intern(voter);
			let target = graph.intern(title);
			graph.voters.insert(voter.to_owned());
			graph.proposals.insert(title.to_owned());

			graph.links.push(SankeyLink {
				source,
				target,
				value: vote.vp,
				color: palette.color(choice),
				choice,
			});
		}

		debug!(
			"vote-sankey: built {} nodes ({} voters, {} proposals), {} links",
			graph.nodes.len(),
			graph.voters.len(),
			graph.proposals.len(),
			graph.links.len()
		);
		Ok(graph)
	}

	/// Index for `label`, appending a new node on first sight.
	fn intern(&mut self, label: &str) -> usize {
		if let Some(&idx) = self.index.get(label) {
			return idx;
		}
		let idx = self.nodes.len();
		self.nodes.push(label.to_owned());
		self.index.insert(label.to_owned(), idx);
		idx
	}

	/// Node labels in index order.
	pub fn nodes(&self) -> &[String] {
		&self.nodes
	}

	pub fn links(&self) -> &[SankeyLink] {
		&self.links
	}

	pub fn index_of(&self, label: &str) -> Option<usize> {
		self.index.get(label).copied()
	}

	pub fn label(&self, index: usize) -> Option<&str> {
		self.nodes.get(index).map(String::as_str)
	}

	/// Distinct proposal titles, sorted, for the proposal filter options.
	pub fn proposals(&self) -> &BTreeSet<String> {
		&self.proposals
	}

	/// Distinct voter display names, sorted, for the voter filter options.
	pub fn voters(&self) -> &BTreeSet<String> {
		&self.voters
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn link_count(&self) -> usize {
		self.links.len()
	}
}

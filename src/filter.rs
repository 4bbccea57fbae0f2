//! Filtered projections of the vote graph.
//!
//! The three filter dimensions combine with AND. Choices work by inclusion:
//! only the checked choices' colors pass, so an empty choice set shows
//! nothing. Proposals and voters work the other way: an empty set means the
//! dimension is unrestricted.

use std::collections::BTreeSet;

use crate::components::sankey::{ChoicePalette, Color};
use crate::graph::{SankeyGraph, SankeyLink};
use crate::votes::Choice;

/// Current state of the three filter controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSelection {
	pub choices: BTreeSet<Choice>,
	pub proposals: BTreeSet<String>,
	pub voters: BTreeSet<String>,
}

impl Default for FilterSelection {
	/// Every choice checked, no proposal or voter restriction.
	fn default() -> Self {
		Self {
			choices: Choice::ALL.into_iter().collect(),
			proposals: BTreeSet::new(),
			voters: BTreeSet::new(),
		}
	}
}

impl FilterSelection {
	pub fn with_choices(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
		self.choices = choices.into_iter().collect();
		self
	}

	pub fn with_proposals<S: Into<String>>(mut self, titles: impl IntoIterator<Item = S>) -> Self {
		self.proposals = titles.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_voters<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
		self.voters = names.into_iter().map(Into::into).collect();
		self
	}
}

/// Links of `graph` that pass `selection`, in their original order.
///
/// Choice matching goes through `palette`: a link passes when its color is
/// the color of one of the selected choices.
pub fn apply(
	graph: &SankeyGraph,
	palette: &ChoicePalette,
	selection: &FilterSelection,
) -> Vec<SankeyLink> {
	let colors: Vec<Color> = selection
		.choices
		.iter()
		.map(|&choice| palette.color(choice))
		.collect();

	let labeled = |index: usize, allowed: &BTreeSet<String>| {
		allowed.is_empty()
			|| graph
				.label(index)
				.is_some_and(|label| allowed.contains(label))
	};

	graph
		.links()
		.iter()
		.filter(|link| colors.contains(&link.color))
		.filter(|link| labeled(link.target, &selection.proposals))
		.filter(|link| labeled(link.source, &selection.voters))
		.cloned()
		.collect()
}

//! Vote dump data structures.
//!
//! Mirrors the shape returned by the governance GraphQL API, saved to disk:
//! `{ "data": { "votes": [ { "voter", "proposal": { "title" }, "choice", "vp" } ] } }`.

use std::fmt;

use serde::Deserialize;

use crate::error::DashboardError;

/// A voter's position on a proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Choice {
	For,
	Against,
	Abstain,
}

impl Choice {
	/// All choices in checklist order.
	pub const ALL: [Choice; 3] = [Choice::For, Choice::Against, Choice::Abstain];

	/// Map the numeric code used by the vote dump (1, 2, 3).
	pub fn from_code(code: i64) -> Option<Self> {
		match code {
			1 => Some(Choice::For),
			2 => Some(Choice::Against),
			3 => Some(Choice::Abstain),
			_ => None,
		}
	}

	pub fn code(self) -> i64 {
		match self {
			Choice::For => 1,
			Choice::Against => 2,
			Choice::Abstain => 3,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Choice::For => "For",
			Choice::Against => "Against",
			Choice::Abstain => "Abstain",
		}
	}
}

impl fmt::Display for Choice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// The proposal a vote was cast on.
#[derive(Clone, Debug, Deserialize)]
pub struct Proposal {
	pub title: String,
}

/// A single vote as it appears in the dump.
#[derive(Clone, Debug, Deserialize)]
pub struct VoteRecord {
	/// `0x`-prefixed voter address, in whatever casing the API returned.
	pub voter: String,
	pub proposal: Proposal,
	/// Raw choice code. Kept numeric so an out-of-range value surfaces as
	/// [`DashboardError::UnknownChoice`] during graph build rather than as a
	/// parse failure.
	pub choice: i64,
	/// Voting power behind this vote.
	pub vp: f64,
}

impl VoteRecord {
	/// The decoded choice, if the code is one of 1, 2, 3.
	pub fn choice(&self) -> Option<Choice> {
		Choice::from_code(self.choice)
	}
}

#[derive(Clone, Debug, Default, Deserialize)]
struct VoteData {
	votes: Vec<VoteRecord>,
}

/// The full vote dump.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VoteDataset {
	data: VoteData,
}

impl VoteDataset {
	pub fn from_json(text: &str) -> Result<Self, DashboardError> {
		serde_json::from_str(text).map_err(DashboardError::MalformedDataset)
	}

	pub fn votes(&self) -> &[VoteRecord] {
		&self.data.votes
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_graphql_dump_shape() {
		let text = r#"{
			"data": {
				"votes": [
					{ "voter": "0xAbC", "proposal": { "title": "P1" }, "choice": 2, "vp": 12.5 }
				]
			}
		}"#;
		let dataset = VoteDataset::from_json(text).unwrap();
		let votes = dataset.votes();
		assert_eq!(votes.len(), 1);
		assert_eq!(votes[0].voter, "0xAbC");
		assert_eq!(votes[0].proposal.title, "P1");
		assert_eq!(votes[0].choice(), Some(Choice::Against));
		assert_eq!(votes[0].vp, 12.5);
	}

	#[test]
	fn missing_fields_are_malformed() {
		let text = r#"{ "data": { "votes": [ { "voter": "0x1", "choice": 1, "vp": 1 } ] } }"#;
		let err = VoteDataset::from_json(text).unwrap_err();
		assert!(matches!(err, DashboardError::MalformedDataset(_)));

		let err = VoteDataset::from_json(r#"{ "votes": [] }"#).unwrap_err();
		assert!(matches!(err, DashboardError::MalformedDataset(_)));
	}

	#[test]
	fn out_of_range_choice_still_parses() {
		let text = r#"{ "data": { "votes": [
			{ "voter": "0x1", "proposal": { "title": "P" }, "choice": 7, "vp": 1 }
		] } }"#;
		let dataset = VoteDataset::from_json(text).unwrap();
		assert_eq!(dataset.votes()[0].choice(), None);
	}

	#[test]
	fn fractional_choice_is_malformed() {
		let text = r#"{ "data": { "votes": [
			{ "voter": "0x1", "proposal": { "title": "P" }, "choice": 1.0, "vp": 1 }
		] } }"#;
		let err = VoteDataset::from_json(text).unwrap_err();
		assert!(matches!(err, DashboardError::MalformedDataset(_)));
	}

	#[test]
	fn choice_codes_round_trip() {
		for choice in Choice::ALL {
			assert_eq!(Choice::from_code(choice.code()), Some(choice));
		}
		assert_eq!(Choice::from_code(0), None);
		assert_eq!(Choice::For.to_string(), "For");
	}
}

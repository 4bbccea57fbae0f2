//! Startup failures for the dashboard.
//!
//! Every variant is fatal: the dataset is loaded and the graph is built once
//! before the UI mounts, and there is nothing to retry against a static file.

use thiserror::Error;

/// Errors raised while loading the dataset or building the vote graph.
#[derive(Debug, Error)]
pub enum DashboardError {
	/// A vote references an address missing from the address book.
	#[error("no display name for voter address {address}")]
	UnknownVoter { address: String },

	/// A vote carries a choice code outside 1 (For), 2 (Against), 3 (Abstain).
	#[error("unrecognized choice value {choice}")]
	UnknownChoice { choice: i64 },

	/// The vote dump does not match `{ data: { votes: [...] } }`.
	#[error("malformed vote dataset: {0}")]
	MalformedDataset(#[source] serde_json::Error),

	/// The page supplied an address book that is not a JSON string map.
	#[error("malformed address book: {0}")]
	MalformedAddressBook(#[source] serde_json::Error),

	/// The page asked for a layout other than `"compact"` or `"wide"`.
	#[error("malformed layout selection: {0}")]
	MalformedLayout(#[source] serde_json::Error),

	/// A vote carries negative (or NaN) voting power.
	#[error("negative voting power {vp} for voter {address}")]
	NegativeVotingPower { address: String, vp: f64 },
}

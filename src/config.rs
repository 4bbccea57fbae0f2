//! Dashboard configuration.
//!
//! Everything the graph builder and the chart need besides the vote dump
//! itself: who the voters are, how choices are colored, and how the page is
//! laid out. Passed in explicitly so tests can swap any piece.

use std::collections::HashMap;

use log::info;
use serde::Deserialize;

use crate::components::sankey::{ChoicePalette, SankeyStyle};
use crate::error::DashboardError;

/// Known delegate addresses and their display names.
const KNOWN_DELEGATES: &[(&str, &str)] = &[
	("0x0eb5b03c0303f2f47cd81d7be4275af8ed347576", "TreasureDAO"),
	("0x1b686ee8e31c5959d9f5bbd8122a58682788eead", "l2beatcom.eth"),
	("0xf4b0556b9b6f53e00a1fdd2b0478ce841991d8fa", "olimpio.eth"),
	("0x2ef27b114917dd53f8633440a7c0328fef132e2f", "MUX DAO"),
	("0xbbe98d590d7eb99f4a236587f2441826396053d3", "PlutusDAO"),
	("0xf92f185abd9e00f56cb11b0b709029633d1e37b4", "coinflipcanada"),
	("0x683a4f9915d6216f73d6df50151725036bd26c02", "Gauntlet"),
	("0x839395e20bbb182fa440d08f850e6c7a8f6f0780", "Griff Green"),
	("0x190473b3071946df65306989972706a4c006a561", "ChainLinkGod"),
	("0x8a3e9846df0cdc723c06e4f0c642ffff82b54610", "0x8a3e....4610"),
	("0xe48c655276c23f1534ae2a87a2bf8a8a6585df70", "ercwl.eth"),
	("0xa5df0cf3f95c6cd97d998b9d990a86864095d9b0", "Blockworks Research"),
	("0x2e3bef6830ae84bb4225d318f9f61b6b88c147bf", "Camelot"),
	("0x8f73be66ca8c79382f72139be03746343bf5faa0", "mihal.eth"),
	("0xb5b069370ef24bc67f114e185d185063ce3479f8", "0xfrisson.eth"),
	("0xdb5781a835b60110298ff7205d8ef9678ff1f800", "yoav.eth"),
	("0x9808e45c613eba00ba18fb3d314dc4d4712c4a85", "0x9808...4a85"),
	("0x79c4213a328e3b4f1d87b4953c14759399db25e2", "litocoen"),
	("0x18bf1a97744539a348304e9d266aac7d446a1582", "Princeton BCC"),
	("0x978982772b8e4055b921bf9295c0d74eb36bc54e", "sushiswap"),
];

/// Address to display-name lookup.
///
/// Keys are stored lowercased and lookups lowercase their input, so the
/// casing the API returns for an address never matters.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(from = "HashMap<String, String>")]
pub struct AddressBook {
	names: HashMap<String, String>,
}

impl AddressBook {
	pub fn new<A, N>(entries: impl IntoIterator<Item = (A, N)>) -> Self
	where
		A: AsRef<str>,
		N: Into<String>,
	{
		Self {
			names: entries
				.into_iter()
				.map(|(address, name)| (address.as_ref().to_lowercase(), name.into()))
				.collect(),
		}
	}

	/// The built-in table of known delegates.
	pub fn known_delegates() -> Self {
		Self::new(KNOWN_DELEGATES.iter().copied())
	}

	pub fn resolve(&self, address: &str) -> Option<&str> {
		self.names.get(&address.to_lowercase()).map(String::as_str)
	}

	/// Add or replace entries from another book.
	pub fn extend(&mut self, other: AddressBook) {
		self.names.extend(other.names);
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

impl From<HashMap<String, String>> for AddressBook {
	fn from(names: HashMap<String, String>) -> Self {
		Self::new(names)
	}
}

/// Plot margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
	pub left: f64,
	pub right: f64,
	pub top: f64,
	pub bottom: f64,
}

/// Page layout presets.
///
/// A host page picks one with `<script id="dashboard-layout">"wide"</script>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
	/// Tight margins, diagram fills its container.
	#[default]
	Compact,
	/// Tuning preset with roomier margins and a fixed, taller diagram for
	/// long proposal titles.
	Wide,
}

impl LayoutVariant {
	pub fn margins(self) -> Margins {
		match self {
			LayoutVariant::Compact => Margins {
				left: 3.0,
				right: 3.0,
				top: 30.0,
				bottom: 3.0,
			},
			LayoutVariant::Wide => Margins {
				left: 20.0,
				right: 20.0,
				top: 40.0,
				bottom: 20.0,
			},
		}
	}

	/// Fixed diagram height, or `None` to size to the container.
	pub fn height(self) -> Option<f64> {
		match self {
			LayoutVariant::Compact => None,
			LayoutVariant::Wide => Some(900.0),
		}
	}
}

/// Attribution link shown above the diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct CreditLink {
	pub text: String,
	pub url: String,
}

/// Complete dashboard configuration.
#[derive(Clone, Debug)]
pub struct DashboardConfig {
	pub address_book: AddressBook,
	pub palette: ChoicePalette,
	pub style: SankeyStyle,
	pub layout: LayoutVariant,
	pub credit: Option<CreditLink>,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			address_book: AddressBook::known_delegates(),
			palette: ChoicePalette::default(),
			style: SankeyStyle::default(),
			layout: LayoutVariant::default(),
			credit: Some(CreditLink {
				text: "@kwiz4g".to_string(),
				url: "https://twitter.com/kwiz4g".to_string(),
			}),
		}
	}
}

impl DashboardConfig {
	/// Merge a page-supplied JSON object of `address: name` pairs into the
	/// address book.
	pub fn apply_address_book(&mut self, json: &str) -> Result<(), DashboardError> {
		let extra: AddressBook =
			serde_json::from_str(json).map_err(DashboardError::MalformedAddressBook)?;
		info!("vote-sankey: {} address book entries from page", extra.len());
		self.address_book.extend(extra);
		Ok(())
	}

	/// Select the layout from a page-supplied JSON string (`"compact"` or
	/// `"wide"`).
	pub fn apply_layout(&mut self, json: &str) -> Result<(), DashboardError> {
		self.layout = serde_json::from_str(json).map_err(DashboardError::MalformedLayout)?;
		info!("vote-sankey: layout {:?} from page", self.layout);
		Ok(())
	}
}

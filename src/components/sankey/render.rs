//! Plotly figure construction for the Sankey diagram.
//!
//! Layout and drawing belong to plotly.js; this module only turns node labels
//! and a link list into the `data`, `layout` and `config` objects that
//! `Plotly.react` takes.

use serde::Serialize;

use super::theme::SankeyStyle;
use crate::config::{LayoutVariant, Margins};
use crate::graph::SankeyLink;

/// Mode bar buttons that make no sense for a Sankey trace.
const REMOVED_MODE_BAR_BUTTONS: [&str; 2] = ["lasso", "select"];

#[derive(Clone, Debug, Serialize)]
pub struct NodeLine {
	pub color: String,
	pub width: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct NodeSpec<'a> {
	pub pad: f64,
	pub thickness: f64,
	pub line: NodeLine,
	pub label: &'a [String],
}

/// Column-oriented link arrays, as the Sankey trace expects them.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LinkSpec {
	pub source: Vec<usize>,
	pub target: Vec<usize>,
	pub value: Vec<f64>,
	pub color: Vec<String>,
}

impl LinkSpec {
	fn from_links(links: &[SankeyLink]) -> Self {
		let mut spec = Self {
			source: Vec::with_capacity(links.len()),
			target: Vec::with_capacity(links.len()),
			value: Vec::with_capacity(links.len()),
			color: Vec::with_capacity(links.len()),
		};
		for link in links {
			spec.source.push(link.source);
			spec.target.push(link.target);
			spec.value.push(link.value);
			spec.color.push(link.color.to_css());
		}
		spec
	}
}

#[derive(Clone, Debug, Serialize)]
pub struct SankeyTrace<'a> {
	#[serde(rename = "type")]
	pub kind: &'static str,
	pub node: NodeSpec<'a>,
	pub link: LinkSpec,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Margin {
	pub l: f64,
	pub r: f64,
	pub t: f64,
	pub b: f64,
}

impl From<Margins> for Margin {
	fn from(m: Margins) -> Self {
		Self {
			l: m.left,
			r: m.right,
			t: m.top,
			b: m.bottom,
		}
	}
}

#[derive(Clone, Debug, Serialize)]
pub struct Layout {
	pub margin: Margin,
	pub autosize: bool,
	pub clickmode: &'static str,
	pub dragmode: bool,
	pub showlegend: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub height: Option<f64>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
	pub mode_bar_buttons_to_remove: Vec<&'static str>,
	pub responsive: bool,
}

/// Everything one `Plotly.react` call needs.
#[derive(Clone, Debug, Serialize)]
pub struct Figure<'a> {
	pub data: [SankeyTrace<'a>; 1],
	pub layout: Layout,
	pub config: PlotConfig,
}

/// Builds the figure for the given labels and (possibly filtered) links.
///
/// Labels are always the full node list so indices stay stable across
/// filter changes; nodes without links simply collapse in the layout.
pub fn figure<'a>(
	labels: &'a [String],
	links: &[SankeyLink],
	style: &SankeyStyle,
	variant: LayoutVariant,
) -> Figure<'a> {
	Figure {
		data: [SankeyTrace {
			kind: "sankey",
			node: NodeSpec {
				pad: style.pad,
				thickness: style.thickness,
				line: NodeLine {
					color: style.border_color.clone(),
					width: style.border_width,
				},
				label: labels,
			},
			link: LinkSpec::from_links(links),
		}],
		layout: Layout {
			margin: variant.margins().into(),
			autosize: true,
			clickmode: "none",
			dragmode: false,
			showlegend: false,
			height: variant.height(),
		},
		config: PlotConfig {
			mode_bar_buttons_to_remove: REMOVED_MODE_BAR_BUTTONS.to_vec(),
			responsive: true,
		},
	}
}

#[cfg(test)]
mod tests {
	use serde_json::{Value, json};

	use super::*;
	use crate::components::sankey::ChoicePalette;
	use crate::votes::Choice;

	fn links() -> Vec<SankeyLink> {
		let palette = ChoicePalette::default();
		vec![
			SankeyLink {
				source: 0,
				target: 2,
				value: 10.0,
				color: palette.color(Choice::For),
				choice: Choice::For,
			},
			SankeyLink {
				source: 1,
				target: 2,
				value: 5.0,
				color: palette.color(Choice::Against),
				choice: Choice::Against,
			},
		]
	}

	#[test]
	fn trace_carries_nodes_links_and_style() {
		let labels = vec!["A".to_string(), "B".to_string(), "P1".to_string()];
		let fig = figure(&labels, &links(), &SankeyStyle::default(), LayoutVariant::Compact);
		let value = serde_json::to_value(&fig.data).unwrap();

		assert_eq!(
			value,
			json!([{
				"type": "sankey",
				"node": {
					"pad": 15.0,
					"thickness": 20.0,
					"line": { "color": "black", "width": 0.5 },
					"label": ["A", "B", "P1"],
				},
				"link": {
					"source": [0, 1],
					"target": [2, 2],
					"value": [10.0, 5.0],
					"color": ["rgba(0, 128, 0, 0.4)", "rgba(255, 0, 0, 0.4)"],
				},
			}])
		);
	}

	#[test]
	fn layout_and_config() {
		let labels: Vec<String> = Vec::new();
		let fig = figure(&labels, &[], &SankeyStyle::default(), LayoutVariant::Compact);

		let layout = serde_json::to_value(&fig.layout).unwrap();
		assert_eq!(layout["margin"], json!({ "l": 3.0, "r": 3.0, "t": 30.0, "b": 3.0 }));
		assert_eq!(layout["clickmode"], "none");
		assert_eq!(layout["dragmode"], false);
		assert_eq!(layout["showlegend"], false);
		assert_eq!(layout.get("height"), None);

		let config = serde_json::to_value(&fig.config).unwrap();
		assert_eq!(config["modeBarButtonsToRemove"], json!(["lasso", "select"]));
	}

	#[test]
	fn wide_layout_sets_height() {
		let labels: Vec<String> = Vec::new();
		let fig = figure(&labels, &[], &SankeyStyle::default(), LayoutVariant::Wide);
		let layout = serde_json::to_value(&fig.layout).unwrap();
		assert_eq!(layout["height"], Value::from(900.0));
	}

	#[test]
	fn empty_links_render_empty_arrays() {
		let labels = vec!["A".to_string()];
		let fig = figure(&labels, &[], &SankeyStyle::default(), LayoutVariant::Compact);
		let value = serde_json::to_value(&fig.data[0].link).unwrap();
		assert_eq!(
			value,
			json!({ "source": [], "target": [], "value": [], "color": [] })
		);
	}
}

//! Leptos component hosting the plotly.js Sankey diagram.
//!
//! The component owns a single `<div>` and redraws it with `Plotly.react`
//! whenever the link signal changes. `Plotly.react` diffs against the previous
//! figure, so repeated redraws on filter changes stay cheap.

use js_sys::Promise;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::render::{self, Figure};
use super::theme::SankeyStyle;
use crate::config::LayoutVariant;
use crate::graph::SankeyLink;

#[wasm_bindgen]
extern "C" {
	/// `Plotly.react(root, data, layout, config)`, provided by the host page.
	#[wasm_bindgen(js_namespace = Plotly, js_name = react, catch)]
	fn plotly_react(
		root: &HtmlElement,
		data: &JsValue,
		layout: &JsValue,
		config: &JsValue,
	) -> Result<Promise, JsValue>;
}

fn draw(root: &HtmlElement, figure: &Figure<'_>) -> Result<(), JsValue> {
	let data = serde_wasm_bindgen::to_value(&figure.data)?;
	let layout = serde_wasm_bindgen::to_value(&figure.layout)?;
	let config = serde_wasm_bindgen::to_value(&figure.config)?;
	// The returned promise only signals when plotly finished drawing.
	let _drawn: Promise = plotly_react(root, &data, &layout, &config)?;
	Ok(())
}

/// Renders the vote flow as a Sankey diagram.
///
/// `labels` is the full node list and never changes; `links` is the filtered
/// link list and triggers a redraw whenever it changes.
#[component]
pub fn SankeyChart(
	labels: Vec<String>,
	#[prop(into)] links: Signal<Vec<SankeyLink>>,
	#[prop(optional)] style: SankeyStyle,
	#[prop(optional)] variant: LayoutVariant,
) -> impl IntoView {
	let chart_ref = NodeRef::<leptos::html::Div>::new();

	Effect::new(move |_| {
		let links = links.get();
		let Some(root) = chart_ref.get() else {
			return;
		};
		let root: HtmlElement = root.into();

		let figure = render::figure(&labels, &links, &style, variant);
		match draw(&root, &figure) {
			Ok(()) => debug!("vote-sankey: drew {} links", links.len()),
			Err(e) => warn!("vote-sankey: Plotly.react failed: {:?}", e),
		}
	});

	view! { <div node_ref=chart_ref id="sankey" class="sankey-chart" /> }
}

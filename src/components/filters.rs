//! Filter controls: a choice checklist and two multi-selects.

use std::collections::BTreeSet;

use leptos::ev::Event;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use crate::votes::Choice;

/// Values of all selected `<option>`s.
fn selected_values(select: &HtmlSelectElement) -> BTreeSet<String> {
	let options = select.selected_options();
	(0..options.length())
		.filter_map(|i| options.item(i))
		.filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
		.map(|option| option.value())
		.collect()
}

/// One checkbox per choice, all checked by default.
#[component]
pub fn ChoiceChecklist(selected: RwSignal<BTreeSet<Choice>>) -> impl IntoView {
	view! {
		<div id="choice-filter" class="choice-filter">
			{Choice::ALL
				.into_iter()
				.map(|choice| {
					let on_change = move |ev: Event| {
						let checked = event_target_checked(&ev);
						selected
							.update(|set| {
								if checked {
									set.insert(choice);
								} else {
									set.remove(&choice);
								}
							});
					};
					view! {
						<label class="choice-option">
							<input
								type="checkbox"
								value=choice.code().to_string()
								prop:checked=move || selected.with(|set| set.contains(&choice))
								on:change=on_change
							/>
							{choice.label()}
						</label>
					}
				})
				.collect_view()}
		</div>
	}
}

/// A multi-select over `options`. Nothing selected means no restriction.
#[component]
pub fn MultiSelect(
	id: &'static str,
	placeholder: &'static str,
	options: Vec<String>,
	selected: RwSignal<BTreeSet<String>>,
) -> impl IntoView {
	let on_change = move |ev: Event| {
		let select: HtmlSelectElement = event_target(&ev);
		selected.set(selected_values(&select));
	};

	view! {
		<select id=id class="multi-filter" multiple=true aria-label=placeholder title=placeholder on:change=on_change>
			{options
				.into_iter()
				.map(|option| {
					let value = option.clone();
					view! { <option value=value>{option}</option> }
				})
				.collect_view()}
		</select>
	}
}

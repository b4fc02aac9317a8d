//! Search bar and navigation buttons wired to the simulated actions.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::warn;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};

use super::action::{ActionHost, ActionRunner, Control, EMPTY_SEARCH_PLACEHOLDER};
use crate::components::effects::{self, BurstKind};
use crate::config::ActionConfig;
use crate::dom;
use crate::error::HostError;

const SEARCH_PLACEHOLDER: &str = "Search the cosmos...";

/// Reactive state of one control.
#[derive(Clone, Copy)]
struct ControlState {
	label: RwSignal<String>,
	interactive: RwSignal<bool>,
	node: NodeRef<leptos::html::Button>,
}

impl ControlState {
	fn new(control: Control) -> Self {
		Self {
			label: RwSignal::new(control.idle_label().to_string()),
			interactive: RwSignal::new(true),
			node: NodeRef::new(),
		}
	}
}

/// Browser-backed [`ActionHost`]. Labels, interactivity and the query are
/// signals rendered by [`ActionPanel`].
#[derive(Clone, Copy)]
struct PageHost {
	search: ControlState,
	home: ControlState,
	back: ControlState,
	contact: ControlState,
	query: RwSignal<String>,
	placeholder: RwSignal<String>,
	input: NodeRef<leptos::html::Input>,
}

impl PageHost {
	fn new() -> Self {
		Self {
			search: ControlState::new(Control::Search),
			home: ControlState::new(Control::Home),
			back: ControlState::new(Control::Back),
			contact: ControlState::new(Control::Contact),
			query: RwSignal::new(String::new()),
			placeholder: RwSignal::new(SEARCH_PLACEHOLDER.to_string()),
			input: NodeRef::new(),
		}
	}

	fn control(&self, control: Control) -> ControlState {
		match control {
			Control::Search => self.search,
			Control::Home => self.home,
			Control::Back => self.back,
			Control::Contact => self.contact,
		}
	}
}

impl ActionHost for PageHost {
	fn set_label(&self, control: Control, html: &str) {
		self.control(control).label.set(html.to_string());
	}

	fn set_interactive(&self, control: Control, interactive: bool) {
		self.control(control).interactive.set(interactive);
	}

	fn burst(&self, control: Control) {
		if let Some(button) = self.control(control).node.get_untracked() {
			effects::spawn_burst(&button, BurstKind::Click, BurstKind::DEFAULT_COUNT);
		}
	}

	fn notify(&self, message: &str) {
		let shown = dom::window().and_then(|w| w.alert_with_message(message).map_err(HostError::from));
		if let Err(e) = shown {
			warn!("nebula-404: notification not shown: {}", e);
		}
	}

	fn history_len(&self) -> u32 {
		dom::window()
			.ok()
			.and_then(|w| w.history().ok())
			.and_then(|h| h.length().ok())
			.unwrap_or(1)
	}

	fn search_query(&self) -> String {
		self.query.get_untracked()
	}

	fn clear_search(&self) {
		self.query.set(String::new());
	}

	fn reject_empty_search(&self) {
		self.placeholder.set(EMPTY_SEARCH_PLACEHOLDER.to_string());
		let Some(input) = self.input.get_untracked() else {
			return;
		};
		let input: HtmlElement = input.into();
		dom::set_styles(&input, &[("animation", "none")]);
		let _ = input.offset_height();
		dom::set_styles(&input, &[("animation", effects::PULSE_BORDER_ANIMATION)]);
		let _ = input.focus();
	}

	fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
		Timeout::new(delay_ms, task).forget();
	}
}

fn pointer_events(interactive: bool) -> &'static str {
	if interactive { "auto" } else { "none" }
}

fn nav_button(
	control: Control,
	id: &'static str,
	class: &'static str,
	host: PageHost,
	runner: Rc<ActionRunner<PageHost>>,
) -> impl IntoView {
	let state = host.control(control);
	let on_click = move |ev: MouseEvent| {
		ev.prevent_default();
		if let Some(button) = state.node.get_untracked() {
			effects::spawn_ripple(&ev, &button);
		}
		runner.trigger(control);
	};

	view! {
		<button
			node_ref=state.node
			id=id
			type="button"
			class=class
			inner_html=move || state.label.get()
			style:pointer-events=move || pointer_events(state.interactive.get())
			on:click=on_click
		/>
	}
}

/// Search input plus the home, back and contact buttons.
#[component]
pub fn ActionPanel(#[prop(optional)] config: ActionConfig) -> impl IntoView {
	let host = PageHost::new();
	let runner = Rc::new(ActionRunner::new(Rc::new(host), config));

	let runner_click = runner.clone();
	let on_search = move |_: MouseEvent| {
		runner_click.trigger(Control::Search);
	};
	let runner_key = runner.clone();
	let on_keypress = move |ev: KeyboardEvent| {
		if ev.key() == "Enter" {
			runner_key.trigger(Control::Search);
		}
	};

	view! {
		<div class="search-container">
			<input
				node_ref=host.input
				type="text"
				class="search-input"
				placeholder=move || host.placeholder.get()
				prop:value=move || host.query.get()
				on:input=move |ev| host.query.set(event_target_value(&ev))
				on:keypress=on_keypress
			/>
			<button
				node_ref=host.search.node
				id="searchBtn"
				type="button"
				class="search-btn"
				inner_html=move || host.search.label.get()
				style:pointer-events=move || pointer_events(host.search.interactive.get())
				on:click=on_search
			/>
		</div>
		<div class="action-buttons">
			{nav_button(Control::Home, "homeBtn", "btn btn-primary", host, runner.clone())}
			{nav_button(Control::Back, "backBtn", "btn btn-secondary", host, runner.clone())}
			{nav_button(Control::Contact, "contactBtn", "btn btn-outline", host, runner)}
		</div>
	}
}

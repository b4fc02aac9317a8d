//! Simulated search and navigation.
//!
//! Nothing is fetched or navigated. A triggered control shows a busy label and
//! stops taking pointer input; after a fixed delay it fires a burst, shows a
//! notification describing what would have happened, and returns to idle.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::config::ActionConfig;

const SPINNER: &str = r#"<i class="fas fa-spinner fa-spin"></i>"#;

/// The page's interactive controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
	Search,
	Home,
	Back,
	Contact,
}

impl Control {
	/// Label markup while idle.
	pub fn idle_label(self) -> &'static str {
		match self {
			Control::Search => r#"<i class="fas fa-search"></i> Search"#,
			Control::Home => r#"<i class="fas fa-home"></i> Beam Me Home"#,
			Control::Back => r#"<i class="fas fa-arrow-left"></i> Go Back in Time"#,
			Control::Contact => r#"<i class="fas fa-comment-alt"></i> Contact Mission Control"#,
		}
	}

	/// Label markup while the simulated action is pending.
	pub fn busy_label(self) -> String {
		match self {
			Control::Search => format!("{SPINNER} Searching..."),
			Control::Home => format!("{SPINNER} Teleporting..."),
			Control::Back => format!("{SPINNER} Warping..."),
			Control::Contact => format!("{SPINNER} Connecting..."),
		}
	}

	pub fn delay_ms(self, config: &ActionConfig) -> u32 {
		match self {
			Control::Search => config.search_delay_ms,
			Control::Home | Control::Back | Control::Contact => config.navigate_delay_ms,
		}
	}
}

pub fn search_message(query: &str) -> String {
	format!("Searching the cosmos for: \"{query}\"\n(Simulated search in this 404 demo)")
}

/// Notification for the back control; `history_len` is the browser history
/// length at completion time.
pub fn back_message(history_len: u32) -> &'static str {
	if history_len > 1 {
		"Traveling back in time...\n(Simulated back navigation in this 404 demo)"
	} else {
		"No timeline to go back to!\n(Simulated back navigation in this 404 demo)"
	}
}

pub const HOME_MESSAGE: &str = "Beaming you back to the homepage...\n(Simulated navigation in this 404 demo)";
pub const CONTACT_MESSAGE: &str = "Contacting mission control...\n(Simulated contact form in this 404 demo)";

/// Placeholder shown after an empty search.
pub const EMPTY_SEARCH_PLACEHOLDER: &str = "Enter something to search...";

/// Everything the action sequencing needs from the page.
pub trait ActionHost {
	fn set_label(&self, control: Control, html: &str);
	fn set_interactive(&self, control: Control, interactive: bool);
	fn burst(&self, control: Control);
	/// Blocking informational notice.
	fn notify(&self, message: &str);
	fn history_len(&self) -> u32;
	fn search_query(&self) -> String;
	fn clear_search(&self);
	/// Cosmetic correction for an empty query (shake, placeholder, focus).
	fn reject_empty_search(&self);
	/// Runs `task` once after `delay_ms`. Cannot be cancelled.
	fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Result of triggering a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
	/// Busy state entered; completion is scheduled.
	Started,
	/// Empty search query, nothing scheduled.
	Rejected,
	/// The control is still waiting on a previous trigger.
	Ignored,
}

/// Sequences the simulated actions against an [`ActionHost`].
pub struct ActionRunner<H> {
	host: Rc<H>,
	config: ActionConfig,
	pending: Rc<RefCell<HashSet<Control>>>,
}

impl<H: ActionHost + 'static> ActionRunner<H> {
	pub fn new(host: Rc<H>, config: ActionConfig) -> Self {
		Self {
			host,
			config,
			pending: Rc::new(RefCell::new(HashSet::new())),
		}
	}

	pub fn is_pending(&self, control: Control) -> bool {
		self.pending.borrow().contains(&control)
	}

	pub fn trigger(&self, control: Control) -> Outcome {
		if self.is_pending(control) {
			return Outcome::Ignored;
		}
		if control == Control::Search && self.host.search_query().trim().is_empty() {
			self.host.reject_empty_search();
			return Outcome::Rejected;
		}

		self.pending.borrow_mut().insert(control);
		self.host.set_label(control, &control.busy_label());
		self.host.set_interactive(control, false);

		let (host, pending) = (self.host.clone(), self.pending.clone());
		self.host.schedule(
			control.delay_ms(&self.config),
			Box::new(move || complete(&*host, control, &pending)),
		);
		Outcome::Started
	}
}

fn complete<H: ActionHost>(host: &H, control: Control, pending: &RefCell<HashSet<Control>>) {
	host.burst(control);
	match control {
		Control::Search => host.notify(&search_message(&host.search_query())),
		Control::Home => host.notify(HOME_MESSAGE),
		Control::Back => host.notify(back_message(host.history_len())),
		Control::Contact => host.notify(CONTACT_MESSAGE),
	}
	host.set_label(control, control.idle_label());
	host.set_interactive(control, true);
	if control == Control::Search {
		host.clear_search();
	}
	pending.borrow_mut().remove(&control);
}

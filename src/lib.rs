//! nebula-404: an animated "page not found" screen.
//!
//! This crate renders a WASM client-side page with a drifting particle field
//! behind the content, a hover-activated swarm over the 404 orb, click
//! bursts and ripples, and simulated (non-networked) search and navigation.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

pub mod components;
pub mod config;
pub mod dom;
pub mod error;

pub use components::actions::ActionPanel;
pub use components::background_field::FieldCanvas;
pub use components::cursor_swarm::ErrorOrb;
pub use config::PageConfig;

/// Icon font used by the control labels. Labels carry text too, so the page
/// stays usable when it fails to load.
pub const ICON_STYLESHEET: &str =
	"https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("nebula-404: logging initialized");
}

/// Load overrides from a script element with id="page-config".
/// Expected format: JSON with any of { field, swarm, actions }.
fn load_page_config() -> Option<PageConfig> {
	let document = dom::document().ok()?;
	let element = document.get_element_by_id("page-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match PageConfig::from_json(&json_text) {
		Ok(config) => {
			info!("nebula-404: loaded page config overrides");
			Some(config)
		}
		Err(e) => {
			warn!("nebula-404: failed to parse page config: {}", e);
			None
		}
	}
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let PageConfig {
		field,
		swarm,
		actions,
	} = load_page_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="404 - Lost in Space" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Link rel="stylesheet" href=ICON_STYLESHEET />
		<Style id="page-styles">{components::effects::PAGE_STYLES}</Style>
		<Style id="effect-keyframes">{components::effects::KEYFRAMES}</Style>

		<FieldCanvas config=field />
		<main class="container">
			<ErrorOrb config=swarm />
			<h1 class="error-title">"Houston, we have a problem"</h1>
			<p class="error-text">
				"The page you're looking for has drifted into a black hole."
			</p>
			<ActionPanel config=actions />
		</main>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn icon_stylesheet_is_a_secure_css_url() {
		assert!(ICON_STYLESHEET.starts_with("https://"));
		assert!(ICON_STYLESHEET.ends_with(".css"));
		assert!(ICON_STYLESHEET.contains("font-awesome"));
	}
}

//! Click ripple inside a button.

use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::{HtmlElement, MouseEvent};

use super::Rect;
use crate::dom;
use crate::error::HostError;

pub const RIPPLE_MS: u32 = 600;
pub(crate) const ANIMATION: &str = "ripple 0.6s linear";

/// Size and placement of a ripple, relative to its host element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
	/// Diameter: the larger side of the host.
	pub size: f64,
	pub left: f64,
	pub top: f64,
}

/// Centers a ripple on `click` (viewport coordinates) inside `host`.
pub fn ripple_geometry(click: (f64, f64), host: Rect) -> RippleGeometry {
	let size = host.width.max(host.height);
	RippleGeometry {
		size,
		left: click.0 - host.left - size / 2.0,
		top: click.1 - host.top - size / 2.0,
	}
}

pub fn spawn_ripple(event: &MouseEvent, host: &HtmlElement) {
	if let Err(e) = try_spawn_ripple(event, host) {
		warn!("nebula-404: ripple skipped: {}", e);
	}
}

fn try_spawn_ripple(event: &MouseEvent, host: &HtmlElement) -> Result<(), HostError> {
	let document = dom::document()?;
	let geo = ripple_geometry(
		(event.client_x() as f64, event.client_y() as f64),
		dom::bounding_rect(host),
	);

	let ripple = dom::create_html(&document, "span")?;
	let (size, left, top) = (
		format!("{}px", geo.size),
		format!("{}px", geo.left),
		format!("{}px", geo.top),
	);
	dom::set_styles(
		&ripple,
		&[
			("position", "absolute"),
			("border-radius", "50%"),
			("background", "rgba(255, 255, 255, 0.6)"),
			("transform", "scale(0)"),
			("animation", ANIMATION),
			("width", size.as_str()),
			("height", size.as_str()),
			("top", top.as_str()),
			("left", left.as_str()),
			("pointer-events", "none"),
			("z-index", "0"),
		],
	);
	dom::set_styles(host, &[("position", "relative"), ("overflow", "hidden")]);
	host.append_child(&ripple)?;

	Timeout::new(RIPPLE_MS, move || ripple.remove()).forget();
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ripple_is_centered_on_the_click() {
		let host = Rect {
			left: 100.0,
			top: 50.0,
			width: 200.0,
			height: 60.0,
		};
		let geo = ripple_geometry((150.0, 80.0), host);
		assert_eq!(geo.size, 200.0);
		assert_eq!(geo.left, -50.0);
		assert_eq!(geo.top, -70.0);
		// Center lands on the click point, relative to the host.
		assert_eq!(geo.left + geo.size / 2.0, 50.0);
		assert_eq!(geo.top + geo.size / 2.0, 30.0);
	}

	#[test]
	fn tall_hosts_use_height() {
		let host = Rect {
			left: 0.0,
			top: 0.0,
			width: 40.0,
			height: 90.0,
		};
		assert_eq!(ripple_geometry((0.0, 0.0), host).size, 90.0);
	}
}

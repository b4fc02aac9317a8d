//! Radial bursts of small colored dots.

use std::f64::consts::TAU;

use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::{Element, HtmlElement};

use crate::components::theme::{self, Color};
use crate::dom;
use crate::error::HostError;

/// Delay before the outward transform is applied, so the start state paints.
pub const LAUNCH_DELAY_MS: u32 = 10;
/// Dots are removed this long after spawning.
pub const LIFETIME_MS: u32 = 1000;

/// Burst flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstKind {
	/// Pointer entering the orb: small dots, short travel.
	Hover,
	/// Clicks and completed actions: larger dots, longer travel.
	Click,
}

impl BurstKind {
	pub const DEFAULT_COUNT: usize = 15;

	pub fn dot_size(self) -> f64 {
		match self {
			BurstKind::Hover => 4.0,
			BurstKind::Click => 6.0,
		}
	}

	/// `(min, span)` of the travel distance in pixels.
	pub fn travel(self) -> (f64, f64) {
		match self {
			BurstKind::Hover => (30.0, 70.0),
			BurstKind::Click => (50.0, 100.0),
		}
	}

	pub(crate) fn animation(self) -> &'static str {
		match self {
			BurstKind::Hover => "hoverBurst 1s forwards",
			BurstKind::Click => "burst 1s forwards",
		}
	}
}

/// Where a single dot is headed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstDot {
	/// Radians in `[0, 2π)`.
	pub angle: f64,
	pub distance: f64,
	pub color: Color,
}

impl BurstDot {
	/// Final translation relative to the burst origin.
	pub fn offset(&self) -> (f64, f64) {
		(self.angle.cos() * self.distance, self.angle.sin() * self.distance)
	}
}

pub fn plan_burst(kind: BurstKind, count: usize, rng: &mut fastrand::Rng) -> Vec<BurstDot> {
	let (min, span) = kind.travel();
	(0..count)
		.map(|_| BurstDot {
			color: theme::random_accent(rng),
			angle: rng.f64() * TAU,
			distance: min + rng.f64() * span,
		})
		.collect()
}

/// Fires `count` dots from the center of `target`'s bounding box. Failures
/// are logged and otherwise ignored.
pub fn spawn_burst(target: &Element, kind: BurstKind, count: usize) {
	if let Err(e) = try_spawn_burst(target, kind, count) {
		warn!("nebula-404: burst skipped: {}", e);
	}
}

fn try_spawn_burst(target: &Element, kind: BurstKind, count: usize) -> Result<(), HostError> {
	let document = dom::document()?;
	let body = dom::body(&document)?;
	let origin = dom::bounding_rect(target).center();

	for dot in plan_burst(kind, count, &mut fastrand::Rng::new()) {
		let el = dom::create_html(&document, "div")?;
		place_dot(&el, kind, origin, &dot);
		body.append_child(&el)?;
		launch(el, dot);
	}
	Ok(())
}

fn place_dot(el: &HtmlElement, kind: BurstKind, origin: (f64, f64), dot: &BurstDot) {
	let size = format!("{}px", kind.dot_size());
	let (left, top) = (format!("{}px", origin.0), format!("{}px", origin.1));
	let (tx, ty) = dot.offset();
	let (tx, ty) = (format!("{tx}px"), format!("{ty}px"));
	let color = dot.color.to_css();
	dom::set_styles(
		el,
		&[
			("position", "fixed"),
			("width", size.as_str()),
			("height", size.as_str()),
			("border-radius", "50%"),
			("background", color.as_str()),
			("pointer-events", "none"),
			("z-index", "100"),
			("left", left.as_str()),
			("top", top.as_str()),
			("transform", "translate(-50%, -50%)"),
			("--tx", tx.as_str()),
			("--ty", ty.as_str()),
			("animation", kind.animation()),
		],
	);
}

fn launch(el: HtmlElement, dot: BurstDot) {
	let (tx, ty) = dot.offset();
	let moving = el.clone();
	Timeout::new(LAUNCH_DELAY_MS, move || {
		let transform = format!("translate({tx}px, {ty}px)");
		dom::set_styles(&moving, &[("transform", transform.as_str()), ("opacity", "0")]);
	})
	.forget();
	Timeout::new(LIFETIME_MS, move || el.remove()).forget();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plan_respects_count_and_ranges() {
		let mut rng = fastrand::Rng::with_seed(42);
		let hover = plan_burst(BurstKind::Hover, BurstKind::DEFAULT_COUNT, &mut rng);
		assert_eq!(hover.len(), 15);
		for dot in &hover {
			assert!((0.0..TAU).contains(&dot.angle));
			assert!((30.0..100.0).contains(&dot.distance));
			assert!(theme::ACCENTS.contains(&dot.color));
		}

		let click = plan_burst(BurstKind::Click, 30, &mut rng);
		assert_eq!(click.len(), 30);
		assert!(click.iter().all(|d| (50.0..150.0).contains(&d.distance)));
	}

	#[test]
	fn offset_points_along_the_angle() {
		let dot = BurstDot {
			angle: std::f64::consts::FRAC_PI_2,
			distance: 80.0,
			color: theme::ACCENTS[1],
		};
		let (x, y) = dot.offset();
		assert!(x.abs() < 1e-9);
		assert!((y - 80.0).abs() < 1e-9);
	}

	#[test]
	fn kinds_differ_in_size() {
		assert_eq!(BurstKind::Hover.dot_size(), 4.0);
		assert_eq!(BurstKind::Click.dot_size(), 6.0);
		assert_eq!(plan_burst(BurstKind::Click, 0, &mut fastrand::Rng::with_seed(1)).len(), 0);
	}
}

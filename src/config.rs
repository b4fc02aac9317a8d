//! Tunable constants for the page effects.
//!
//! A page may embed a JSON object in `<script id="page-config">` to override
//! any subset of these; missing keys keep their defaults.

use serde::Deserialize;

/// Background field parameters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Viewport width (px) at and above which the wide count applies.
	pub breakpoint: f64,
	/// Point count below the breakpoint.
	pub narrow_count: usize,
	/// Point count at or above the breakpoint.
	pub wide_count: usize,
	/// Pairs closer than this (surface units) get a connecting line.
	pub link_distance: f64,
	/// Line alpha at zero distance, fading linearly to 0 at `link_distance`.
	pub link_alpha: f64,
	/// Stroke width of connecting lines.
	pub link_width: f64,
	/// Smallest point radius (inclusive).
	pub radius_min: f64,
	/// Largest point radius (exclusive).
	pub radius_max: f64,
	/// Per-axis speed bound; velocities are drawn from `[-max_speed, max_speed)`.
	pub max_speed: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			breakpoint: 768.0,
			narrow_count: 30,
			wide_count: 80,
			link_distance: 100.0,
			link_alpha: 0.1,
			link_width: 0.5,
			radius_min: 1.0,
			radius_max: 4.0,
			max_speed: 0.25,
		}
	}
}

/// Cursor swarm parameters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SwarmConfig {
	/// Number of swarm dots, fixed for the page's lifetime.
	pub count: usize,
	/// Per-axis speed bound in percent of the container per frame.
	pub max_speed: f64,
	/// Opacity of a visible particle before pulsing.
	pub opacity: f64,
}

impl Default for SwarmConfig {
	fn default() -> Self {
		Self {
			count: 30,
			max_speed: 0.25,
			opacity: 0.8,
		}
	}
}

/// Delays for the simulated actions, in milliseconds.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActionConfig {
	/// Delay before a search completes.
	pub search_delay_ms: u32,
	/// Delay before home, back and contact complete.
	pub navigate_delay_ms: u32,
}

impl Default for ActionConfig {
	fn default() -> Self {
		Self {
			search_delay_ms: 1500,
			navigate_delay_ms: 1800,
		}
	}
}

/// Complete page configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
	/// Background field settings.
	pub field: FieldConfig,
	/// Hover swarm settings.
	pub swarm: SwarmConfig,
	/// Simulated action delays.
	pub actions: ActionConfig,
}

impl PageConfig {
	/// Parses a (possibly partial) JSON override object.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

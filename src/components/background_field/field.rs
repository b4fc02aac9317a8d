//! Drifting point set behind the page content.

use crate::components::theme::{self, Color};
use crate::config::FieldConfig;

/// A single drifting point.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	pub radius: f64,
	pub color: Color,
}

/// A connecting line between two nearby points.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub alpha: f64,
}

/// Owns every point of the field and the surface bounds they live in.
///
/// Points are regenerated wholesale whenever the surface changes size; no
/// per-point state survives a resize.
pub struct BackgroundField {
	points: Vec<Point>,
	width: f64,
	height: f64,
	config: FieldConfig,
	rng: fastrand::Rng,
}

impl BackgroundField {
	pub fn new(config: FieldConfig, width: f64, height: f64, rng: fastrand::Rng) -> Self {
		let mut field = Self {
			points: Vec::new(),
			width,
			height,
			config,
			rng,
		};
		field.populate();
		field
	}

	/// Number of points for a surface of the given width.
	pub fn particle_count(config: &FieldConfig, width: f64) -> usize {
		if width < config.breakpoint {
			config.narrow_count
		} else {
			config.wide_count
		}
	}

	/// Adopts the new surface size and regenerates every point.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.populate();
	}

	fn populate(&mut self) {
		let count = Self::particle_count(&self.config, self.width);
		self.points.clear();
		self.points.reserve(count);
		for _ in 0..count {
			let point = self.spawn();
			self.points.push(point);
		}
	}

	fn spawn(&mut self) -> Point {
		let rng = &mut self.rng;
		let cfg = &self.config;
		Point {
			x: rng.f64() * self.width,
			y: rng.f64() * self.height,
			speed_x: (rng.f64() - 0.5) * 2.0 * cfg.max_speed,
			speed_y: (rng.f64() - 0.5) * 2.0 * cfg.max_speed,
			radius: cfg.radius_min + rng.f64() * (cfg.radius_max - cfg.radius_min),
			color: theme::random_point_color(rng),
		}
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Every unordered pair closer than the link distance, with its fade alpha.
	///
	/// Quadratic in the point count, which is capped by the config.
	pub fn links(&self) -> Vec<Link> {
		let max = self.config.link_distance;
		let mut links = Vec::new();
		for (i, a) in self.points.iter().enumerate() {
			for b in &self.points[i + 1..] {
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if distance < max {
					links.push(Link {
						from: (a.x, a.y),
						to: (b.x, b.y),
						alpha: self.config.link_alpha * (1.0 - distance / max),
					});
				}
			}
		}
		links
	}

	/// Moves every point by its velocity, re-entering from the opposite edge
	/// when it leaves the surface.
	pub fn advance(&mut self) {
		for p in &mut self.points {
			p.x = wrap(p.x + p.speed_x, self.width);
			p.y = wrap(p.y + p.speed_y, self.height);
		}
	}

	#[cfg(test)]
	pub(crate) fn with_points(config: FieldConfig, width: f64, height: f64, points: Vec<Point>) -> Self {
		Self {
			points,
			width,
			height,
			config,
			rng: fastrand::Rng::with_seed(0),
		}
	}
}

/// Maps `value` into `[0, extent)`.
fn wrap(value: f64, extent: f64) -> f64 {
	if extent <= 0.0 {
		return 0.0;
	}
	let wrapped = value.rem_euclid(extent);
	// rem_euclid can round up to `extent` for tiny negative inputs
	if wrapped >= extent { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn point(x: f64, y: f64) -> Point {
		Point {
			x,
			y,
			speed_x: 0.0,
			speed_y: 0.0,
			radius: 1.0,
			color: Color::rgb(200, 150, 200),
		}
	}

	#[test]
	fn count_switches_at_breakpoint() {
		let cfg = FieldConfig::default();
		assert_eq!(BackgroundField::particle_count(&cfg, 767.9), 30);
		assert_eq!(BackgroundField::particle_count(&cfg, 768.0), 80);
	}

	#[test]
	fn resize_regenerates_points() {
		let mut field =
			BackgroundField::new(FieldConfig::default(), 1024.0, 768.0, fastrand::Rng::with_seed(1));
		assert_eq!(field.points().len(), 80);
		let before = field.points().to_vec();

		field.resize(400.0, 700.0);
		assert_eq!(field.points().len(), 30);
		assert_eq!(field.size(), (400.0, 700.0));
		assert!(field.points().iter().all(|p| p.x < 400.0 && p.y < 700.0));

		field.resize(1024.0, 768.0);
		assert_eq!(field.points().len(), 80);
		assert_ne!(field.points(), &before[..]);
	}

	#[test]
	fn spawned_points_respect_ranges() {
		let field =
			BackgroundField::new(FieldConfig::default(), 1280.0, 720.0, fastrand::Rng::with_seed(3));
		for p in field.points() {
			assert!((0.0..1280.0).contains(&p.x));
			assert!((0.0..720.0).contains(&p.y));
			assert!((1.0..4.0).contains(&p.radius));
			assert!((-0.25..0.25).contains(&p.speed_x));
			assert!((-0.25..0.25).contains(&p.speed_y));
			assert!((0.2..0.7).contains(&p.color.a));
		}
	}

	#[test]
	fn links_fade_with_distance() {
		let field = BackgroundField::with_points(
			FieldConfig::default(),
			500.0,
			500.0,
			vec![point(0.0, 0.0), point(30.0, 40.0), point(130.0, 40.0)],
		);
		let links = field.links();
		// (0,0)-(30,40) = 50 and (30,40)-(130,40) = 100, (0,0)-(130,40) > 100
		assert_eq!(links.len(), 1);
		assert_eq!(links[0].from, (0.0, 0.0));
		assert_eq!(links[0].to, (30.0, 40.0));
		assert!((links[0].alpha - 0.05).abs() < 1e-12);
	}

	#[test]
	fn exact_link_distance_draws_nothing() {
		let field = BackgroundField::with_points(
			FieldConfig::default(),
			500.0,
			500.0,
			vec![point(10.0, 10.0), point(110.0, 10.0)],
		);
		assert!(field.links().is_empty());
	}

	#[test]
	fn advance_wraps_to_opposite_edge() {
		let mut p = point(199.9, 0.1);
		p.speed_x = 0.2;
		p.speed_y = -0.2;
		let mut field = BackgroundField::with_points(FieldConfig::default(), 200.0, 100.0, vec![p]);
		field.advance();
		let p = &field.points()[0];
		assert!(p.x < 1.0);
		assert!(p.y > 99.0 && p.y < 100.0);
	}

	#[test]
	fn wrap_never_returns_extent() {
		assert_eq!(wrap(-1e-18, 800.0), 0.0);
		assert_eq!(wrap(800.0, 800.0), 0.0);
		assert_eq!(wrap(5.0, 0.0), 0.0);
	}

	proptest! {
		#[test]
		fn count_depends_only_on_width(width in 0.0f64..4000.0, height in 0.0f64..4000.0, seed: u64) {
			let field = BackgroundField::new(FieldConfig::default(), width, height, fastrand::Rng::with_seed(seed));
			let expected = if width >= 768.0 { 80 } else { 30 };
			prop_assert_eq!(field.points().len(), expected);
		}

		#[test]
		fn points_stay_on_surface(width in 1.0f64..2000.0, height in 1.0f64..2000.0, seed: u64, frames in 0usize..400) {
			let mut field = BackgroundField::new(FieldConfig::default(), width, height, fastrand::Rng::with_seed(seed));
			for _ in 0..frames {
				field.advance();
			}
			for p in field.points() {
				prop_assert!(p.x >= 0.0 && p.x < width);
				prop_assert!(p.y >= 0.0 && p.y < height);
			}
		}
	}
}

//! Frame drawing for the background field.
//!
//! Each frame runs two passes: connecting lines between nearby points, then
//! the points themselves after they have been moved.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::BackgroundField;
use crate::components::theme::{Color, LINK_COLOR};

/// Minimal drawing surface the field needs.
pub trait Surface {
	fn clear(&self, width: f64, height: f64);
	fn line(&self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
	fn dot(&self, center: (f64, f64), radius: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn line(&self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.begin_path();
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn dot(&self, center: (f64, f64), radius: f64, color: Color) {
		self.begin_path();
		self.set_fill_style_str(&color.to_css());
		let _ = self.arc(center.0, center.1, radius, 0.0, PI * 2.0);
		self.fill();
	}
}

/// Clears the surface, draws links for the current positions, then advances
/// the field and draws every point at its new position.
pub fn render_frame<S: Surface + ?Sized>(field: &mut BackgroundField, surface: &S) {
	let (width, height) = field.size();
	surface.clear(width, height);

	let link_width = field.config().link_width;
	for link in field.links() {
		surface.line(link.from, link.to, LINK_COLOR.with_alpha(link.alpha), link_width);
	}

	field.advance();
	for p in field.points() {
		surface.dot((p.x, p.y), p.radius, p.color);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::components::background_field::field::Point;
	use crate::config::FieldConfig;

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear(f64, f64),
		Line { alpha: f64 },
		Dot { x: f64, y: f64 },
	}

	#[derive(Default)]
	struct Recorder(RefCell<Vec<Op>>);

	impl Surface for Recorder {
		fn clear(&self, width: f64, height: f64) {
			self.0.borrow_mut().push(Op::Clear(width, height));
		}

		fn line(&self, _from: (f64, f64), _to: (f64, f64), color: Color, width: f64) {
			assert_eq!(width, 0.5);
			assert_eq!((color.r, color.g, color.b), (108, 99, 255));
			self.0.borrow_mut().push(Op::Line { alpha: color.a });
		}

		fn dot(&self, center: (f64, f64), _radius: f64, _color: Color) {
			self.0.borrow_mut().push(Op::Dot {
				x: center.0,
				y: center.1,
			});
		}
	}

	fn moving(x: f64, y: f64, speed_x: f64) -> Point {
		Point {
			x,
			y,
			speed_x,
			speed_y: 0.0,
			radius: 2.0,
			color: Color::rgba(180, 120, 200, 0.5),
		}
	}

	#[test]
	fn frame_order_is_clear_lines_dots() {
		let mut field = BackgroundField::with_points(
			FieldConfig::default(),
			300.0,
			200.0,
			vec![moving(10.0, 10.0, 1.0), moving(70.0, 10.0, 0.0), moving(250.0, 150.0, 0.0)],
		);
		let surface = Recorder::default();
		render_frame(&mut field, &surface);

		let ops = surface.0.into_inner();
		assert_eq!(ops[0], Op::Clear(300.0, 200.0));
		// Only the first two points are within 100 units, measured before moving.
		match &ops[1] {
			Op::Line { alpha } => assert!((alpha - 0.1 * (1.0 - 60.0 / 100.0)).abs() < 1e-12),
			other => panic!("expected a line, got {other:?}"),
		}
		assert_eq!(ops[2], Op::Dot { x: 11.0, y: 10.0 });
		assert_eq!(ops.len(), 5);
	}

	#[test]
	fn dots_are_drawn_at_wrapped_positions() {
		let mut field =
			BackgroundField::with_points(FieldConfig::default(), 100.0, 100.0, vec![moving(99.5, 50.0, 1.0)]);
		let surface = Recorder::default();
		render_frame(&mut field, &surface);

		let ops = surface.0.into_inner();
		match ops.last() {
			Some(Op::Dot { x, y }) => {
				assert!((x - 0.5).abs() < 1e-9);
				assert_eq!(*y, 50.0);
			}
			other => panic!("expected a dot, got {other:?}"),
		}
	}
}

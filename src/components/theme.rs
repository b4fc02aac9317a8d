//! Colors shared by the background field, the swarm and the one-shot effects.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Builds a color from raw channel values, flooring and clamping RGB into
	/// `0..=255` and alpha into `0.0..=1.0`.
	pub fn from_channels(r: f64, g: f64, b: f64, a: f64) -> Self {
		let channel = |v: f64| {
			if v.is_nan() {
				0
			} else {
				v.floor().clamp(0.0, 255.0) as u8
			}
		};
		let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };
		Self {
			r: channel(r),
			g: channel(g),
			b: channel(b),
			a,
		}
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			self.to_css_rgb()
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Stroke color of the background field's connecting lines.
pub const LINK_COLOR: Color = Color::rgb(108, 99, 255);

/// Accent colors used by swarm dots and bursts.
pub const ACCENTS: [Color; 4] = [
	Color::rgb(0x6c, 0x63, 0xff), // Violet
	Color::rgb(0xff, 0x6b, 0x8b), // Rose
	Color::rgb(0x36, 0xd1, 0xdc), // Cyan
	Color::rgb(0x00, 0xff, 0x9d), // Mint
];

pub fn random_accent(rng: &mut fastrand::Rng) -> Color {
	ACCENTS[rng.usize(..ACCENTS.len())]
}

/// Translucent purple/blue tint for a background point.
pub fn random_point_color(rng: &mut fastrand::Rng) -> Color {
	Color::from_channels(
		rng.f64() * 100.0 + 156.0,
		rng.f64() * 100.0 + 99.0,
		rng.f64() * 155.0 + 100.0,
		rng.f64() * 0.5 + 0.2,
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn channels_are_clamped() {
		let c = Color::from_channels(300.7, -4.0, 128.9, 1.5);
		assert_eq!((c.r, c.g, c.b), (255, 0, 128));
		assert_eq!(c.a, 1.0);

		let c = Color::from_channels(f64::NAN, 10.0, 10.0, -0.2);
		assert_eq!(c.r, 0);
		assert_eq!(c.a, 0.0);
	}

	#[test]
	fn css_output() {
		assert_eq!(LINK_COLOR.to_css(), "#6c63ff");
		assert_eq!(
			LINK_COLOR.with_alpha(0.05).to_css(),
			"rgba(108, 99, 255, 0.05)"
		);
	}

	#[test]
	fn point_colors_stay_in_palette_ranges() {
		let mut rng = fastrand::Rng::with_seed(7);
		for _ in 0..500 {
			let c = random_point_color(&mut rng);
			assert!(c.r >= 156);
			assert!((99..=198).contains(&c.g));
			assert!((100..=254).contains(&c.b));
			assert!((0.2..0.7).contains(&c.a));
		}
	}
}

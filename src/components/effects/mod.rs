//! One-shot, self-removing visual feedback: bursts, ripples and the orb's
//! parallax drift.
//!
//! Cleanup is timer based. Spawned elements are removed after a fixed delay
//! whether or not their CSS animation has actually finished.

pub mod burst;
pub mod ripple;

pub use burst::{BurstKind, spawn_burst};
pub use ripple::spawn_ripple;

/// Resting animation of the 404 orb.
pub const FLOAT_ANIMATION: &str = "float 6s ease-in-out infinite";
/// Shake applied to the search input when an empty query is submitted.
pub const PULSE_BORDER_ANIMATION: &str = "pulseBorder 0.5s ease";

/// Keyframes referenced by the page's `animation` styles, inline or not.
pub const KEYFRAMES: &str = r#"
@keyframes float {
	0%,
	100% {
		transform: translateY(0);
	}
	50% {
		transform: translateY(-20px);
	}
}

@keyframes pulseBorder {
	0%,
	100% {
		border-color: rgba(108, 99, 255, 0.3);
		box-shadow: none;
	}
	50% {
		border-color: rgba(255, 101, 132, 0.9);
		box-shadow: 0 0 12px rgba(255, 101, 132, 0.6);
	}
}

@keyframes ripple {
	to {
		transform: scale(4);
		opacity: 0;
	}
}

@keyframes burst {
	0% {
		transform: translate(0, 0);
		opacity: 1;
	}
	100% {
		transform: translate(var(--tx), var(--ty));
		opacity: 0;
	}
}

@keyframes hoverBurst {
	0% {
		transform: translate(0, 0);
		opacity: 0.8;
	}
	100% {
		transform: translate(var(--tx), var(--ty));
		opacity: 0;
	}
}
"#;

/// Layout for the page content. Swarm dots are positioned in percent of the
/// `.hover-particles` box, which must cover the orb and ignore the pointer.
pub const PAGE_STYLES: &str = r#"
* {
	margin: 0;
	padding: 0;
	box-sizing: border-box;
}

body {
	min-height: 100vh;
	display: flex;
	align-items: center;
	justify-content: center;
	overflow-x: hidden;
	background: #0f0c29;
	color: #f5f5ff;
	font-family: "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}

.container {
	position: relative;
	max-width: 720px;
	padding: 2rem;
	text-align: center;
}

.error-animation {
	position: relative;
	width: 220px;
	height: 220px;
	margin: 0 auto 2rem;
	cursor: pointer;
	animation: float 6s ease-in-out infinite;
}

.hover-particles {
	position: absolute;
	inset: 0;
	overflow: hidden;
	border-radius: 50%;
	pointer-events: none;
	z-index: 2;
}

.particle {
	position: absolute;
	border-radius: 50%;
	opacity: 0;
	pointer-events: none;
}

.error-circle {
	position: absolute;
	inset: 0;
	display: flex;
	align-items: center;
	justify-content: center;
	border-radius: 50%;
	background: radial-gradient(circle at 30% 30%, #6c63ff, #2a1b5e);
	box-shadow: 0 0 60px rgba(108, 99, 255, 0.5);
}

.error-code {
	font-size: 4.5rem;
	font-weight: 800;
	letter-spacing: 0.1em;
}

.error-title {
	font-size: 2.2rem;
	margin-bottom: 1rem;
}

.error-text {
	margin-bottom: 2rem;
	opacity: 0.8;
}

.search-container {
	display: flex;
	gap: 0.5rem;
	max-width: 460px;
	margin: 0 auto 2rem;
}

.search-input {
	flex: 1;
	padding: 0.8rem 1.2rem;
	border: 2px solid rgba(108, 99, 255, 0.3);
	border-radius: 50px;
	background: rgba(255, 255, 255, 0.08);
	color: inherit;
	font-size: 1rem;
	outline: none;
}

.search-input:focus {
	border-color: #6c63ff;
}

.search-btn,
.btn {
	position: relative;
	overflow: hidden;
	border: none;
	border-radius: 50px;
	color: #fff;
	font-size: 1rem;
	cursor: pointer;
}

.search-btn {
	padding: 0.8rem 1.4rem;
	background: #6c63ff;
}

.action-buttons {
	display: flex;
	flex-wrap: wrap;
	gap: 1rem;
	justify-content: center;
}

.btn {
	padding: 0.8rem 1.6rem;
}

.btn-primary {
	background: #6c63ff;
}

.btn-secondary {
	background: #ff6584;
}

.btn-outline {
	background: transparent;
	border: 2px solid #6c63ff;
}
"#;

/// Axis-aligned box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub fn center(&self) -> (f64, f64) {
		(self.left + self.width / 2.0, self.top + self.height / 2.0)
	}
}

/// Maximum parallax displacement of the orb, in pixels, edge to edge.
const PARALLAX_RANGE: f64 = 10.0;

/// Offset of the orb for a pointer at `client` inside a `viewport`, centered
/// on zero when the pointer is in the middle of the screen.
pub fn parallax_offset(client: (f64, f64), viewport: (f64, f64)) -> (f64, f64) {
	let axis = |c: f64, extent: f64| {
		if extent <= 0.0 {
			0.0
		} else {
			(c / extent - 0.5) * PARALLAX_RANGE
		}
	};
	(axis(client.0, viewport.0), axis(client.1, viewport.1))
}

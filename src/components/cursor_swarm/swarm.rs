//! Hover-activated swarm over the 404 orb.
//!
//! Positions are percentages of the container (`0..=100` on both axes).
//! Particles bounce off the bounds by flipping the offending velocity
//! component; there is no overshoot correction, so a particle may sit slightly
//! outside the range for one frame before it turns around.

use crate::components::theme::{self, Color};
use crate::config::SwarmConfig;

/// Opaque handle of a scheduled animation frame.
pub type FrameId = i32;

/// A single swarm dot.
#[derive(Clone, Debug, PartialEq)]
pub struct SwarmParticle {
	pub x: f64,
	pub y: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	/// Edge length in pixels.
	pub size: f64,
	pub opacity: f64,
	pub color: Color,
}

impl SwarmParticle {
	fn integrate(&mut self) {
		self.x += self.speed_x;
		self.y += self.speed_y;
		if !(0.0..=100.0).contains(&self.x) {
			self.speed_x = -self.speed_x;
		}
		if !(0.0..=100.0).contains(&self.y) {
			self.speed_y = -self.speed_y;
		}
	}
}

/// Whether the swarm is animating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwarmPhase {
	/// Hidden, nothing scheduled.
	Idle,
	/// Visible; `frame` is the next scheduled update, if one is pending.
	Active { frame: Option<FrameId> },
}

/// Pulse multiplier in `[0.4, 1.0]` for a particle at horizontal position `x`.
pub fn pulse(now_secs: f64, x: f64) -> f64 {
	0.7 + 0.3 * (now_secs + x).sin()
}

/// Fixed set of particles plus the idle/active state machine driving them.
pub struct CursorSwarm {
	particles: Vec<SwarmParticle>,
	phase: SwarmPhase,
	opacity: f64,
}

impl CursorSwarm {
	pub fn new(config: &SwarmConfig, rng: &mut fastrand::Rng) -> Self {
		let particles = (0..config.count)
			.map(|_| SwarmParticle {
				x: rng.f64() * 100.0,
				y: rng.f64() * 100.0,
				speed_x: (rng.f64() - 0.5) * 2.0 * config.max_speed,
				speed_y: (rng.f64() - 0.5) * 2.0 * config.max_speed,
				size: rng.f64() * 6.0 + 2.0,
				opacity: 0.0,
				color: theme::random_accent(rng),
			})
			.collect();
		Self::from_particles(particles, config.opacity)
	}

	pub fn from_particles(particles: Vec<SwarmParticle>, opacity: f64) -> Self {
		Self {
			particles,
			phase: SwarmPhase::Idle,
			opacity,
		}
	}

	pub fn particles(&self) -> &[SwarmParticle] {
		&self.particles
	}

	pub fn phase(&self) -> SwarmPhase {
		self.phase
	}

	pub fn is_active(&self) -> bool {
		matches!(self.phase, SwarmPhase::Active { .. })
	}

	/// Idle -> Active. Shows every particle. Returns `false` (and changes
	/// nothing) when already active, so callers only schedule a frame once.
	pub fn start(&mut self) -> bool {
		if self.is_active() {
			return false;
		}
		self.phase = SwarmPhase::Active { frame: None };
		for p in &mut self.particles {
			p.opacity = self.opacity;
		}
		true
	}

	/// Active -> Idle. Hides every particle and hands back the pending frame
	/// so the caller can cancel it.
	pub fn stop(&mut self) -> Option<FrameId> {
		let pending = match self.phase {
			SwarmPhase::Active { frame } => frame,
			SwarmPhase::Idle => return None,
		};
		self.phase = SwarmPhase::Idle;
		for p in &mut self.particles {
			p.opacity = 0.0;
		}
		pending
	}

	/// Records the next scheduled frame. Ignored while idle.
	pub fn set_frame(&mut self, id: FrameId) {
		if let SwarmPhase::Active { ref mut frame } = self.phase {
			*frame = Some(id);
		}
	}

	/// Runs one frame: move, bounce, pulse. Returns `false` without touching
	/// any particle when idle, meaning no further frame should be scheduled.
	pub fn step(&mut self, now_secs: f64) -> bool {
		let SwarmPhase::Active { ref mut frame } = self.phase else {
			return false;
		};
		*frame = None;
		for p in &mut self.particles {
			p.integrate();
			p.opacity = self.opacity * pulse(now_secs, p.x);
		}
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn particle(x: f64, speed_x: f64) -> SwarmParticle {
		SwarmParticle {
			x,
			y: 50.0,
			speed_x,
			speed_y: 0.0,
			size: 4.0,
			opacity: 0.0,
			color: theme::ACCENTS[0],
		}
	}

	#[test]
	fn start_is_guarded() {
		let mut swarm = CursorSwarm::new(&SwarmConfig::default(), &mut fastrand::Rng::with_seed(9));
		assert_eq!(swarm.particles().len(), 30);
		assert_eq!(swarm.phase(), SwarmPhase::Idle);
		assert!(swarm.particles().iter().all(|p| p.opacity == 0.0));

		assert!(swarm.start());
		assert!(swarm.particles().iter().all(|p| p.opacity == 0.8));
		swarm.set_frame(4);
		assert!(!swarm.start());
		assert_eq!(swarm.phase(), SwarmPhase::Active { frame: Some(4) });
	}

	#[test]
	fn stop_returns_pending_frame_and_hides() {
		let mut swarm = CursorSwarm::from_particles(vec![particle(50.0, 0.1)], 0.8);
		assert_eq!(swarm.stop(), None);

		swarm.start();
		swarm.set_frame(11);
		assert_eq!(swarm.stop(), Some(11));
		assert_eq!(swarm.phase(), SwarmPhase::Idle);
		assert_eq!(swarm.particles()[0].opacity, 0.0);
		assert_eq!(swarm.stop(), None);
	}

	#[test]
	fn no_mutation_after_stop() {
		let mut swarm = CursorSwarm::from_particles(vec![particle(50.0, 0.1)], 0.8);
		swarm.start();
		assert!(swarm.step(0.0));
		swarm.stop();
		let frozen = swarm.particles().to_vec();

		// A frame dispatched before stop() may still fire.
		assert!(!swarm.step(1.0));
		swarm.set_frame(3);
		assert_eq!(swarm.particles(), &frozen[..]);
		assert_eq!(swarm.phase(), SwarmPhase::Idle);
	}

	#[test]
	fn reflection_happens_on_the_crossing_step() {
		let mut swarm = CursorSwarm::from_particles(vec![particle(0.5, -0.3)], 0.8);
		swarm.start();

		swarm.step(0.0);
		let p = &swarm.particles()[0];
		assert!((p.x - 0.2).abs() < 1e-12);
		assert_eq!(p.speed_x, -0.3);

		swarm.step(0.0);
		let p = &swarm.particles()[0];
		assert!((p.x + 0.1).abs() < 1e-12);
		assert_eq!(p.speed_x, 0.3);

		swarm.step(0.0);
		assert!((swarm.particles()[0].x - 0.2).abs() < 1e-12);
	}

	#[test]
	fn opacity_pulses_with_time_and_position() {
		let mut swarm = CursorSwarm::from_particles(vec![particle(10.0, 0.0)], 0.8);
		swarm.start();
		swarm.step(2.0);
		let expected = 0.8 * (0.7 + 0.3 * (2.0f64 + 10.0).sin());
		assert!((swarm.particles()[0].opacity - expected).abs() < 1e-12);
	}

	#[test]
	fn step_clears_the_consumed_frame() {
		let mut swarm = CursorSwarm::from_particles(vec![particle(10.0, 0.0)], 0.8);
		swarm.start();
		swarm.set_frame(1);
		swarm.step(0.0);
		assert_eq!(swarm.phase(), SwarmPhase::Active { frame: None });
	}

	#[test]
	fn pulse_bounds() {
		for i in 0..100 {
			let v = pulse(i as f64 * 0.37, i as f64);
			assert!((0.4 - 1e-12..=1.0 + 1e-12).contains(&v));
		}
	}
}

//! Hover-activated particle swarm over the 404 orb.

mod component;
pub mod swarm;

pub use component::ErrorOrb;
pub use swarm::{CursorSwarm, SwarmPhase};

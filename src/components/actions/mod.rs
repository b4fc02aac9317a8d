//! Simulated search/navigation controls.

pub mod action;
mod component;

pub use action::{ActionHost, ActionRunner, Control, Outcome};
pub use component::ActionPanel;

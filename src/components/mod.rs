//! Visual components of the page.

pub mod actions;
pub mod background_field;
pub mod cursor_swarm;
pub mod effects;
pub mod theme;

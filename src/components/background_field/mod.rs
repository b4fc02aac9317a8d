//! Full-viewport field of drifting, interconnected dots.
//!
//! - [`field`]: point set, resize rules, link computation and wraparound
//! - [`render`]: per-frame drawing onto any [`render::Surface`]
//! - [`FieldCanvas`]: the Leptos component driving it from `requestAnimationFrame`

mod component;
pub mod field;
pub mod render;

pub use component::FieldCanvas;
pub use field::BackgroundField;

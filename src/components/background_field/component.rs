//! Leptos component owning the full-viewport background canvas.
//!
//! The component sizes the canvas to the window, builds the field once the
//! canvas is mounted, and redraws it from a `requestAnimationFrame` loop that
//! runs for the lifetime of the page. Window resizes rebuild the field.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::field::BackgroundField;
use super::render;
use crate::config::FieldConfig;
use crate::dom;
use crate::error::HostError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Field state plus the canvas it draws on.
struct FieldContext {
	field: BackgroundField,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl FieldContext {
	fn resize(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
		self.field.resize(width, height);
		debug!(
			"nebula-404: field resized to {}x{} ({} points)",
			width,
			height,
			self.field.points().len()
		);
	}
}

/// Renders the animated dot field behind the page content.
#[component]
pub fn FieldCanvas(#[prop(optional)] config: FieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(e) = mount(canvas, config.clone(), &context, &animate, &resize_cb) {
			warn!("nebula-404: background field disabled: {}", e);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="particle-canvas"
			class="particle-canvas"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none;"
		/>
	}
}

fn mount(
	canvas: HtmlCanvasElement,
	config: FieldConfig,
	context: &Rc<RefCell<Option<FieldContext>>>,
	animate: &FrameCallback,
	resize_cb: &FrameCallback,
) -> Result<(), HostError> {
	let window = dom::window()?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(HostError::NoContext)?
		.dyn_into()
		.map_err(|_| HostError::NoContext)?;

	let (w, h) = dom::viewport_size(&window);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let field = BackgroundField::new(config, w, h, fastrand::Rng::new());
	info!(
		"nebula-404: background field ready ({} points on {}x{})",
		field.points().len(),
		w,
		h
	);
	*context.borrow_mut() = Some(FieldContext { field, canvas, ctx });

	let context_resize = context.clone();
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		let Ok(win) = dom::window() else {
			return;
		};
		let (nw, nh) = dom::viewport_size(&win);
		if let Some(ref mut c) = *context_resize.borrow_mut() {
			c.resize(nw, nh);
		}
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
	}

	let (context_anim, animate_inner) = (context.clone(), animate.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		if let Some(ref mut c) = *context_anim.borrow_mut() {
			render::render_frame(&mut c.field, &c.ctx);
		}
		if let Some(ref cb) = *animate_inner.borrow() {
			if let Ok(win) = dom::window() {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		window.request_animation_frame(cb.as_ref().unchecked_ref())?;
	}
	Ok(())
}

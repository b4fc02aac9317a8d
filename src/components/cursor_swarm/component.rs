//! The 404 orb: hover swarm, bursts, press feedback and pointer parallax.
//!
//! Swarm dots are plain `<div>`s appended to the orb's particle container
//! once it mounts. Their positions and opacity are written from the
//! [`CursorSwarm`] after every frame; the frame loop only runs between
//! pointer enter and pointer leave.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use super::swarm::{CursorSwarm, FrameId, SwarmParticle};
use crate::components::effects::{self, BurstKind};
use crate::config::SwarmConfig;
use crate::dom;
use crate::error::HostError;

/// How long the orb stays pressed after a click.
const PRESS_MS: u32 = 300;
/// Dots fired by clicking the orb.
const ORB_BURST_COUNT: usize = 30;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Swarm state paired with the elements that display it.
struct SwarmContext {
	swarm: CursorSwarm,
	dots: Vec<HtmlElement>,
}

impl SwarmContext {
	fn build(container: &HtmlElement, config: &SwarmConfig) -> Result<Self, HostError> {
		let document = dom::document()?;
		let swarm = CursorSwarm::new(config, &mut fastrand::Rng::new());
		let mut dots = Vec::with_capacity(swarm.particles().len());

		for p in swarm.particles() {
			let dot = dom::create_html(&document, "div")?;
			dot.set_class_name("particle");
			let styles = dot_styles(p);
			let styles: Vec<(&str, &str)> = styles.iter().map(|(k, v)| (*k, v.as_str())).collect();
			dom::set_styles(&dot, &styles);
			container.append_child(&dot)?;
			dots.push(dot);
		}

		let ctx = Self { swarm, dots };
		ctx.paint();
		Ok(ctx)
	}

	fn paint(&self) {
		for (p, dot) in self.swarm.particles().iter().zip(&self.dots) {
			let (left, top) = (format!("{}%", p.x), format!("{}%", p.y));
			let opacity = p.opacity.to_string();
			dom::set_styles(
				dot,
				&[
					("left", left.as_str()),
					("top", top.as_str()),
					("opacity", opacity.as_str()),
				],
			);
		}
	}
}

/// Static inline styles of a swarm dot. Placement is absolute within the
/// particle container so the per-frame `left`/`top` percentages apply.
fn dot_styles(p: &SwarmParticle) -> Vec<(&'static str, String)> {
	let size = format!("{}px", p.size);
	vec![
		("position", "absolute".to_string()),
		("width", size.clone()),
		("height", size),
		("border-radius", "50%".to_string()),
		("background", p.color.to_css()),
		("pointer-events", "none".to_string()),
		("opacity", "0".to_string()),
	]
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<FrameId> {
	dom::window()
		.ok()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

/// Shrinks the orb briefly, then restores its floating animation.
fn press(orb: HtmlElement) {
	dom::set_styles(&orb, &[("animation", "none")]);
	// reading layout restarts the animation once it is set again
	let _ = orb.offset_height();
	dom::set_styles(&orb, &[("transform", "scale(0.95)")]);

	Timeout::new(PRESS_MS, move || {
		dom::set_styles(
			&orb,
			&[
				("transform", ""),
				("animation", effects::FLOAT_ANIMATION),
			],
		);
	})
	.forget();
}

/// The circular "404" graphic with its hover-activated particle swarm.
#[component]
pub fn ErrorOrb(#[prop(optional)] config: SwarmConfig) -> impl IntoView {
	let orb_ref = NodeRef::<leptos::html::Div>::new();
	let swarm_ref = NodeRef::<leptos::html::Div>::new();
	let context: Rc<RefCell<Option<SwarmContext>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let parallax: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));

	let (context_init, animate_init) = (context.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(container) = swarm_ref.get() else {
			return;
		};
		let container: HtmlElement = container.into();
		match SwarmContext::build(&container, &config) {
			Ok(c) => *context_init.borrow_mut() = Some(c),
			Err(e) => {
				warn!("nebula-404: hover swarm disabled: {}", e);
				return;
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let mut guard = context_anim.borrow_mut();
			let Some(c) = guard.as_mut() else {
				return;
			};
			if !c.swarm.step(js_sys::Date::now() / 1000.0) {
				return;
			}
			c.paint();
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(id) = request_frame(cb) {
					c.swarm.set_frame(id);
				}
			}
		}));
	});

	Effect::new(move |_| {
		let Some(orb) = orb_ref.get() else {
			return;
		};
		let orb: HtmlElement = orb.into();
		*parallax.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if orb.matches(":hover").unwrap_or(false) {
				return;
			}
			let Ok(win) = dom::window() else {
				return;
			};
			let (x, y) = effects::parallax_offset(
				(ev.client_x() as f64, ev.client_y() as f64),
				dom::viewport_size(&win),
			);
			let transform = format!("translate({x}px, {y}px)");
			dom::set_styles(&orb, &[("transform", transform.as_str())]);
		}));

		let Ok(document) = dom::document() else {
			return;
		};
		if let Some(ref cb) = *parallax.borrow() {
			if let Err(e) =
				document.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref())
			{
				warn!("nebula-404: parallax disabled: {}", HostError::from(e));
			}
		}
	});

	let (context_enter, animate_enter) = (context.clone(), animate.clone());
	let on_mouseenter = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_enter.borrow_mut() {
			if c.swarm.start() {
				debug!("nebula-404: swarm active");
				c.paint();
				if let Some(ref cb) = *animate_enter.borrow() {
					if let Some(id) = request_frame(cb) {
						c.swarm.set_frame(id);
					}
				}
			}
		}
		if let Some(orb) = orb_ref.get() {
			effects::spawn_burst(&orb, BurstKind::Hover, BurstKind::DEFAULT_COUNT);
		}
	};

	let context_leave = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_leave.borrow_mut() {
			if !c.swarm.is_active() {
				return;
			}
			if let Some(id) = c.swarm.stop() {
				if let Ok(win) = dom::window() {
					let _ = win.cancel_animation_frame(id);
				}
			}
			c.paint();
			debug!("nebula-404: swarm idle");
		}
	};

	let on_click = move |_: MouseEvent| {
		let Some(orb) = orb_ref.get() else {
			return;
		};
		effects::spawn_burst(&orb, BurstKind::Click, ORB_BURST_COUNT);
		press(orb.into());
	};

	view! {
		<div
			node_ref=orb_ref
			id="errorAnimation"
			class="error-animation"
			on:mouseenter=on_mouseenter
			on:mouseleave=on_mouseleave
			on:click=on_click
		>
			<div node_ref=swarm_ref id="hoverParticles" class="hover-particles"></div>
			<div class="error-circle">
				<span class="error-code">"404"</span>
			</div>
		</div>
	}
}

//! Thin helpers over `web_sys` shared by the components.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::components::effects::Rect;
use crate::error::HostError;

/// The global window.
pub fn window() -> Result<Window, HostError> {
	web_sys::window().ok_or(HostError::NoWindow)
}

/// The window's document.
pub fn document() -> Result<Document, HostError> {
	window()?.document().ok_or(HostError::NoDocument)
}

/// The document's `<body>`, where transient effect elements are attached.
pub fn body(document: &Document) -> Result<HtmlElement, HostError> {
	document.body().ok_or(HostError::NoBody)
}

/// Viewport size in CSS pixels. Unreadable dimensions collapse to zero.
pub fn viewport_size(window: &Window) -> (f64, f64) {
	let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
	};
	(read(window.inner_width()), read(window.inner_height()))
}

/// Viewport-relative bounding box of `element`.
pub fn bounding_rect(element: &Element) -> Rect {
	let r = element.get_bounding_client_rect();
	Rect {
		left: r.left(),
		top: r.top(),
		width: r.width(),
		height: r.height(),
	}
}

/// Creates a detached `<tag>` element.
pub fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, HostError> {
	document
		.create_element(tag)?
		.dyn_into::<HtmlElement>()
		.map_err(|_| HostError::Js(format!("<{tag}> is not an HtmlElement")))
}

/// Writes a batch of inline style properties, ignoring individual failures.
pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) {
	let style = element.style();
	for (name, value) in styles {
		let _ = style.set_property(name, value);
	}
}

//! Failures raised while attaching the page effects to the browser.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Host environment faults. None of these are recoverable; callers log them
/// and leave the affected component inert.
#[derive(Debug, Error)]
pub enum HostError {
	/// `window` is not defined (not running in a browser).
	#[error("no global window")]
	NoWindow,
	/// The window carries no document.
	#[error("window has no document")]
	NoDocument,
	/// The document has no `<body>` to attach transient elements to.
	#[error("document has no body")]
	NoBody,
	/// `getContext("2d")` returned nothing.
	#[error("canvas has no 2d rendering context")]
	NoContext,
	/// A DOM call threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for HostError {
	fn from(value: JsValue) -> Self {
		HostError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_body_is_distinct_from_missing_document() {
		assert_eq!(HostError::NoBody.to_string(), "document has no body");
		assert_eq!(HostError::NoDocument.to_string(), "window has no document");
	}
}

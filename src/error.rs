//! Error type shared by the browser-facing parts of the gallery.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from browser APIs and the two gallery endpoints.
#[derive(Debug, Error)]
pub enum GalleryError {
	/// No `window` global (not running in a browser page).
	#[error("no window available")]
	NoWindow,

	/// `localStorage` is disabled or not exposed by the browser.
	#[error("local storage unavailable")]
	StorageUnavailable,

	/// A browser call threw or a promise rejected.
	#[error("browser call failed: {0}")]
	Js(String),

	/// The server answered with a non-2xx status.
	#[error("server responded with status {0}")]
	Status(u16),

	/// The response body was not the expected JSON.
	#[error("malformed response body: {0}")]
	Decode(#[from] serde_json::Error),
}

impl From<JsValue> for GalleryError {
	fn from(value: JsValue) -> Self {
		match value.as_string() {
			Some(s) => GalleryError::Js(s),
			None => GalleryError::Js(format!("{value:?}")),
		}
	}
}

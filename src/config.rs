//! Runtime configuration: endpoint URLs, the storage key and DOM ids.
//!
//! Defaults match the stock `today` page. A host page can override any field
//! by embedding JSON in `<script id="gallery-config" type="application/json">`.

use log::{info, warn};
use serde::Deserialize;
use url::form_urlencoded::byte_serialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

/// Id of the script element holding the optional JSON override.
pub const CONFIG_ELEMENT_ID: &str = "gallery-config";

/// Endpoints and DOM identifiers used by the gallery.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GalleryConfig {
	/// GET endpoint returning today's images as a JSON array.
	pub today_endpoint: String,
	/// POST endpoint accepting a form-encoded vote.
	pub vote_endpoint: String,
	/// Local storage key the visitor id lives under.
	pub storage_key: String,
	/// Id of the element that holds the cards.
	pub container_id: String,
	/// Id of the placeholder card shown when there is nothing to vote on.
	pub placeholder_id: String,
}

impl Default for GalleryConfig {
	fn default() -> Self {
		Self {
			today_endpoint: "/img/today/raw".into(),
			vote_endpoint: "/img/vote".into(),
			storage_key: "uuid".into(),
			container_id: "today".into(),
			placeholder_id: "default".into(),
		}
	}
}

impl GalleryConfig {
	/// Parse an override document; absent fields keep their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Read the override from the host page, falling back to defaults.
	pub fn load() -> Self {
		let Some(text) = config_script_text() else {
			return Self::default();
		};
		match Self::from_json(&text) {
			Ok(config) => {
				info!("meme-gallery: loaded config from #{}", CONFIG_ELEMENT_ID);
				config
			}
			Err(e) => {
				warn!("meme-gallery: ignoring malformed config: {}", e);
				Self::default()
			}
		}
	}
}

fn config_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Append the `uuid` query parameter to an endpoint, form-escaping the id.
pub fn with_visitor(endpoint: &str, visitor_id: &str) -> String {
	let sep = if endpoint.contains('?') { '&' } else { '?' };
	let escaped: String = byte_serialize(visitor_id.as_bytes()).collect();
	format!("{endpoint}{sep}uuid={escaped}")
}

//! HTTP calls to the image and vote endpoints, via the browser `fetch` API.

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, UrlSearchParams};

use super::identity::{LocalStorage, VisitorId, VisitorStore, get_or_create_visitor_id};
use super::types::{ImageEntry, VoteRequest};
use crate::config::{GalleryConfig, with_visitor};
use crate::error::GalleryError;

/// Endpoint pair plus the storage the visitor id is read from.
///
/// The id is looked up again for every request, so a value written by
/// another tab is picked up by the next call.
#[derive(Clone, Debug)]
pub struct GalleryClient<S = LocalStorage> {
	today_endpoint: String,
	vote_endpoint: String,
	storage_key: String,
	store: S,
	random: fn() -> f64,
}

impl GalleryClient {
	/// Client backed by `window.localStorage` and `Math.random`.
	pub fn new(config: &GalleryConfig) -> Self {
		Self::with_store(config, LocalStorage, js_sys::Math::random)
	}
}

impl<S: VisitorStore> GalleryClient<S> {
	/// Client reading the visitor id from `store`.
	pub fn with_store(config: &GalleryConfig, store: S, random: fn() -> f64) -> Self {
		Self {
			today_endpoint: config.today_endpoint.clone(),
			vote_endpoint: config.vote_endpoint.clone(),
			storage_key: config.storage_key.clone(),
			store,
			random,
		}
	}

	/// Current visitor id, created on first use.
	pub fn visitor(&self) -> VisitorId {
		get_or_create_visitor_id(&self.store, &self.storage_key, self.random)
	}

	/// Image list URL for the current visitor.
	pub fn today_url(&self) -> String {
		with_visitor(&self.today_endpoint, self.visitor().as_str())
	}

	/// Vote URL for the current visitor.
	pub fn vote_url(&self) -> String {
		with_visitor(&self.vote_endpoint, self.visitor().as_str())
	}

	/// Today's images. Any failure yields an empty list.
	pub async fn fetch_today(&self) -> Vec<ImageEntry> {
		match self.try_fetch_today().await {
			Ok(entries) => {
				info!("meme-gallery: loaded {} images", entries.len());
				entries
			}
			Err(e) => {
				warn!("meme-gallery: image list unavailable: {}", e);
				Vec::new()
			}
		}
	}

	async fn try_fetch_today(&self) -> Result<Vec<ImageEntry>, GalleryError> {
		let init = RequestInit::new();
		init.set_method("GET");
		let request = Request::new_with_str_and_init(&self.today_url(), &init)?;
		let body = response_text(send(&request).await?).await?;
		Ok(serde_json::from_str(&body)?)
	}

	/// POST one vote as a form. Returns the response body on success.
	pub async fn submit_vote(&self, vote: &VoteRequest) -> Result<String, GalleryError> {
		let form = UrlSearchParams::new()?;
		for (key, value) in vote.form_fields() {
			form.append(key, &value);
		}

		let init = RequestInit::new();
		init.set_method("POST");
		init.set_body(&form);
		let request = Request::new_with_str_and_init(&self.vote_url(), &init)?;
		response_text(send(&request).await?).await
	}
}

async fn send(request: &Request) -> Result<Response, GalleryError> {
	let window = web_sys::window().ok_or(GalleryError::NoWindow)?;
	let value = JsFuture::from(window.fetch_with_request(request)).await?;
	let response: Response = value.dyn_into()?;
	if !response.ok() {
		return Err(GalleryError::Status(response.status()));
	}
	Ok(response)
}

async fn response_text(response: Response) -> Result<String, GalleryError> {
	let text = JsFuture::from(response.text()?).await?;
	Ok(text.as_string().unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;

	#[derive(Default)]
	struct SlotStore(RefCell<Option<String>>);

	impl VisitorStore for SlotStore {
		fn load(&self, _key: &str) -> Result<Option<String>, GalleryError> {
			Ok(self.0.borrow().clone())
		}

		fn save(&self, _key: &str, value: &str) -> Result<(), GalleryError> {
			*self.0.borrow_mut() = Some(value.to_string());
			Ok(())
		}
	}

	fn half() -> f64 {
		0.5
	}

	#[test]
	fn urls_carry_stored_visitor_id() {
		let store = SlotStore(RefCell::new(Some("k3j9".into())));
		let client = GalleryClient::with_store(&GalleryConfig::default(), store, half);
		assert_eq!(client.today_url(), "/img/today/raw?uuid=k3j9");
		assert_eq!(client.vote_url(), "/img/vote?uuid=k3j9");
	}

	#[test]
	fn first_request_creates_and_persists_id() {
		let client =
			GalleryClient::with_store(&GalleryConfig::default(), SlotStore::default(), half);
		assert_eq!(client.today_url(), "/img/today/raw?uuid=i000000000");
		assert_eq!(client.store.0.borrow().as_deref(), Some("i000000000"));
		assert_eq!(client.vote_url(), "/img/vote?uuid=i000000000");
	}

	#[test]
	fn id_is_reread_for_every_request() {
		let store = SlotStore(RefCell::new(Some("first".into())));
		let client = GalleryClient::with_store(&GalleryConfig::default(), store, half);
		assert_eq!(client.vote_url(), "/img/vote?uuid=first");

		// another tab wrote its id in between
		*client.store.0.borrow_mut() = Some("second".into());
		assert_eq!(client.vote_url(), "/img/vote?uuid=second");
		assert_eq!(client.visitor().as_str(), "second");
	}
}

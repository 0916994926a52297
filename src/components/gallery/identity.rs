//! Per-browser visitor id, persisted in local storage.

use std::fmt;

use log::{debug, warn};

use crate::error::GalleryError;

/// Base-36 digits in a generated token; an f64 sample carries about 10.3.
const TOKEN_DIGITS: usize = 10;

/// Opaque per-browser token. Not a credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitorId(String);

impl VisitorId {
	/// Accept any non-empty stored value verbatim.
	pub fn parse(raw: &str) -> Option<Self> {
		(!raw.is_empty()).then(|| VisitorId(raw.to_string()))
	}

	/// Expand a unit-interval sample into a base-36 token.
	pub fn from_unit(mut sample: f64) -> Self {
		let mut token = String::with_capacity(TOKEN_DIGITS);
		sample = sample.fract().abs();
		for _ in 0..TOKEN_DIGITS {
			sample *= 36.0;
			let digit = sample.floor();
			sample -= digit;
			// digit is in 0..36
			token.push(char::from_digit(digit as u32, 36).unwrap_or('0'));
		}
		VisitorId(token)
	}

	/// The raw token, unescaped.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for VisitorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Key-value persistence for the visitor id.
pub trait VisitorStore {
	/// Read `key`; `Ok(None)` when it was never set.
	fn load(&self, key: &str) -> Result<Option<String>, GalleryError>;
	/// Write `key`, replacing any previous value.
	fn save(&self, key: &str, value: &str) -> Result<(), GalleryError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
	fn storage() -> Result<web_sys::Storage, GalleryError> {
		let window = web_sys::window().ok_or(GalleryError::NoWindow)?;
		window
			.local_storage()?
			.ok_or(GalleryError::StorageUnavailable)
	}
}

impl VisitorStore for LocalStorage {
	fn load(&self, key: &str) -> Result<Option<String>, GalleryError> {
		Ok(Self::storage()?.get_item(key)?)
	}

	fn save(&self, key: &str, value: &str) -> Result<(), GalleryError> {
		Ok(Self::storage()?.set_item(key, value)?)
	}
}

/// Return the stored id, creating and persisting one on first use.
///
/// Storage failures never block the page: the visitor gets a fresh id for
/// this session only.
pub fn get_or_create_visitor_id(
	store: &impl VisitorStore,
	key: &str,
	random: impl FnOnce() -> f64,
) -> VisitorId {
	match store.load(key) {
		Ok(Some(raw)) => {
			if let Some(id) = VisitorId::parse(&raw) {
				return id;
			}
		}
		Ok(None) => {}
		Err(e) => warn!("meme-gallery: could not read visitor id: {}", e),
	}

	let id = VisitorId::from_unit(random());
	debug!("meme-gallery: new visitor id {}", id);
	if let Err(e) = store.save(key, id.as_str()) {
		warn!("meme-gallery: visitor id not persisted: {}", e);
	}
	id
}

#[cfg(test)]
mod tests {
	use std::cell::{Cell, RefCell};
	use std::collections::HashMap;

	use super::*;

	#[derive(Default)]
	struct MemoryStore {
		items: RefCell<HashMap<String, String>>,
		writes: Cell<usize>,
		broken: bool,
	}

	impl VisitorStore for MemoryStore {
		fn load(&self, key: &str) -> Result<Option<String>, GalleryError> {
			if self.broken {
				return Err(GalleryError::StorageUnavailable);
			}
			Ok(self.items.borrow().get(key).cloned())
		}

		fn save(&self, key: &str, value: &str) -> Result<(), GalleryError> {
			if self.broken {
				return Err(GalleryError::StorageUnavailable);
			}
			self.writes.set(self.writes.get() + 1);
			self.items.borrow_mut().insert(key.into(), value.into());
			Ok(())
		}
	}

	#[test]
	fn second_call_returns_same_id_without_writing() {
		let store = MemoryStore::default();
		let first = get_or_create_visitor_id(&store, "uuid", || 0.25);
		let second = get_or_create_visitor_id(&store, "uuid", || 0.75);
		assert_eq!(first, second);
		assert_eq!(store.writes.get(), 1);
		assert_eq!(store.items.borrow()["uuid"], first.as_str());
	}

	#[test]
	fn keeps_legacy_stored_value() {
		let store = MemoryStore::default();
		store.items.borrow_mut().insert("uuid".into(), "0.4fzyo82mvyr".into());
		let id = get_or_create_visitor_id(&store, "uuid", || 0.5);
		assert_eq!(id.as_str(), "0.4fzyo82mvyr");
		assert_eq!(store.writes.get(), 0);
	}

	#[test]
	fn keeps_foreign_stored_value() {
		let store = MemoryStore::default();
		let uuid = "550e8400-e29b-41d4-A716-446655440000";
		store.items.borrow_mut().insert("uuid".into(), uuid.into());
		let id = get_or_create_visitor_id(&store, "uuid", || 0.5);
		assert_eq!(id.as_str(), uuid);
		assert_eq!(store.writes.get(), 0);
	}

	#[test]
	fn empty_stored_value_is_regenerated() {
		let store = MemoryStore::default();
		store.items.borrow_mut().insert("uuid".into(), String::new());
		let id = get_or_create_visitor_id(&store, "uuid", || 0.5);
		assert_eq!(id.as_str(), "i000000000");
		assert_eq!(store.items.borrow()["uuid"], "i000000000");
	}

	#[test]
	fn broken_storage_still_yields_an_id() {
		let store = MemoryStore {
			broken: true,
			..Default::default()
		};
		let id = get_or_create_visitor_id(&store, "uuid", || 0.5);
		assert!(!id.as_str().is_empty());
	}

	#[test]
	fn token_is_base36() {
		let id = VisitorId::from_unit(0.123456789);
		assert_eq!(id.as_str().len(), TOKEN_DIGITS);
		assert!(VisitorId::parse(id.as_str()).is_some());
		assert!(
			id.as_str()
				.chars()
				.all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
		);
		assert_eq!(VisitorId::from_unit(0.5).as_str(), "i000000000");
		assert_eq!(VisitorId::from_unit(0.0).as_str(), "0000000000");
	}
}

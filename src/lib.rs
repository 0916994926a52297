//! meme-gallery: today's memes with anonymous reaction voting.
//!
//! This crate provides a WASM client that fetches the day's images for a
//! per-browser visitor id, renders them as cards, and posts the visitor's
//! reactions back to the server.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod error;

pub use components::gallery::{
	Gallery, GalleryClient, GalleryState, ImageEntry, Reaction, VisitorId, VoteRequest,
	VoteSink, downvote, horrible, upvote,
};
pub use config::GalleryConfig;
pub use error::GalleryError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("meme-gallery: logging initialized");
}

/// Main application component.
/// Wires the configured client into context and renders the gallery.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = GalleryConfig::load();
	provide_context(GalleryClient::new(&config));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text="Today's Memes" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="today-page">
			<h1>"Today's Memes"</h1>
			<Gallery container_id=config.container_id placeholder_id=config.placeholder_id />
		</main>
	}
}

//! Leptos components for the gallery page.
//!
//! The container starts with the placeholder card. A local task fetches
//! today's list and, if it is non-empty, swaps the placeholder for one card per
//! image. That swap happens at most once; votes never re-render anything.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::GalleryClient;
use super::card::{Card, ReactionControl, cards};
use super::types::GalleryState;

/// Today's gallery. Expects a [`GalleryClient`] in context.
#[component]
pub fn Gallery(
	#[prop(into)] container_id: String,
	#[prop(into)] placeholder_id: String,
) -> impl IntoView {
	let client = expect_context::<GalleryClient>();
	let (state, set_state) = signal(GalleryState::Placeholder);

	spawn_local(async move {
		let entries = client.fetch_today().await;
		let loaded = GalleryState::from_entries(entries);
		if loaded != GalleryState::Placeholder {
			set_state.set(loaded);
		}
	});

	view! {
		<div id=container_id class="today-gallery">
			{move || match state.get() {
				GalleryState::Placeholder => {
					view! { <PlaceholderCard id=placeholder_id.clone() /> }.into_any()
				}
				loaded => {
					cards(&loaded)
						.into_iter()
						.map(|card| view! { <ImageCard card=card /> })
						.collect_view()
						.into_any()
				}
			}}
		</div>
	}
}

#[component]
fn PlaceholderCard(id: String) -> impl IntoView {
	view! {
		<div id=id class="card w-fit bg-base-100 shadow-xl img-container">
			<div class="card-body">
				<p>"Nothing to vote on yet. Come back later."</p>
			</div>
		</div>
	}
}

/// One image with its three reaction controls.
#[component]
fn ImageCard(card: Card) -> impl IntoView {
	let Card {
		img_src,
		alt,
		controls,
	} = card;
	let controls = controls
		.into_iter()
		.map(|control| view! { <ReactionButton control=control /> })
		.collect_view();

	view! {
		<div class="card w-fit bg-base-100 shadow-xl img-container">
			<figure class="figure-padding">
				<img src=img_src class="rounded-xl" alt=alt />
			</figure>
			<div class="card-body-height">
				<div class="card-actions opt-btn-container">{controls}</div>
			</div>
		</div>
	}
}

#[component]
fn ReactionButton(control: ReactionControl) -> impl IntoView {
	let client = expect_context::<GalleryClient>();
	let (id, class, glyph) = (control.id.clone(), control.class.clone(), control.glyph);

	view! {
		<button id=id class=class on:click=move |_| control.click(&client)>
			{glyph}
		</button>
	}
}

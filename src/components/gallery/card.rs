//! What each card shows and what its controls send, independent of the DOM.

use super::actions::{VoteSink, react};
use super::types::{GalleryState, ImageEntry, Reaction};

/// One reaction button, bound to an owned copy of its image name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactionControl {
	/// `{name}-{reaction}`.
	pub id: String,
	/// CSS classes, including the reaction name.
	pub class: String,
	/// Button label.
	pub glyph: &'static str,
	name: String,
	reaction: Reaction,
}

impl ReactionControl {
	fn new(name: &str, reaction: Reaction) -> Self {
		Self {
			id: reaction.control_id(name),
			class: format!("btn {} btn-circle btn-ghost", reaction.as_str()),
			glyph: reaction.glyph(),
			name: name.to_string(),
			reaction,
		}
	}

	/// Handle a click: one vote for this control's image.
	pub fn click(&self, sink: &impl VoteSink) {
		react(sink, &self.name, self.reaction);
	}
}

/// One image card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
	/// `src` of the card's image.
	pub img_src: String,
	/// `alt` of the card's image.
	pub alt: String,
	/// Controls in display order.
	pub controls: Vec<ReactionControl>,
}

impl Card {
	/// Card for `entry`.
	pub fn new(entry: &ImageEntry) -> Self {
		Self {
			img_src: entry.url.clone(),
			alt: entry.name.clone(),
			controls: Reaction::ALL
				.into_iter()
				.map(|reaction| ReactionControl::new(&entry.name, reaction))
				.collect(),
		}
	}
}

/// Cards for `state`, in server order. None while the placeholder shows.
pub fn cards(state: &GalleryState) -> Vec<Card> {
	state.entries().iter().map(Card::new).collect()
}

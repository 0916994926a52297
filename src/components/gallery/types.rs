//! Gallery data: fetched images, reactions and the vote payload.

use serde::Deserialize;

/// One image from today's list.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ImageEntry {
	/// Stable identifier, used as the vote subject and control id prefix.
	pub name: String,
	/// Where the image is served from.
	pub url: String,
}

/// The three ways a visitor can react to an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reaction {
	/// Funny.
	Upvote,
	/// Not funny.
	Downvote,
	/// Strong negative. Distinct from `Downvote` in the UI.
	Horrible,
}

impl Reaction {
	/// Display order on a card, left to right.
	pub const ALL: [Reaction; 3] = [Reaction::Horrible, Reaction::Downvote, Reaction::Upvote];

	/// Suffix used in control ids and CSS classes.
	pub fn as_str(self) -> &'static str {
		match self {
			Reaction::Upvote => "upvote",
			Reaction::Downvote => "downvote",
			Reaction::Horrible => "horrible",
		}
	}

	/// Button label.
	pub fn glyph(self) -> &'static str {
		match self {
			Reaction::Upvote => "🤣",
			Reaction::Downvote => "😤",
			Reaction::Horrible => "🥵",
		}
	}

	/// Value of the `up` form field. `Downvote` and `Horrible` both send `false`.
	pub fn is_up(self) -> bool {
		matches!(self, Reaction::Upvote)
	}

	/// Id of this reaction's control on the card for `name`.
	pub fn control_id(self, name: &str) -> String {
		format!("{}-{}", name, self.as_str())
	}
}

/// A single vote, alive only while its POST is in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteRequest {
	/// Image being voted on.
	pub name: String,
	/// Which control sent it.
	pub reaction: Reaction,
}

impl VoteRequest {
	/// Vote for `reaction` on `name`.
	pub fn new(name: impl Into<String>, reaction: Reaction) -> Self {
		Self {
			name: name.into(),
			reaction,
		}
	}

	/// The `up` field sent to the server.
	pub fn up(&self) -> bool {
		self.reaction.is_up()
	}

	/// Form fields in submission order. `reaction` is additive; servers that
	/// only read `name` and `up` see the same payload as before.
	pub fn form_fields(&self) -> [(&'static str, String); 3] {
		[
			("name", self.name.clone()),
			("up", self.up().to_string()),
			("reaction", self.reaction.as_str().to_string()),
		]
	}
}

/// What the container shows. Decided once, when the fetch completes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GalleryState {
	/// Nothing to vote on (still loading, or an empty/failed fetch).
	#[default]
	Placeholder,
	/// One card per entry, in server order.
	Loaded(Vec<ImageEntry>),
}

impl GalleryState {
	/// Empty list keeps the placeholder.
	pub fn from_entries(entries: Vec<ImageEntry>) -> Self {
		if entries.is_empty() {
			GalleryState::Placeholder
		} else {
			GalleryState::Loaded(entries)
		}
	}

	/// Entries to render, empty for the placeholder.
	pub fn entries(&self) -> &[ImageEntry] {
		match self {
			GalleryState::Placeholder => &[],
			GalleryState::Loaded(entries) => entries,
		}
	}
}

//! Fire-and-forget vote actions.

use leptos::task::spawn_local;

use super::api::GalleryClient;
use super::notify::{AlertNotifier, report_vote};
use super::types::{Reaction, VoteRequest};

/// Where reaction controls send their votes.
pub trait VoteSink {
	/// Dispatch `vote` without waiting for the outcome.
	fn cast(&self, vote: VoteRequest);
}

/// Submits in the background. Completion order across votes is unspecified;
/// the gallery is never touched.
impl VoteSink for GalleryClient {
	fn cast(&self, vote: VoteRequest) {
		let client = self.clone();
		spawn_local(async move {
			let result = client.submit_vote(&vote).await;
			report_vote(&vote.name, result, &AlertNotifier);
		});
	}
}

/// Route `reaction` on `name` to its action.
pub fn react(sink: &impl VoteSink, name: &str, reaction: Reaction) {
	match reaction {
		Reaction::Upvote => upvote(sink, name),
		Reaction::Downvote => downvote(sink, name),
		Reaction::Horrible => horrible(sink, name),
	}
}

/// Vote `up=true`.
pub fn upvote(sink: &impl VoteSink, name: &str) {
	sink.cast(VoteRequest::new(name, Reaction::Upvote));
}

/// Vote `up=false`.
pub fn downvote(sink: &impl VoteSink, name: &str) {
	sink.cast(VoteRequest::new(name, Reaction::Downvote));
}

/// Vote `up=false`, tagged as the strong negative.
pub fn horrible(sink: &impl VoteSink, name: &str) {
	sink.cast(VoteRequest::new(name, Reaction::Horrible));
}

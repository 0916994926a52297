//! User-visible error surface for failed votes.

use log::{error, info};

use crate::error::GalleryError;

/// Something that can put an error in front of the visitor.
pub trait Notifier {
	/// Show `message` as an error.
	fn notify_error(&self, message: &str);
}

/// Blocking `window.alert`.
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
	fn notify_error(&self, message: &str) {
		if let Some(window) = web_sys::window() {
			let _ = window.alert_with_message(message);
		}
	}
}

/// Log a vote outcome; failures raise exactly one notification.
pub fn report_vote(name: &str, result: Result<String, GalleryError>, notifier: &impl Notifier) {
	match result {
		Ok(body) => info!("meme-gallery: vote on {} accepted: {}", name, body),
		Err(e) => {
			error!("meme-gallery: vote on {} failed: {}", name, e);
			notifier.notify_error("Your vote could not be submitted.");
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;

	#[derive(Default)]
	struct Recorder(RefCell<Vec<String>>);

	impl Notifier for Recorder {
		fn notify_error(&self, message: &str) {
			self.0.borrow_mut().push(message.to_string());
		}
	}

	#[test]
	fn failure_notifies_once() {
		let recorder = Recorder::default();
		report_vote("cat", Err(GalleryError::Status(500)), &recorder);
		assert_eq!(recorder.0.borrow().len(), 1);
	}

	#[test]
	fn success_is_silent() {
		let recorder = Recorder::default();
		report_vote("cat", Ok("ok".into()), &recorder);
		assert!(recorder.0.borrow().is_empty());
	}
}

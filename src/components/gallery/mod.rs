//! Daily image gallery with per-image reaction voting.
//!
//! - [`identity`]: the anonymous visitor id kept in local storage
//! - [`api`]: the image list GET and the vote POST
//! - [`card`]: card and control layout, click dispatch
//! - [`component`]: placeholder-then-gallery rendering
//!
//! # Example
//!
//! ```ignore
//! let config = GalleryConfig::default();
//! provide_context(GalleryClient::new(&config));
//!
//! view! { <Gallery container_id="today" placeholder_id="default" /> }
//! ```

mod actions;
mod api;
pub mod card;
mod component;
pub mod identity;
mod notify;
mod types;

pub use actions::{VoteSink, downvote, horrible, react, upvote};
pub use api::GalleryClient;
pub use component::Gallery;
pub use identity::{LocalStorage, VisitorId, VisitorStore, get_or_create_visitor_id};
pub use notify::{AlertNotifier, Notifier, report_vote};
pub use types::{GalleryState, ImageEntry, Reaction, VoteRequest};

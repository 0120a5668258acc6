//! Typed, read-only views over notification and live-broadcast payloads
//! returned by the Weverse API.

pub mod error;
pub mod object;

pub use error::ObjectError;
pub use object::{Language, LiveBroadcast, Media, Medialike, Notification, PostType};

pub mod live;
pub mod media;
pub mod notification;
pub mod post_type;

use serde_json::Value;

use crate::error::ObjectError;

pub use self::{
    live::LiveBroadcast,
    media::{Media, Medialike},
    notification::{Language, Notification},
    post_type::PostType,
};

/// Required-key access over a decoded payload.
///
/// Every failure carries the dotted path that was being walked, so a
/// caller can tell which part of the document the API left out.
pub trait PayloadExt {
    fn at(&self, path: &[&str]) -> Result<&Value, ObjectError>;

    fn u64_at(&self, path: &[&str]) -> Result<u64, ObjectError> {
        self.at(path)?
            .as_u64()
            .ok_or_else(|| ObjectError::malformed(path.join("."), "expected an unsigned integer"))
    }

    fn str_at(&self, path: &[&str]) -> Result<&str, ObjectError> {
        self.at(path)?
            .as_str()
            .ok_or_else(|| ObjectError::malformed(path.join("."), "expected a string"))
    }

    /// Optional lookup: absent keys and `null` both map to `None`.
    fn opt_str_at(&self, path: &[&str]) -> Option<&str> {
        self.at(path).ok().and_then(Value::as_str)
    }
}

impl PayloadExt for Value {
    fn at(&self, path: &[&str]) -> Result<&Value, ObjectError> {
        let mut current = self;
        for (depth, key) in path.iter().enumerate() {
            if !current.is_object() {
                return Err(ObjectError::malformed(path[..depth].join("."), "expected an object"));
            }
            current = current
                .get(key)
                .ok_or_else(|| ObjectError::malformed(path[..=depth].join("."), "missing key"))?;
        }
        Ok(current)
    }
}

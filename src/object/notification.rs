use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ObjectError;

use super::{PayloadExt, PostType};

static POST_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d-\d+)").unwrap());
// Notice notifications carry a bare number with no community prefix
static BARE_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNotification {
    activity_id: u64,
    read: bool,
    title: String,
    message: LocalizedMessage,
    logo_image_url: String,
    image_url: Option<String>,
    web_url: String,
    time: i64,
    count: u64,
    community: CommunityRef,
}

#[derive(Debug, Deserialize)]
struct LocalizedMessage {
    values: MessageValues,
}

#[derive(Debug, Deserialize)]
struct MessageValues {
    ko: String,
    ja: String,
    en: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommunityRef {
    community_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Korean,
    Japanese,
    English,
}

/// A single entry of the notification feed.
///
/// Two notifications are equal when they share an `id`, whatever the rest
/// of the payload says. The message id is kept in the raw payload and only
/// parsed when `post_id` or `post_type` is asked for.
#[derive(Debug, Clone)]
pub struct Notification {
    data: Value,
    pub id: u64,
    pub is_read: bool,
    /// Group name, or a proper title for admin notifications.
    pub title: String,
    pub message_ko: String,
    pub message_ja: String,
    pub message_en: String,
    pub logo_image_url: String,
    pub image_url: Option<String>,
    pub web_url: String,
    /// Epoch milliseconds.
    pub time_created: i64,
    /// Artist comments on the linked post.
    pub count: u64,
    pub community_id: u64,
}

impl TryFrom<Value> for Notification {
    type Error = ObjectError;

    fn try_from(data: Value) -> Result<Self, Self::Error> {
        let raw = RawNotification::deserialize(&data)?;
        let MessageValues { ko, ja, en } = raw.message.values;
        let notification = Notification {
            id: raw.activity_id,
            is_read: raw.read,
            title: raw.title,
            message_ko: ko,
            message_ja: ja,
            message_en: en,
            logo_image_url: raw.logo_image_url,
            image_url: raw.image_url,
            web_url: raw.web_url,
            time_created: raw.time,
            count: raw.count,
            community_id: raw.community.community_id,
            data,
        };
        log::trace!(target: "object", "Notification decoded: {:?}", notification.id);
        Ok(notification)
    }
}

impl Notification {
    /// Decodes one page of the notification feed, either `{"data": [...]}`
    /// or a bare array. Stops at the first malformed entry.
    pub fn from_page(page: Value) -> Result<Vec<Notification>, ObjectError> {
        let entries = match page {
            Value::Array(entries) => entries,
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(entries)) => entries,
                Some(_) => return Err(ObjectError::malformed("data", "expected an array")),
                None => return Err(ObjectError::malformed("data", "missing key")),
            },
            _ => return Err(ObjectError::malformed("$", "expected an array or an object")),
        };
        let notifications = entries
            .into_iter()
            .map(Notification::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(target: "object", "Decoded {} notifications", notifications.len());
        Ok(notifications)
    }

    /// Raw payload as received from the API.
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn message(&self, language: Language) -> &str {
        match language {
            Language::Korean => &self.message_ko,
            Language::Japanese => &self.message_ja,
            Language::English => &self.message_en,
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.time_created)
    }

    /// ID of the post the notification leads to.
    pub fn post_id(&self) -> Result<String, ObjectError> {
        let message_id = self.data.str_at(&["messageId"])?;
        POST_ID
            .captures(message_id)
            .and_then(|captures| captures.get(1))
            .or_else(|| BARE_ID.find(message_id))
            .map(|found| found.as_str().to_string())
            .ok_or_else(|| ObjectError::malformed("messageId", "no post id in message id"))
    }

    pub fn post_type(&self) -> Result<PostType, ObjectError> {
        Ok(PostType::classify(self.data.str_at(&["messageId"])?))
    }

    /// Member ID of the first author. Only comment notifications list
    /// authors, so everything else yields `None`.
    pub fn author_id(&self) -> Option<&str> {
        self.data
            .get("authors")?
            .as_array()?
            .first()?
            .get("memberId")?
            .as_str()
    }

    /// Equality against a value whose type is only known at runtime.
    /// Anything that is not a `Notification` is rejected instead of
    /// comparing unequal.
    pub fn compare(&self, other: &dyn Any) -> Result<bool, ObjectError> {
        other
            .downcast_ref::<Notification>()
            .map(|other| self == other)
            .ok_or(ObjectError::InvalidComparison)
    }
}

impl PartialEq for Notification {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Notification {}

impl Hash for Notification {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message_en)
    }
}

use std::fmt;

use serde_json::Value;

use crate::error::ObjectError;

use super::{Media, Medialike, PayloadExt};

/// A live broadcast. Carries every media field plus the chat size.
#[derive(Debug, Clone)]
pub struct LiveBroadcast {
    media: Media,
    pub message_count: u64,
}

impl TryFrom<Value> for LiveBroadcast {
    type Error = ObjectError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let message_count = value.u64_at(&["extension", "mediaInfo", "chat", "messageCount"])?;
        let media = Media::try_from(value)?;
        let live = LiveBroadcast { media, message_count };
        log::debug!(target: "object", "Live broadcast decoded: {}", live);
        Ok(live)
    }
}

impl Medialike for LiveBroadcast {
    fn media(&self) -> &Media {
        &self.media
    }
}

impl fmt::Display for LiveBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Live live_id={}, title={}", self.id(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::object::media::tests::media_payload;

    fn live_payload() -> Value {
        let mut payload = media_payload();
        payload["extension"]["mediaInfo"]["chat"] = json!({ "messageCount": 52311 });
        payload
    }

    #[test]
    fn reads_message_count() {
        let live = LiveBroadcast::try_from(live_payload()).unwrap();
        assert_eq!(live.message_count, 52311);
        assert_eq!(live.id(), "4-130498213");
        assert_eq!(live.community_id(), 14);
        assert_eq!(live.to_string(), "Live live_id=4-130498213, title=Behind the stage");
    }

    #[test]
    fn missing_chat_is_malformed() {
        let err = LiveBroadcast::try_from(media_payload()).unwrap_err();
        assert_eq!(
            err,
            ObjectError::malformed("extension.mediaInfo.chat", "missing key")
        );
    }

    #[test]
    fn missing_extension_is_malformed() {
        let mut payload = live_payload();
        payload.as_object_mut().unwrap().remove("extension");
        assert!(matches!(
            LiveBroadcast::try_from(payload),
            Err(ObjectError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn non_numeric_count_is_malformed() {
        let mut payload = live_payload();
        payload["extension"]["mediaInfo"]["chat"]["messageCount"] = json!("many");
        let err = LiveBroadcast::try_from(payload).unwrap_err();
        assert_eq!(
            err,
            ObjectError::malformed(
                "extension.mediaInfo.chat.messageCount",
                "expected an unsigned integer"
            )
        );
    }
}

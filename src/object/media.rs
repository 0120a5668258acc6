use serde_json::Value;

use crate::error::ObjectError;

use super::PayloadExt;

/// A media post (video, image set or past broadcast) in a community.
#[derive(Debug, Clone)]
pub struct Media {
    data: Value,
    pub id: String,
    pub title: String,
    pub body: Option<String>,
    pub time_created: i64,
    pub community_id: u64,
    pub thumbnail_url: Option<String>,
}

impl TryFrom<Value> for Media {
    type Error = ObjectError;

    fn try_from(data: Value) -> Result<Self, Self::Error> {
        let id = data.str_at(&["postId"])?.to_string();
        let title = data.str_at(&["title"])?.to_string();
        let body = data.opt_str_at(&["body"]).map(str::to_string);
        let time_created = data
            .at(&["publishedAt"])?
            .as_i64()
            .ok_or_else(|| ObjectError::malformed("publishedAt", "expected an integer"))?;
        let community_id = data.u64_at(&["community", "communityId"])?;
        let thumbnail_url = data
            .opt_str_at(&["extension", "mediaInfo", "thumbnail", "url"])
            .map(str::to_string);
        Ok(
            Media {
                data,
                id,
                title,
                body,
                time_created,
                community_id,
                thumbnail_url,
            }
        )
    }
}

/// Accessors shared by every record built on top of a media post.
pub trait Medialike {
    fn media(&self) -> &Media;

    fn id(&self) -> &str {
        &self.media().id
    }

    fn title(&self) -> &str {
        &self.media().title
    }

    fn body(&self) -> Option<&str> {
        self.media().body.as_deref()
    }

    fn time_created(&self) -> i64 {
        self.media().time_created
    }

    fn community_id(&self) -> u64 {
        self.media().community_id
    }

    fn thumbnail_url(&self) -> Option<&str> {
        self.media().thumbnail_url.as_deref()
    }

    /// Raw payload as received from the API.
    fn data(&self) -> &Value {
        &self.media().data
    }
}

impl Medialike for Media {
    fn media(&self) -> &Media {
        self
    }
}

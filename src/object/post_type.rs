use derive_more::Display;

/// Kind of post a notification leads to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostType {
    #[display(fmt = "USER_POST_COMMENT")]
    UserPostComment,
    #[display(fmt = "MEDIA_COMMENT")]
    MediaComment,
    #[display(fmt = "MOMENT_COMMENT")]
    MomentComment,
    #[display(fmt = "ARTIST_POST_COMMENT")]
    ArtistPostComment,
    #[display(fmt = "POST")]
    Post,
    #[display(fmt = "MOMENT")]
    Moment,
    #[display(fmt = "LIVE")]
    Live,
    #[display(fmt = "MEDIA")]
    Media,
    #[display(fmt = "NOTICE")]
    Notice,
    #[display(fmt = "BIRTHDAY")]
    Birthday,
    /// No marker matched the message id.
    #[display(fmt = "NOT_IMPLEMENTED")]
    Unclassified,
}

// Checked top to bottom, first substring hit wins. `_MEDIA_COMMENT` must
// stay ahead of every `ARTIST_*` marker.
const MARKERS: [(&str, PostType); 12] = [
    ("T_FEED_COMMENT", PostType::UserPostComment),
    ("ST_FEED_COMMENT", PostType::UserPostComment),
    ("_MEDIA_COMMENT", PostType::MediaComment),
    ("_MOMENT_COMMENT", PostType::MomentComment),
    ("MOMENT_COMMENT", PostType::MomentComment),
    ("ARTIST_COMMENT", PostType::ArtistPostComment),
    ("ARTIST_POST", PostType::Post),
    ("ARTIST_MOMENT", PostType::Moment),
    ("ARTIST_LIVE_ON_AIR", PostType::Live),
    ("COMMUNITY_MEDIA", PostType::Media),
    ("NOTICE", PostType::Notice),
    ("COMMUNITY_ANNIVERSARY", PostType::Birthday),
];

impl PostType {
    pub fn classify(message_id: &str) -> PostType {
        MARKERS
            .iter()
            .find(|(marker, _)| message_id.contains(marker))
            .map(|(_, post_type)| *post_type)
            .unwrap_or(PostType::Unclassified)
    }

    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            PostType::UserPostComment
                | PostType::MediaComment
                | PostType::MomentComment
                | PostType::ArtistPostComment
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_comment_wins_over_artist_markers() {
        assert_eq!(PostType::classify("0-12_MEDIA_COMMENT"), PostType::MediaComment);
        assert_eq!(
            PostType::classify("ARTIST_LIVE_ON_AIR_MEDIA_COMMENT"),
            PostType::MediaComment
        );
    }

    #[test]
    fn classifies_each_marker() {
        let cases = [
            ("ARTIST_POST_COMMENT_FEED_COMMENT", PostType::UserPostComment),
            ("MOMENT_COMMENT-1", PostType::MomentComment),
            ("ARTIST_COMMENT-2", PostType::ArtistPostComment),
            ("ARTIST_POST-3", PostType::Post),
            ("ARTIST_MOMENT-4", PostType::Moment),
            ("ARTIST_LIVE_ON_AIR-5", PostType::Live),
            ("COMMUNITY_MEDIA-6", PostType::Media),
            ("NOTICE123", PostType::Notice),
            ("COMMUNITY_ANNIVERSARY-7", PostType::Birthday),
        ];
        for (message_id, expected) in cases {
            assert_eq!(PostType::classify(message_id), expected, "{message_id}");
        }
    }

    #[test]
    fn unknown_marker_is_unclassified() {
        let post_type = PostType::classify("SOMETHING_NEW-1");
        assert_eq!(post_type, PostType::Unclassified);
        assert_eq!(post_type.to_string(), "NOT_IMPLEMENTED");
    }

    #[test]
    fn comment_kinds() {
        assert!(PostType::ArtistPostComment.is_comment());
        assert!(!PostType::Live.is_comment());
    }
}

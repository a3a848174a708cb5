/// Rendering-ready form of one feed record.
///
/// Owns all of its data; the hand-off contract to the rendering
/// collaborator carries no references into wire or storage objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRecord {
    pub feed_id: i64,
    /// Author of the effective content (the inner record for a retweet).
    pub user_name: String,
    pub feed_at: i64,
    pub twitter_url: String,
    pub contents: String,
    pub is_retweet: bool,
    /// Present on retweet wrappers: who reshared, and when.
    pub retweeted_by: Option<RetweetInfo>,
    /// Presentation hint only; derived from a leading `@` in the contents.
    pub is_reply: bool,
    pub has_media: bool,
    pub media: Vec<MediaView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetweetInfo {
    pub user_name: String,
    pub retweet_at: i64,
}

/// One media attachment, resolved to its display variant and sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaView {
    pub feed_id: i64,
    pub media_id: i64,
    pub variant: MediaVariant,
    /// Link to the original media file on the serving collaborator.
    pub file_url: String,
    pub preview: PreviewSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaVariant {
    ImageThumb,
    VideoThumb,
    /// Soft-deleted media; thumbnail and file links are dead.
    DeletedPlaceholder,
}

/// Where the renderer should take the preview image from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSource {
    /// Base64 payload already present on the record; preferred over a
    /// second network round trip.
    Inline(String),
    /// Preview endpoint on the media-serving collaborator.
    Url(String),
}

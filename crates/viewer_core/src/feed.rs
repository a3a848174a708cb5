use serde::{Deserialize, Serialize};

/// One captured post as returned by the archive backend.
///
/// When `retweet` is present the outer record is a retweet wrapper: it
/// carries the retweeting user and the retweet timestamp, while the
/// inner record carries the original author, contents, and media.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedRecord {
    #[serde(with = "string_id")]
    pub feed_id: i64,
    pub user_name: String,
    /// Unix timestamp of the post (or of the retweet, for a wrapper).
    pub feed_at: i64,
    pub twitter_url: String,
    pub contents: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_feed_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retweet: Option<Box<FeedRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<MediaRef>>,
}

/// One media attachment, addressed by `(feed_id, media_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MediaRef {
    #[serde(with = "string_id")]
    pub feed_id: i64,
    #[serde(with = "string_id")]
    pub media_id: i64,
    pub media_type: MediaType,
    /// Base64 thumbnail payload cached by the backend, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Soft-delete marker; set means the media file is gone and must
    /// not be rendered as live content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<i64>,
}

/// Media kind as stored by the archive scanner. Values outside the
/// known set must still deserialize; they degrade to the video-style
/// presentation at classification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    Image,
    Video,
    Unknown,
}

impl From<String> for MediaType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Image" => MediaType::Image,
            "Video" => MediaType::Video,
            _ => MediaType::Unknown,
        }
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        match media_type {
            MediaType::Image => "Image".to_string(),
            MediaType::Video => "Video".to_string(),
            MediaType::Unknown => "Unknown".to_string(),
        }
    }
}

/// The backend serializes 64-bit ids as JSON strings so that scripting
/// clients do not lose precision. Accept both forms on input.
mod string_id {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match StringOrInt::deserialize(deserializer)? {
            StringOrInt::String(raw) => raw.parse::<i64>().map_err(D::Error::custom),
            StringOrInt::Int(value) => Ok(value),
        }
    }
}

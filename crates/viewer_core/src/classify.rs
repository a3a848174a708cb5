use crate::{
    FeedRecord, MediaRef, MediaType, MediaVariant, MediaView, PreviewSource, RetweetInfo,
    ViewRecord,
};

/// Builds the path to the original media file.
pub fn media_file_url(feed_id: i64, media_id: i64) -> String {
    format!("/a/media/file/{feed_id}/{media_id}")
}

/// Builds the path to the server-side media preview.
pub fn media_preview_url(feed_id: i64, media_id: i64) -> String {
    format!("/a/media/preview/{feed_id}/{media_id}")
}

/// Normalizes one fetched record into its rendering-ready form.
///
/// For a retweet wrapper the inner record supplies author, contents,
/// and media; the outer record only contributes the retweet metadata.
pub fn classify(record: &FeedRecord) -> ViewRecord {
    let (effective, retweeted_by) = match &record.retweet {
        Some(inner) => (
            inner.as_ref(),
            Some(RetweetInfo {
                user_name: record.user_name.clone(),
                retweet_at: record.feed_at,
            }),
        ),
        None => (record, None),
    };

    let is_reply = effective.contents.starts_with('@');
    let media = effective
        .media
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(classify_media)
        .collect::<Vec<_>>();

    ViewRecord {
        feed_id: effective.feed_id,
        user_name: effective.user_name.clone(),
        feed_at: effective.feed_at,
        twitter_url: effective.twitter_url.clone(),
        contents: effective.contents.clone(),
        is_retweet: retweeted_by.is_some(),
        retweeted_by,
        is_reply,
        has_media: !media.is_empty(),
        media,
    }
}

fn classify_media(media: &MediaRef) -> MediaView {
    // Fixed precedence: deleted images get the placeholder, live images
    // the thumbnail, and everything else (video included) falls back to
    // the video-style variant so unknown types degrade instead of failing.
    let variant = match media.media_type {
        MediaType::Image if media.deleted_at.is_some() => MediaVariant::DeletedPlaceholder,
        MediaType::Image => MediaVariant::ImageThumb,
        MediaType::Video | MediaType::Unknown => MediaVariant::VideoThumb,
    };

    let preview = match &media.thumbnail {
        Some(payload) => PreviewSource::Inline(payload.clone()),
        None => PreviewSource::Url(media_preview_url(media.feed_id, media.media_id)),
    };

    MediaView {
        feed_id: media.feed_id,
        media_id: media.media_id,
        variant,
        file_url: media_file_url(media.feed_id, media.media_id),
        preview,
    }
}

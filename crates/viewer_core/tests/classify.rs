use std::sync::Once;

use viewer_core::{
    classify, FeedRecord, MediaRef, MediaType, MediaVariant, PreviewSource, ViewRecord,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(viewer_logging::initialize_for_tests);
}

fn record(feed_id: i64, user_name: &str, contents: &str) -> FeedRecord {
    FeedRecord {
        feed_id,
        user_name: user_name.to_string(),
        feed_at: 1_600_000_000,
        twitter_url: format!("https://twitter.com/{user_name}/status/{feed_id}"),
        contents: contents.to_string(),
        reply_to_feed_id: None,
        reply_to_user_name: None,
        retweet: None,
        media: None,
    }
}

fn media(feed_id: i64, media_id: i64, media_type: MediaType) -> MediaRef {
    MediaRef {
        feed_id,
        media_id,
        media_type,
        thumbnail: None,
        deleted_at: None,
    }
}

fn classify_single_media(item: MediaRef) -> ViewRecord {
    let mut plain = record(1, "alice", "post with media");
    plain.media = Some(vec![item]);
    classify(&plain)
}

#[test]
fn plain_post_classifies_as_itself() {
    init_logging();
    let view = classify(&record(42, "alice", "hello world"));

    assert_eq!(view.feed_id, 42);
    assert_eq!(view.user_name, "alice");
    assert!(!view.is_retweet);
    assert!(view.retweeted_by.is_none());
    assert!(!view.is_reply);
    assert!(!view.has_media);
    assert!(view.media.is_empty());
}

#[test]
fn retweet_uses_inner_author_content_and_media() {
    init_logging();
    let mut inner = record(7, "original_author", "the original words");
    inner.media = Some(vec![media(7, 1, MediaType::Image)]);
    let mut outer = record(9, "resharer", "");
    outer.feed_at = 1_700_000_000;
    outer.retweet = Some(Box::new(inner));

    let view = classify(&outer);

    assert!(view.is_retweet);
    assert_eq!(view.feed_id, 7);
    assert_eq!(view.user_name, "original_author");
    assert_eq!(view.contents, "the original words");
    assert!(view.has_media);
    assert_eq!(view.media[0].feed_id, 7);

    let retweeted_by = view.retweeted_by.expect("retweet metadata");
    assert_eq!(retweeted_by.user_name, "resharer");
    assert_eq!(retweeted_by.retweet_at, 1_700_000_000);
}

#[test]
fn reply_flag_follows_leading_at_sign() {
    init_logging();
    assert!(classify(&record(1, "alice", "@bob hi")).is_reply);
    assert!(!classify(&record(2, "alice", "plain text")).is_reply);
    assert!(!classify(&record(3, "alice", "")).is_reply);

    // The reply heuristic reads the effective contents, not the wrapper's.
    let mut outer = record(4, "resharer", "");
    outer.retweet = Some(Box::new(record(5, "author", "@carol agreed")));
    assert!(classify(&outer).is_reply);
}

#[test]
fn live_image_gets_the_image_thumb() {
    init_logging();
    let view = classify_single_media(media(1, 2, MediaType::Image));
    assert_eq!(view.media[0].variant, MediaVariant::ImageThumb);
}

#[test]
fn deleted_image_gets_the_placeholder() {
    init_logging();
    let mut item = media(1, 2, MediaType::Image);
    item.deleted_at = Some(1_650_000_000);
    let view = classify_single_media(item);
    assert_eq!(view.media[0].variant, MediaVariant::DeletedPlaceholder);
}

#[test]
fn video_and_unknown_types_fall_back_to_video_thumb() {
    init_logging();
    let view = classify_single_media(media(1, 2, MediaType::Video));
    assert_eq!(view.media[0].variant, MediaVariant::VideoThumb);

    let view = classify_single_media(media(1, 3, MediaType::Unknown));
    assert_eq!(view.media[0].variant, MediaVariant::VideoThumb);
}

#[test]
fn media_urls_derive_from_feed_and_media_ids() {
    init_logging();
    let view = classify_single_media(media(123, 456, MediaType::Image));

    assert_eq!(view.media[0].file_url, "/a/media/file/123/456");
    assert_eq!(
        view.media[0].preview,
        PreviewSource::Url("/a/media/preview/123/456".to_string())
    );
}

#[test]
fn inline_thumbnail_takes_precedence_over_preview_url() {
    init_logging();
    let mut item = media(1, 2, MediaType::Image);
    item.thumbnail = Some("aGVsbG8".to_string());
    let view = classify_single_media(item);

    assert_eq!(
        view.media[0].preview,
        PreviewSource::Inline("aGVsbG8".to_string())
    );
}

#[test]
fn empty_media_list_means_no_media() {
    init_logging();
    let mut plain = record(1, "alice", "no attachments");
    plain.media = Some(Vec::new());
    let view = classify(&plain);

    assert!(!view.has_media);
}

#[test]
fn wire_records_deserialize_with_string_ids_and_odd_media_types() {
    init_logging();
    let body = r#"{
        "feed_id": "1234567890123456789",
        "user_name": "alice",
        "feed_at": 1600000000,
        "twitter_url": "https://twitter.com/alice/status/1234567890123456789",
        "contents": "with a gif",
        "media": [
            {
                "feed_id": "1234567890123456789",
                "media_id": "2",
                "media_type": "AnimatedGif",
                "deleted_at": null
            }
        ]
    }"#;

    let record: FeedRecord = serde_json::from_str(body).expect("record decodes");
    assert_eq!(record.feed_id, 1_234_567_890_123_456_789);

    let view = classify(&record);
    assert_eq!(view.media[0].variant, MediaVariant::VideoThumb);
}

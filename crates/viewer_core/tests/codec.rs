use std::sync::Once;

use viewer_core::{decode_fragment, encode_fragment, FeedQuery, Route};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(viewer_logging::initialize_for_tests);
}

fn decode_feeds(fragment: &str) -> FeedQuery {
    match decode_fragment(fragment) {
        Route::Feeds(query) => query,
        other => panic!("expected feeds route, got {other:?}"),
    }
}

#[test]
fn round_trip_preserves_every_field() {
    init_logging();
    let query = FeedQuery {
        user_name: Some("alice".to_string()),
        keyword: Some("rust & wasm".to_string()),
        has_media_only: true,
        since: Some("2020/01/01 00:00:00".to_string()),
        until: Some("2021/12/31 23:59:59".to_string()),
        page: 4,
        count: Some(50),
    };

    let fragment = encode_fragment(&query);
    assert_eq!(decode_feeds(&fragment), query);
}

#[test]
fn round_trip_of_default_query() {
    init_logging();
    let query = FeedQuery::new();
    let fragment = encode_fragment(&query);

    assert_eq!(fragment, "feeds?page=1");
    assert_eq!(decode_feeds(&fragment), query);
}

#[test]
fn encode_emits_defined_fields_in_schema_order() {
    init_logging();
    let query = FeedQuery {
        user_name: Some("bob".to_string()),
        keyword: None,
        has_media_only: true,
        since: None,
        until: None,
        page: 2,
        count: Some(25),
    };

    // Page is stored 1-based on the wire; only the codec owns the offset.
    assert_eq!(
        encode_fragment(&query),
        "feeds?user_name=bob&has_media_only=true&page=3&count=25"
    );
}

#[test]
fn page_defaults_to_first_for_bad_input() {
    init_logging();
    for fragment in [
        "feeds?page=0",
        "feeds?page=-3",
        "feeds?page=abc",
        "feeds?page=",
        "feeds",
    ] {
        assert_eq!(decode_feeds(fragment).page, 0, "fragment {fragment:?}");
    }
}

#[test]
fn page_converts_one_based_to_zero_based() {
    init_logging();
    assert_eq!(decode_feeds("feeds?page=1").page, 0);
    assert_eq!(decode_feeds("feeds?page=7").page, 6);
}

#[test]
fn count_accepts_only_strictly_positive_integers() {
    init_logging();
    assert_eq!(decode_feeds("feeds?count=50").count, Some(50));
    assert_eq!(decode_feeds("feeds?count=0").count, None);
    assert_eq!(decode_feeds("feeds?count=-1").count, None);
    assert_eq!(decode_feeds("feeds?count=ten").count, None);
}

#[test]
fn has_media_only_requires_the_literal_true() {
    init_logging();
    assert!(decode_feeds("feeds?has_media_only=true").has_media_only);
    for value in ["1", "yes", "TRUE", ""] {
        let fragment = format!("feeds?has_media_only={value}");
        assert!(
            !decode_feeds(&fragment).has_media_only,
            "value {value:?} must not enable the filter"
        );
    }
}

#[test]
fn empty_filter_values_decode_to_absent() {
    init_logging();
    let query = decode_feeds("feeds?user_name=&keyword=");
    assert_eq!(query.user_name, None);
    assert_eq!(query.keyword, None);
}

#[test]
fn leading_hash_is_tolerated() {
    init_logging();
    let query = decode_feeds("#feeds?user_name=carol");
    assert_eq!(query.user_name, Some("carol".to_string()));
}

#[test]
fn settings_prefix_routes_to_settings() {
    init_logging();
    assert_eq!(decode_fragment("settings"), Route::Settings);
    assert_eq!(decode_fragment("#settings"), Route::Settings);
}

#[test]
fn unrecognized_fragments_are_unknown() {
    init_logging();
    assert_eq!(decode_fragment("bogus"), Route::Unknown);
    assert_eq!(decode_fragment("feedsgarbage"), Route::Unknown);
    assert_eq!(decode_fragment(""), Route::Unknown);
}

#[test]
fn keyword_with_reserved_characters_round_trips() {
    init_logging();
    let query = FeedQuery {
        keyword: Some("a=b&c #100%".to_string()),
        ..FeedQuery::new()
    };
    assert_eq!(decode_feeds(&encode_fragment(&query)), query);
}

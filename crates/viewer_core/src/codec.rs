use url::form_urlencoded;

use crate::FeedQuery;

/// Client-side route parsed from the location hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Feed browsing view with its decoded query.
    Feeds(FeedQuery),
    /// Settings view; its state lives outside the browsing session.
    Settings,
    /// Unrecognized fragment; the shell redirects to `#feeds`.
    Unknown,
}

/// Encodes a query as the canonical `feeds?...` fragment.
///
/// Only defined fields are emitted, percent-encoded, in schema order.
/// The fragment stores `page` 1-based; this function owns that offset
/// together with [`decode_fragment`].
pub fn encode_fragment(query: &FeedQuery) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if let Some(user_name) = &query.user_name {
        serializer.append_pair("user_name", user_name);
    }
    if let Some(keyword) = &query.keyword {
        serializer.append_pair("keyword", keyword);
    }
    if query.has_media_only {
        serializer.append_pair("has_media_only", "true");
    }
    if let Some(since) = &query.since {
        serializer.append_pair("since", since);
    }
    if let Some(until) = &query.until {
        serializer.append_pair("until", until);
    }
    serializer.append_pair("page", &(query.page + 1).to_string());
    if let Some(count) = query.count {
        serializer.append_pair("count", &count.to_string());
    }
    format!("feeds?{}", serializer.finish())
}

/// Decodes a location hash fragment into a route.
///
/// A leading `#` is tolerated. Malformed field values never fail the
/// decode; they fall back to the field's default instead.
pub fn decode_fragment(fragment: &str) -> Route {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    if let Some(rest) = route_rest(fragment, "feeds") {
        return Route::Feeds(decode_query(rest));
    }
    if route_rest(fragment, "settings").is_some() {
        return Route::Settings;
    }
    Route::Unknown
}

/// Splits `prefix` off the fragment, returning the query-string part.
/// `feeds` and `feeds?...` match; `feedsgarbage` does not.
fn route_rest<'a>(fragment: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = fragment.strip_prefix(prefix)?;
    if rest.is_empty() {
        Some("")
    } else {
        rest.strip_prefix('?')
    }
}

fn decode_query(encoded: &str) -> FeedQuery {
    let mut query = FeedQuery::new();
    // Wire pages are 1-based; anything non-numeric or non-positive
    // clamps to the first page.
    let mut wire_page = 1u32;
    for (key, value) in form_urlencoded::parse(encoded.as_bytes()) {
        match key.as_ref() {
            "user_name" => query.user_name = non_empty(&value),
            "keyword" => query.keyword = non_empty(&value),
            "has_media_only" => query.has_media_only = value == "true",
            "since" => query.since = non_empty(&value),
            "until" => query.until = non_empty(&value),
            "page" => wire_page = value.parse::<u32>().unwrap_or(0).max(1),
            "count" => query.count = value.parse::<u32>().ok().filter(|count| *count > 0),
            _ => {}
        }
    }
    query.page = wire_page - 1;
    query
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

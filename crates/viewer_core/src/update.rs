use crate::{
    classify, decode_fragment, encode_fragment, Effect, FeedQuery, FormField, FormSnapshot, Msg,
    Route, SessionState,
};

/// Pure update function: applies a message to the session state and
/// returns any effects. This is the only writer of [`SessionState`].
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    let effects = match msg {
        Msg::HashChanged(fragment) => match decode_fragment(&fragment) {
            Route::Feeds(query) => {
                state.begin_fetch(query.clone());
                vec![Effect::Fetch { query }]
            }
            Route::Settings => vec![Effect::OpenSettings],
            Route::Unknown => {
                // Unrecognized fragments redirect to the default feeds
                // view; the rewritten hash keeps the URL shareable.
                let query = FeedQuery::new();
                state.begin_fetch(query.clone());
                vec![
                    Effect::ReplaceHash(encode_fragment(&query)),
                    Effect::Fetch { query },
                ]
            }
        },
        Msg::FormEdited { form, edited } => {
            let mut candidate = candidate_query(&form, state.query());
            // Changing any filter always returns to the first page;
            // only an explicit page edit keeps its own value.
            if edited != FormField::Page {
                candidate.page = 0;
            }
            if state.query().needs_refetch(&candidate) {
                state.begin_fetch(candidate.clone());
                vec![Effect::Fetch { query: candidate }]
            } else {
                // A count-only edit is remembered but does not reload
                // the current page on its own.
                state.set_query(candidate);
                Vec::new()
            }
        }
        Msg::FeedsLoaded { query, feeds } => {
            if &query != state.query() {
                // Stale response: a newer query superseded this fetch
                // while it was in flight. Last applied query wins.
                return (state, Vec::new());
            }
            state.publish_flags(!feeds.is_empty());
            vec![
                Effect::ReplaceHash(encode_fragment(state.query())),
                Effect::Render(feeds.iter().map(classify).collect()),
            ]
        }
        Msg::FeedsFailed { query, failure: _ } => {
            if &query != state.query() {
                return (state, Vec::new());
            }
            // Flags were reset when the fetch was issued; leaving them
            // false is the whole of the core's failure handling.
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Builds the candidate query from the raw form inputs. The date range
/// has no form inputs, so the current query's values carry forward.
fn candidate_query(form: &FormSnapshot, current: &FeedQuery) -> FeedQuery {
    FeedQuery {
        user_name: non_empty(&form.user_name),
        keyword: non_empty(&form.keyword),
        has_media_only: form.has_media_only,
        since: current.since.clone(),
        until: current.until.clone(),
        page: form.page.trim().parse::<u32>().unwrap_or(0).max(1) - 1,
        count: form
            .count
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|count| *count > 0),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

use crate::{FeedQuery, FeedRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The location hash changed: initial load or back/forward
    /// navigation. Carries the raw fragment.
    HashChanged(String),
    /// A filter form input was edited; carries the whole form snapshot
    /// plus which input the user touched.
    FormEdited { form: FormSnapshot, edited: FormField },
    /// The feeds request tagged with `query` resolved.
    FeedsLoaded {
        query: FeedQuery,
        feeds: Vec<FeedRecord>,
    },
    /// The feeds request tagged with `query` failed.
    FeedsFailed {
        query: FeedQuery,
        failure: FetchFailure,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Raw values of the filter form inputs, as the user typed them.
/// The page input is 1-based display text; parsing and clamping happen
/// when the candidate query is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    pub user_name: String,
    pub keyword: String,
    pub has_media_only: bool,
    pub page: String,
    pub count: String,
}

/// Which form input the user edited. Editing anything but the page
/// input sends the session back to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    UserName,
    Keyword,
    HasMediaOnly,
    Page,
    Count,
}

/// Why a feeds request failed, as reported by the fetch pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Transport-level failure (connect, timeout, TLS).
    Network(String),
    /// The backend answered with a non-2xx status.
    Status(u16),
    /// The response body was not the expected JSON shape.
    Decode(String),
}

use crate::FeedQuery;

/// Mutable state of one browsing session.
///
/// Lives from page load to page unload and is re-derived from the URL
/// hash on reload; nothing here is persisted. Only the update function
/// mutates it; everything else reads immutable snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    query: FeedQuery,
    has_previous: bool,
    has_next: bool,
}

/// Immutable snapshot handed to readers outside the update function.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionView {
    pub query: FeedQuery,
    /// Local inference: there is a previous page iff `query.page > 0`.
    pub has_previous: bool,
    /// Heuristic: the last fetch returned a non-empty page. A full
    /// final page still reports true; the backend sends no total count.
    pub has_next: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            query: self.query.clone(),
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }

    pub fn query(&self) -> &FeedQuery {
        &self.query
    }

    /// Installs a new current query and resets both pagination flags,
    /// the precondition for issuing a fetch. A failed or hung request
    /// then never leaves stale "has more" signals behind.
    pub(crate) fn begin_fetch(&mut self, query: FeedQuery) {
        self.query = query;
        self.has_previous = false;
        self.has_next = false;
    }

    /// Replaces the stored query without touching pagination flags.
    /// Used for edits that do not warrant a refetch (count only).
    pub(crate) fn set_query(&mut self, query: FeedQuery) {
        self.query = query;
    }

    /// Writes both pagination flags from a completed fetch.
    pub(crate) fn publish_flags(&mut self, page_non_empty: bool) {
        self.has_previous = self.query.page > 0;
        self.has_next = page_non_empty;
    }
}

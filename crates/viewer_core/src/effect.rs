use crate::{FeedQuery, ViewRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the paginated feeds request for this query. The response
    /// must come back tagged with the same query so stale results can
    /// be discarded.
    Fetch { query: FeedQuery },
    /// Rewrite the location hash without creating a history entry and
    /// without re-triggering hash-change handling.
    ReplaceHash(String),
    /// Hand the classified page to the rendering collaborator.
    Render(Vec<ViewRecord>),
    /// Navigate to the settings view; its state is not part of the
    /// browsing session.
    OpenSettings,
}

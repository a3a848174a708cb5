/// Canonical filter and pagination intent for one feeds request.
///
/// `page` is 0-based everywhere in memory; the URL fragment stores it
/// 1-based and the codec alone applies the offset. Absent optional
/// fields are omitted from every serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedQuery {
    pub user_name: Option<String>,
    pub keyword: Option<String>,
    pub has_media_only: bool,
    pub since: Option<String>,
    pub until: Option<String>,
    pub page: u32,
    pub count: Option<u32>,
}

impl FeedQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a change between `self` and `other` warrants a refetch:
    /// page, user filter, keyword filter, or the media-only toggle moved.
    /// A count-only or date-only change does not force a reload on its own.
    pub fn needs_refetch(&self, other: &FeedQuery) -> bool {
        self.page != other.page
            || self.user_name != other.user_name
            || self.keyword != other.keyword
            || self.has_media_only != other.has_media_only
    }
}

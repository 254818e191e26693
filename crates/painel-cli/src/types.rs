use painel_model::FeedCategory;

/// One row of the `summary` command's overview table.
#[derive(Debug)]
pub struct FeedOverview {
    pub category: FeedCategory,
    pub records: usize,
    pub teams: usize,
    pub positive: usize,
    pub negative: usize,
    /// User-facing message when the feed could not be loaded.
    pub error: Option<String>,
}

//! The composed projection: search → filters → sort → pagination.

use tracing::debug;

use painel_model::{Record, ViewState};

use crate::filter::filter_records;
use crate::page::{Page, paginate};
use crate::sort::sort_records;

/// Result of projecting a record set through a view state.
#[derive(Debug, Clone)]
pub struct ProjectedView<'a> {
    /// Filtered records in original order, before sorting. Headline
    /// metrics and exports are computed over this set so they always
    /// track the table's constraints.
    pub filtered: Vec<&'a Record>,
    /// The served page of the filtered + sorted sequence.
    pub page: Page<'a>,
}

impl ProjectedView<'_> {
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }
}

/// Pure projection; the dataset is never mutated and repeated calls with
/// the same state give the same result.
pub fn project_view<'a>(records: &'a [Record], state: &ViewState) -> ProjectedView<'a> {
    let filtered = filter_records(records, &state.filter);
    let mut sorted = filtered.clone();
    sort_records(&mut sorted, &state.sort);
    let page = paginate(&sorted, &state.page);
    debug!(
        total = records.len(),
        filtered = filtered.len(),
        page = page.page,
        page_count = page.page_count,
        "view projected"
    );
    ProjectedView { filtered, page }
}

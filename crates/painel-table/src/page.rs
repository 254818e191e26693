//! Fixed-size pagination over the filtered, sorted sequence.

use painel_model::{PageRequest, Record};

/// One page of the projected view.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub records: Vec<&'a Record>,
    /// 1-based page actually served (the request is clamped).
    pub page: usize,
    pub page_count: usize,
    /// 0-based offset of the first record, for the running row index.
    pub start_index: usize,
    /// Total records across all pages.
    pub total: usize,
}

impl Page<'_> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 1-based index of the last record on this page.
    pub fn end_index(&self) -> usize {
        self.start_index + self.records.len()
    }
}

/// Slices out the requested page. The page number is clamped into the
/// valid range, so an over-large request serves the last page.
pub fn paginate<'a>(records: &[&'a Record], request: &PageRequest) -> Page<'a> {
    let page_size = request.page_size.max(1);
    let page_count = records.len().div_ceil(page_size);
    let page = request.page.clamp(1, page_count.max(1));
    let start_index = (page - 1) * page_size;
    let end = (start_index + page_size).min(records.len());
    Page {
        records: records[start_index..end].to_vec(),
        page,
        page_count,
        start_index,
        total: records.len(),
    }
}

pub mod export;
pub mod filter;
pub mod html;
pub mod page;
pub mod sort;
pub mod view;

pub use export::{ExportError, ExportFormat, ExportRequest, ExportedFiles, export_view};
pub use filter::{display_headers, filter_options, filter_records, filter_summary};
pub use page::{Page, paginate};
pub use sort::{collate, compare_values, is_sortable, sort_records};
pub use view::{ProjectedView, project_view};

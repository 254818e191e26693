pub mod csv;
pub mod error;
pub mod fetch;
pub mod materialize;

pub use csv::{ParsedCsv, parse_csv, parse_csv_line};
pub use error::{IngestError, Result};
pub use fetch::FeedClient;
pub use materialize::{HEADER_MARKERS, HEADER_SCAN_LIMIT, materialize};

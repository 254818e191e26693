pub mod columns;
pub mod tabs;
pub mod value;

pub use columns::{
    ClassificationRule, ColumnKind, ColumnMetric, DEFAULT_RULES, classify_header, clean_headers,
    column_metrics,
};
pub use tabs::{TabMetrics, derive_metrics, status_column, status_counts};
pub use value::{MetricValue, NamedMetric};

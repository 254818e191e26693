/// A count over a record set, kept with its denominator so percentages
/// stay guarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct MetricValue {
    pub count: usize,
    pub total: usize,
}

impl MetricValue {
    pub fn new(count: usize, total: usize) -> Self {
        Self { count, total }
    }

    /// Rounded percentage; 0 when the record set is empty.
    pub fn percent(self) -> u32 {
        if self.total == 0 {
            0
        } else {
            ((self.count as f64 / self.total as f64) * 100.0).round() as u32
        }
    }
}

/// A metric with its display label.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NamedMetric {
    pub label: String,
    pub value: MetricValue,
}

impl NamedMetric {
    pub fn new(label: impl Into<String>, count: usize, total: usize) -> Self {
        Self {
            label: label.into(),
            value: MetricValue::new(count, total),
        }
    }
}
